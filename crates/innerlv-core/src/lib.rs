pub mod category;
pub mod chart;
pub mod error;
pub mod export;
pub mod infer;
pub mod merge;
pub mod novelty;
pub mod storage;
pub mod validate;

pub use category::CategoryMap;
pub use chart::{ChartKey, Difficulty, InternalLv, Level, ScoreRecord};
pub use error::{Error, Result};
pub use export::{
    build_review_rows, finalize_rows, format_run_summary, read_review_csv, write_review_csv,
    Finalized, ReviewRow, REVIEW_DIFFICULTIES, REVIEW_LEVELS,
};
pub use infer::{infer, InferConfig, Inference};
pub use merge::merge;
pub use novelty::NoveltyIndex;
pub use storage::{load_levels, load_listing, save_levels, VersionIndex};
pub use validate::check_quantization;
