//! Chart-related types and data structures.
//!
//! This module contains the types shared across the whole pipeline:
//! - `Difficulty` - the five chart slots (BSC, ADV, EXP, MAS, REM)
//! - `Level` - the coarse bracket ladder ("10" through "15")
//! - `InternalLv` - the fine-grained level value, fixed point scaled by 10
//! - `ScoreRecord` - one parsed score-list entry
//! - `ChartKey` - the identity key of one chart variant/difficulty

mod difficulty;
mod key;
mod level;
mod record;

pub use difficulty::*;
pub use key::*;
pub use level::*;
pub use record::*;
