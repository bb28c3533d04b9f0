pub mod export;
pub mod fill;
pub mod finalize;
