//! Review-sheet shaping and console output.
//!
//! The review cycle exports the upper-bracket charts to a CSV a curator
//! edits by hand, then reads the sheet back through the quantization check
//! into a level mapping.

mod console;
mod review;

pub use console::*;
pub use review::*;
