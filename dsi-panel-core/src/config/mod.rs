//! Panel configuration data
//!
//! Compiled-in, per-variant constants. Nothing here is computed or
//! mutated at runtime.

pub mod sequence;
pub mod timing;

pub use sequence::*;
pub use timing::*;
