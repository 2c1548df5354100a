//! Compression, decompression and transform parameters
//!
//! The native codec is configured through a flat table of numeric parameter
//! IDs. This crate describes that table ([`PARAMS`]), stores raw values with
//! the documented side effects ([`ParamSet`]), and offers typed option structs
//! that lower to it.

pub mod options;
pub mod param;
pub mod set;

pub use options::*;
pub use param::*;
pub use set::*;
