//! Core types for the TurboJPEG geometry model
//!
//! This crate provides the closed vocabulary shared by every other crate in the
//! workspace: chrominance subsampling modes with their MCU sizes, packed-pixel
//! formats with their channel offsets, JPEG colorspaces, scaling factors, crop
//! regions and the error type.

pub mod consts;
pub mod error;
pub mod region;
pub mod scaling;
pub mod types;
pub mod util;

pub use error::{ErrorKind, ErrorSeverity, TjError, TjResult};
pub use region::*;
pub use scaling::*;
pub use types::*;
