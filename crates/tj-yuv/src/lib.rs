//! Planar YUV buffer geometry and JPEG buffer bounds
//!
//! Chrominance planes of a subsampled image are narrower and/or shorter than
//! the luminance plane. This crate computes plane dimensions, plane sizes with
//! caller-chosen strides, the total size and per-plane offsets of a single
//! contiguous YUV allocation, and the worst-case size of a compressed JPEG.

pub mod jpeg;
pub mod layout;
pub mod plane;

pub use jpeg::*;
pub use layout::*;
pub use plane::*;
