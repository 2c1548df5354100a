//! # TurboJPEG geometry
//!
//! The parameter vocabulary and buffer geometry that sit between an
//! application and a native JPEG codec: chrominance subsampling modes and
//! their MCU sizes, packed-pixel formats and channel offsets, JPEG
//! colorspaces, planar YUV plane sizes, worst-case JPEG buffer sizes, and the
//! compression/decompression/transform parameter table.
//!
//! ## Quick Start
//!
//! ```
//! use tj::{yuv_buf_size, Component, plane_width, Subsampling};
//!
//! // Chroma planes of a 4:2:0 image are half size, rounded up
//! assert_eq!(plane_width(Component::U, 17, Subsampling::S420).unwrap(), 9);
//!
//! // One buffer holding Y, U and V with rows padded to 4 bytes
//! let size = yuv_buf_size(640, 4, 480, Subsampling::S420).unwrap();
//! assert_eq!(size, 640 * 480 + 2 * 320 * 240);
//! ```
//!
//! ```
//! use tj::{CompressOptions, Param, RestartInterval, Subsampling};
//!
//! let params = CompressOptions::new()
//!     .quality(90)
//!     .subsampling(Subsampling::S422)
//!     .restart(RestartInterval::Rows(1))
//!     .to_params()
//!     .unwrap();
//! assert_eq!(params.get(Param::RestartBlocks), Some(0));
//! ```
//!
//! ## Raw IDs
//!
//! The [`raw`] module takes the numeric selectors the native codec uses and
//! rejects anything outside the defined ranges before computing.

pub mod raw;

pub use tj_core::{
    consts, Channel, Colorspace, ErrorKind, ErrorSeverity, PixelFormat, Region, ScalingFactor,
    Subsampling, TjError, TjResult, SCALING_FACTORS,
};

pub use tj_yuv::{
    aligned_stride, jpeg_buf_size, plane_height, plane_size, plane_width, yuv_buf_size,
    Component, PlaneLayout, YuvLayout,
};

pub use tj_params::{
    check_point_transform, Applicability, CompressOptions, DecompressOptions, Density,
    DensityUnit, Domain, LosslessOptions, MarkerCopy, Param, ParamInfo, ParamSet,
    RestartInterval, TransformOptions, PARAMS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports() {
        assert_eq!(Subsampling::S420.mcu_width().unwrap(), 16);
        assert_eq!(PixelFormat::Bgra.size().unwrap(), 4);
        assert_eq!(PARAMS.len(), consts::NUM_PARAMS);
    }
}
