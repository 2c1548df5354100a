//! Error types for geometry and parameter validation

use thiserror::Error;

/// Result type for geometry operations
pub type TjResult<T> = Result<T, TjError>;

/// Errors raised while validating selectors and buffer geometry
///
/// Every variant is an invalid argument; the variants only differ in which
/// argument was rejected and carry the offending value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TjError {
    #[error("Invalid subsampling type: {0}")]
    InvalidSubsampling(i32),

    #[error("Invalid pixel format: {0}")]
    InvalidPixelFormat(i32),

    #[error("Invalid colorspace: {0}")]
    InvalidColorspace(i32),

    #[error("Invalid component ID: {0}")]
    InvalidComponent(i32),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("Row alignment must be a power of 2, got {0}")]
    InvalidAlignment(i64),

    #[error("Stride {stride} is smaller than plane width {min}")]
    InvalidStride { stride: i64, min: usize },

    #[error("Invalid parameter ID: {0}")]
    InvalidParam(i32),

    #[error("Value {value} out of range for parameter {param}")]
    ParamOutOfRange { param: &'static str, value: i64 },

    #[error("Invalid parameter combination: {0}")]
    IncompatibleParams(&'static str),

    #[error("Invalid scaling factor: {num}/{denom}")]
    InvalidScalingFactor { num: u32, denom: u32 },

    #[error("Region ({x}, {y}) is not aligned to the {mcu_width}x{mcu_height} MCU grid")]
    UnalignedRegion {
        x: usize,
        y: usize,
        mcu_width: usize,
        mcu_height: usize,
    },

    #[error("Region extends past the {width}x{height} image")]
    RegionOutOfBounds { width: usize, height: usize },

    #[error("Buffer too small: expected {expected}, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    #[error("Image is too large")]
    ImageTooLarge,
}

/// Broad classification of a [`TjError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A selector or numeric argument violated its documented constraint
    InvalidArgument,
}

impl TjError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

/// Severity of an error reported by the native codec
///
/// This core never produces these; they describe the collaborator's
/// warning/fatal model so callers can classify its reports.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, num_derive::FromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Non-fatal; the destination image may still be corrupt
    Warning = 0,
    /// Fatal and non-recoverable
    Fatal = 1,
}

impl TryFrom<i32> for ErrorSeverity {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, i32> {
        num_traits::FromPrimitive::from_i32(value).ok_or(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_is_invalid_argument() {
        let errors = [
            TjError::InvalidSubsampling(-2),
            TjError::InvalidComponent(3),
            TjError::InvalidAlignment(3),
            TjError::InvalidStride { stride: 4, min: 8 },
            TjError::ImageTooLarge,
        ];
        for err in &errors {
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TjError::InvalidSubsampling(-2).to_string(),
            "Invalid subsampling type: -2"
        );
        assert_eq!(
            TjError::InvalidStride { stride: 4, min: 9 }.to_string(),
            "Stride 4 is smaller than plane width 9"
        );
    }

    #[test]
    fn test_severity_ids() {
        assert_eq!(ErrorSeverity::try_from(0), Ok(ErrorSeverity::Warning));
        assert_eq!(ErrorSeverity::try_from(1), Ok(ErrorSeverity::Fatal));
        assert_eq!(ErrorSeverity::try_from(2), Err(2));
    }
}
