//! Constants shared across the geometry model

/// Width and height of a DCT block in samples
pub const BLOCK_SIZE: usize = 8;

/// Number of defined chrominance subsampling modes
pub const NUM_SUBSAMPLING: usize = 7;

/// Number of defined packed-pixel formats
pub const NUM_PIXEL_FORMATS: usize = 12;

/// Number of JPEG colorspaces
pub const NUM_COLORSPACES: usize = 5;

/// Number of tunable parameters
pub const NUM_PARAMS: usize = 26;

/// Maximum number of planes in a planar YUV image
pub const MAX_YUV_PLANES: usize = 3;

/// Fixed allowance for JPEG headers in the worst-case buffer bound
pub const JPEG_HEADER_ALLOWANCE: u64 = 2048;

/// Raw sentinel for an unknown subsampling mode or pixel format
pub const UNKNOWN_ID: i32 = -1;
