//! Worst-case size of a compressed JPEG image

use tj_core::consts::{BLOCK_SIZE, JPEG_HEADER_ALLOWANCE};
use tj_core::{Subsampling, TjError, TjResult};

use crate::plane::check_dimensions;

/// Upper bound on the size of a JPEG image compressed from a packed-pixel
/// source of the given dimensions
///
/// The bound holds for any pixel content and quality. Each MCU-padded pixel
/// is allowed two bytes of luminance plus whatever chrominance the
/// subsampling keeps, and a fixed allowance covers the headers. An unknown
/// subsampling is sized as 4:4:4, which is never smaller than any other mode.
pub fn jpeg_buf_size(width: usize, height: usize, subsampling: Subsampling) -> TjResult<usize> {
    check_dimensions(width, height)?;
    let subsampling = match subsampling {
        Subsampling::Unknown => Subsampling::S444,
        known => known,
    };
    let mcu_width = subsampling.mcu_width()?;
    let mcu_height = subsampling.mcu_height()?;
    let chroma_factor = match subsampling {
        Subsampling::Gray => 0,
        _ => (4 * BLOCK_SIZE * BLOCK_SIZE / (mcu_width * mcu_height)) as u64,
    };

    let padded_width = (width as u64).checked_next_multiple_of(mcu_width as u64);
    let padded_height = (height as u64).checked_next_multiple_of(mcu_height as u64);
    padded_width
        .zip(padded_height)
        .and_then(|(w, h)| w.checked_mul(h))
        .and_then(|px| px.checked_mul(2 + chroma_factor))
        .and_then(|size| size.checked_add(JPEG_HEADER_ALLOWANCE))
        .and_then(|size| usize::try_from(size).ok())
        .ok_or(TjError::ImageTooLarge)
}
