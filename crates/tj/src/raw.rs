//! Geometry over raw numeric selectors
//!
//! These mirror the functions of the native codec's API: every selector is a
//! plain integer, absent channels are reported as -1, and anything outside
//! the defined ranges is rejected with an error before any computation.

use tj_core::consts::UNKNOWN_ID;
use tj_core::{Channel, PixelFormat, Subsampling, TjError, TjResult};
use tj_yuv::Component;

fn subsampling(id: i32) -> TjResult<Subsampling> {
    Subsampling::try_from(id)
}

fn known_subsampling(id: i32) -> TjResult<Subsampling> {
    match subsampling(id)? {
        Subsampling::Unknown => Err(TjError::InvalidSubsampling(id)),
        known => Ok(known),
    }
}

fn pixel_format(id: i32) -> TjResult<PixelFormat> {
    match PixelFormat::try_from(id)? {
        PixelFormat::Unknown => Err(TjError::InvalidPixelFormat(id)),
        known => Ok(known),
    }
}

fn dimensions(width: i32, height: i32) -> TjResult<(usize, usize)> {
    match (usize::try_from(width), usize::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(TjError::InvalidDimensions {
            width: width as i64,
            height: height as i64,
        }),
    }
}

fn as_i32(size: usize) -> TjResult<i32> {
    i32::try_from(size).map_err(|_| TjError::ImageTooLarge)
}

pub fn mcu_width(subsamp: i32) -> TjResult<i32> {
    as_i32(known_subsampling(subsamp)?.mcu_width()?)
}

pub fn mcu_height(subsamp: i32) -> TjResult<i32> {
    as_i32(known_subsampling(subsamp)?.mcu_height()?)
}

pub fn pixel_size(pixel_format: i32) -> TjResult<i32> {
    as_i32(self::pixel_format(pixel_format)?.size()?)
}

fn offset(pixel_format: i32, channel: Channel) -> TjResult<i32> {
    match self::pixel_format(pixel_format)?.offset(channel)? {
        Some(offset) => as_i32(offset),
        None => Ok(UNKNOWN_ID),
    }
}

pub fn red_offset(pixel_format: i32) -> TjResult<i32> {
    offset(pixel_format, Channel::Red)
}

pub fn green_offset(pixel_format: i32) -> TjResult<i32> {
    offset(pixel_format, Channel::Green)
}

pub fn blue_offset(pixel_format: i32) -> TjResult<i32> {
    offset(pixel_format, Channel::Blue)
}

pub fn alpha_offset(pixel_format: i32) -> TjResult<i32> {
    offset(pixel_format, Channel::Alpha)
}

pub fn plane_width(component_id: i32, width: i32, subsamp: i32) -> TjResult<i32> {
    let component = Component::try_from(component_id)?;
    let subsampling = known_subsampling(subsamp)?;
    let (width, _) = dimensions(width, 1)?;
    as_i32(tj_yuv::plane_width(component, width, subsampling)?)
}

pub fn plane_height(component_id: i32, height: i32, subsamp: i32) -> TjResult<i32> {
    let component = Component::try_from(component_id)?;
    let subsampling = known_subsampling(subsamp)?;
    let (_, height) = dimensions(1, height)?;
    as_i32(tj_yuv::plane_height(component, height, subsampling)?)
}

pub fn plane_size_yuv(
    component_id: i32,
    width: i32,
    stride: i32,
    height: i32,
    subsamp: i32,
) -> TjResult<i32> {
    let component = Component::try_from(component_id)?;
    let subsampling = known_subsampling(subsamp)?;
    let (width, height) = dimensions(width, height)?;
    let stride = match usize::try_from(stride) {
        Ok(stride) => stride,
        Err(_) => {
            return Err(TjError::InvalidStride {
                stride: stride as i64,
                min: tj_yuv::plane_width(component, width, subsampling)?,
            })
        }
    };
    as_i32(tj_yuv::plane_size(component, width, stride, height, subsampling)?)
}

pub fn buf_size_yuv(width: i32, align: i32, height: i32, subsamp: i32) -> TjResult<i32> {
    let subsampling = known_subsampling(subsamp)?;
    let (width, height) = dimensions(width, height)?;
    let align = usize::try_from(align).map_err(|_| TjError::InvalidAlignment(align as i64))?;
    as_i32(tj_yuv::yuv_buf_size(width, align, height, subsampling)?)
}

/// Worst-case JPEG size; the unknown subsampling ID (-1) is accepted
pub fn buf_size(width: i32, height: i32, subsamp: i32) -> TjResult<i32> {
    let subsampling = subsampling(subsamp)?;
    let (width, height) = dimensions(width, height)?;
    as_i32(tj_yuv::jpeg_buf_size(width, height, subsampling)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mcu_by_id() {
        assert_eq!(mcu_width(5).unwrap(), 32);
        assert_eq!(mcu_height(6).unwrap(), 32);
        assert_eq!(mcu_width(-1), Err(TjError::InvalidSubsampling(-1)));
        assert_eq!(mcu_height(7), Err(TjError::InvalidSubsampling(7)));
    }

    #[test]
    fn test_offsets_by_id() {
        assert_eq!(red_offset(1).unwrap(), 2);
        assert_eq!(alpha_offset(0).unwrap(), -1);
        assert_eq!(alpha_offset(9).unwrap(), 0);
        assert_eq!(green_offset(11).unwrap(), -1);
        assert_eq!(blue_offset(12), Err(TjError::InvalidPixelFormat(12)));
        assert_eq!(pixel_size(-1), Err(TjError::InvalidPixelFormat(-1)));
    }

    #[test]
    fn test_negative_arguments() {
        assert!(matches!(
            plane_width(0, -4, 0),
            Err(TjError::InvalidDimensions { .. })
        ));
        assert_eq!(buf_size_yuv(16, -4, 16, 0), Err(TjError::InvalidAlignment(-4)));
        assert_eq!(
            plane_size_yuv(0, 16, -16, 16, 0),
            Err(TjError::InvalidStride { stride: -16, min: 16 })
        );
        assert_eq!(
            plane_size_yuv(1, 17, -1, 16, 2),
            Err(TjError::InvalidStride { stride: -1, min: 9 })
        );
    }

    #[test]
    fn test_sizes_are_native_ints() {
        assert_eq!(plane_size_yuv(1, 17, 0, 17, 2), Ok(81));
        assert_eq!(buf_size_yuv(17, 4, 17, 2), Ok(20 * 17 + 2 * 12 * 9));
        assert_eq!(buf_size(46341, 46341, 0), Err(TjError::ImageTooLarge));
    }

    #[test]
    fn test_buf_size_accepts_unknown() {
        assert_eq!(buf_size(64, 64, -1).unwrap(), buf_size(64, 64, 0).unwrap());
        assert_eq!(buf_size(64, 64, -2), Err(TjError::InvalidSubsampling(-2)));
    }
}
