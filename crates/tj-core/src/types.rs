//! Subsampling modes, pixel formats and JPEG colorspaces

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::consts::{BLOCK_SIZE, NUM_COLORSPACES, NUM_PIXEL_FORMATS, NUM_SUBSAMPLING};
use crate::util::tracing_wrappers::trace;
use crate::{TjError, TjResult};

/// Chrominance subsampling mode
///
/// The discriminants are the raw IDs understood by the native codec. `Unknown`
/// keeps its out-of-band value of -1 so that raw IDs round-trip unchanged.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Subsampling {
    /// 4:4:4, one chroma sample per pixel
    S444 = 0,
    /// 4:2:2, chroma halved horizontally
    S422 = 1,
    /// 4:2:0, chroma halved in both directions
    S420 = 2,
    /// Luminance only
    Gray = 3,
    /// 4:4:0, chroma halved vertically
    S440 = 4,
    /// 4:1:1, chroma quartered horizontally
    S411 = 5,
    /// 4:4:1, chroma quartered vertically
    S441 = 6,
    /// Subsampling could not be determined
    Unknown = -1,
}

const MCU_WIDTH: [usize; NUM_SUBSAMPLING] = [8, 16, 16, 8, 8, 32, 8];
const MCU_HEIGHT: [usize; NUM_SUBSAMPLING] = [8, 8, 16, 8, 16, 8, 32];

impl Subsampling {
    /// Every defined mode, ordered by ID. `Unknown` is not included.
    pub const ALL: [Subsampling; NUM_SUBSAMPLING] = [
        Subsampling::S444,
        Subsampling::S422,
        Subsampling::S420,
        Subsampling::Gray,
        Subsampling::S440,
        Subsampling::S411,
        Subsampling::S441,
    ];

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn is_known(self) -> bool {
        self != Subsampling::Unknown
    }

    fn index(self) -> TjResult<usize> {
        match self {
            Subsampling::Unknown => {
                trace!("no MCU geometry for unknown subsampling");
                Err(TjError::InvalidSubsampling(self.id()))
            }
            known => Ok(known as usize),
        }
    }

    /// Width in pixels of a minimum coded unit
    pub fn mcu_width(self) -> TjResult<usize> {
        Ok(MCU_WIDTH[self.index()?])
    }

    /// Height in pixels of a minimum coded unit
    pub fn mcu_height(self) -> TjResult<usize> {
        Ok(MCU_HEIGHT[self.index()?])
    }

    /// Horizontal chroma decimation factor (1, 2 or 4)
    pub fn h_decimation(self) -> TjResult<usize> {
        Ok(self.mcu_width()? / BLOCK_SIZE)
    }

    /// Vertical chroma decimation factor (1, 2 or 4)
    pub fn v_decimation(self) -> TjResult<usize> {
        Ok(self.mcu_height()? / BLOCK_SIZE)
    }

    /// Number of image planes, 1 for grayscale and 3 otherwise
    pub fn component_count(self) -> TjResult<usize> {
        self.index()?;
        Ok(if self == Subsampling::Gray { 1 } else { 3 })
    }
}

impl TryFrom<i32> for Subsampling {
    type Error = TjError;

    fn try_from(value: i32) -> TjResult<Self> {
        Self::from_i32(value).ok_or(TjError::InvalidSubsampling(value))
    }
}

/// A color channel within a packed pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

/// Packed-pixel format
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelFormat {
    Rgb = 0,
    Bgr = 1,
    /// Like `Rgba`, but the fourth byte is undefined on decompression
    Rgbx = 2,
    Bgrx = 3,
    Xbgr = 4,
    Xrgb = 5,
    Gray = 6,
    /// Like `Rgbx`, but the fourth byte is filled with 0xFF on decompression
    Rgba = 7,
    Bgra = 8,
    Abgr = 9,
    Argb = 10,
    /// Four channels, none of which is red, green, blue or alpha
    Cmyk = 11,
    /// Placeholder for a source image whose format is not yet known
    Unknown = -1,
}

const PIXEL_SIZE: [usize; NUM_PIXEL_FORMATS] = [3, 3, 4, 4, 4, 4, 1, 4, 4, 4, 4, 4];
const RED_OFFSET: [i8; NUM_PIXEL_FORMATS] = [0, 2, 0, 2, 3, 1, -1, 0, 2, 3, 1, -1];
const GREEN_OFFSET: [i8; NUM_PIXEL_FORMATS] = [1, 1, 1, 1, 2, 2, -1, 1, 1, 2, 2, -1];
const BLUE_OFFSET: [i8; NUM_PIXEL_FORMATS] = [2, 0, 2, 0, 1, 3, -1, 2, 0, 1, 3, -1];
const ALPHA_OFFSET: [i8; NUM_PIXEL_FORMATS] = [-1, -1, -1, -1, -1, -1, -1, 3, 3, 0, 0, -1];

impl PixelFormat {
    /// Every defined format, ordered by ID. `Unknown` is not included.
    pub const ALL: [PixelFormat; NUM_PIXEL_FORMATS] = [
        PixelFormat::Rgb,
        PixelFormat::Bgr,
        PixelFormat::Rgbx,
        PixelFormat::Bgrx,
        PixelFormat::Xbgr,
        PixelFormat::Xrgb,
        PixelFormat::Gray,
        PixelFormat::Rgba,
        PixelFormat::Bgra,
        PixelFormat::Abgr,
        PixelFormat::Argb,
        PixelFormat::Cmyk,
    ];

    pub fn id(self) -> i32 {
        self as i32
    }

    fn index(self) -> TjResult<usize> {
        match self {
            PixelFormat::Unknown => Err(TjError::InvalidPixelFormat(self.id())),
            known => Ok(known as usize),
        }
    }

    /// Number of samples (bytes, on the 8-bit path) per pixel
    pub fn size(self) -> TjResult<usize> {
        Ok(PIXEL_SIZE[self.index()?])
    }

    /// Byte offset of `channel` within a pixel, or `None` if the format lacks it
    pub fn offset(self, channel: Channel) -> TjResult<Option<usize>> {
        let table = match channel {
            Channel::Red => &RED_OFFSET,
            Channel::Green => &GREEN_OFFSET,
            Channel::Blue => &BLUE_OFFSET,
            Channel::Alpha => &ALPHA_OFFSET,
        };
        let raw = table[self.index()?];
        Ok(usize::try_from(raw).ok())
    }

    pub fn red_offset(self) -> TjResult<Option<usize>> {
        self.offset(Channel::Red)
    }

    pub fn green_offset(self) -> TjResult<Option<usize>> {
        self.offset(Channel::Green)
    }

    pub fn blue_offset(self) -> TjResult<Option<usize>> {
        self.offset(Channel::Blue)
    }

    pub fn alpha_offset(self) -> TjResult<Option<usize>> {
        self.offset(Channel::Alpha)
    }

    /// Whether the fourth byte carries defined alpha on decompression
    pub fn has_alpha(self) -> TjResult<bool> {
        Ok(self.alpha_offset()?.is_some())
    }

    /// The padded format with the same byte layout as an alpha format.
    ///
    /// Compression ignores the fourth byte, so RGBA and RGBX (and their
    /// siblings) are interchangeable as compression sources. Formats without
    /// alpha map to themselves.
    pub fn opaque_equivalent(self) -> TjResult<PixelFormat> {
        self.index()?;
        Ok(match self {
            PixelFormat::Rgba => PixelFormat::Rgbx,
            PixelFormat::Bgra => PixelFormat::Bgrx,
            PixelFormat::Abgr => PixelFormat::Xbgr,
            PixelFormat::Argb => PixelFormat::Xrgb,
            other => other,
        })
    }
}

impl TryFrom<i32> for PixelFormat {
    type Error = TjError;

    fn try_from(value: i32) -> TjResult<Self> {
        Self::from_i32(value).ok_or(TjError::InvalidPixelFormat(value))
    }
}

/// JPEG colorspace
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Colorspace {
    /// Components are reordered into planes without conversion
    Rgb = 0,
    /// Luminance plus two chrominance components derived from RGB
    YCbCr = 1,
    /// Luminance only
    Gray = 2,
    /// Components are reordered into planes without conversion
    Cmyk = 3,
    /// YCbCr applied to the CMY part of CMYK, K kept as is
    Ycck = 4,
}

impl Colorspace {
    pub const ALL: [Colorspace; NUM_COLORSPACES] = [
        Colorspace::Rgb,
        Colorspace::YCbCr,
        Colorspace::Gray,
        Colorspace::Cmyk,
        Colorspace::Ycck,
    ];

    pub fn id(self) -> i32 {
        self as i32
    }

    /// Whether chrominance may be subsampled below 4:4:4
    pub fn allows_subsampling(self) -> bool {
        matches!(self, Colorspace::YCbCr | Colorspace::Ycck)
    }

    /// Whether images in this colorspace can be exchanged as planar YUV
    pub fn allows_planar_yuv(self) -> bool {
        matches!(self, Colorspace::YCbCr | Colorspace::Gray)
    }

    /// Whether packed pixels in `format` can be converted to or from this colorspace
    pub fn supports_pixel_format(self, format: PixelFormat) -> TjResult<bool> {
        format.index()?;
        let is_cmyk = format == PixelFormat::Cmyk;
        Ok(match self {
            Colorspace::Rgb | Colorspace::YCbCr | Colorspace::Gray => !is_cmyk,
            Colorspace::Cmyk | Colorspace::Ycck => is_cmyk,
        })
    }

    /// The colorspace chosen for lossy compression when none is requested
    pub fn default_for(format: PixelFormat, subsampling: Subsampling) -> TjResult<Colorspace> {
        format.size()?;
        Ok(if format == PixelFormat::Cmyk {
            Colorspace::Ycck
        } else if subsampling == Subsampling::Gray {
            Colorspace::Gray
        } else {
            Colorspace::YCbCr
        })
    }
}

impl TryFrom<i32> for Colorspace {
    type Error = TjError;

    fn try_from(value: i32) -> TjResult<Self> {
        Self::from_i32(value).ok_or(TjError::InvalidColorspace(value))
    }
}
