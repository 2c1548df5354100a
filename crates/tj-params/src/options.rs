//! Typed option structs for compression, decompression and transformation
//!
//! These replace raw parameter IDs for callers. Mutually exclusive settings
//! are expressed as enums, so invalid combinations such as two restart
//! intervals cannot be built. Each struct lowers to a [`ParamSet`] for the
//! native codec.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use tj_core::util::tracing_wrappers::debug;
use tj_core::{Colorspace, PixelFormat, Region, ScalingFactor, Subsampling, TjError, TjResult};

use crate::param::{check_point_transform, Param};
use crate::set::ParamSet;

/// Minimum and maximum JPEG quality
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Distance between restart markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RestartInterval {
    /// No restart markers
    #[default]
    None,
    /// A marker every N MCUs
    Blocks(u16),
    /// A marker every N MCU rows
    Rows(u16),
}

impl RestartInterval {
    /// Raw `(RestartBlocks, RestartRows)` values
    pub fn as_params(self) -> (i32, i32) {
        match self {
            RestartInterval::None => (0, 0),
            RestartInterval::Blocks(n) => (n as i32, 0),
            RestartInterval::Rows(n) => (0, n as i32),
        }
    }
}

/// Units of the JFIF pixel density
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DensityUnit {
    /// Aspect ratio only
    #[default]
    Unknown = 0,
    PerInch = 1,
    PerCm = 2,
}

impl TryFrom<i32> for DensityUnit {
    type Error = TjError;

    fn try_from(value: i32) -> TjResult<Self> {
        Self::from_i32(value).ok_or(TjError::ParamOutOfRange {
            param: Param::DensityUnits.name(),
            value: value as i64,
        })
    }
}

/// JFIF pixel density stored in the JPEG header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Density {
    pub x: u16,
    pub y: u16,
    pub unit: DensityUnit,
}

impl Default for Density {
    fn default() -> Self {
        Self {
            x: 1,
            y: 1,
            unit: DensityUnit::Unknown,
        }
    }
}

/// Which extra markers are copied from the source image
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerCopy {
    None = 0,
    CommentsOnly = 1,
    #[default]
    All = 2,
    AllExceptIcc = 3,
    IccOnly = 4,
}

impl MarkerCopy {
    /// Whether an ICC profile is extracted from the source image
    pub fn keeps_icc(self) -> bool {
        matches!(self, MarkerCopy::All | MarkerCopy::IccOnly)
    }
}

impl TryFrom<i32> for MarkerCopy {
    type Error = TjError;

    fn try_from(value: i32) -> TjResult<Self> {
        Self::from_i32(value).ok_or(TjError::ParamOutOfRange {
            param: Param::SaveMarkers.name(),
            value: value as i64,
        })
    }
}

/// Lossless (predictive) JPEG settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LosslessOptions {
    /// Predictor selection value, 1-7
    pub psv: u8,
    /// Point transform, the number of low bits discarded
    pub pt: u8,
}

impl Default for LosslessOptions {
    fn default() -> Self {
        Self { psv: 1, pt: 0 }
    }
}

/// Compression options
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompressOptions {
    /// Required for lossy compression
    pub quality: Option<u8>,
    /// Required for lossy compression; lossless always uses 4:4:4
    pub subsampling: Option<Subsampling>,
    /// Bits per sample: 8 or 12 when lossy, 2-16 when lossless
    pub precision: u8,
    /// `None` selects a colorspace from the pixel format and subsampling
    pub colorspace: Option<Colorspace>,
    pub fast_dct: bool,
    pub optimize: bool,
    pub progressive: bool,
    pub arithmetic: bool,
    pub lossless: Option<LosslessOptions>,
    pub restart: RestartInterval,
    pub density: Density,
    pub bottom_up: bool,
    pub stop_on_warning: bool,
    pub no_realloc: bool,
    /// Megabytes, 0 for no limit
    pub max_memory: u32,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            quality: None,
            subsampling: None,
            precision: 8,
            colorspace: None,
            fast_dct: false,
            optimize: false,
            progressive: false,
            arithmetic: false,
            lossless: None,
            restart: RestartInterval::None,
            density: Density::default(),
            bottom_up: false,
            stop_on_warning: false,
            no_realloc: false,
            max_memory: 0,
        }
    }
}

impl CompressOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality.clamp(MIN_QUALITY, MAX_QUALITY));
        self
    }

    pub fn subsampling(mut self, subsampling: Subsampling) -> Self {
        self.subsampling = Some(subsampling);
        self
    }

    pub fn precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    pub fn colorspace(mut self, colorspace: Colorspace) -> Self {
        self.colorspace = Some(colorspace);
        self
    }

    pub fn optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    pub fn progressive(mut self, progressive: bool) -> Self {
        self.progressive = progressive;
        self
    }

    pub fn arithmetic(mut self, arithmetic: bool) -> Self {
        self.arithmetic = arithmetic;
        self
    }

    pub fn lossless(mut self, lossless: LosslessOptions) -> Self {
        self.lossless = Some(lossless);
        self
    }

    pub fn restart(mut self, restart: RestartInterval) -> Self {
        self.restart = restart;
        self
    }

    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Whether optimal Huffman tables will be computed.
    ///
    /// Progressive mode and 12-bit precision imply optimization unless
    /// arithmetic coding replaces Huffman coding altogether.
    pub fn huffman_optimized(&self) -> bool {
        !self.arithmetic && (self.optimize || self.progressive || self.precision == 12)
    }

    /// Check the options for internal consistency
    pub fn validate(&self) -> TjResult<()> {
        if self.density.x == 0 || self.density.y == 0 {
            return Err(TjError::ParamOutOfRange {
                param: Param::XDensity.name(),
                value: 0,
            });
        }
        match self.lossless {
            Some(lossless) => self.validate_lossless(lossless),
            None => self.validate_lossy(),
        }
    }

    fn validate_lossy(&self) -> TjResult<()> {
        let quality = self
            .quality
            .ok_or(TjError::IncompatibleParams("quality must be set for lossy compression"))?;
        Param::Quality.info().check(quality as i32)?;
        let subsampling = self.subsampling.ok_or(TjError::IncompatibleParams(
            "subsampling must be set for lossy compression",
        ))?;
        if !subsampling.is_known() {
            return Err(TjError::InvalidSubsampling(subsampling.id()));
        }
        if self.precision != 8 && self.precision != 12 {
            return Err(TjError::ParamOutOfRange {
                param: Param::Precision.name(),
                value: self.precision as i64,
            });
        }
        if let Some(colorspace) = self.colorspace {
            let subsampled = !matches!(subsampling, Subsampling::S444 | Subsampling::Gray);
            if subsampled && !colorspace.allows_subsampling() {
                debug!(?colorspace, ?subsampling, "colorspace cannot be subsampled");
                return Err(TjError::IncompatibleParams(
                    "chrominance subsampling requires YCbCr or YCCK",
                ));
            }
        }
        Ok(())
    }

    fn validate_lossless(&self, lossless: LosslessOptions) -> TjResult<()> {
        Param::Precision.info().check(self.precision as i32)?;
        Param::LosslessPsv.info().check(lossless.psv as i32)?;
        check_point_transform(lossless.pt as i32, self.precision as i32)?;
        if !matches!(self.subsampling, None | Some(Subsampling::S444)) {
            return Err(TjError::IncompatibleParams("lossless JPEG is always 4:4:4"));
        }
        if self.progressive || self.arithmetic {
            return Err(TjError::IncompatibleParams(
                "lossless JPEG cannot be progressive or arithmetic coded",
            ));
        }
        if let Some(colorspace) = self.colorspace {
            if colorspace.allows_subsampling() {
                return Err(TjError::IncompatibleParams(
                    "lossless JPEG cannot convert colorspaces",
                ));
            }
        }
        Ok(())
    }

    /// The JPEG colorspace a source in `format` will be compressed to
    ///
    /// Lossless JPEG stores the source colorspace unchanged, so an explicit
    /// colorspace must match the one implied by `format`.
    pub fn effective_colorspace(&self, format: PixelFormat) -> TjResult<Colorspace> {
        let colorspace = match (self.lossless, self.colorspace) {
            (Some(_), requested) => {
                let native = match format {
                    PixelFormat::Cmyk => Colorspace::Cmyk,
                    PixelFormat::Gray => Colorspace::Gray,
                    _ => Colorspace::Rgb,
                };
                if requested.is_some_and(|requested| requested != native) {
                    debug!(?requested, ?native, "lossless colorspace mismatch");
                    return Err(TjError::IncompatibleParams(
                        "lossless JPEG cannot convert colorspaces",
                    ));
                }
                native
            }
            (None, Some(colorspace)) => colorspace,
            (None, None) => {
                Colorspace::default_for(format, self.subsampling.unwrap_or(Subsampling::S444))?
            }
        };
        if !colorspace.supports_pixel_format(format)? {
            return Err(TjError::IncompatibleParams(
                "pixel format cannot be converted to the JPEG colorspace",
            ));
        }
        Ok(colorspace)
    }

    /// Lower to raw parameters after validating
    pub fn to_params(&self) -> TjResult<ParamSet> {
        self.validate()?;
        let mut params = ParamSet::new();
        params.set(Param::StopOnWarning, self.stop_on_warning as i32)?;
        params.set(Param::BottomUp, self.bottom_up as i32)?;
        params.set(Param::NoRealloc, self.no_realloc as i32)?;
        if let Some(quality) = self.quality {
            params.set(Param::Quality, quality as i32)?;
        }
        let subsampling = match self.lossless {
            Some(_) => Some(Subsampling::S444),
            None => self.subsampling,
        };
        if let Some(subsampling) = subsampling {
            params.set(Param::Subsamp, subsampling.id())?;
        }
        params.set(Param::Precision, self.precision as i32)?;
        // Lossless derives the colorspace from the source pixel format
        if let (None, Some(colorspace)) = (self.lossless, self.colorspace) {
            params.set(Param::Colorspace, colorspace.id())?;
        }
        params.set(Param::FastDct, self.fast_dct as i32)?;
        params.set(Param::Optimize, self.huffman_optimized() as i32)?;
        params.set(Param::Progressive, self.progressive as i32)?;
        params.set(Param::Arithmetic, self.arithmetic as i32)?;
        if let Some(lossless) = self.lossless {
            params.set(Param::Lossless, 1)?;
            params.set(Param::LosslessPsv, lossless.psv as i32)?;
            params.set(Param::LosslessPt, lossless.pt as i32)?;
        }
        let (blocks, rows) = self.restart.as_params();
        params.set(Param::RestartBlocks, blocks)?;
        params.set(Param::RestartRows, rows)?;
        params.set(Param::XDensity, self.density.x as i32)?;
        params.set(Param::YDensity, self.density.y as i32)?;
        params.set(Param::DensityUnits, self.density.unit as i32)?;
        params.set(Param::MaxMemory, non_negative(Param::MaxMemory, self.max_memory)?)?;
        Ok(params)
    }
}

fn non_negative(param: Param, value: u32) -> TjResult<i32> {
    i32::try_from(value).map_err(|_| TjError::ParamOutOfRange {
        param: param.name(),
        value: value as i64,
    })
}

/// Decompression options
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecompressOptions {
    pub stop_on_warning: bool,
    pub bottom_up: bool,
    pub fast_upsample: bool,
    pub fast_dct: bool,
    /// Maximum progressive scans, 0 for no limit
    pub scan_limit: u32,
    /// Maximum source pixels, 0 for no limit
    pub max_pixels: u32,
    /// Megabytes, 0 for no limit
    pub max_memory: u32,
    pub save_markers: MarkerCopy,
    pub scaling: ScalingFactor,
    /// Cropping region in scaled coordinates
    pub region: Region,
}

impl Default for DecompressOptions {
    fn default() -> Self {
        Self {
            stop_on_warning: false,
            bottom_up: false,
            fast_upsample: false,
            fast_dct: false,
            scan_limit: 0,
            max_pixels: 0,
            max_memory: 0,
            save_markers: MarkerCopy::All,
            scaling: ScalingFactor::UNSCALED,
            region: Region::UNCROPPED,
        }
    }
}

impl DecompressOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scaling(mut self, scaling: ScalingFactor) -> Self {
        self.scaling = scaling;
        self
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn scan_limit(mut self, scan_limit: u32) -> Self {
        self.scan_limit = scan_limit;
        self
    }

    pub fn max_pixels(mut self, max_pixels: u32) -> Self {
        self.max_pixels = max_pixels;
        self
    }

    pub fn validate(&self) -> TjResult<()> {
        if !self.scaling.is_supported() {
            return Err(TjError::InvalidScalingFactor {
                num: self.scaling.num(),
                denom: self.scaling.denom(),
            });
        }
        Ok(())
    }

    /// Check the cropping region against a source JPEG's subsampling and size.
    ///
    /// The left edge must fall on a boundary of the scaled iMCU grid; the top
    /// edge may be anywhere. Returns the region resolved against the scaled
    /// image dimensions.
    pub fn validate_region(
        &self,
        subsampling: Subsampling,
        width: usize,
        height: usize,
    ) -> TjResult<Region> {
        self.validate()?;
        let scaled_width = self.scaling.scaled(width)?;
        let scaled_height = self.scaling.scaled(height)?;
        if self.region.is_uncropped() {
            return Region::UNCROPPED.resolve(scaled_width, scaled_height);
        }
        let mcu_width = self.scaling.scaled(subsampling.mcu_width()?)?;
        if self.region.x % mcu_width != 0 {
            debug!(x = self.region.x, mcu_width, "cropping region not iMCU aligned");
            return Err(TjError::UnalignedRegion {
                x: self.region.x,
                y: self.region.y,
                mcu_width,
                mcu_height: self.scaling.scaled(subsampling.mcu_height()?)?,
            });
        }
        self.region.resolve(scaled_width, scaled_height)
    }

    /// Check whether a source image of `width` x `height` may be decoded
    pub fn check_pixel_limit(&self, width: usize, height: usize) -> TjResult<()> {
        let pixels = (width as u64).saturating_mul(height as u64);
        if self.max_pixels != 0 && pixels > self.max_pixels as u64 {
            debug!(pixels, limit = self.max_pixels, "image exceeds pixel limit");
            return Err(TjError::ImageTooLarge);
        }
        Ok(())
    }

    pub fn to_params(&self) -> TjResult<ParamSet> {
        self.validate()?;
        let mut params = ParamSet::new();
        params.set(Param::StopOnWarning, self.stop_on_warning as i32)?;
        params.set(Param::BottomUp, self.bottom_up as i32)?;
        params.set(Param::FastUpsample, self.fast_upsample as i32)?;
        params.set(Param::FastDct, self.fast_dct as i32)?;
        params.set(Param::ScanLimit, non_negative(Param::ScanLimit, self.scan_limit)?)?;
        params.set(Param::MaxPixels, non_negative(Param::MaxPixels, self.max_pixels)?)?;
        params.set(Param::MaxMemory, non_negative(Param::MaxMemory, self.max_memory)?)?;
        params.set(Param::SaveMarkers, self.save_markers as i32)?;
        Ok(params)
    }
}

/// Lossless transformation options
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformOptions {
    pub stop_on_warning: bool,
    pub no_realloc: bool,
    pub optimize: bool,
    pub progressive: bool,
    pub arithmetic: bool,
    pub scan_limit: u32,
    pub max_pixels: u32,
    pub max_memory: u32,
    pub save_markers: MarkerCopy,
    /// Crop applied to the transformed image; must lie on the MCU grid
    pub region: Region,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            stop_on_warning: false,
            no_realloc: false,
            optimize: false,
            progressive: false,
            arithmetic: false,
            scan_limit: 0,
            max_pixels: 0,
            max_memory: 0,
            save_markers: MarkerCopy::All,
            region: Region::UNCROPPED,
        }
    }
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn progressive(mut self, progressive: bool) -> Self {
        self.progressive = progressive;
        self
    }

    pub fn arithmetic(mut self, arithmetic: bool) -> Self {
        self.arithmetic = arithmetic;
        self
    }

    pub fn huffman_optimized(&self) -> bool {
        !self.arithmetic && (self.optimize || self.progressive)
    }

    /// Check the crop region against a source JPEG's subsampling and size
    pub fn validate(&self, subsampling: Subsampling, width: usize, height: usize) -> TjResult<Region> {
        if self.region.is_uncropped() {
            return Region::UNCROPPED.resolve(width, height);
        }
        self.region.check_mcu_alignment(subsampling)?;
        self.region.resolve(width, height)
    }

    pub fn to_params(&self) -> TjResult<ParamSet> {
        let mut params = ParamSet::new();
        params.set(Param::StopOnWarning, self.stop_on_warning as i32)?;
        params.set(Param::NoRealloc, self.no_realloc as i32)?;
        params.set(Param::Optimize, self.huffman_optimized() as i32)?;
        params.set(Param::Progressive, self.progressive as i32)?;
        params.set(Param::Arithmetic, self.arithmetic as i32)?;
        params.set(Param::ScanLimit, non_negative(Param::ScanLimit, self.scan_limit)?)?;
        params.set(Param::MaxPixels, non_negative(Param::MaxPixels, self.max_pixels)?)?;
        params.set(Param::MaxMemory, non_negative(Param::MaxMemory, self.max_memory)?)?;
        params.set(Param::SaveMarkers, self.save_markers as i32)?;
        Ok(params)
    }
}
