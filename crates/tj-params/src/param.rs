//! The flat parameter-ID table

use std::ops::BitOr;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use tj_core::consts::{NUM_PARAMS, NUM_SUBSAMPLING, UNKNOWN_ID};
use tj_core::util::tracing_wrappers::debug;
use tj_core::{TjError, TjResult};

/// Tunable parameter, addressed by the numeric ID the native codec expects
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Param {
    StopOnWarning = 0,
    BottomUp = 1,
    NoRealloc = 2,
    Quality = 3,
    Subsamp = 4,
    JpegWidth = 5,
    JpegHeight = 6,
    Precision = 7,
    Colorspace = 8,
    FastUpsample = 9,
    FastDct = 10,
    Optimize = 11,
    Progressive = 12,
    ScanLimit = 13,
    Arithmetic = 14,
    Lossless = 15,
    LosslessPsv = 16,
    LosslessPt = 17,
    RestartBlocks = 18,
    RestartRows = 19,
    XDensity = 20,
    YDensity = 21,
    DensityUnits = 22,
    MaxMemory = 23,
    MaxPixels = 24,
    SaveMarkers = 25,
}

impl Param {
    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn info(self) -> &'static ParamInfo {
        &PARAMS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }
}

impl TryFrom<i32> for Param {
    type Error = TjError;

    fn try_from(value: i32) -> TjResult<Self> {
        Self::from_i32(value).ok_or_else(|| {
            debug!(value, "rejecting parameter ID");
            TjError::InvalidParam(value)
        })
    }
}

/// The operations a parameter affects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Applicability(u8);

impl Applicability {
    pub const COMPRESS: Applicability = Applicability(1);
    pub const DECOMPRESS: Applicability = Applicability(1 << 1);
    pub const TRANSFORM: Applicability = Applicability(1 << 2);
    pub const ALL: Applicability = Applicability(0b111);

    pub const fn union(self, other: Applicability) -> Applicability {
        Applicability(self.0 | other.0)
    }

    pub fn contains(self, other: Applicability) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Applicability {
    type Output = Applicability;

    fn bitor(self, rhs: Applicability) -> Applicability {
        self.union(rhs)
    }
}

/// Legal values of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// 0 or 1
    Bool,
    /// `min..=max`
    Range { min: i32, max: i32 },
    /// Any value >= 0, where 0 usually means "no limit"
    NonNegative,
}

impl Domain {
    pub fn contains(self, value: i32) -> bool {
        match self {
            Domain::Bool => value == 0 || value == 1,
            Domain::Range { min, max } => (min..=max).contains(&value),
            Domain::NonNegative => value >= 0,
        }
    }
}

/// Static metadata for one parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamInfo {
    pub param: Param,
    pub name: &'static str,
    pub applies: Applicability,
    pub domain: Domain,
    /// `None` when the value must be given explicitly or is chosen automatically
    pub default: Option<i32>,
    /// Set by the codec from the JPEG header; callers cannot set it
    pub read_only: bool,
}

impl ParamInfo {
    /// Bounds-check `value` against this parameter's domain
    pub fn check(&self, value: i32) -> TjResult<()> {
        if !self.domain.contains(value) {
            debug!(param = self.name, value, "parameter value out of range");
            return Err(TjError::ParamOutOfRange {
                param: self.name,
                value: value as i64,
            });
        }
        Ok(())
    }
}

/// The point transform must leave at least one bit of precision
pub fn check_point_transform(pt: i32, precision: i32) -> TjResult<()> {
    if !(0..precision).contains(&pt) {
        return Err(TjError::ParamOutOfRange {
            param: Param::LosslessPt.name(),
            value: pt as i64,
        });
    }
    Ok(())
}

const C: Applicability = Applicability::COMPRESS;
const D: Applicability = Applicability::DECOMPRESS;
const T: Applicability = Applicability::TRANSFORM;
const U16_MAX: i32 = u16::MAX as i32;
/// Decompression may report a subsampling it cannot classify
const SUBSAMP: Domain = Domain::Range {
    min: UNKNOWN_ID,
    max: NUM_SUBSAMPLING as i32 - 1,
};

const fn entry(
    param: Param,
    name: &'static str,
    applies: Applicability,
    domain: Domain,
    default: Option<i32>,
) -> ParamInfo {
    ParamInfo {
        param,
        name,
        applies,
        domain,
        default,
        read_only: false,
    }
}

/// Header dimensions reported by decompression
const fn read_only(param: Param, name: &'static str) -> ParamInfo {
    ParamInfo {
        param,
        name,
        applies: D,
        domain: Domain::Range { min: 1, max: i32::MAX },
        default: None,
        read_only: true,
    }
}

/// Every parameter, indexed by ID
pub static PARAMS: [ParamInfo; NUM_PARAMS] = [
    entry(Param::StopOnWarning, "stop_on_warning", Applicability::ALL, Domain::Bool, Some(0)),
    entry(Param::BottomUp, "bottom_up", C.union(D), Domain::Bool, Some(0)),
    entry(Param::NoRealloc, "no_realloc", C.union(T), Domain::Bool, Some(0)),
    entry(Param::Quality, "quality", C, Domain::Range { min: 1, max: 100 }, None),
    entry(Param::Subsamp, "subsamp", Applicability::ALL, SUBSAMP, None),
    read_only(Param::JpegWidth, "jpeg_width"),
    read_only(Param::JpegHeight, "jpeg_height"),
    entry(Param::Precision, "precision", C.union(D), Domain::Range { min: 2, max: 16 }, Some(8)),
    entry(Param::Colorspace, "colorspace", C.union(D), Domain::Range { min: 0, max: 4 }, None),
    entry(Param::FastUpsample, "fast_upsample", D, Domain::Bool, Some(0)),
    entry(Param::FastDct, "fast_dct", C.union(D), Domain::Bool, Some(0)),
    entry(Param::Optimize, "optimize", C.union(T), Domain::Bool, Some(0)),
    entry(Param::Progressive, "progressive", Applicability::ALL, Domain::Bool, Some(0)),
    entry(Param::ScanLimit, "scan_limit", D.union(T), Domain::NonNegative, Some(0)),
    entry(Param::Arithmetic, "arithmetic", Applicability::ALL, Domain::Bool, Some(0)),
    entry(Param::Lossless, "lossless", C.union(D), Domain::Bool, Some(0)),
    entry(Param::LosslessPsv, "lossless_psv", C.union(D), Domain::Range { min: 1, max: 7 }, Some(1)),
    entry(Param::LosslessPt, "lossless_pt", C.union(D), Domain::Range { min: 0, max: 15 }, Some(0)),
    entry(Param::RestartBlocks, "restart_blocks", C, Domain::Range { min: 0, max: U16_MAX }, Some(0)),
    entry(Param::RestartRows, "restart_rows", C, Domain::Range { min: 0, max: U16_MAX }, Some(0)),
    entry(Param::XDensity, "x_density", C.union(D), Domain::Range { min: 1, max: U16_MAX }, Some(1)),
    entry(Param::YDensity, "y_density", C.union(D), Domain::Range { min: 1, max: U16_MAX }, Some(1)),
    entry(Param::DensityUnits, "density_units", C.union(D), Domain::Range { min: 0, max: 2 }, Some(0)),
    entry(Param::MaxMemory, "max_memory", Applicability::ALL, Domain::NonNegative, Some(0)),
    entry(Param::MaxPixels, "max_pixels", D.union(T), Domain::NonNegative, Some(0)),
    entry(Param::SaveMarkers, "save_markers", D.union(T), Domain::Range { min: 0, max: 4 }, Some(2)),
];
