//! Decompression scaling factors

use crate::{TjError, TjResult};

/// A rational downscale (or upscale) ratio applied during decompression
///
/// The native codec owns the list of ratios it can honor; this type only
/// carries them and computes scaled dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawScalingFactor"))]
pub struct ScalingFactor {
    num: u32,
    denom: u32,
}

/// Unchecked wire form; deserialization goes through [`ScalingFactor::new`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawScalingFactor {
    num: u32,
    denom: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawScalingFactor> for ScalingFactor {
    type Error = TjError;

    fn try_from(raw: RawScalingFactor) -> TjResult<Self> {
        Self::new(raw.num, raw.denom)
    }
}

/// Scaling factors supported by libjpeg-turbo's IDCT, largest first
pub const SCALING_FACTORS: [ScalingFactor; 16] = [
    ScalingFactor::from_raw(2, 1),
    ScalingFactor::from_raw(15, 8),
    ScalingFactor::from_raw(7, 4),
    ScalingFactor::from_raw(13, 8),
    ScalingFactor::from_raw(3, 2),
    ScalingFactor::from_raw(11, 8),
    ScalingFactor::from_raw(5, 4),
    ScalingFactor::from_raw(9, 8),
    ScalingFactor::from_raw(1, 1),
    ScalingFactor::from_raw(7, 8),
    ScalingFactor::from_raw(3, 4),
    ScalingFactor::from_raw(5, 8),
    ScalingFactor::from_raw(1, 2),
    ScalingFactor::from_raw(3, 8),
    ScalingFactor::from_raw(1, 4),
    ScalingFactor::from_raw(1, 8),
];

impl ScalingFactor {
    /// The identity ratio
    pub const UNSCALED: ScalingFactor = ScalingFactor::from_raw(1, 1);

    const fn from_raw(num: u32, denom: u32) -> Self {
        Self { num, denom }
    }

    pub fn new(num: u32, denom: u32) -> TjResult<Self> {
        if num == 0 || denom == 0 {
            return Err(TjError::InvalidScalingFactor { num, denom });
        }
        Ok(Self { num, denom })
    }

    pub fn num(&self) -> u32 {
        self.num
    }

    pub fn denom(&self) -> u32 {
        self.denom
    }

    /// Scale `dimension`, rounding up
    pub fn scaled(&self, dimension: usize) -> TjResult<usize> {
        let num = self.num as u64;
        let denom = self.denom as u64;
        let scaled = (dimension as u64)
            .checked_mul(num)
            .map(|v| v.div_ceil(denom))
            .ok_or(TjError::ImageTooLarge)?;
        usize::try_from(scaled).map_err(|_| TjError::ImageTooLarge)
    }

    pub fn is_one(&self) -> bool {
        self.num == self.denom
    }

    /// Whether the codec can honor this ratio
    pub fn is_supported(&self) -> bool {
        SCALING_FACTORS
            .iter()
            .any(|sf| sf.num as u64 * self.denom as u64 == self.num as u64 * sf.denom as u64)
    }
}

impl Default for ScalingFactor {
    fn default() -> Self {
        Self::UNSCALED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_terms_rejected() {
        assert_eq!(
            ScalingFactor::new(0, 8),
            Err(TjError::InvalidScalingFactor { num: 0, denom: 8 })
        );
        assert!(ScalingFactor::new(1, 0).is_err());
    }

    #[test]
    fn test_scaled_rounds_up() {
        let half = ScalingFactor::new(1, 2).unwrap();
        assert_eq!(half.scaled(17).unwrap(), 9);
        assert_eq!(half.scaled(16).unwrap(), 8);

        let eighth = ScalingFactor::new(1, 8).unwrap();
        assert_eq!(eighth.scaled(1).unwrap(), 1);
        assert_eq!(eighth.scaled(640).unwrap(), 80);

        assert_eq!(ScalingFactor::UNSCALED.scaled(123).unwrap(), 123);
    }

    #[test]
    fn test_is_one() {
        assert!(ScalingFactor::UNSCALED.is_one());
        assert!(ScalingFactor::new(8, 8).unwrap().is_one());
        assert!(!ScalingFactor::new(7, 8).unwrap().is_one());
    }

    #[test]
    fn test_supported_factors() {
        assert!(SCALING_FACTORS.iter().all(|sf| sf.is_supported()));
        assert!(ScalingFactor::new(2, 4).unwrap().is_supported());
        assert!(!ScalingFactor::new(1, 3).unwrap().is_supported());
        assert!(SCALING_FACTORS.windows(2).all(|w| {
            w[0].num as u64 * w[1].denom as u64 > w[1].num as u64 * w[0].denom as u64
        }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_zero_terms() {
        let err = serde_json::from_str::<ScalingFactor>(r#"{"num":1,"denom":0}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid scaling factor: 1/0"));
        assert!(serde_json::from_str::<ScalingFactor>(r#"{"num":0,"denom":8}"#).is_err());

        let json = serde_json::to_string(&SCALING_FACTORS[11]).unwrap();
        let sf: ScalingFactor = serde_json::from_str(&json).unwrap();
        assert_eq!(sf, ScalingFactor::new(5, 8).unwrap());
        assert_eq!(sf.scaled(100).unwrap(), 63);
    }
}
