//! Crop regions and their alignment to the MCU grid

use crate::util::tracing_wrappers::debug;
use crate::{Subsampling, TjError, TjResult};

/// A rectangle within an image, in pixels
///
/// A zero width or height means "to the right or bottom edge of the image".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    /// The whole image
    pub const UNCROPPED: Region = Region {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_uncropped(&self) -> bool {
        *self == Self::UNCROPPED
    }

    /// Check that the top-left corner lies on an MCU boundary.
    ///
    /// Lossless transforms can only crop along MCU edges, since partial MCUs
    /// cannot be re-encoded without decoding.
    pub fn check_mcu_alignment(&self, subsampling: Subsampling) -> TjResult<()> {
        let mcu_width = subsampling.mcu_width()?;
        let mcu_height = subsampling.mcu_height()?;
        if self.x % mcu_width != 0 || self.y % mcu_height != 0 {
            debug!(x = self.x, y = self.y, "crop region not MCU aligned");
            return Err(TjError::UnalignedRegion {
                x: self.x,
                y: self.y,
                mcu_width,
                mcu_height,
            });
        }
        Ok(())
    }

    /// Fill in zero extents from the image size and bounds-check the result
    pub fn resolve(&self, image_width: usize, image_height: usize) -> TjResult<Region> {
        let out_of_bounds = TjError::RegionOutOfBounds {
            width: image_width,
            height: image_height,
        };
        if self.x >= image_width || self.y >= image_height {
            return Err(out_of_bounds);
        }
        let width = match self.width {
            0 => image_width - self.x,
            w => w,
        };
        let height = match self.height {
            0 => image_height - self.y,
            h => h,
        };
        if width > image_width - self.x || height > image_height - self.y {
            return Err(out_of_bounds);
        }
        Ok(Region::new(self.x, self.y, width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncropped() {
        assert!(Region::UNCROPPED.is_uncropped());
        assert!(Region::default().is_uncropped());
        assert!(!Region::new(0, 0, 1, 1).is_uncropped());
    }

    #[test]
    fn test_mcu_alignment() {
        let region = Region::new(16, 8, 10, 10);
        assert!(region.check_mcu_alignment(Subsampling::S422).is_ok());
        assert_eq!(
            region.check_mcu_alignment(Subsampling::S420),
            Err(TjError::UnalignedRegion {
                x: 16,
                y: 8,
                mcu_width: 16,
                mcu_height: 16
            })
        );
        assert!(Region::new(8, 0, 0, 0)
            .check_mcu_alignment(Subsampling::S411)
            .is_err());
        assert!(Region::UNCROPPED
            .check_mcu_alignment(Subsampling::Unknown)
            .is_err());
    }

    #[test]
    fn test_resolve() {
        assert_eq!(
            Region::UNCROPPED.resolve(640, 480).unwrap(),
            Region::new(0, 0, 640, 480)
        );
        assert_eq!(
            Region::new(16, 32, 0, 100).resolve(640, 480).unwrap(),
            Region::new(16, 32, 624, 100)
        );
        assert!(Region::new(600, 0, 41, 0).resolve(640, 480).is_err());
        assert!(Region::new(640, 0, 0, 0).resolve(640, 480).is_err());
    }
}
