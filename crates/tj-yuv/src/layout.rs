//! Placement of planes inside a single YUV allocation

use tj_core::{Subsampling, TjError, TjResult};

use crate::plane::{aligned_stride, check_alignment, plane_height, plane_width, Component};

/// Geometry of one plane within a contiguous YUV buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneLayout {
    pub component: Component,
    /// Byte offset of the first row from the start of the buffer
    pub offset: usize,
    /// Samples per row
    pub width: usize,
    /// Bytes between the starts of consecutive rows
    pub stride: usize,
    pub height: usize,
}

impl PlaneLayout {
    pub fn len(&self) -> usize {
        self.stride * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte range of this plane within the buffer
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len()
    }
}

/// Planes of a YUV image stored back to back, Y then U then V
///
/// The total size always equals [`crate::yuv_buf_size`] for the same inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YuvLayout {
    pub subsampling: Subsampling,
    planes: Vec<PlaneLayout>,
}

impl YuvLayout {
    pub fn new(
        width: usize,
        align: usize,
        height: usize,
        subsampling: Subsampling,
    ) -> TjResult<Self> {
        check_alignment(align)?;
        let count = subsampling.component_count()?;
        let mut planes = Vec::with_capacity(count);
        let mut offset: usize = 0;
        for component in Component::ALL.into_iter().take(count) {
            let plane = PlaneLayout {
                component,
                offset,
                width: plane_width(component, width, subsampling)?,
                stride: aligned_stride(component, width, align, subsampling)?,
                height: plane_height(component, height, subsampling)?,
            };
            offset = plane
                .stride
                .checked_mul(plane.height)
                .and_then(|len| offset.checked_add(len))
                .ok_or(TjError::ImageTooLarge)?;
            planes.push(plane);
        }
        Ok(Self {
            subsampling,
            planes,
        })
    }

    pub fn planes(&self) -> &[PlaneLayout] {
        &self.planes
    }

    pub fn plane(&self, component: Component) -> Option<&PlaneLayout> {
        self.planes.iter().find(|p| p.component == component)
    }

    /// Total size of the buffer in bytes
    pub fn total_size(&self) -> usize {
        self.planes.last().map_or(0, |p| p.offset + p.len())
    }

    /// Split a buffer into its planes.
    ///
    /// Fails if `buf` is shorter than [`Self::total_size`].
    pub fn split<'a>(&self, buf: &'a [u8]) -> TjResult<Vec<&'a [u8]>> {
        if buf.len() < self.total_size() {
            return Err(TjError::BufferTooSmall {
                expected: self.total_size(),
                actual: buf.len(),
            });
        }
        Ok(self.planes.iter().map(|p| &buf[p.range()]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yuv_buf_size;

    #[test]
    fn test_offsets_420() {
        let layout = YuvLayout::new(35, 4, 27, Subsampling::S420).unwrap();
        let planes = layout.planes();
        assert_eq!(planes.len(), 3);

        assert_eq!(planes[0].offset, 0);
        assert_eq!(planes[0].width, 35);
        assert_eq!(planes[0].stride, 36);
        assert_eq!(planes[0].height, 27);

        assert_eq!(planes[1].offset, 36 * 27);
        assert_eq!(planes[1].width, 18);
        assert_eq!(planes[1].stride, 20);
        assert_eq!(planes[1].height, 14);

        assert_eq!(planes[2].offset, 36 * 27 + 20 * 14);
        assert_eq!(layout.total_size(), 36 * 27 + 2 * 20 * 14);
    }

    #[test]
    fn test_gray_single_plane() {
        let layout = YuvLayout::new(10, 1, 10, Subsampling::Gray).unwrap();
        assert_eq!(layout.planes().len(), 1);
        assert!(layout.plane(Component::U).is_none());
        assert_eq!(layout.total_size(), 100);
    }

    #[test]
    fn test_total_matches_buf_size() {
        arbtest::arbtest(|u| {
            let width = u.int_in_range(1..=2000usize)?;
            let height = u.int_in_range(1..=2000usize)?;
            let align = 1usize << u.int_in_range(0..=6u32)?;
            let mode = *u.choose(&Subsampling::ALL)?;
            let layout = YuvLayout::new(width, align, height, mode).unwrap();
            assert_eq!(
                layout.total_size(),
                yuv_buf_size(width, align, height, mode).unwrap()
            );
            Ok(())
        });
    }

    #[test]
    fn test_split() {
        let layout = YuvLayout::new(16, 1, 16, Subsampling::S422).unwrap();
        let buf = vec![0u8; layout.total_size()];
        let planes = layout.split(&buf).unwrap();
        assert_eq!(planes[0].len(), 256);
        assert_eq!(planes[1].len(), 128);
        assert_eq!(planes[2].len(), 128);
        assert!(layout.split(&buf[1..]).is_err());
    }
}
