//! Per-plane dimensions

use tj_core::consts::MAX_YUV_PLANES;
use tj_core::util::tracing_wrappers::debug;
use tj_core::{Subsampling, TjError, TjResult};

/// A plane of a planar YUV image
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Luminance
    Y = 0,
    /// Blue-difference chrominance
    U = 1,
    /// Red-difference chrominance
    V = 2,
}

impl Component {
    pub const ALL: [Component; MAX_YUV_PLANES] = [Component::Y, Component::U, Component::V];

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn is_chroma(self) -> bool {
        self != Component::Y
    }
}

impl TryFrom<i32> for Component {
    type Error = TjError;

    fn try_from(value: i32) -> TjResult<Self> {
        match value {
            0 => Ok(Component::Y),
            1 => Ok(Component::U),
            2 => Ok(Component::V),
            _ => Err(TjError::InvalidComponent(value)),
        }
    }
}

pub(crate) fn check_dimensions(width: usize, height: usize) -> TjResult<()> {
    if width == 0 || height == 0 {
        debug!(width, height, "rejecting empty image");
        return Err(TjError::InvalidDimensions {
            width: width as i64,
            height: height as i64,
        });
    }
    Ok(())
}

pub(crate) fn check_alignment(align: usize) -> TjResult<()> {
    if !align.is_power_of_two() {
        debug!(align, "rejecting row alignment");
        return Err(TjError::InvalidAlignment(align as i64));
    }
    Ok(())
}

fn subsampled_extent(
    component: Component,
    extent: usize,
    subsampling: Subsampling,
    decimation: usize,
) -> usize {
    match component {
        Component::Y => extent,
        _ if subsampling == Subsampling::Gray => 0,
        _ => extent.div_ceil(decimation),
    }
}

/// Width in samples of one plane of a YUV image
///
/// The luminance plane is never subsampled. Chrominance planes are
/// `ceil(width / h_decimation)` wide, and do not exist (width 0) in a
/// grayscale image.
pub fn plane_width(component: Component, width: usize, subsampling: Subsampling) -> TjResult<usize> {
    let decimation = subsampling.h_decimation()?;
    check_dimensions(width, 1)?;
    Ok(subsampled_extent(component, width, subsampling, decimation))
}

/// Height in rows of one plane of a YUV image
pub fn plane_height(
    component: Component,
    height: usize,
    subsampling: Subsampling,
) -> TjResult<usize> {
    let decimation = subsampling.v_decimation()?;
    check_dimensions(1, height)?;
    Ok(subsampled_extent(component, height, subsampling, decimation))
}

/// Size in bytes of one plane of a YUV image
///
/// A `stride` of 0 means the rows are unpadded. Otherwise `stride` is the
/// distance in bytes between the starts of consecutive rows and must be at
/// least the plane width.
pub fn plane_size(
    component: Component,
    width: usize,
    stride: usize,
    height: usize,
    subsampling: Subsampling,
) -> TjResult<usize> {
    let pw = plane_width(component, width, subsampling)?;
    let ph = plane_height(component, height, subsampling)?;
    let stride = match stride {
        0 => pw,
        s if s < pw => {
            return Err(TjError::InvalidStride {
                stride: s as i64,
                min: pw,
            })
        }
        s => s,
    };
    stride.checked_mul(ph).ok_or(TjError::ImageTooLarge)
}

/// Row stride of a plane whose rows are padded to a multiple of `align` bytes
pub fn aligned_stride(
    component: Component,
    width: usize,
    align: usize,
    subsampling: Subsampling,
) -> TjResult<usize> {
    check_alignment(align)?;
    let pw = plane_width(component, width, subsampling)?;
    pw.checked_next_multiple_of(align)
        .ok_or(TjError::ImageTooLarge)
}

/// Size in bytes of a YUV image held in one buffer, plane after plane
///
/// Every row of every plane is padded to a multiple of `align`, which must be
/// a power of two. Grayscale images have only the luminance plane.
pub fn yuv_buf_size(
    width: usize,
    align: usize,
    height: usize,
    subsampling: Subsampling,
) -> TjResult<usize> {
    check_alignment(align)?;
    let mut total: usize = 0;
    for component in Component::ALL
        .into_iter()
        .take(subsampling.component_count()?)
    {
        let stride = aligned_stride(component, width, align, subsampling)?;
        let ph = plane_height(component, height, subsampling)?;
        total = stride
            .checked_mul(ph)
            .and_then(|size| total.checked_add(size))
            .ok_or(TjError::ImageTooLarge)?;
    }
    Ok(total)
}
