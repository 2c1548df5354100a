//! Properties of subsampling, pixel format and planar YUV geometry

use tj::raw;
use tj::*;

#[test]
fn test_mcu_sizes_are_positive_block_multiples() {
    for mode in Subsampling::ALL {
        let w = mode.mcu_width().unwrap();
        let h = mode.mcu_height().unwrap();
        assert!(w > 0 && w % consts::BLOCK_SIZE == 0, "{:?}", mode);
        assert!(h > 0 && h % consts::BLOCK_SIZE == 0, "{:?}", mode);
    }
}

#[test]
fn test_channel_offsets_are_consistent() {
    for format in PixelFormat::ALL {
        let size = format.size().unwrap();
        let offsets: Vec<usize> = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha]
            .into_iter()
            .filter_map(|c| format.offset(c).unwrap())
            .collect();

        let mut unique = offsets.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), offsets.len(), "{:?} has colliding offsets", format);
        assert!(offsets.iter().all(|o| *o < size));

        let expected = match format {
            PixelFormat::Gray | PixelFormat::Cmyk => 0,
            f if !f.has_alpha().unwrap() && size == 4 => 3,
            _ => size,
        };
        assert_eq!(offsets.len(), expected, "{:?}", format);
    }
}

#[test]
fn test_luma_plane_matches_image() {
    arbtest::arbtest(|u| {
        let w = u.int_in_range(1..=100_000usize)?;
        let h = u.int_in_range(1..=100_000usize)?;
        let mode = *u.choose(&Subsampling::ALL)?;
        assert_eq!(plane_width(Component::Y, w, mode).unwrap(), w);
        assert_eq!(plane_height(Component::Y, h, mode).unwrap(), h);
        Ok(())
    });
}

#[test]
fn test_gray_has_no_chroma_planes() {
    for w in [1, 7, 64, 1001] {
        assert_eq!(plane_width(Component::U, w, Subsampling::Gray).unwrap(), 0);
        assert_eq!(plane_width(Component::V, w, Subsampling::Gray).unwrap(), 0);
    }
    assert_eq!(raw::plane_width(1, 33, 3).unwrap(), 0);
    assert_eq!(raw::plane_width(2, 33, 3).unwrap(), 0);
}

#[test]
fn test_unpadded_444_has_three_equal_planes() {
    arbtest::arbtest(|u| {
        let w = u.int_in_range(1..=5000usize)?;
        let h = u.int_in_range(1..=5000usize)?;
        assert_eq!(
            yuv_buf_size(w, 1, h, Subsampling::S444).unwrap(),
            w * h + 2 * w * h
        );
        Ok(())
    });
}

#[test]
fn test_buf_size_monotonic_in_alignment() {
    arbtest::arbtest(|u| {
        let w = u.int_in_range(1..=5000usize)?;
        let h = u.int_in_range(1..=5000usize)?;
        let mode = *u.choose(&Subsampling::ALL)?;
        let sizes: Vec<usize> = (0..10)
            .map(|shift| yuv_buf_size(w, 1 << shift, h, mode).unwrap())
            .collect();
        assert!(sizes.windows(2).all(|pair| pair[0] <= pair[1]));
        Ok(())
    });
}

#[test]
fn test_unknown_subsampling_bound_equals_444() {
    arbtest::arbtest(|u| {
        let w = u.int_in_range(1..=20_000usize)?;
        let h = u.int_in_range(1..=20_000usize)?;
        assert_eq!(
            jpeg_buf_size(w, h, Subsampling::Unknown).unwrap(),
            jpeg_buf_size(w, h, Subsampling::S444).unwrap()
        );
        Ok(())
    });
}

#[test]
fn test_invalid_inputs_rejected() {
    assert_eq!(raw::mcu_width(-2), Err(TjError::InvalidSubsampling(-2)));
    assert_eq!(raw::plane_width(3, 16, 0), Err(TjError::InvalidComponent(3)));
    assert_eq!(raw::buf_size_yuv(16, 3, 16, 2), Err(TjError::InvalidAlignment(3)));
    assert_eq!(raw::pixel_size(12), Err(TjError::InvalidPixelFormat(12)));
    assert_eq!(
        raw::plane_size_yuv(1, 16, 4, 16, 2),
        Err(TjError::InvalidStride { stride: 4, min: 8 })
    );
    for err in [raw::mcu_height(-2).unwrap_err(), raw::buf_size(0, 0, 0).unwrap_err()] {
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_420_rounding_example() {
    assert_eq!(raw::plane_width(1, 17, 2).unwrap(), 9);
    assert_eq!(raw::plane_height(1, 17, 2).unwrap(), 9);
}

#[test]
fn test_plane_sizes_sum_to_buffer() {
    for mode in Subsampling::ALL {
        let (w, h) = (101, 67);
        let sum: usize = Component::ALL
            .into_iter()
            .map(|c| plane_size(c, w, 0, h, mode).unwrap())
            .sum();
        assert_eq!(sum, yuv_buf_size(w, 1, h, mode).unwrap(), "{:?}", mode);
    }
}

#[test]
fn test_layout_planes_are_disjoint() {
    for mode in Subsampling::ALL {
        let layout = YuvLayout::new(99, 16, 51, mode).unwrap();
        let ranges: Vec<_> = layout.planes().iter().map(|p| p.range()).collect();
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        for plane in layout.planes() {
            assert_eq!(plane.stride % 16, 0);
            assert!(plane.stride >= plane.width);
        }
    }
}

#[test]
fn test_crop_alignment_follows_mcu() {
    for mode in Subsampling::ALL {
        let mcu_w = mode.mcu_width().unwrap();
        let mcu_h = mode.mcu_height().unwrap();
        assert!(Region::new(mcu_w, mcu_h, 0, 0).check_mcu_alignment(mode).is_ok());
        assert!(Region::new(mcu_w / 2, 0, 0, 0).check_mcu_alignment(mode).is_err());
    }
}

#[test]
fn test_scaled_dimensions() {
    for factor in SCALING_FACTORS {
        let scaled = factor.scaled(1000).unwrap();
        assert_eq!(scaled, (1000 * factor.num() as usize).div_ceil(factor.denom() as usize));
    }
}
