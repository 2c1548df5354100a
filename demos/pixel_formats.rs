//! # Pixel Format Examples
//!
//! This example walks the packed-pixel formats and prints the size of each
//! pixel and the byte offset of every channel, then lays out one planar YUV
//! buffer per subsampling mode.
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run -p tj --example pixel_formats
//! ```

use tj::{Channel, Colorspace, PixelFormat, Subsampling, YuvLayout};

fn offset_cell(format: PixelFormat, channel: Channel) -> Result<String, tj::TjError> {
    Ok(match format.offset(channel)? {
        Some(offset) => offset.to_string(),
        None => "-".to_string(),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Packed Pixel Formats");
    println!("====================\n");

    // ==================== CHANNEL OFFSETS ====================
    println!("| Format | ID | Bytes/px | R | G | B | A | Opaque twin");
    println!("|--------|----|----------|---|---|---|---|------------");
    for format in PixelFormat::ALL {
        println!(
            "| {:<6} | {:>2} | {:>8} | {} | {} | {} | {} | {:?}",
            format!("{:?}", format),
            format.id(),
            format.size()?,
            offset_cell(format, Channel::Red)?,
            offset_cell(format, Channel::Green)?,
            offset_cell(format, Channel::Blue)?,
            offset_cell(format, Channel::Alpha)?,
            format.opaque_equivalent()?,
        );
    }

    // ==================== SWIZZLING ONE PIXEL ====================
    println!("\nRed pixel (255, 0, 0, opaque) in each 4-byte format:");
    for format in PixelFormat::ALL {
        if format.size()? != 4 || format == PixelFormat::Cmyk {
            continue;
        }
        let mut pixel = [0u8; 4];
        if let Some(r) = format.red_offset()? {
            pixel[r] = 255;
        }
        if let Some(a) = format.alpha_offset()? {
            pixel[a] = 255;
        }
        println!("   {:?} {:?}", format, pixel);
    }

    // ==================== DEFAULT COLORSPACES ====================
    println!("\nDefault JPEG colorspace for lossy compression:");
    for (format, mode) in [
        (PixelFormat::Rgb, Subsampling::S420),
        (PixelFormat::Bgrx, Subsampling::Gray),
        (PixelFormat::Cmyk, Subsampling::S444),
    ] {
        let colorspace = Colorspace::default_for(format, mode)?;
        println!(
            "   {:?} at {:?} -> {:?} (planar YUV: {})",
            format,
            mode,
            colorspace,
            colorspace.allows_planar_yuv()
        );
    }

    // ==================== PLANAR YUV LAYOUT ====================
    let (width, height, align) = (101, 67, 4);
    println!("\nYUV buffers for a {}x{} image, rows padded to {} bytes:", width, height, align);
    for mode in Subsampling::ALL {
        let layout = YuvLayout::new(width, align, height, mode)?;
        print!("   {:?} total {}:", mode, layout.total_size());
        for plane in layout.planes() {
            print!(
                "  [{}x{} stride {} @ {}]",
                plane.width, plane.height, plane.stride, plane.offset
            );
        }
        println!();
    }

    Ok(())
}
