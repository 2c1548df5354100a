//! # Error Handling Examples
//!
//! This example shows the errors raised when selectors, dimensions or
//! parameter values fall outside their defined ranges.
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run -p tj --example error_handling
//! ```

use tj::{
    raw, CompressOptions, ErrorKind, LosslessOptions, Param, ParamSet, PixelFormat, Region,
    ScalingFactor, Subsampling, TjError, TransformOptions,
};

fn report<T: std::fmt::Debug>(label: &str, result: Result<T, TjError>) {
    match result {
        Ok(value) => println!("   {}: {:?}", label, value),
        Err(e) => {
            assert_eq!(e.kind(), ErrorKind::InvalidArgument);
            println!("   {}: rejected ({})", label, e);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Error Handling Examples");
    println!("=======================\n");

    // ==================== INVALID SELECTORS ====================
    println!("1. Raw selectors outside the defined ranges...");
    report("subsampling 7", raw::mcu_width(7));
    report("pixel format -1", raw::pixel_size(-1));
    report("component 3", raw::plane_width(3, 64, 0));
    report("parameter 26", Param::try_from(26));
    println!();

    // ==================== INVALID GEOMETRY ====================
    println!("2. Dimensions, alignment and stride...");
    report("0x100 image", raw::buf_size(0, 100, 0));
    report("alignment 3", raw::buf_size_yuv(64, 3, 64, 2));
    report("stride below plane width", raw::plane_size_yuv(1, 64, 16, 64, 2));
    report("negative stride", raw::plane_size_yuv(0, 64, -64, 64, 2));
    println!();

    // ==================== PARAMETER VALUES ====================
    println!("3. Parameter values...");
    let mut params = ParamSet::new();
    report("quality 101", params.set(Param::Quality, 101));
    report("JPEG width", params.set(Param::JpegWidth, 640));
    params.set(Param::RestartBlocks, 4)?;
    params.set(Param::RestartRows, 2)?;
    println!(
        "   restart rows replaces blocks: blocks={:?} rows={:?}",
        params.get(Param::RestartBlocks),
        params.get(Param::RestartRows)
    );
    println!();

    // ==================== OPTION COMBINATIONS ====================
    println!("4. Option combinations...");
    report("lossy without quality", CompressOptions::new().validate());
    report(
        "progressive lossless",
        CompressOptions::new()
            .lossless(LosslessOptions::default())
            .progressive(true)
            .validate(),
    );
    report(
        "lossless RGB source",
        CompressOptions::new()
            .lossless(LosslessOptions::default())
            .effective_colorspace(PixelFormat::Rgba),
    );
    report("scaling 1/0", ScalingFactor::new(1, 0));
    report(
        "crop at x=8 in 4:2:0",
        TransformOptions::new()
            .region(Region::new(8, 0, 0, 0))
            .validate(Subsampling::S420, 640, 480),
    );

    Ok(())
}
