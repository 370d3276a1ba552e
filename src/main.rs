// DS Video Pipeline - Main Entry Point
//
// This is a demonstration of the presentation pipeline with a generated
// test frame: ingest, swap-and-filter, geometry report and a PNG
// screenshot. The windowing front end lives elsewhere.

use nds_video::video::{
    pack_rgb555, VideoPipeline, FRAME_PIXELS, NATIVE_HEIGHT, NATIVE_WIDTH, SCREEN_HEIGHT,
};
use nds_video::{save_screenshot, VideoConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("DS video pipeline (nds-video) v0.1.0");
    println!("====================================");
    println!();

    // Load or create the video configuration
    let config = VideoConfig::load_or_default();
    println!(
        "Video configuration loaded (filter: {:?}, rotation: {}, gap: {})",
        config.filter, config.rotation, config.screen_gap
    );
    println!();

    let pipeline = VideoPipeline::new();
    pipeline.apply_config(&config);

    // One producer pass with a test pattern, one consumer pass
    let frame = test_frame();
    pipeline.ingest_frame(&frame);
    let output = pipeline.swap_and_filter();

    println!("Filtered output: {}x{}", output.width, output.height);
    let (width, height) = pipeline.rotated_size_with_gap();
    println!("Presentation size (rotated, with gap): {}x{}", width, height);

    let path = save_screenshot(&output)?;
    println!("Screenshot saved to: {}", path.display());

    Ok(())
}

/// Horizontal color ramp with a distinct hue per screen
fn test_frame() -> Vec<u16> {
    let mut frame = vec![0u16; FRAME_PIXELS];
    for y in 0..NATIVE_HEIGHT {
        for x in 0..NATIVE_WIDTH {
            let ramp = (x * 31 / (NATIVE_WIDTH - 1)) as u16;
            frame[y * NATIVE_WIDTH + x] = if y < SCREEN_HEIGHT {
                pack_rgb555(ramp, 31 - ramp, 8)
            } else {
                pack_rgb555(8, ramp, 31 - ramp)
            };
        }
    }
    frame
}
