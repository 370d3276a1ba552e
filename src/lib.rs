// DS Video Pipeline Library
// Video-presentation stage for a dual-screen handheld emulator

// Public modules
pub mod config;
pub mod filters;
pub mod screenshot;
pub mod video;

// Re-export main types for convenience
pub use config::VideoConfig;
pub use filters::{FilterEntry, FilterKind, Scale, ScalerFn, FILTERS, NUM_FILTERS};
pub use screenshot::{save_screenshot, ScreenshotError};
pub use video::{
    FramePair, LayoutParams, OutputFrame, ScreenLayout, Surface, SurfaceMut, VideoPipeline,
    FRAME_PIXELS, NATIVE_HEIGHT, NATIVE_WIDTH,
};
