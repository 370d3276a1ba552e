// Video module - frame handoff, pixel normalization, filtering and layout
//
// This module provides:
// - RGB555 -> RGBA8888 pixel normalization
// - Double-buffered frame handoff between producer and consumer
// - Filter dispatch into the fixed-capacity output buffer
// - Rotation / screen-gap geometry for the presentation layer

pub mod buffers;
pub mod color;
pub mod layout;
pub mod pipeline;
pub mod surface;

pub use buffers::{
    FramePair, BUFFER_PIXELS, FRAME_PIXELS, MAX_SCALE, NATIVE_HEIGHT, NATIVE_WIDTH, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
pub use color::{expand5, pack_rgb555, rgb555_to_rgba8888, OPAQUE};
pub use layout::{LayoutParams, ScreenLayout};
pub use pipeline::{OutputFrame, VideoPipeline};
pub use surface::{Surface, SurfaceMut};
