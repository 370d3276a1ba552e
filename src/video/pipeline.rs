// Video pipeline - frame handoff, filter dispatch and presentation geometry
//
// One producer (the emulation core) feeds packed frames in; one consumer
// (the presentation layer) swaps, filters and presents. The pipeline is
// an explicitly constructed object shared by reference between the two;
// there is no global instance. Selection and layout setters are guarded
// by the same short-held lock discipline as the buffer swap and may be
// called from either thread between frames.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::buffers::{FramePair, NATIVE_HEIGHT, NATIVE_WIDTH};
use super::layout::{LayoutParams, ScreenLayout};
use super::surface::{Surface, SurfaceMut};
use crate::config::VideoConfig;
use crate::filters::FilterKind;

/// Current selection and geometry, guarded by one short-held mutex
#[derive(Debug, Clone, Copy)]
struct PipelineState {
    filter: FilterKind,
    width: u32,
    height: u32,
    layout: LayoutParams,
}

/// Read-only view of the filtered frame returned by [`VideoPipeline::swap_and_filter`]
///
/// Valid until the next `swap_and_filter` call; the consumer must not
/// hold one across it.
#[derive(Debug)]
pub struct OutputFrame<'a> {
    /// Normalized RGBA8888 pixels, exactly `width * height` of them
    pub pixels: &'a [u32],
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

/// The video presentation pipeline
///
/// Owns the frame buffer pair, the current filter selection and the
/// layout parameters. All buffers are allocated once here; the frame
/// path never allocates.
pub struct VideoPipeline {
    pair: FramePair,
    state: Mutex<PipelineState>,
}

impl VideoPipeline {
    /// Create a pipeline at native geometry with the passthrough filter
    pub fn new() -> Self {
        debug!(
            width = NATIVE_WIDTH,
            height = NATIVE_HEIGHT,
            "video pipeline initialized"
        );
        VideoPipeline {
            pair: FramePair::new(),
            state: Mutex::new(PipelineState {
                filter: FilterKind::None,
                width: NATIVE_WIDTH as u32,
                height: NATIVE_HEIGHT as u32,
                layout: LayoutParams::default(),
            }),
        }
    }

    fn state_lock(&self) -> MutexGuard<'_, PipelineState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Ingest one packed frame from the producer
    ///
    /// Converts every pixel to RGBA8888 and writes it into the buffer at
    /// the active index. Producer thread only; never blocks the consumer
    /// beyond the index read.
    ///
    /// # Arguments
    /// * `raw` - Exactly 256x384 packed RGB555 pixels
    pub fn ingest_frame(&self, raw: &[u16]) {
        self.pair.write_frame(raw);
    }

    /// Swap buffers and run the selected filter (consumer side)
    ///
    /// Flips the active index, reads the frame the producer just
    /// finished, runs the selected filter into the output buffer and
    /// returns a view of it sized per the current output geometry.
    pub fn swap_and_filter(&self) -> OutputFrame<'_> {
        let (entry, width, height) = {
            let state = self.state_lock();
            (state.filter.entry(), state.width, state.height)
        };

        let filled = self.pair.swap();
        let src = Surface {
            data: self.pair.frame(filled),
            width: NATIVE_WIDTH,
            height: NATIVE_HEIGHT,
            stride: NATIVE_WIDTH,
        };
        let mut dst = SurfaceMut {
            data: self.pair.output_mut(),
            width: width as usize,
            height: height as usize,
            stride: width as usize,
        };
        (entry.run)(&src, &mut dst);

        let len = (width * height) as usize;
        OutputFrame {
            pixels: &self.pair.output()[..len],
            width,
            height,
        }
    }

    /// Select a filter and recompute the output geometry
    pub fn set_filter(&self, kind: FilterKind) {
        let (width, height) = kind.output_size();
        let mut state = self.state_lock();
        state.filter = kind;
        state.width = width;
        state.height = height;
        debug!(filter = kind.entry().name, width, height, "filter selected");
    }

    /// Select a filter by raw identifier
    ///
    /// Unrecognized identifiers fall back to the passthrough filter.
    pub fn set_filter_id(&self, id: i32) {
        self.set_filter(FilterKind::from_id(id));
    }

    /// Currently selected filter
    pub fn filter(&self) -> FilterKind {
        self.state_lock().filter
    }

    /// Set the presentation rotation in degrees
    ///
    /// Recognized values are 0, 90, 180 and 270; anything else makes the
    /// rotated queries answer (0, 0).
    pub fn set_rotation(&self, degrees: u32) {
        self.state_lock().layout.rotation = degrees;
    }

    /// Set the seam gap between the stacked screens, in native-scale pixels
    pub fn set_screen_gap(&self, gap: u32) {
        self.state_lock().layout.screen_gap = gap;
    }

    /// Set the screen arrangement
    pub fn set_layout(&self, layout: ScreenLayout) {
        self.state_lock().layout.layout = layout;
    }

    /// Apply a loaded configuration in one pass
    pub fn apply_config(&self, config: &VideoConfig) {
        self.set_filter(config.filter);
        let mut state = self.state_lock();
        state.layout.rotation = config.rotation;
        state.layout.screen_gap = config.screen_gap;
        state.layout.layout = config.layout;
    }

    /// Restore the passthrough filter and native geometry
    pub fn reset(&self) {
        self.set_filter(FilterKind::None);
    }

    /// Current output geometry (width, height)
    pub fn output_size(&self) -> (u32, u32) {
        let state = self.state_lock();
        (state.width, state.height)
    }

    /// Output geometry after rotation
    pub fn rotated_size(&self) -> (u32, u32) {
        let state = self.state_lock();
        state.layout.rotated_size((state.width, state.height))
    }

    /// Output geometry after rotation, including the scaled screen gap
    pub fn rotated_size_with_gap(&self) -> (u32, u32) {
        let state = self.state_lock();
        state.layout.rotated_size_with_gap((state.width, state.height))
    }

    /// Map an output-scaled x coordinate back to the native 0-255 range
    ///
    /// Truncating integer math, matching the touch-mapping convention of
    /// the presentation layer.
    pub fn output_to_native_x(&self, x: u32) -> u32 {
        x * 256 / self.state_lock().width
    }
}

impl Default for VideoPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::buffers::FRAME_PIXELS;
    use crate::video::color::{pack_rgb555, rgb555_to_rgba8888};

    #[test]
    fn test_new_pipeline_is_native_passthrough() {
        let pipeline = VideoPipeline::new();
        assert_eq!(pipeline.filter(), FilterKind::None);
        assert_eq!(pipeline.output_size(), (256, 384));
    }

    #[test]
    fn test_set_filter_updates_geometry() {
        let pipeline = VideoPipeline::new();
        for entry in crate::filters::FILTERS.iter() {
            pipeline.set_filter(entry.kind);
            assert_eq!(pipeline.output_size(), entry.kind.output_size());
        }
    }

    #[test]
    fn test_unknown_filter_id_falls_back_to_passthrough() {
        let pipeline = VideoPipeline::new();
        pipeline.set_filter_id(3);
        assert_eq!(pipeline.output_size(), (512, 768));
        pipeline.set_filter_id(-1);
        assert_eq!(pipeline.filter(), FilterKind::None);
        assert_eq!(pipeline.output_size(), (256, 384));
        pipeline.set_filter_id(9999);
        assert_eq!(pipeline.output_size(), (256, 384));
    }

    #[test]
    fn test_swap_and_filter_passthrough_roundtrip() {
        let pipeline = VideoPipeline::new();

        let red = pack_rgb555(31, 0, 0);
        pipeline.ingest_frame(&vec![red; FRAME_PIXELS]);
        let output = pipeline.swap_and_filter();
        assert_eq!(output.width, 256);
        assert_eq!(output.height, 384);
        assert_eq!(output.pixels.len(), FRAME_PIXELS);
        let expected = rgb555_to_rgba8888(red);
        assert!(output.pixels.iter().all(|&p| p == expected));

        // A second frame swaps into the other slot and replaces the view
        let blue = pack_rgb555(0, 0, 31);
        pipeline.ingest_frame(&vec![blue; FRAME_PIXELS]);
        let output = pipeline.swap_and_filter();
        let expected = rgb555_to_rgba8888(blue);
        assert!(output.pixels.iter().all(|&p| p == expected));
    }

    #[test]
    fn test_swap_and_filter_scales_output() {
        let pipeline = VideoPipeline::new();
        pipeline.set_filter(FilterKind::Nearest2x);

        let white = pack_rgb555(31, 31, 31);
        pipeline.ingest_frame(&vec![white; FRAME_PIXELS]);
        let output = pipeline.swap_and_filter();
        assert_eq!((output.width, output.height), (512, 768));
        assert_eq!(output.pixels.len(), 512 * 768);
        let expected = rgb555_to_rgba8888(white);
        assert!(output.pixels.iter().all(|&p| p == expected));
    }

    #[test]
    fn test_rotation_law_through_pipeline() {
        let pipeline = VideoPipeline::new();
        pipeline.set_filter(FilterKind::Nearest2x);

        pipeline.set_rotation(0);
        assert_eq!(pipeline.rotated_size(), (512, 768));
        pipeline.set_rotation(90);
        assert_eq!(pipeline.rotated_size(), (768, 512));
        pipeline.set_rotation(180);
        assert_eq!(pipeline.rotated_size(), (512, 768));
        pipeline.set_rotation(270);
        assert_eq!(pipeline.rotated_size(), (768, 512));
        pipeline.set_rotation(33);
        assert_eq!(pipeline.rotated_size(), (0, 0));
    }

    #[test]
    fn test_gap_law_through_pipeline() {
        let pipeline = VideoPipeline::new();
        pipeline.set_filter(FilterKind::Nearest2x);
        pipeline.set_rotation(0);
        pipeline.set_screen_gap(48);

        // Stacked: gap scales with output height (48 * 768 / 384)
        pipeline.set_layout(ScreenLayout::Stacked);
        assert_eq!(pipeline.rotated_size_with_gap(), (512, 768 + 96));

        // Side by side: no seam, no gap term
        pipeline.set_layout(ScreenLayout::SideBySide);
        assert_eq!(pipeline.rotated_size_with_gap(), (512, 768));
    }

    #[test]
    fn test_output_to_native_x() {
        let pipeline = VideoPipeline::new();
        pipeline.set_filter(FilterKind::Nearest2x);

        assert_eq!(pipeline.output_to_native_x(0), 0);
        assert_eq!(pipeline.output_to_native_x(512), 256);
        assert_eq!(pipeline.output_to_native_x(3), 1); // truncates, never rounds

        // Monotonic across the output width
        let mut last = 0;
        for x in 0..=512 {
            let mapped = pipeline.output_to_native_x(x);
            assert!(mapped >= last);
            last = mapped;
        }
    }

    #[test]
    fn test_reset_restores_native_geometry() {
        let pipeline = VideoPipeline::new();
        pipeline.set_filter(FilterKind::Nearest5x);
        assert_eq!(pipeline.output_size(), (1280, 1920));
        pipeline.reset();
        assert_eq!(pipeline.filter(), FilterKind::None);
        assert_eq!(pipeline.output_size(), (256, 384));
    }
}
