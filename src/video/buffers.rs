// Frame buffer pair - double-buffered handoff between producer and consumer
//
// Two fixed-capacity input buffers hold the most recent native-resolution
// frames; a third holds the filtered output. The producer converts packed
// frames into the buffer at the active index, the consumer flips the index
// and reads the buffer that was just filled. The lock guards only the
// index read and flip, never the bulk pixel work.

use std::cell::UnsafeCell;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::color::rgb555_to_rgba8888;

/// Width of one emulated screen in pixels
pub const SCREEN_WIDTH: usize = 256;

/// Height of one emulated screen in pixels
pub const SCREEN_HEIGHT: usize = 192;

/// Native frame width
pub const NATIVE_WIDTH: usize = SCREEN_WIDTH;

/// Native frame height (two stacked screens)
pub const NATIVE_HEIGHT: usize = SCREEN_HEIGHT * 2;

/// Pixels per native frame
pub const FRAME_PIXELS: usize = NATIVE_WIDTH * NATIVE_HEIGHT;

/// Largest output-size multiplier any registered filter declares
pub const MAX_SCALE: usize = 5;

/// Capacity of every pipeline buffer, in pixels
///
/// Sized for the largest filter output with a further 2x headroom factor.
pub const BUFFER_PIXELS: usize = (NATIVE_WIDTH * MAX_SCALE) * (NATIVE_HEIGHT * MAX_SCALE) * 2;

/// Double-buffered frame storage shared by one producer and one consumer
///
/// All three buffers are allocated once at construction and never
/// resized; nothing on the frame path allocates.
pub struct FramePair {
    /// Index of the slot the producer currently writes
    active: Mutex<usize>,
    /// Input pair, converted to RGBA8888
    frames: [UnsafeCell<Box<[u32]>>; 2],
    /// Filter destination
    output: UnsafeCell<Box<[u32]>>,
}

// SAFETY: exactly one producer thread writes pixels (through
// `write_frame`) and exactly one consumer thread reads them (through
// `frame`/`output_mut`), with `active` serialized by the mutex. Pixel
// words are aligned u32s. A swap that lands mid-write hands the consumer
// at most one torn frame, which the presentation layer tolerates.
unsafe impl Sync for FramePair {}

fn zeroed_buffer() -> UnsafeCell<Box<[u32]>> {
    UnsafeCell::new(vec![0u32; BUFFER_PIXELS].into_boxed_slice())
}

impl FramePair {
    /// Allocate the pair and the output buffer, all zero-initialized
    pub fn new() -> Self {
        FramePair {
            active: Mutex::new(0),
            frames: [zeroed_buffer(), zeroed_buffer()],
            output: zeroed_buffer(),
        }
    }

    fn active_lock(&self) -> MutexGuard<'_, usize> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Convert a packed frame into the active slot (producer side)
    ///
    /// Each RGB555 pixel is normalized to RGBA8888 and written
    /// sequentially. The lock is held only long enough to read the
    /// active index, not across the conversion loop.
    ///
    /// # Arguments
    /// * `raw` - Exactly `FRAME_PIXELS` packed pixels
    pub fn write_frame(&self, raw: &[u16]) {
        debug_assert_eq!(
            raw.len(),
            FRAME_PIXELS,
            "producer frame must be 256x384 packed pixels"
        );

        let index = *self.active_lock();
        // SAFETY: the producer is the only writer of the active slot; the
        // consumer reads a slot only after flipping it out of `active`.
        let dest = unsafe { &mut **self.frames[index].get() };
        for (dst, &px) in dest.iter_mut().zip(raw) {
            *dst = rgb555_to_rgba8888(px);
        }
    }

    /// Flip the active index (consumer side)
    ///
    /// Returns the pre-flip index: the slot the producer just filled,
    /// now eligible as the filter source. Alternates 0, 1, 0, 1, ...
    pub fn swap(&self) -> usize {
        let mut active = self.active_lock();
        let filled = *active;
        *active ^= 1;
        filled
    }

    /// Full-capacity view of one input slot
    ///
    /// The consumer must only read the slot returned by the latest
    /// `swap`.
    pub fn frame(&self, index: usize) -> &[u32] {
        // SAFETY: see the Sync impl; after a swap the producer writes the
        // other slot.
        unsafe { &**self.frames[index & 1].get() }
    }

    /// Full-capacity view of the filter output buffer
    pub fn output(&self) -> &[u32] {
        // SAFETY: only the consumer thread touches the output buffer.
        unsafe { &**self.output.get() }
    }

    /// Mutable view of the filter output buffer (consumer only)
    #[allow(clippy::mut_from_ref)]
    pub fn output_mut(&self) -> &mut [u32] {
        // SAFETY: only the consumer thread touches the output buffer, and
        // it never holds a previous view across a new swap.
        unsafe { &mut **self.output.get() }
    }
}

impl Default for FramePair {
    fn default() -> Self {
        Self::new()
    }
}
