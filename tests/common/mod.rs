// Common test utilities for pipeline integration tests
//
// This module provides shared frame builders used across the
// integration test suites.

#![allow(dead_code)]

use nds_video::video::{pack_rgb555, FRAME_PIXELS};

/// Build a full native frame filled with one packed color
pub fn solid_frame(color: u16) -> Vec<u16> {
    vec![color; FRAME_PIXELS]
}

/// Small palette of well-separated packed colors for handoff tests
pub fn test_palette() -> [u16; 4] {
    [
        pack_rgb555(31, 0, 0),
        pack_rgb555(0, 31, 0),
        pack_rgb555(0, 0, 31),
        pack_rgb555(31, 31, 31),
    ]
}

/// Build a frame where the low 15 bits of each pixel encode its index
pub fn indexed_frame() -> Vec<u16> {
    (0..FRAME_PIXELS).map(|i| (i & 0x7FFF) as u16).collect()
}
