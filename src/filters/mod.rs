// Filter catalog - the closed set of upscaling filters and their dispatch
//
// Every selectable filter is one row of a fixed lookup table: identifier,
// display name, output-size multiplier and the scaler function that
// realizes it. Selection resolves through the table (never a branching
// switch), and anything outside the closed set falls back to the
// passthrough entry. Adding a filter is a table edit.

pub mod bilinear;
pub mod epx;
pub mod nearest;
pub mod scanline;

use serde::{Deserialize, Serialize};

use crate::video::{Surface, SurfaceMut, NATIVE_HEIGHT, NATIVE_WIDTH};

/// Signature shared by every registered scaler
///
/// A scaler reads only from the source view and writes exactly
/// `dst.width * dst.height` pixels, never partially.
pub type ScalerFn = fn(&Surface<'_>, &mut SurfaceMut<'_>);

/// Output-size multiplier, kept rational so the 1.5x family stays in
/// integer math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub num: u32,
    pub den: u32,
}

impl Scale {
    pub const X1: Scale = Scale { num: 1, den: 1 };
    pub const X1_5: Scale = Scale { num: 3, den: 2 };
    pub const X2: Scale = Scale { num: 2, den: 1 };
    pub const X3: Scale = Scale { num: 3, den: 1 };
    pub const X4: Scale = Scale { num: 4, den: 1 };
    pub const X5: Scale = Scale { num: 5, den: 1 };

    /// Apply the multiplier to a native dimension
    #[inline]
    pub const fn apply(self, dim: u32) -> u32 {
        dim * self.num / self.den
    }
}

/// Closed set of selectable filters
///
/// Discriminants double as the configuration identifier; see
/// [`FilterKind::from_id`] for the fallback rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(usize)]
pub enum FilterKind {
    /// Passthrough at native size
    None = 0,
    /// Truncating nearest-neighbor, 1.5x
    Nearest1Point5 = 1,
    /// Nearest-neighbor with averaged seams, 1.5x
    NearestPlus1Point5 = 2,
    /// Pixel doubling
    Nearest2x = 3,
    /// Pixel doubling with dimmed alternate rows
    Scanline = 4,
    /// Neighbor-averaging interpolation, 2x
    Bilinear = 5,
    /// Edge-preserving expansion, 2x
    Epx = 6,
    /// Block replication, 3x
    Nearest3x = 7,
    /// Block replication, 4x
    Nearest4x = 8,
    /// Block replication, 5x
    Nearest5x = 9,
}

/// Number of registered filters
pub const NUM_FILTERS: usize = 10;

/// One catalog row
pub struct FilterEntry {
    pub kind: FilterKind,
    pub name: &'static str,
    pub scale: Scale,
    pub run: ScalerFn,
}

/// The filter catalog, indexed by `FilterKind` discriminant
pub static FILTERS: [FilterEntry; NUM_FILTERS] = [
    FilterEntry {
        kind: FilterKind::None,
        name: "none",
        scale: Scale::X1,
        run: copy_frame,
    },
    FilterEntry {
        kind: FilterKind::Nearest1Point5,
        name: "nearest 1.5x",
        scale: Scale::X1_5,
        run: nearest::nearest_1point5x,
    },
    FilterEntry {
        kind: FilterKind::NearestPlus1Point5,
        name: "nearest+ 1.5x",
        scale: Scale::X1_5,
        run: nearest::nearest_plus_1point5x,
    },
    FilterEntry {
        kind: FilterKind::Nearest2x,
        name: "nearest 2x",
        scale: Scale::X2,
        run: nearest::nearest_2x,
    },
    FilterEntry {
        kind: FilterKind::Scanline,
        name: "scanline",
        scale: Scale::X2,
        run: scanline::scanline_2x,
    },
    FilterEntry {
        kind: FilterKind::Bilinear,
        name: "bilinear",
        scale: Scale::X2,
        run: bilinear::bilinear_2x,
    },
    FilterEntry {
        kind: FilterKind::Epx,
        name: "epx",
        scale: Scale::X2,
        run: epx::epx_2x,
    },
    FilterEntry {
        kind: FilterKind::Nearest3x,
        name: "nearest 3x",
        scale: Scale::X3,
        run: nearest::nearest_3x,
    },
    FilterEntry {
        kind: FilterKind::Nearest4x,
        name: "nearest 4x",
        scale: Scale::X4,
        run: nearest::nearest_4x,
    },
    FilterEntry {
        kind: FilterKind::Nearest5x,
        name: "nearest 5x",
        scale: Scale::X5,
        run: nearest::nearest_5x,
    },
];

impl FilterKind {
    /// Resolve a raw identifier to a filter
    ///
    /// Total: any value outside the closed set resolves to the
    /// passthrough filter rather than failing.
    pub fn from_id(id: i32) -> FilterKind {
        match id {
            1 => FilterKind::Nearest1Point5,
            2 => FilterKind::NearestPlus1Point5,
            3 => FilterKind::Nearest2x,
            4 => FilterKind::Scanline,
            5 => FilterKind::Bilinear,
            6 => FilterKind::Epx,
            7 => FilterKind::Nearest3x,
            8 => FilterKind::Nearest4x,
            9 => FilterKind::Nearest5x,
            _ => FilterKind::None,
        }
    }

    /// Catalog entry for this filter
    #[inline]
    pub fn entry(self) -> &'static FilterEntry {
        &FILTERS[self as usize]
    }

    /// Declared output-size multiplier
    pub fn scale(self) -> Scale {
        self.entry().scale
    }

    /// Output geometry at the native 256x384 baseline
    pub fn output_size(self) -> (u32, u32) {
        let scale = self.scale();
        (
            scale.apply(NATIVE_WIDTH as u32),
            scale.apply(NATIVE_HEIGHT as u32),
        )
    }
}

/// Passthrough entry: one flat copy sized by the destination geometry
///
/// Copies `dst.width * dst.height` words in a single run rather than row
/// by row; the full-capacity source slice keeps the flat copy in bounds
/// even though no scaling occurs in this path.
fn copy_frame(src: &Surface<'_>, dst: &mut SurfaceMut<'_>) {
    let len = dst.width * dst.height;
    dst.data[..len].copy_from_slice(&src.data[..len]);
}

/// Per-channel average of two RGBA pixels
///
/// Masks the low bit of every byte lane before halving so carries never
/// cross lanes.
#[inline]
pub(crate) fn mix2(a: u32, b: u32) -> u32 {
    (a & b) + (((a ^ b) & 0xFEFE_FEFE) >> 1)
}

/// Per-channel average of four RGBA pixels
#[inline]
pub(crate) fn mix4(a: u32, b: u32, c: u32, d: u32) -> u32 {
    mix2(mix2(a, b), mix2(c, d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_discriminants() {
        for (index, entry) in FILTERS.iter().enumerate() {
            assert_eq!(entry.kind as usize, index);
        }
    }

    #[test]
    fn test_multiplier_table() {
        assert_eq!(FilterKind::None.scale(), Scale::X1);
        assert_eq!(FilterKind::Nearest1Point5.scale(), Scale::X1_5);
        assert_eq!(FilterKind::NearestPlus1Point5.scale(), Scale::X1_5);
        assert_eq!(FilterKind::Nearest2x.scale(), Scale::X2);
        assert_eq!(FilterKind::Scanline.scale(), Scale::X2);
        assert_eq!(FilterKind::Bilinear.scale(), Scale::X2);
        assert_eq!(FilterKind::Epx.scale(), Scale::X2);
        assert_eq!(FilterKind::Nearest3x.scale(), Scale::X3);
        assert_eq!(FilterKind::Nearest4x.scale(), Scale::X4);
        assert_eq!(FilterKind::Nearest5x.scale(), Scale::X5);
    }

    #[test]
    fn test_output_sizes() {
        assert_eq!(FilterKind::None.output_size(), (256, 384));
        assert_eq!(FilterKind::Nearest1Point5.output_size(), (384, 576));
        assert_eq!(FilterKind::Nearest2x.output_size(), (512, 768));
        assert_eq!(FilterKind::Nearest3x.output_size(), (768, 1152));
        assert_eq!(FilterKind::Nearest4x.output_size(), (1024, 1536));
        assert_eq!(FilterKind::Nearest5x.output_size(), (1280, 1920));
    }

    #[test]
    fn test_from_id_resolves_registered_entries() {
        for entry in FILTERS.iter() {
            assert_eq!(FilterKind::from_id(entry.kind as i32), entry.kind);
        }
    }

    #[test]
    fn test_from_id_clamps_unknown_identifiers() {
        assert_eq!(FilterKind::from_id(-1), FilterKind::None);
        assert_eq!(FilterKind::from_id(NUM_FILTERS as i32), FilterKind::None);
        assert_eq!(FilterKind::from_id(9999), FilterKind::None);
    }

    #[test]
    fn test_identity_is_flat_copy_of_output_geometry() {
        // 3 wide, 2 tall window inside larger capacity slices; the flat
        // copy takes the first width*height words regardless of rows
        let src: Vec<u32> = (0..16).collect();
        let mut dst = vec![0u32; 16];
        copy_frame(
            &Surface {
                data: &src,
                width: 3,
                height: 2,
                stride: 3,
            },
            &mut SurfaceMut {
                data: &mut dst,
                width: 3,
                height: 2,
                stride: 3,
            },
        );
        assert_eq!(&dst[..6], &[0, 1, 2, 3, 4, 5]);
        assert!(dst[6..].iter().all(|&p| p == 0));
    }

    #[test]
    fn test_mix2_averages_per_channel() {
        assert_eq!(mix2(0xFF00_00FF, 0xFF00_00FD), 0xFF00_00FE);
        assert_eq!(mix2(0xFF10_2030, 0xFF30_4050), 0xFF20_3040);
        // Lane independence: a carry in blue must not spill into alpha
        assert_eq!(mix2(0x00FF_0000, 0x00FF_0000), 0x00FF_0000);
    }

    #[test]
    fn test_mix4_averages_per_channel() {
        assert_eq!(
            mix4(0xFF00_0000, 0xFF00_0000, 0xFF00_0004, 0xFF00_0004),
            0xFF00_0002
        );
    }
}
