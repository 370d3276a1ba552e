// Nearest-neighbor scalers - block replication and the 1.5x pair
//
// The integer factors replicate every source pixel into a square block.
// The 1.5x variants map three output samples onto every two source
// pixels; the plain one truncates, the plus one averages the straddling
// middle sample.

use super::{mix2, mix4};
use crate::video::{Surface, SurfaceMut};

/// Replicate every source pixel into a `factor` x `factor` block
fn replicate(src: &Surface<'_>, dst: &mut SurfaceMut<'_>, factor: usize) {
    for y in 0..dst.height {
        let src_row = src.row(y / factor);
        let dst_row = dst.row_mut(y);
        for (x, out) in dst_row.iter_mut().enumerate() {
            *out = src_row[x / factor];
        }
    }
}

/// 2x block replication
pub fn nearest_2x(src: &Surface<'_>, dst: &mut SurfaceMut<'_>) {
    replicate(src, dst, 2);
}

/// 3x block replication
pub fn nearest_3x(src: &Surface<'_>, dst: &mut SurfaceMut<'_>) {
    replicate(src, dst, 3);
}

/// 4x block replication
pub fn nearest_4x(src: &Surface<'_>, dst: &mut SurfaceMut<'_>) {
    replicate(src, dst, 4);
}

/// 5x block replication
pub fn nearest_5x(src: &Surface<'_>, dst: &mut SurfaceMut<'_>) {
    replicate(src, dst, 5);
}

/// Truncating nearest at 1.5x: output (x, y) samples (2x/3, 2y/3)
pub fn nearest_1point5x(src: &Surface<'_>, dst: &mut SurfaceMut<'_>) {
    for y in 0..dst.height {
        let src_row = src.row(y * 2 / 3);
        let dst_row = dst.row_mut(y);
        for (x, out) in dst_row.iter_mut().enumerate() {
            *out = src_row[x * 2 / 3];
        }
    }
}

/// 1.5x nearest with averaged seams
///
/// The middle sample of every three-wide (and three-tall) output group
/// straddles two source pixels and takes their average instead of
/// duplicating one of them.
pub fn nearest_plus_1point5x(src: &Surface<'_>, dst: &mut SurfaceMut<'_>) {
    for y in 0..dst.height {
        let sy = y * 2 / 3;
        let sy1 = (sy + 1).min(src.height - 1);
        let blend_y = y % 3 == 1;
        for x in 0..dst.width {
            let sx = x * 2 / 3;
            let sx1 = (sx + 1).min(src.width - 1);
            let blend_x = x % 3 == 1;

            let px = match (blend_x, blend_y) {
                (true, true) => mix4(
                    src.pixel(sx, sy),
                    src.pixel(sx1, sy),
                    src.pixel(sx, sy1),
                    src.pixel(sx1, sy1),
                ),
                (true, false) => mix2(src.pixel(sx, sy), src.pixel(sx1, sy)),
                (false, true) => mix2(src.pixel(sx, sy), src.pixel(sx, sy1)),
                (false, false) => src.pixel(sx, sy),
            };
            dst.set_pixel(x, y, px);
        }
    }
}
