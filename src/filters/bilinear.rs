// Bilinear scaler - 2x neighbor-averaging interpolation
//
// Each source pixel expands to a 2x2 cell: the top-left sample copies
// the pixel, the right and bottom samples average toward the next
// source pixel, the diagonal averages all four neighbors. Edges clamp.

use super::{mix2, mix4};
use crate::video::{Surface, SurfaceMut};

/// 2x bilinear interpolation
pub fn bilinear_2x(src: &Surface<'_>, dst: &mut SurfaceMut<'_>) {
    for sy in 0..src.height {
        let sy1 = (sy + 1).min(src.height - 1);
        for sx in 0..src.width {
            let sx1 = (sx + 1).min(src.width - 1);

            let p00 = src.pixel(sx, sy);
            let p10 = src.pixel(sx1, sy);
            let p01 = src.pixel(sx, sy1);
            let p11 = src.pixel(sx1, sy1);

            let x = sx * 2;
            let y = sy * 2;
            dst.set_pixel(x, y, p00);
            dst.set_pixel(x + 1, y, mix2(p00, p10));
            dst.set_pixel(x, y + 1, mix2(p00, p01));
            dst.set_pixel(x + 1, y + 1, mix4(p00, p10, p01, p11));
        }
    }
}
