// EPX scaler - 2x edge-preserving expansion
//
// Each source pixel becomes a 2x2 block. A corner adopts the color of
// its two adjacent neighbors when they agree and the opposite pair does
// not, which keeps diagonal edges sharp instead of staircased.

use crate::video::{Surface, SurfaceMut};

/// 2x edge-preserving expansion (classic EPX corner rule)
pub fn epx_2x(src: &Surface<'_>, dst: &mut SurfaceMut<'_>) {
    for y in 0..src.height {
        let up = y.saturating_sub(1);
        let down = (y + 1).min(src.height - 1);
        for x in 0..src.width {
            let left = x.saturating_sub(1);
            let right = (x + 1).min(src.width - 1);

            let p = src.pixel(x, y);
            let a = src.pixel(x, up);
            let b = src.pixel(right, y);
            let c = src.pixel(left, y);
            let d = src.pixel(x, down);

            let mut p1 = p;
            let mut p2 = p;
            let mut p3 = p;
            let mut p4 = p;
            if c == a && c != d && a != b {
                p1 = a;
            }
            if a == b && a != c && b != d {
                p2 = b;
            }
            if d == c && d != b && c != a {
                p3 = c;
            }
            if b == d && b != a && d != c {
                p4 = d;
            }

            let dx = x * 2;
            let dy = y * 2;
            dst.set_pixel(dx, dy, p1);
            dst.set_pixel(dx + 1, dy, p2);
            dst.set_pixel(dx, dy + 1, p3);
            dst.set_pixel(dx + 1, dy + 1, p4);
        }
    }
}
