// Scanline scaler - pixel doubling with dimmed alternate rows

use crate::video::{Surface, SurfaceMut};

/// Halve every color channel, keeping the alpha byte
#[inline]
fn darken(p: u32) -> u32 {
    (p & 0xFF00_0000) | ((p >> 1) & 0x007F_7F7F)
}

/// 2x scaler that doubles pixels and dims every odd output row,
/// imitating the dark gaps between CRT scanlines
pub fn scanline_2x(src: &Surface<'_>, dst: &mut SurfaceMut<'_>) {
    for y in 0..dst.height {
        let src_row = src.row(y / 2);
        let dim = y % 2 == 1;
        let dst_row = dst.row_mut(y);
        for (x, out) in dst_row.iter_mut().enumerate() {
            let p = src_row[x / 2];
            *out = if dim { darken(p) } else { p };
        }
    }
}
