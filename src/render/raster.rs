//! Clipped raster primitives on `RgbImage`.
//!
//! - `stroke_line`: thick segment stamped along a Bresenham walk.
//! - `fill_disk`: solid disk (imageproc).
//! - `ring`: annulus of a given stroke width centred on a radius.
//! - `draw_label`: 8x8 bitmap text, integer-scaled.
//!
//! Everything clips to the canvas; geometry far outside is cheap to reject.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, BresenhamLineIter};

const GLYPH_SIZE: i32 = 8;

/// Liang-Barsky clip of `p0 -> p1` against the box `[min, max]`.
pub fn clip_segment(
    p0: [f64; 2],
    p1: [f64; 2],
    min: [f64; 2],
    max: [f64; 2],
) -> Option<([f64; 2], [f64; 2])> {
    let d = [p1[0] - p0[0], p1[1] - p0[1]];
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    let edges = [
        (-d[0], p0[0] - min[0]),
        (d[0], max[0] - p0[0]),
        (-d[1], p0[1] - min[1]),
        (d[1], max[1] - p0[1]),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((
        [p0[0] + t0 * d[0], p0[1] + t0 * d[1]],
        [p0[0] + t1 * d[0], p0[1] + t1 * d[1]],
    ))
}

#[inline]
fn put_clipped(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && x < i64::from(img.width()) && y < i64::from(img.height()) {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Draws `p0 -> p1` with a stroke `width` pixels across.
///
/// Odd widths stamp a disk of radius `width / 2` on each step of the walk.
/// Even widths stamp a `width`×`width` square covering `[-(w/2 - 1), w/2]`.
pub fn stroke_line(
    img: &mut RgbImage,
    p0: (i32, i32),
    p1: (i32, i32),
    width: u32,
    color: Rgb<u8>,
) {
    let radius = (width / 2) as i32;
    let even = width > 0 && width % 2 == 0;
    let margin = f64::from(radius) + 1.0;
    let min = [-margin, -margin];
    let max = [
        f64::from(img.width()) + margin,
        f64::from(img.height()) + margin,
    ];
    let from = [f64::from(p0.0), f64::from(p0.1)];
    let to = [f64::from(p1.0), f64::from(p1.1)];
    let Some((a, b)) = clip_segment(from, to, min, max) else {
        return;
    };
    let start = (a[0].round() as f32, a[1].round() as f32);
    let end = (b[0].round() as f32, b[1].round() as f32);
    for (x, y) in BresenhamLineIter::new(start, end) {
        if even {
            let (x, y) = (i64::from(x), i64::from(y));
            for dy in (1 - radius)..=radius {
                for dx in (1 - radius)..=radius {
                    put_clipped(img, x + i64::from(dx), y + i64::from(dy), color);
                }
            }
        } else if radius == 0 {
            put_clipped(img, i64::from(x), i64::from(y), color);
        } else {
            draw_filled_circle_mut(img, (x, y), radius, color);
        }
    }
}

pub fn fill_disk(img: &mut RgbImage, center: (i32, i32), radius: i32, color: Rgb<u8>) {
    draw_filled_circle_mut(img, center, radius, color);
}

/// Paints pixels whose distance from `center` is within `width / 2` of `radius`.
pub fn ring(img: &mut RgbImage, center: (i32, i32), radius: i32, width: u32, color: Rgb<u8>) {
    let half = f64::from(width) * 0.5;
    let inner = (f64::from(radius) - half).max(0.0);
    let outer = f64::from(radius) + half;
    let reach = outer.ceil() as i64;
    let (cx, cy) = (i64::from(center.0), i64::from(center.1));
    let x_lo = (cx - reach).max(0);
    let y_lo = (cy - reach).max(0);
    let x_hi = (cx + reach).min(i64::from(img.width()) - 1);
    let y_hi = (cy + reach).min(i64::from(img.height()) - 1);
    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            let dx = (x - cx) as f64;
            let dy = (y - cy) as f64;
            let d = (dx * dx + dy * dy).sqrt();
            if d >= inner && d <= outer {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Draws `text` with its baseline-left corner at `origin`.
///
/// Characters missing from the basic Latin table render as blanks.
pub fn draw_label(img: &mut RgbImage, origin: (i32, i32), text: &str, scale: u32, color: Rgb<u8>) {
    let scale = scale.max(1) as i64;
    let advance = i64::from(GLYPH_SIZE) * scale;
    let top = i64::from(origin.1) - advance;
    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let left = i64::from(origin.0) + i as i64 * advance;
        if left >= i64::from(img.width()) {
            break;
        }
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE as u32 {
                if (*bits >> col) & 1 == 0 {
                    continue;
                }
                let x0 = left + i64::from(col) * scale;
                let y0 = top + row as i64 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        put_clipped(img, x0 + dx, y0 + dy, color);
                    }
                }
            }
        }
    }
}
