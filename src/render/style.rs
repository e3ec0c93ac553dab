//! Fixed drawing constants for both renders. Colors are RGB.

use image::Rgb;

pub const LINE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
pub const LINE_WIDTH: u32 = 3;

pub const POINT_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
pub const POINT_RADIUS: i32 = 10;
pub const RING_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
pub const RING_RADIUS: i32 = 15;
pub const RING_WIDTH: u32 = 2;

pub const LABEL_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
/// Offset of the label's baseline-left corner from the point.
pub const LABEL_OFFSET: (i32, i32) = (20, -20);
/// Integer upscale applied to the 8x8 glyphs.
pub const LABEL_SCALE: u32 = 2;

pub const GRID_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
pub const GRID_WIDTH: u32 = 2;
pub const GRID_STEP_DEG: u32 = 20;
pub const GRID_POINT_RADIUS: i32 = 8;
pub const GRID_RING_RADIUS: i32 = 12;
pub const GRID_RING_WIDTH: u32 = 2;
