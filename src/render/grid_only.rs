use super::grid::radial_grid;
use super::raster::{fill_disk, ring, stroke_line};
use super::style::{GRID_COLOR, GRID_POINT_RADIUS, GRID_RING_RADIUS, GRID_RING_WIDTH, GRID_WIDTH};
use crate::geometry::TargetFrame;
use crate::solver::VanishingPoint;
use image::RgbImage;

/// Black canvas of `frame`'s size with the radial grid and the point marker.
pub fn render_grid_only(frame: TargetFrame, vp: VanishingPoint) -> RgbImage {
    let mut canvas = RgbImage::new(frame.width, frame.height);
    let center = (vp.x as i32, vp.y as i32);
    for ray in radial_grid(frame, vp).rays {
        stroke_line(&mut canvas, center, ray.pixel, GRID_WIDTH, GRID_COLOR);
    }
    fill_disk(&mut canvas, center, GRID_POINT_RADIUS, GRID_COLOR);
    ring(&mut canvas, center, GRID_RING_RADIUS, GRID_RING_WIDTH, GRID_COLOR);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    #[test]
    fn only_grid_color_on_black() {
        let canvas = render_grid_only(TargetFrame::new(200, 150), VanishingPoint::new(80, 60));
        assert_eq!(canvas.dimensions(), (200, 150));
        assert!(canvas.pixels().all(|p| *p == BLACK || *p == GRID_COLOR));
    }

    #[test]
    fn rays_and_gaps() {
        let canvas = render_grid_only(TargetFrame::new(200, 200), VanishingPoint::new(100, 100));
        assert_eq!(*canvas.get_pixel(100, 100), GRID_COLOR);
        // 0 deg ray towards the right edge.
        assert_eq!(*canvas.get_pixel(150, 100), GRID_COLOR);
        assert_eq!(*canvas.get_pixel(199, 100), GRID_COLOR);
        // 80 deg ray, ending at (117, 200).
        assert_eq!(*canvas.get_pixel(113, 178), GRID_COLOR);
        // Straight down, between the 80 and 100 deg rays.
        assert_eq!(*canvas.get_pixel(100, 180), BLACK);
        // About 31 deg, between the 20 and 40 deg rays.
        assert_eq!(*canvas.get_pixel(150, 130), BLACK);
        // Between the 0 and 20 deg rays, outside the ring.
        assert_eq!(*canvas.get_pixel(130, 105), BLACK);
        // Ring at 10 deg.
        assert_eq!(*canvas.get_pixel(112, 102), GRID_COLOR);
    }
}
