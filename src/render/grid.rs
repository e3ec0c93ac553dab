//! Radial guide rays from a vanishing point, clipped to the frame.
//!
//! Each ray `vp + t (cos θ, sin θ)` is tested against the four boundary
//! lines `y = 0`, `y = h`, `x = 0`, `x = w`. A crossing counts when `t > 0`
//! and the crossing lies on the finite edge. The ray ends at the candidate
//! nearest to the origin. Axis-aligned directions skip the edge pair they are
//! parallel to; a ray with no candidate is dropped.

use super::style::GRID_STEP_DEG;
use crate::geometry::TargetFrame;
use crate::solver::VanishingPoint;
use serde::Serialize;

/// One clipped guide ray.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ray {
    pub angle_deg: u32,
    /// Exact crossing point on the boundary.
    pub end: [f64; 2],
    /// Crossing truncated to pixel coordinates; this is what gets drawn.
    pub pixel: (i32, i32),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadialGrid {
    pub origin: VanishingPoint,
    pub rays: Vec<Ray>,
}

/// Angles of the guide rays: 0°, 20°, ..., 340°.
pub fn grid_angles() -> impl Iterator<Item = u32> {
    (0..360).step_by(GRID_STEP_DEG as usize)
}

pub fn radial_grid(frame: TargetFrame, vp: VanishingPoint) -> RadialGrid {
    let rays = grid_angles()
        .filter_map(|deg| ray_boundary_hit(frame, vp, deg))
        .collect();
    RadialGrid { origin: vp, rays }
}

/// Nearest forward boundary crossing of the ray at `angle_deg` from `vp`.
pub fn ray_boundary_hit(frame: TargetFrame, vp: VanishingPoint, angle_deg: u32) -> Option<Ray> {
    let theta = f64::from(angle_deg).to_radians();
    let (dx, dy) = (theta.cos(), theta.sin());
    let [ox, oy] = vp.as_f64();
    let w = f64::from(frame.width);
    let h = f64::from(frame.height);
    let (wi, hi) = (frame.width as i32, frame.height as i32);

    let mut candidates: Vec<([f64; 2], (i32, i32))> = Vec::with_capacity(4);
    if dy != 0.0 {
        for (edge_y, edge_yi) in [(0.0, 0), (h, hi)] {
            let t = (edge_y - oy) / dy;
            if t > 0.0 {
                let x = ox + t * dx;
                if (0.0..=w).contains(&x) {
                    candidates.push(([x, edge_y], (x as i32, edge_yi)));
                }
            }
        }
    }
    if dx != 0.0 {
        for (edge_x, edge_xi) in [(0.0, 0), (w, wi)] {
            let t = (edge_x - ox) / dx;
            if t > 0.0 {
                let y = oy + t * dy;
                if (0.0..=h).contains(&y) {
                    candidates.push(([edge_x, y], (edge_xi, y as i32)));
                }
            }
        }
    }

    let dist = |p: (i32, i32)| {
        let ex = f64::from(p.0) - ox;
        let ey = f64::from(p.1) - oy;
        (ex * ex + ey * ey).sqrt()
    };
    candidates
        .into_iter()
        .min_by(|a, b| dist(a.1).total_cmp(&dist(b.1)))
        .map(|(end, pixel)| Ray {
            angle_deg,
            end,
            pixel,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_boundary(frame: TargetFrame, p: [f64; 2]) -> bool {
        let (w, h) = (f64::from(frame.width), f64::from(frame.height));
        let eps = 1e-6;
        let inside = p[0] >= -eps && p[0] <= w + eps && p[1] >= -eps && p[1] <= h + eps;
        let edge = p[0].abs() < eps
            || (p[0] - w).abs() < eps
            || p[1].abs() < eps
            || (p[1] - h).abs() < eps;
        inside && edge
    }

    #[test]
    fn eighteen_angles() {
        let angles: Vec<u32> = grid_angles().collect();
        assert_eq!(angles.len(), 18);
        assert_eq!(angles.first(), Some(&0));
        assert_eq!(angles.last(), Some(&340));
    }

    #[test]
    fn centered_point_hits_every_ray_symmetrically() {
        let frame = TargetFrame::new(200, 200);
        let vp = VanishingPoint::new(100, 100);
        let grid = radial_grid(frame, vp);
        assert_eq!(grid.rays.len(), 18);
        for ray in &grid.rays {
            assert!(on_boundary(frame, ray.end), "ray {} ends off-boundary", ray.angle_deg);
        }
        for i in 0..9 {
            let a = grid.rays[i].end;
            let b = grid.rays[i + 9].end;
            assert_eq!(grid.rays[i + 9].angle_deg, grid.rays[i].angle_deg + 180);
            assert!((a[0] + b[0] - 200.0).abs() < 1e-6, "x asymmetry at {}", i);
            assert!((a[1] + b[1] - 200.0).abs() < 1e-6, "y asymmetry at {}", i);
        }
    }

    #[test]
    fn axis_aligned_rays_end_on_facing_edges() {
        let frame = TargetFrame::new(300, 120);
        let vp = VanishingPoint::new(40, 30);
        let right = ray_boundary_hit(frame, vp, 0).expect("0 deg");
        assert_eq!(right.pixel, (300, 30));
        let left = ray_boundary_hit(frame, vp, 180).expect("180 deg");
        assert_eq!(left.pixel, (0, 30));
    }

    #[test]
    fn near_corner_rays_stop_at_first_edge() {
        let frame = TargetFrame::new(240, 160);
        let vp = VanishingPoint::new(6, 9);
        let [ox, oy] = vp.as_f64();
        let grid = radial_grid(frame, vp);
        for ray in &grid.rays {
            let theta = f64::from(ray.angle_deg).to_radians();
            let (dx, dy) = (theta.cos(), theta.sin());
            // Parametric distance to every edge the ray moves toward.
            let mut forward = Vec::new();
            if dy.abs() > 1e-12 {
                forward.extend([(0.0 - oy) / dy, (160.0 - oy) / dy]);
            }
            if dx.abs() > 1e-12 {
                forward.extend([(0.0 - ox) / dx, (240.0 - ox) / dx]);
            }
            let first = forward
                .into_iter()
                .filter(|t| *t > 0.0)
                .fold(f64::INFINITY, f64::min);
            let ex = ray.end[0] - ox;
            let ey = ray.end[1] - oy;
            let len = (ex * ex + ey * ey).sqrt();
            assert!(
                len <= first + 1e-6,
                "ray {} travels {len} past first edge at {first}",
                ray.angle_deg
            );
            assert!(on_boundary(frame, ray.end));
        }
    }

    #[test]
    fn origin_corner_grid_is_partial() {
        let frame = TargetFrame::new(100, 100);
        let grid = radial_grid(frame, VanishingPoint::new(0, 0));
        assert!(grid.rays.len() < 18);
        assert!(!grid.rays.is_empty());
        for ray in &grid.rays {
            assert!(ray.angle_deg <= 90, "ray {} should have no forward hit", ray.angle_deg);
        }
    }
}
