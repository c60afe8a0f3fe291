//! Ray marching against the rendered map.
use std::cmp::Ordering;

use crate::core::map::{RenderedMap, Tile};
use crate::core::player::Pose;

/// Distance covered by one march step, in map units.
pub const RAY_STEP: f32 = 0.1;
/// A corner closer than this to the ray (radians) marks a wall seam.
pub const BOUNDARY_ANGLE: f32 = 0.01;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Impact {
    Wall,
    Exit,
    OutOfBounds,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub impact: Impact,
    pub boundary: bool,
}

/// View angle of screen column `x` out of `screen_width`.
#[inline]
pub fn column_angle(pose: &Pose, fov: f32, x: u32, screen_width: u32) -> f32 {
    pose.a - fov / 2.0 + (x as f32 / screen_width as f32) * fov
}

pub fn cast_ray(map: &RenderedMap, pose: &Pose, a: f32, max_depth: f32) -> RayHit {
    let (view_x, view_y) = (a.sin(), a.cos());
    let steps = (max_depth / RAY_STEP).ceil() as u32;

    for i in 1..=steps {
        // Multiply instead of accumulating so long rays do not drift.
        let d = i as f32 * RAY_STEP;
        if d > max_depth {
            break;
        }
        let tx = (pose.x + view_x * d).floor() as isize;
        let ty = (pose.y + view_y * d).floor() as isize;

        match map.tile(tx, ty) {
            None => {
                return RayHit { distance: max_depth, impact: Impact::OutOfBounds, boundary: false };
            }
            Some(tile @ (Tile::Wall | Tile::Exit)) => {
                let impact = if tile == Tile::Exit { Impact::Exit } else { Impact::Wall };
                let boundary = is_boundary(pose, view_x, view_y, tx, ty);
                return RayHit { distance: d, impact, boundary };
            }
            Some(Tile::Floor) => {}
        }
    }

    RayHit { distance: max_depth, impact: Impact::OutOfBounds, boundary: false }
}

/// Looks at the corners of the hit tile: if the ray passes within
/// `BOUNDARY_ANGLE` of one of the two nearest, it runs along a wall edge.
fn is_boundary(pose: &Pose, view_x: f32, view_y: f32, tx: isize, ty: isize) -> bool {
    let mut corners: Vec<(f32, f32)> = Vec::with_capacity(4);
    for cx in 0..2 {
        for cy in 0..2 {
            let vx = (tx + cx) as f32 - pose.x;
            let vy = (ty + cy) as f32 - pose.y;
            let d = (vx * vx + vy * vy).sqrt();
            if d == 0.0 {
                continue;
            }
            let dot = (view_x * vx / d) + (view_y * vy / d);
            corners.push((d, dot));
        }
    }
    if corners.len() < 2 {
        return false;
    }
    corners.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    corners[..2].iter().any(|&(_, dot)| dot.clamp(-1.0, 1.0).acos() < BOUNDARY_ANGLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn scenario() -> RenderedMap {
        RenderedMap::parse("#####\n#...#\n#.#.#\n#..%#\n#####").unwrap()
    }

    #[test]
    fn hits_wall_within_one_step() {
        let map = scenario();
        let pose = Pose::new(2.0, 1.5, FRAC_PI_2);
        let hit = cast_ray(&map, &pose, pose.a, 24.0);
        assert_eq!(hit.impact, Impact::Wall);
        assert!((hit.distance - 2.0).abs() <= RAY_STEP + 1e-4, "{}", hit.distance);
    }

    #[test]
    fn hits_wall_from_cell_centre() {
        let map = scenario();
        // South from (1.5, 1.5): floor at rows 2 and 3, wall at row 4.
        let pose = Pose::new(1.5, 1.5, 0.0);
        let hit = cast_ray(&map, &pose, 0.0, 24.0);
        assert_eq!(hit.impact, Impact::Wall);
        assert!((hit.distance - 2.5).abs() <= RAY_STEP + 1e-4, "{}", hit.distance);
    }

    #[test]
    fn hits_exit() {
        let map = scenario();
        let pose = Pose::new(1.5, 3.5, FRAC_PI_2);
        let hit = cast_ray(&map, &pose, pose.a, 24.0);
        assert_eq!(hit.impact, Impact::Exit);
        assert!((hit.distance - 1.5).abs() <= RAY_STEP + 1e-4);
    }

    #[test]
    fn open_map_edge_is_out_of_bounds() {
        // No border on the east side: the ray leaves the map.
        let map = RenderedMap::parse("#####\n%....\n#####").unwrap();
        let pose = Pose::new(1.5, 1.5, FRAC_PI_2);
        let hit = cast_ray(&map, &pose, pose.a, 24.0);
        assert_eq!(hit.impact, Impact::OutOfBounds);
        assert_eq!(hit.distance, 24.0);
        assert!(!hit.boundary);
    }

    #[test]
    fn nothing_within_depth_is_out_of_bounds() {
        let map = RenderedMap::parse("##########\n%........#\n##########").unwrap();
        let pose = Pose::new(1.5, 1.5, FRAC_PI_2);
        let hit = cast_ray(&map, &pose, pose.a, 3.0);
        assert_eq!(hit.impact, Impact::OutOfBounds);
        assert_eq!(hit.distance, 3.0);
    }

    #[test]
    fn ray_through_corner_is_a_boundary() {
        let map = scenario();
        // From (1.5, 1.5) the wall block (2,2) has its nearest corner at (2,2):
        // a 45 degree ray goes straight at it.
        let pose = Pose::new(1.5, 1.5, PI / 4.0);
        let hit = cast_ray(&map, &pose, pose.a, 24.0);
        assert_eq!(hit.impact, Impact::Wall);
        assert!(hit.boundary);
    }

    #[test]
    fn ray_into_face_is_not_a_boundary() {
        let map = scenario();
        let pose = Pose::new(1.5, 1.5, 0.0);
        let hit = cast_ray(&map, &pose, 0.0, 24.0);
        assert!(!hit.boundary);
    }

    #[test]
    fn corner_under_player_is_skipped() {
        // Player exactly on a corner of the hit tile: that sample is dropped
        // and the remaining three still decide.
        let pose = Pose::new(2.0, 2.0, 0.0);
        let (vx, vy) = (pose.a.sin(), pose.a.cos());
        assert!(is_boundary(&pose, vx, vy, 2, 2));
        let pose = Pose::new(2.0, 2.0, 0.3);
        let (vx, vy) = (pose.a.sin(), pose.a.cos());
        assert!(!is_boundary(&pose, vx, vy, 2, 2));
    }

    #[test]
    fn column_angles_span_the_fov() {
        let pose = Pose::new(0.0, 0.0, 1.0);
        assert!((column_angle(&pose, 0.5, 0, 100) - 0.75).abs() < 1e-6);
        assert!((column_angle(&pose, 0.5, 50, 100) - 1.0).abs() < 1e-6);
    }
}
