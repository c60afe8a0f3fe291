//! Player pose, movement with collision, and spawning.
//!
//! Heading 0 looks down +Y; the view direction is `(sin a, cos a)`.
use std::f32::consts::{FRAC_PI_2, PI};

use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::map::{RenderedMap, Tile};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub a: f32, // heading (yaw)
}

impl Pose {
    pub fn new(x: f32, y: f32, a: f32) -> Self {
        Self { x, y, a }
    }

    #[inline]
    pub fn direction(&self) -> (f32, f32) {
        (self.a.sin(), self.a.cos())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Active,
    /// Reached the exit; frozen until the next maze.
    Complete,
}

pub struct Player {
    pub pose: Pose,
    pub state: PlayerState,
    pub speed: f32,
    pub turn_rate: f32,
}

impl Player {
    pub fn new(pose: Pose, speed: f32, turn_rate: f32) -> Self {
        Self { pose, state: PlayerState::Active, speed, turn_rate }
    }

    pub fn is_complete(&self) -> bool {
        self.state == PlayerState::Complete
    }

    pub fn move_forward(&mut self, map: &RenderedMap, dt: f32) {
        self.step(map, self.speed * dt);
    }

    pub fn move_backward(&mut self, map: &RenderedMap, dt: f32) {
        self.step(map, -self.speed * dt);
    }

    fn step(&mut self, map: &RenderedMap, amount: f32) {
        if self.is_complete() {
            return;
        }
        let (dx, dy) = self.pose.direction();
        let nx = self.pose.x + dx * amount;
        let ny = self.pose.y + dy * amount;

        if entered_exit(map, nx, ny) {
            info!("exit reached from ({:.2}, {:.2})", self.pose.x, self.pose.y);
            self.state = PlayerState::Complete;
        } else if !collides(map, nx, ny) {
            self.pose.x = nx;
            self.pose.y = ny;
        }
    }

    /// Positive `dir` turns right, negative left.
    pub fn turn(&mut self, dir: f32, dt: f32) {
        if self.is_complete() {
            return;
        }
        self.pose.a += dir * self.turn_rate * dt;
    }
}

/// True when the tile under `(x, y)` blocks movement. Off-map blocks too.
pub fn collides(map: &RenderedMap, x: f32, y: f32) -> bool {
    matches!(map.tile_at(x, y), Some(Tile::Wall) | None)
}

pub fn entered_exit(map: &RenderedMap, x: f32, y: f32) -> bool {
    map.tile_at(x, y) == Some(Tile::Exit)
}

fn heading_towards(dx: isize, dy: isize) -> f32 {
    match (dx, dy) {
        (0, 1) => 0.0,
        (1, 0) => FRAC_PI_2,
        (0, -1) => PI,
        _ => -FRAC_PI_2,
    }
}

/// Picks a heading that looks away from an adjacent wall into open space.
pub fn spawn_heading(map: &RenderedMap, x: usize, y: usize) -> f32 {
    let (x, y) = (x as isize, y as isize);
    let open = |dx: isize, dy: isize| {
        matches!(map.tile(x + dx, y + dy), Some(Tile::Floor | Tile::Exit))
    };
    // N, S, W, E
    for (dx, dy) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
        if !open(dx, dy) && open(-dx, -dy) {
            return heading_towards(-dx, -dy);
        }
    }
    // Walled on both sides of every axis that has a wall: take any opening.
    [(0, -1), (0, 1), (-1, 0), (1, 0)]
        .into_iter()
        .find(|&(dx, dy)| open(dx, dy))
        .map_or(0.0, |(dx, dy)| heading_towards(dx, dy))
}

/// Random floor tile centre plus a heading that does not stare into a wall.
/// A map without floor (a single-cell maze) spawns on the exit.
pub fn spawn<R: Rng + ?Sized>(map: &RenderedMap, rng: &mut R) -> Pose {
    let floors = map.floor_cells();
    let (x, y) = match floors.choose(rng) {
        Some(&cell) => cell,
        None => map.exit().unwrap_or((0, 0)),
    };
    let a = spawn_heading(map, x, y);
    debug!("spawn at ({x}, {y}) heading {a:.2}");
    Pose::new(x as f32 + 0.5, y as f32 + 0.5, a)
}
