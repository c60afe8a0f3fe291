//! Core game types and logic (maze, map, player, simulation state).
//!
//! Re-exports:
//! - `grid`: Cell grid with wall bitmasks and adjacency
//! - `maze`: Depth-first maze generation
//! - `map`: Rendered `#`/`.`/`%` map shared by renderer and collision
//! - `player`: Pose, movement, collision and spawning
//! - `game`: Simulation state and per-tick update

pub mod grid;
pub mod maze;
pub mod map;
pub mod player;
pub mod game;
