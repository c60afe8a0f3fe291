//! Simulation state threaded through update and draw.
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::core::map::RenderedMap;
use crate::core::maze::generate_map;
use crate::core::player::{Player, PlayerState, spawn};
use crate::error::MazeError;

/// Longest frame the controller will integrate in one step.
pub const MAX_FRAME_DT: f32 = 0.25;

/// Key state for one tick. The toggles and `regenerate` are edge triggered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Input {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub regenerate: bool,
    pub toggle_minimap: bool,
    pub toggle_debug: bool,
}

pub struct Game {
    pub config: Config,
    pub map: RenderedMap,
    pub player: Player,
    pub show_minimap: bool,
    pub show_debug: bool,
    /// Which column parity the next 3D pass draws.
    pub render_alt: bool,
    pub mazes_completed: u32,
    rng: StdRng,
}

impl Game {
    pub fn new(config: Config) -> Result<Self, MazeError> {
        Self::build(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: Config, seed: u64) -> Result<Self, MazeError> {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(config: Config, mut rng: StdRng) -> Result<Self, MazeError> {
        config.validate()?;
        let map = generate_map(config.width, config.height, &mut rng)?;
        let pose = spawn(&map, &mut rng);
        let player = Player::new(pose, config.move_speed, config.turn_rate);
        info!(
            "new {}x{} maze, spawn at ({:.1}, {:.1})",
            config.width, config.height, pose.x, pose.y
        );
        Ok(Self {
            config,
            map,
            player,
            show_minimap: false,
            show_debug: false,
            render_alt: true,
            mazes_completed: 0,
            rng,
        })
    }

    /// Swaps in a fresh maze and respawns. Only call between frames.
    pub fn regenerate(&mut self) -> Result<(), MazeError> {
        let map = generate_map(self.config.width, self.config.height, &mut self.rng)?;
        let pose = spawn(&map, &mut self.rng);
        self.map = map;
        self.player.pose = pose;
        self.player.state = PlayerState::Active;
        info!("regenerated maze, spawn at ({:.1}, {:.1})", pose.x, pose.y);
        Ok(())
    }

    pub fn update(&mut self, input: &Input, dt: f32) -> Result<(), MazeError> {
        let dt = if dt > MAX_FRAME_DT {
            warn!("frame took {dt:.3}s, clamping to {MAX_FRAME_DT}s");
            MAX_FRAME_DT
        } else {
            dt.max(0.0)
        };

        if input.regenerate {
            self.regenerate()?;
        }
        if input.toggle_minimap {
            self.show_minimap = !self.show_minimap;
            debug!("minimap {}", if self.show_minimap { "on" } else { "off" });
        }
        if input.toggle_debug {
            self.show_debug = !self.show_debug;
            debug!("debug overlay {}", if self.show_debug { "on" } else { "off" });
        }

        if self.player.is_complete() {
            return Ok(());
        }
        if input.forward {
            self.player.move_forward(&self.map, dt);
        }
        if input.backward {
            self.player.move_backward(&self.map, dt);
        }
        if input.turn_left {
            self.player.turn(-1.0, dt);
        }
        if input.turn_right {
            self.player.turn(1.0, dt);
        }
        if self.player.is_complete() {
            self.mazes_completed += 1;
            info!("maze completed ({} so far)", self.mazes_completed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::map::Tile;
    use crate::core::player::Pose;

    fn small() -> Config {
        Config { width: 4, height: 3, ..Config::default() }
    }

    #[test]
    fn starts_active_on_floor() {
        let g = Game::with_seed(small(), 3).unwrap();
        assert_eq!(g.map.width(), 9);
        assert_eq!(g.map.height(), 7);
        assert_eq!(g.player.state, PlayerState::Active);
        assert_eq!(g.map.tile_at(g.player.pose.x, g.player.pose.y), Some(Tile::Floor));
    }

    #[test]
    fn invalid_config_fails_fast() {
        let cfg = Config { width: 0, ..Config::default() };
        assert!(matches!(Game::with_seed(cfg, 1), Err(MazeError::EmptyGrid { .. })));
    }

    #[test]
    fn toggles_flip_on_edges() {
        let mut g = Game::with_seed(small(), 3).unwrap();
        let press = Input { toggle_minimap: true, toggle_debug: true, ..Input::default() };
        g.update(&press, 0.016).unwrap();
        assert!(g.show_minimap && g.show_debug);
        g.update(&Input::default(), 0.016).unwrap();
        assert!(g.show_minimap && g.show_debug);
        g.update(&press, 0.016).unwrap();
        assert!(!g.show_minimap && !g.show_debug);
    }

    #[test]
    fn turning_uses_turn_rate() {
        let mut g = Game::with_seed(small(), 5).unwrap();
        let a0 = g.player.pose.a;
        g.update(&Input { turn_right: true, ..Input::default() }, 0.1).unwrap();
        assert!((g.player.pose.a - (a0 + 0.15)).abs() < 1e-5);
        g.update(&Input { turn_left: true, ..Input::default() }, 0.2).unwrap();
        assert!((g.player.pose.a - (a0 - 0.15)).abs() < 1e-5);
    }

    #[test]
    fn long_frames_are_clamped() {
        let mut g = Game::with_seed(small(), 5).unwrap();
        let a0 = g.player.pose.a;
        g.update(&Input { turn_right: true, ..Input::default() }, 10.0).unwrap();
        assert!((g.player.pose.a - (a0 + MAX_FRAME_DT * 1.5)).abs() < 1e-5);
    }

    #[test]
    fn completion_freezes_until_regenerate() {
        let mut g = Game::with_seed(small(), 11).unwrap();
        let (ex, ey) = g.map.exit().unwrap();
        // Stand one tile south of the exit (always a wall or corridor row) looking north.
        g.player.pose = Pose::new(ex as f32 + 0.5, ey as f32 + 1.5, std::f32::consts::PI);
        g.update(&Input { forward: true, ..Input::default() }, 1.0 / 6.0).unwrap();
        assert!(g.player.is_complete());
        assert_eq!(g.mazes_completed, 1);

        let frozen = g.player.pose;
        g.update(&Input { forward: true, turn_left: true, ..Input::default() }, 0.1).unwrap();
        assert_eq!(g.player.pose, frozen);

        g.update(&Input { regenerate: true, ..Input::default() }, 0.016).unwrap();
        assert_eq!(g.player.state, PlayerState::Active);
        assert_eq!(g.map.tile_at(g.player.pose.x, g.player.pose.y), Some(Tile::Floor));
        assert_eq!(g.mazes_completed, 1);
    }

    #[test]
    fn seeded_games_repeat() {
        let a = Game::with_seed(small(), 42).unwrap();
        let b = Game::with_seed(small(), 42).unwrap();
        assert_eq!(a.map, b.map);
        assert_eq!(a.player.pose, b.player.pose);
    }
}
