//! Tunables for maze size, screen and movement.
use crate::error::MazeError;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maze size in cells (the rendered map is `2*width+1` wide).
    pub width: usize,
    pub height: usize,
    pub screen_width: u32,
    pub screen_height: u32,
    pub field_of_view: f32, // radians
    pub max_depth: f32,     // map units
    pub move_speed: f32,    // map units per second
    pub turn_rate: f32,     // radians per second
    pub show_boundaries: bool,
    /// Window pixels per framebuffer pixel.
    pub scale: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 7,
            height: 7,
            screen_width: 256,
            screen_height: 128,
            field_of_view: std::f32::consts::FRAC_PI_4,
            max_depth: 24.0,
            move_speed: 6.0,
            turn_rate: 1.5,
            show_boundaries: true,
            scale: 4,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.width == 0 || self.height == 0 {
            return Err(MazeError::EmptyGrid { width: self.width, height: self.height });
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(MazeError::InvalidConfig(format!(
                "screen must be non-empty, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if !(self.field_of_view > 0.0) {
            return Err(MazeError::InvalidConfig(format!(
                "field_of_view must be positive, got {}",
                self.field_of_view
            )));
        }
        if !(self.max_depth > 0.0) {
            return Err(MazeError::InvalidConfig(format!(
                "max_depth must be positive, got {}",
                self.max_depth
            )));
        }
        if self.scale == 0 {
            return Err(MazeError::InvalidConfig("scale must be at least 1".into()));
        }
        Ok(())
    }
}
