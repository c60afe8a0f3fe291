//! Perfect-maze generation and a banded ray-casting first-person view.

pub mod config;
pub mod core;
pub mod error;
pub mod render;

pub use config::Config;
pub use error::MazeError;
