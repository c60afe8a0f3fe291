//! Error type shared by maze generation, map parsing and configuration.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A grid needs at least one cell in each dimension.
    EmptyGrid { width: usize, height: usize },
    /// Text handed to the map parser does not follow the `#`/`.`/`%` contract.
    MalformedMap(String),
    InvalidConfig(String),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::EmptyGrid { width, height } => {
                write!(f, "maze must have at least one cell, got {width}x{height}")
            }
            MazeError::MalformedMap(reason) => write!(f, "malformed map: {reason}"),
            MazeError::InvalidConfig(reason) => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let e = MazeError::EmptyGrid { width: 0, height: 3 };
        assert_eq!(e.to_string(), "maze must have at least one cell, got 0x3");
        let e = MazeError::MalformedMap("no exit".into());
        assert!(e.to_string().contains("no exit"));
    }
}
