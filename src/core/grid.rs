//! Cell grid with wall bitmasks and adjacency.
//!
//! Cells live in one arena addressed by `x + y * width`, so knocking down a
//! wall touches both sides through plain indices.
use crate::error::MazeError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        match self {
            Direction::North => 0b0001,
            Direction::South => 0b0010,
            Direction::West => 0b0100,
            Direction::East => 0b1000,
        }
    }
}

const ALL_WALLS: u8 = 0b1111;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    walls: u8,
    pub is_target: bool,
}

impl Cell {
    fn new(x: usize, y: usize) -> Self {
        Self { x, y, walls: ALL_WALLS, is_target: false }
    }

    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls & dir.bit() != 0
    }

    /// True while none of the four walls has been knocked down.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.walls == ALL_WALLS
    }

    pub fn open_walls(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| !self.has_wall(*d))
    }

    /// Direction from `self` to an adjacent cell.
    fn wall_to(&self, other: &Cell) -> Direction {
        let manhattan = self.x.abs_diff(other.x) + self.y.abs_diff(other.y);
        assert_eq!(
            manhattan, 1,
            "cells ({}, {}) and ({}, {}) are not adjacent",
            self.x, self.y, other.x, other.y
        );
        if other.y < self.y {
            Direction::North
        } else if other.y > self.y {
            Direction::South
        } else if other.x < self.x {
            Direction::West
        } else {
            Direction::East
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::EmptyGrid { width, height });
        }
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(x, y)))
            .collect();
        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Arena index of `(x, y)`. Panics outside the grid.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        x + y * self.width
    }

    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    pub fn cell_at(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn target(&self) -> Option<&Cell> {
        self.cells.iter().find(|c| c.is_target)
    }

    pub fn set_target(&mut self, idx: usize) {
        self.cells[idx].is_target = true;
    }

    /// Indices of the grid-adjacent cells, in N, S, W, E order.
    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        let Cell { x, y, .. } = self.cells[idx];
        Direction::ALL.into_iter().filter_map(move |dir| {
            let (dx, dy) = dir.delta();
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < self.width && ny < self.height).then(|| nx + ny * self.width)
        })
    }

    #[inline]
    pub fn is_full(&self, idx: usize) -> bool {
        self.cells[idx].is_full()
    }

    /// Knocks down the wall shared by two adjacent cells, on both sides.
    pub fn connect(&mut self, a: usize, b: usize) {
        let dir = self.cells[a].wall_to(&self.cells[b]);
        self.cells[a].walls &= !dir.bit();
        self.cells[b].walls &= !dir.opposite().bit();
    }

    /// Number of wall pairs removed so far.
    pub fn passages(&self) -> usize {
        let open: usize = self.cells.iter().map(|c| c.open_walls().count()).sum();
        open / 2
    }
}
