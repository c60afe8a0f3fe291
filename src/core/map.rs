//! The rendered map: the grid flattened to a `#`/`.`/`%` tile matrix.
//!
//! Renderer and collision both read this snapshot. It is rebuilt wholesale on
//! regeneration and never edited in place.
use std::fmt;
use std::str::FromStr;

use crate::core::grid::{Direction, Grid};
use crate::error::MazeError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
    Exit,
}

impl Tile {
    pub fn as_char(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Exit => '%',
        }
    }

    pub fn from_char(c: char) -> Option<Tile> {
        match c {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Floor),
            '%' => Some(Tile::Exit),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedMap {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl RenderedMap {
    /// Cell `(x, y)` lands on `(2x+1, 2y+1)`; every open wall carves the tile
    /// between two cells.
    pub fn from_grid(grid: &Grid) -> Self {
        let width = grid.width() * 2 + 1;
        let height = grid.height() * 2 + 1;
        let mut map = Self { width, height, tiles: vec![Tile::Wall; width * height] };

        for cell in grid.cells() {
            let mx = cell.x * 2 + 1;
            let my = cell.y * 2 + 1;
            map.set(mx, my, Tile::Floor);
            for dir in cell.open_walls() {
                let (dx, dy) = dir.delta();
                let carve = match dir {
                    Direction::North => my > 0,
                    Direction::South => my + 1 < height,
                    Direction::West => mx > 0,
                    Direction::East => mx + 1 < width,
                };
                if carve {
                    map.set(mx.wrapping_add_signed(dx), my.wrapping_add_signed(dy), Tile::Floor);
                }
            }
        }
        // Exit goes last so no floor mark can overwrite it.
        if let Some(t) = grid.target() {
            map.set(t.x * 2 + 1, t.y * 2 + 1, Tile::Exit);
        }
        map
    }

    /// Reads the textual form: equal-length rows of `#`, `.`, `%` with one `%`.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let rows: Vec<&str> = text.lines().collect();
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if height == 0 || width == 0 {
            return Err(MazeError::MalformedMap("map is empty".into()));
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != width {
                return Err(MazeError::MalformedMap(format!(
                    "row {y} has {len} tiles, expected {width}"
                )));
            }
            for (x, c) in row.chars().enumerate() {
                let tile = Tile::from_char(c).ok_or_else(|| {
                    MazeError::MalformedMap(format!("unknown tile {c:?} at ({x}, {y})"))
                })?;
                tiles.push(tile);
            }
        }

        let exits = tiles.iter().filter(|t| **t == Tile::Exit).count();
        if exits != 1 {
            return Err(MazeError::MalformedMap(format!("expected one exit, found {exits}")));
        }
        Ok(Self { width, height, tiles })
    }

    fn set(&mut self, x: usize, y: usize, tile: Tile) {
        self.tiles[x + y * self.width] = tile;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at integer map coordinates, `None` off the map.
    #[inline]
    pub fn tile(&self, x: isize, y: isize) -> Option<Tile> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.tiles[x as usize + y as usize * self.width])
    }

    /// Tile under a continuous position (floored).
    #[inline]
    pub fn tile_at(&self, x: f32, y: f32) -> Option<Tile> {
        self.tile(x.floor() as isize, y.floor() as isize)
    }

    pub fn floor_cells(&self) -> Vec<(usize, usize)> {
        self.positions(Tile::Floor).collect()
    }

    pub fn exit(&self) -> Option<(usize, usize)> {
        self.positions(Tile::Exit).next()
    }

    fn positions(&self, wanted: Tile) -> impl Iterator<Item = (usize, usize)> + '_ {
        let w = self.width;
        self.tiles
            .iter()
            .enumerate()
            .filter(move |(_, t)| **t == wanted)
            .map(move |(i, _)| (i % w, i / w))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width)
    }
}

impl fmt::Display for RenderedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for tile in row {
                write!(f, "{}", tile.as_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for RenderedMap {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RenderedMap::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor_grid() -> Grid {
        // 3x2: a loop-free S shape, target bottom-left.
        let mut g = Grid::new(3, 2).unwrap();
        let i = |g: &Grid, x, y| g.index(x, y);
        let (a, b, c) = (i(&g, 0, 0), i(&g, 1, 0), i(&g, 2, 0));
        g.connect(a, b);
        g.connect(b, c);
        let (d, e, f) = (i(&g, 2, 1), i(&g, 1, 1), i(&g, 0, 1));
        g.connect(c, d);
        g.connect(d, e);
        g.connect(e, f);
        g.set_target(f);
        g
    }

    #[test]
    fn flattens_grid() {
        let map = RenderedMap::from_grid(&corridor_grid());
        assert_eq!(map.width(), 7);
        assert_eq!(map.height(), 5);
        assert_eq!(
            map.to_string(),
            "#######\n\
             #.....#\n\
             #####.#\n\
             #%....#\n\
             #######"
        );
    }

    #[test]
    fn non_square_grid_keeps_axes_apart() {
        // Tall grid: a south carve near the bottom must not be clipped by width.
        let mut g = Grid::new(1, 3).unwrap();
        let (a, b, c) = (g.index(0, 0), g.index(0, 1), g.index(0, 2));
        g.connect(a, b);
        g.connect(b, c);
        g.set_target(a);
        let map = RenderedMap::from_grid(&g);
        assert_eq!(map.to_string(), "###\n#%#\n#.#\n#.#\n#.#\n#.#\n###");
    }

    #[test]
    fn serializing_twice_is_identical() {
        let g = corridor_grid();
        assert_eq!(RenderedMap::from_grid(&g).to_string(), RenderedMap::from_grid(&g).to_string());
    }

    #[test]
    fn parse_accepts_its_own_output() {
        let map = RenderedMap::from_grid(&corridor_grid());
        let back: RenderedMap = map.to_string().parse().unwrap();
        assert_eq!(back, map);
        assert_eq!(back.exit(), Some((1, 3)));
    }

    #[test]
    fn parse_rejects_bad_maps() {
        assert!(matches!(RenderedMap::parse(""), Err(MazeError::MalformedMap(_))));
        assert!(RenderedMap::parse("###\n#%\n###").is_err());
        assert!(RenderedMap::parse("###\n#x#\n###").is_err());
        assert!(RenderedMap::parse("###\n#.#\n###").is_err());
        assert!(RenderedMap::parse("####\n#%%#\n####").is_err());
    }

    #[test]
    fn lookups_outside_are_none() {
        let map = RenderedMap::parse("###\n#%#\n###").unwrap();
        assert_eq!(map.tile(-1, 0), None);
        assert_eq!(map.tile(3, 1), None);
        assert_eq!(map.tile(1, 1), Some(Tile::Exit));
        assert_eq!(map.tile_at(1.99, 1.01), Some(Tile::Exit));
        assert_eq!(map.tile_at(-0.2, 1.0), None);
        assert!(map.floor_cells().is_empty());
    }
}
