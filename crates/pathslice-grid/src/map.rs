//! ASCII tile maps.
//!
//! A map is a rectangle of [`Tile`]s, usually written as text:
//!
//! ```text
//! #####
//! #..~#
//! #.:.#
//! #####
//! ```

use std::fmt;
use std::str::FromStr;

use crate::Point;

/// Terrain of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Wall,
    #[default]
    Floor,
    /// Passable, costs 2.
    Rubble,
    /// Passable, costs 3.
    Water,
}

impl Tile {
    /// Parse a single map character.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Floor),
            ':' => Some(Self::Rubble),
            '~' => Some(Self::Water),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
            Self::Rubble => ':',
            Self::Water => '~',
        }
    }

    /// Cost of entering this tile, `None` for walls.
    pub fn cost(self) -> Option<f32> {
        match self {
            Self::Wall => None,
            Self::Floor => Some(1.0),
            Self::Rubble => Some(2.0),
            Self::Water => Some(3.0),
        }
    }

    #[inline]
    pub fn is_passable(self) -> bool {
        self != Self::Wall
    }
}

/// Errors that can occur when parsing a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// No rows, or rows without any tiles.
    Empty,
    /// A row differs in width from the first one.
    InconsistentWidth {
        row: i32,
        expected: i32,
        found: i32,
    },
    /// A character outside the tile legend.
    InvalidTile { ch: char, pos: Point },
    /// The tile count does not match `width * height`.
    SizeMismatch {
        width: i32,
        height: i32,
        tiles: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no tiles"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "map: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidTile { ch, pos } => {
                write!(f, "map: invalid tile \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::SizeMismatch {
                width,
                height,
                tiles,
            } => write!(f, "map: {tiles} tiles for a {width}x{height} map"),
        }
    }
}

impl std::error::Error for MapError {}

/// A rectangular grid of tiles with its origin at (0, 0).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTileMap"))]
pub struct TileMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

/// Unchecked serialized form of a [`TileMap`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTileMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTileMap> for TileMap {
    type Error = MapError;

    fn try_from(raw: RawTileMap) -> Result<Self, MapError> {
        Self::from_tiles(raw.width, raw.height, raw.tiles)
    }
}

impl TileMap {
    /// A map of the given size filled with floor.
    pub fn open(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![Tile::Floor; width as usize * height as usize],
        }
    }

    /// Build a map from row-major tiles. `tiles` must hold exactly
    /// `width * height` entries, and both sides must be positive.
    pub fn from_tiles(width: i32, height: i32, tiles: Vec<Tile>) -> Result<Self, MapError> {
        if width <= 0 || height <= 0 {
            return Err(MapError::Empty);
        }
        let expected = (width as usize).checked_mul(height as usize);
        if expected != Some(tiles.len()) {
            return Err(MapError::SizeMismatch {
                width,
                height,
                tiles: tiles.len(),
            });
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Parse a map from text, one row per line.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut tiles = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (y, line) in text.lines().enumerate() {
            let y = y as i32;
            let mut row_width = 0;
            for (x, ch) in line.trim_end_matches('\r').chars().enumerate() {
                let pos = Point::new(x as i32, y);
                let tile = Tile::from_char(ch).ok_or(MapError::InvalidTile { ch, pos })?;
                tiles.push(tile);
                row_width += 1;
            }
            if y == 0 {
                width = row_width;
            } else if row_width != width {
                return Err(MapError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found: row_width,
                });
            }
            height += 1;
        }

        if width == 0 {
            return Err(MapError::Empty);
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Flat index of `p`, `None` outside the map.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Tile at `p`, `None` outside the map.
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.idx(p).map(|i| self.tiles[i])
    }

    /// Replace the tile at `p`. Returns `false` if `p` is outside the map.
    pub fn set(&mut self, p: Point, tile: Tile) -> bool {
        match self.idx(p) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Whether `p` is inside the map and not a wall.
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_passable)
    }

    /// Cost of entering `p`, `None` for walls and points outside the map.
    pub fn cost(&self, p: Point) -> Option<f32> {
        self.at(p).and_then(Tile::cost)
    }

    /// All points, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.tiles.len()).map(|i| self.point(i))
    }

    /// Render as text, marking `path` cells with `*`.
    pub fn render(&self, path: &[Point]) -> String {
        let mut out = String::with_capacity(self.tiles.len() + self.height as usize);
        for y in 0..self.height {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width {
                let p = Point::new(x, y);
                if path.contains(&p) {
                    out.push('*');
                } else {
                    out.push(self.tiles[y as usize * self.width as usize + x as usize].to_char());
                }
            }
        }
        out
    }
}

impl FromStr for TileMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}
