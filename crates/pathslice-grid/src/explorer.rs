use std::f32::consts::SQRT_2;

use pathslice::Explorer;

use crate::components::Components;
use crate::distance::{manhattan, octile};
use crate::map::TileMap;
use crate::Point;

/// Which moves are allowed between cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Cardinal moves only.
    #[default]
    Four,
    /// Cardinal and diagonal moves. A diagonal move may not cut the corner
    /// of a wall.
    Eight,
}

impl Connectivity {
    /// Append the in-bounds neighbours of `p` into `buf`.
    ///
    /// Cardinal neighbours are pushed regardless of terrain. Diagonal
    /// neighbours are only pushed when both cells they squeeze past are
    /// passable.
    pub fn neighbors(self, map: &TileMap, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if map.contains(n) {
                buf.push(n);
            }
        }
        if self == Self::Four {
            return;
        }
        for n in p.diagonals() {
            if map.contains(n)
                && map.is_passable(Point::new(n.x, p.y))
                && map.is_passable(Point::new(p.x, n.y))
            {
                buf.push(n);
            }
        }
    }
}

/// [`Explorer`] over a [`TileMap`].
///
/// Entering a cell costs its tile cost, times `sqrt(2)` for diagonal moves.
/// The heuristic is Manhattan distance for [`Connectivity::Four`] and
/// octile distance for [`Connectivity::Eight`]; both are admissible because
/// the cheapest tile costs 1.
pub struct GridExplorer<'a> {
    map: &'a TileMap,
    connectivity: Connectivity,
    components: Option<Components>,
}

impl<'a> GridExplorer<'a> {
    pub fn new(map: &'a TileMap, connectivity: Connectivity) -> Self {
        Self {
            map,
            connectivity,
            components: None,
        }
    }

    /// Label connected components so that [`Explorer::reachable`] becomes
    /// exact instead of always answering yes.
    pub fn with_components(mut self) -> Self {
        self.components = Some(Components::label(self.map, self.connectivity));
        self
    }

    pub fn map(&self) -> &TileMap {
        self.map
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    pub fn components(&self) -> Option<&Components> {
        self.components.as_ref()
    }
}

impl Explorer for GridExplorer<'_> {
    type Node = Point;

    fn neighbours(&self, node: &Point, buf: &mut Vec<Point>) {
        self.connectivity.neighbors(self.map, *node, buf);
    }

    fn path_cost(&self, from: &Point, to: &Point) -> f32 {
        let Some(cost) = self.map.cost(*to) else {
            return f32::INFINITY;
        };
        if from.is_diagonal_to(*to) {
            cost * SQRT_2
        } else {
            cost
        }
    }

    fn shortest_path(&self, from: &Point, to: &Point) -> f32 {
        match self.connectivity {
            Connectivity::Four => manhattan(*from, *to),
            Connectivity::Eight => octile(*from, *to),
        }
    }

    fn reachable(&self, from: &Point, to: &Point) -> bool {
        match &self.components {
            Some(cc) => cc.same_component(*from, *to),
            None => true,
        }
    }

    fn passable(&self, node: &Point) -> bool {
        self.map.is_passable(*node)
    }
}
