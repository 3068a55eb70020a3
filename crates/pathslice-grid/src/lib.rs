//! Tile-grid collaborator for the [`pathslice`] engine.
//!
//! - [`TileMap`]: a rectangle of terrain tiles, parsed from ASCII art,
//! - [`GridExplorer`]: the [`pathslice::Explorer`] over a map, 4- or
//!   8-connected, with terrain-weighted costs,
//! - [`Components`]: connected-component labels that turn the explorer's
//!   reachability pre-filter from "always yes" into an exact answer.
//!
//! ```
//! use pathslice::{Pathfinder, SearchState};
//! use pathslice_grid::{Connectivity, GridExplorer, Point, TileMap};
//!
//! let map: TileMap = "\
//! .....
//! .###.
//! .....".parse().unwrap();
//! let explorer = GridExplorer::new(&map, Connectivity::Four).with_components();
//! let finder = Pathfinder::default();
//! let search = finder.search_now(&explorer, Some(Point::new(0, 1)), [Point::new(4, 1)]);
//! assert_eq!(search.state(), SearchState::Found);
//! assert_eq!(search.path().len(), 7);
//! ```

mod components;
mod distance;
mod explorer;
mod geom;
mod map;

#[cfg(test)]
mod scenarios;

pub use components::Components;
pub use distance::{chebyshev, manhattan, octile};
pub use explorer::{Connectivity, GridExplorer};
pub use geom::Point;
pub use map::{MapError, Tile, TileMap};
