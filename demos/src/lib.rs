//! Shared helpers for the demos: seeded cave generation and a polling
//! driver that mimics a frame-budgeted host loop.

use pathslice::{Pathfinder, SearchState};
use pathslice_grid::{GridExplorer, Point, Tile, TileMap};
use rand::{Rng, RngExt};

/// Cave generation parameters.
#[derive(Debug, Clone, Copy)]
pub struct CaveConfig {
    pub width: i32,
    pub height: i32,
    /// Chance of a cell starting as wall.
    pub wall_init_pct: f64,
    /// Smoothing passes.
    pub passes: usize,
    /// Chance of a floor cell becoming rubble or water.
    pub rough_pct: f64,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 20,
            wall_init_pct: 0.42,
            passes: 4,
            rough_pct: 0.08,
        }
    }
}

/// Generate a cave with cellular automata: random walls, then repeated
/// smoothing where a cell becomes wall if at least five cells of its 3x3
/// block are walls. The border is always wall.
pub fn generate_cave<R: Rng>(rng: &mut R, cfg: CaveConfig) -> TileMap {
    let mut map = TileMap::open(cfg.width, cfg.height);
    let border = |p: Point| p.x == 0 || p.y == 0 || p.x == cfg.width - 1 || p.y == cfg.height - 1;

    let points: Vec<Point> = map.points().collect();
    for &p in &points {
        let r: f64 = rng.random();
        if border(p) || r < cfg.wall_init_pct {
            map.set(p, Tile::Wall);
        }
    }

    for _ in 0..cfg.passes {
        let prev = map.clone();
        for &p in &points {
            if border(p) {
                continue;
            }
            let mut walls = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if !prev.is_passable(p.shift(dx, dy)) {
                        walls += 1;
                    }
                }
            }
            map.set(p, if walls >= 5 { Tile::Wall } else { Tile::Floor });
        }
    }

    for &p in &points {
        if map.at(p) == Some(Tile::Floor) && rng.random::<f64>() < cfg.rough_pct {
            let tile = if rng.random_range(0..2u32) == 0 {
                Tile::Rubble
            } else {
                Tile::Water
            };
            map.set(p, tile);
        }
    }
    map
}

/// Pick a random passable point, `None` if the map has no floor.
pub fn random_floor<R: Rng>(rng: &mut R, map: &TileMap) -> Option<Point> {
    let floors: Vec<Point> = map.points().filter(|&p| map.is_passable(p)).collect();
    if floors.is_empty() {
        return None;
    }
    Some(floors[rng.random_range(0..floors.len())])
}

/// Outcome of one demo query.
#[derive(Debug, Clone)]
pub struct QueryReport {
    pub state: SearchState,
    pub polls: usize,
    pub iterations_per_poll: usize,
    pub expanded: usize,
    /// The found path, or the closest-path fallback.
    pub path: Vec<Point>,
    pub cost: Option<f32>,
    pub valid: bool,
}

/// Drive one search a slice at a time, as a host loop would once per frame.
pub fn run_query(
    finder: &Pathfinder,
    explorer: &GridExplorer<'_>,
    start: Point,
    goal: Point,
) -> QueryReport {
    let mut search = finder.search(explorer, Some(start), [goal]);
    let iterations_per_poll = search.iterations_per_poll();
    let mut polls = 0;
    while !search.state().is_terminal() {
        search.poll();
        polls += 1;
    }
    let state = search.state();
    let path = search.build_closest_path().to_vec();
    QueryReport {
        state,
        polls,
        iterations_per_poll,
        expanded: search.closed_len(),
        path,
        cost: search.path_cost(),
        valid: search.validate(true, true),
    }
}
