//! End-to-end searches over tile maps.

use pathslice::{CapacityOracle, OracleConfig, Pathfinder, SearchOptions, SearchState, find_path};

use crate::{Connectivity, GridExplorer, Point, Tile, TileMap, manhattan};

const WALLED: &str = "\
.....
.....
##.##
.....
.....";

const ISOLATED: &str = "\
.#...
##...
.....";

fn open5() -> TileMap {
    TileMap::open(5, 5)
}

#[test]
fn open_grid_corner_to_corner() {
    let map = open5();
    let explorer = GridExplorer::new(&map, Connectivity::Four);
    let finder = Pathfinder::default();
    let search = finder.search_now(&explorer, Some(Point::new(0, 0)), [Point::new(4, 4)]);
    assert_eq!(search.state(), SearchState::Found);
    assert_eq!(search.path().len(), 9);
    assert_eq!(search.path().first(), Some(&Point::new(0, 0)));
    assert_eq!(search.path().last(), Some(&Point::new(4, 4)));
    assert_eq!(search.path_cost(), Some(8.0));
}

#[test]
fn wall_with_gap_routes_through_gap() {
    let map = TileMap::parse(WALLED).unwrap();
    let explorer = GridExplorer::new(&map, Connectivity::Four);
    let finder = Pathfinder::default();
    let search = finder.search_now(&explorer, Some(Point::new(0, 0)), [Point::new(4, 4)]);
    assert_eq!(search.state(), SearchState::Found);
    assert!(search.path().contains(&Point::new(2, 2)));
    assert_eq!(search.path().len(), 9);
    assert!(search.path().iter().all(|&p| map.is_passable(p)));
}

#[test]
fn isolated_start_is_not_reachable() {
    let map = TileMap::parse(ISOLATED).unwrap();
    let explorer = GridExplorer::new(&map, Connectivity::Four);
    let finder = Pathfinder::default();
    let mut search = finder.search_now(&explorer, Some(Point::new(0, 0)), [Point::new(4, 2)]);
    assert_eq!(search.state(), SearchState::NotReachable);
    assert_eq!(search.open_len(), 0);
    assert_eq!(search.closed_len(), 1);
    assert_eq!(search.build_closest_path(), &[Point::new(0, 0)]);

    // With labelled components the request is rejected before any work.
    let labelled = GridExplorer::new(&map, Connectivity::Eight).with_components();
    let search = finder.search(&labelled, Some(Point::new(0, 0)), [Point::new(4, 2)]);
    assert_eq!(search.state(), SearchState::NotReachable);
    assert_eq!(search.closed_len(), 0);
}

#[test]
fn manhattan_optimal_on_open_grid() {
    let map = TileMap::open(6, 6);
    let explorer = GridExplorer::new(&map, Connectivity::Four);
    let finder = Pathfinder::new(SearchOptions::default().with_check_limit(1000), OracleConfig::default());
    for start in map.points() {
        for goal in map.points() {
            let search = finder.search_now(&explorer, Some(start), [goal]);
            assert_eq!(search.state(), SearchState::Found, "{start} -> {goal}");
            assert_eq!(
                (search.path().len() - 1) as f32,
                manhattan(start, goal),
                "{start} -> {goal}"
            );
            assert!(search.validate(true, true));
        }
    }
}

#[test]
fn missing_arguments() {
    let map = open5();
    let explorer = GridExplorer::new(&map, Connectivity::Four);
    let oracle = CapacityOracle::default();
    let search = find_path(&explorer, &oracle, SearchOptions::default(), None, [Point::ZERO]);
    assert_eq!(search.state(), SearchState::BadArguments);
    let search = find_path(&explorer, &oracle, SearchOptions::default(), Some(Point::ZERO), Vec::new());
    assert_eq!(search.state(), SearchState::BadArguments);
}

#[test]
fn check_limit_overwhelms() {
    let map = open5();
    let explorer = GridExplorer::new(&map, Connectivity::Four);
    let oracle = CapacityOracle::default();
    let opts = SearchOptions::default().with_check_limit(2);
    let mut search = find_path(&explorer, &oracle, opts, Some(Point::new(0, 0)), [Point::new(4, 4)]);
    assert_eq!(search.run(), SearchState::Overwhelm);
    assert_eq!(search.closed_len(), 2);

    let path = search.build_closest_path().to_vec();
    assert_eq!(path.len(), 2);
    assert_eq!(path[0], Point::new(0, 0));
    assert!(search.closed_nodes().any(|&p| p == path[1]));
}

#[test]
fn open_and_closed_disjoint_across_polls() {
    let map = TileMap::parse(WALLED).unwrap();
    let explorer = GridExplorer::new(&map, Connectivity::Eight);
    // Average 30 gives two expansions per poll.
    let oracle = CapacityOracle::new(OracleConfig { seed: 30, window: 8 });
    let mut search = find_path(
        &explorer,
        &oracle,
        SearchOptions::default(),
        Some(Point::new(0, 0)),
        [Point::new(4, 4)],
    );
    assert_eq!(search.iterations_per_poll(), 2);
    let mut polls = 0;
    loop {
        let closed: Vec<Point> = search.closed_nodes().copied().collect();
        assert!(search.open_nodes().all(|p| !closed.contains(p)));
        polls += 1;
        if search.poll().is_terminal() {
            break;
        }
    }
    assert!(polls > 1);
    assert_eq!(search.state(), SearchState::Found);
    assert!(search.validate(true, true));
}

#[test]
fn closest_path_after_failure_ends_in_closed() {
    let map = TileMap::parse(ISOLATED).unwrap();
    let explorer = GridExplorer::new(&map, Connectivity::Four);
    let oracle = CapacityOracle::default();
    for limit in 1..12 {
        let opts = SearchOptions::default().with_check_limit(limit);
        let mut search = find_path(&explorer, &oracle, opts, Some(Point::new(2, 0)), [Point::new(0, 0)]);
        let state = search.run();
        assert_ne!(state, SearchState::Found);
        let path = search.build_closest_path().to_vec();
        let last = path.last().copied().expect("non-empty fallback");
        assert_eq!(path[0], Point::new(2, 0));
        assert!(search.closed_nodes().any(|&p| p == last));
        assert!(search.validate(true, true));
    }
}

#[test]
fn reroutes_after_map_change() {
    let mut map = open5();
    let first = {
        let explorer = GridExplorer::new(&map, Connectivity::Four);
        let finder = Pathfinder::default();
        let search = finder.search_now(&explorer, Some(Point::new(0, 2)), [Point::new(4, 2)]);
        assert!(search.validate(true, true));
        search.path().to_vec()
    };
    assert_eq!(first.len(), 5);
    assert!(first.contains(&Point::new(2, 2)));

    map.set(Point::new(2, 2), Tile::Wall);
    let explorer = GridExplorer::new(&map, Connectivity::Four);
    let finder = Pathfinder::default();
    let search = finder.search_now(&explorer, Some(Point::new(0, 2)), [Point::new(4, 2)]);
    assert_eq!(search.state(), SearchState::Found);
    assert!(!search.path().contains(&Point::new(2, 2)));
    assert_eq!(search.path().len(), 7);
    assert!(search.validate(true, true));
}

#[test]
fn terrain_costs_steer_the_route() {
    let map = TileMap::parse(".....\n.~~~.\n.....").unwrap();
    let explorer = GridExplorer::new(&map, Connectivity::Four);
    let finder = Pathfinder::default();
    let search = finder.search_now(&explorer, Some(Point::new(0, 1)), [Point::new(4, 1)]);
    assert_eq!(search.state(), SearchState::Found);
    assert_eq!(search.path_cost(), Some(6.0));
    assert!(search.path().iter().all(|&p| map.at(p) != Some(Tile::Water)));
}

#[test]
fn diagonal_moves_on_open_grid() {
    let map = open5();
    let explorer = GridExplorer::new(&map, Connectivity::Eight);
    let finder = Pathfinder::default();
    let search = finder.search_now(&explorer, Some(Point::new(0, 0)), [Point::new(4, 4)]);
    assert_eq!(search.state(), SearchState::Found);
    assert_eq!(search.path().len(), 5);
    let cost = search.path_cost().unwrap();
    assert!((cost - 4.0 * std::f32::consts::SQRT_2).abs() < 1e-4);
}

#[test]
fn dijkstra_matches_astar_cost() {
    let map = TileMap::parse(WALLED).unwrap();
    let explorer = GridExplorer::new(&map, Connectivity::Eight);
    let oracle = CapacityOracle::default();
    let start = Some(Point::new(4, 0));
    let goal = [Point::new(0, 4)];

    let mut astar = find_path(&explorer, &oracle, SearchOptions::default(), start, goal);
    let mut dijkstra = find_path(
        &explorer,
        &oracle,
        SearchOptions::default().with_heuristic(false),
        start,
        goal,
    );
    assert_eq!(astar.run(), SearchState::Found);
    assert_eq!(dijkstra.run(), SearchState::Found);
    let (a, d) = (astar.path_cost().unwrap(), dijkstra.path_cost().unwrap());
    assert!((a - d).abs() < 1e-4);
    assert!(astar.closed_len() <= dijkstra.closed_len());
}

#[test]
fn nearest_of_several_goals() {
    let map = open5();
    let explorer = GridExplorer::new(&map, Connectivity::Four);
    let finder = Pathfinder::default();
    let goals = [Point::new(4, 4), Point::new(0, 3), Point::new(4, 0)];
    let search = finder.search_now(&explorer, Some(Point::new(1, 1)), goals);
    assert_eq!(search.state(), SearchState::Found);
    assert_eq!(search.path().last(), Some(&Point::new(0, 3)));
    assert_eq!(search.path_cost(), Some(3.0));
}

#[test]
fn oracle_adapts_to_repeated_queries() {
    let map = TileMap::open(12, 12);
    let explorer = GridExplorer::new(&map, Connectivity::Four);
    let finder = Pathfinder::new(
        SearchOptions::default(),
        OracleConfig {
            seed: 600,
            window: 4,
        },
    );
    let before = finder.search(&explorer, Some(Point::ZERO), [Point::new(11, 0)]);
    assert_eq!(before.iterations_per_poll(), 40);
    drop(before);

    for _ in 0..4 {
        let search = finder.search_now(&explorer, Some(Point::ZERO), [Point::new(11, 0)]);
        assert_eq!(search.state(), SearchState::Found);
    }
    // The seed has aged out; only these small searches are averaged.
    assert_eq!(finder.oracle().samples(), 4);
    assert!(finder.oracle().average() < 100.0);
    let after = finder.search(&explorer, Some(Point::ZERO), [Point::new(11, 0)]);
    assert!(after.iterations_per_poll() < 40);
}

#[test]
fn restart_with_new_query() {
    let map = TileMap::parse(WALLED).unwrap();
    let explorer = GridExplorer::new(&map, Connectivity::Four);
    let oracle = CapacityOracle::default();
    let mut search = find_path(
        &explorer,
        &oracle,
        SearchOptions::default(),
        Some(Point::new(0, 0)),
        [Point::new(4, 0)],
    );
    assert_eq!(search.run(), SearchState::Found);
    assert_eq!(search.path().len(), 5);

    assert_eq!(
        search.restart(Some(Point::new(0, 4)), [Point::new(0, 0)]),
        SearchState::Running
    );
    assert_eq!(search.run(), SearchState::Found);
    assert!(search.path().contains(&Point::new(2, 2)));
}
