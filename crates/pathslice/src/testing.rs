//! Small explorers shared by the unit tests.

use std::cell::RefCell;

use crate::Explorer;

/// Undirected weighted graph over `char` nodes with a zero heuristic.
pub(crate) struct Graph {
    edges: Vec<(char, char, f32)>,
    pub(crate) blocked: RefCell<Vec<char>>,
    pub(crate) unreachable: Vec<char>,
}

impl Graph {
    pub(crate) fn new(edges: &[(char, char, f32)]) -> Self {
        Self {
            edges: edges.to_vec(),
            blocked: RefCell::new(Vec::new()),
            unreachable: Vec::new(),
        }
    }
}

impl Explorer for Graph {
    type Node = char;

    fn neighbours(&self, node: &char, buf: &mut Vec<char>) {
        for &(a, b, _) in &self.edges {
            if a == *node {
                buf.push(b);
            } else if b == *node {
                buf.push(a);
            }
        }
    }

    fn path_cost(&self, from: &char, to: &char) -> f32 {
        self.edges
            .iter()
            .find(|&&(a, b, _)| (a == *from && b == *to) || (a == *to && b == *from))
            .map_or(f32::INFINITY, |e| e.2)
    }

    fn shortest_path(&self, _from: &char, _to: &char) -> f32 {
        0.0
    }

    fn reachable(&self, _from: &char, to: &char) -> bool {
        !self.unreachable.contains(to)
    }

    fn passable(&self, node: &char) -> bool {
        !self.blocked.borrow().contains(node)
    }
}

/// Nodes `0..len` on a line, unit edges, distance heuristic.
pub(crate) struct Line {
    pub(crate) len: i32,
}

impl Explorer for Line {
    type Node = i32;

    fn neighbours(&self, node: &i32, buf: &mut Vec<i32>) {
        if *node > 0 {
            buf.push(node - 1);
        }
        if *node + 1 < self.len {
            buf.push(node + 1);
        }
    }

    fn path_cost(&self, _from: &i32, _to: &i32) -> f32 {
        1.0
    }

    fn shortest_path(&self, from: &i32, to: &i32) -> f32 {
        (from - to).abs() as f32
    }
}
