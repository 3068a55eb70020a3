//! Connected-component labelling.

use crate::explorer::Connectivity;
use crate::map::TileMap;
use crate::Point;

/// Component labels for every passable cell of a map.
///
/// Two passable cells share a label if a chain of passable neighbours (as
/// defined by the [`Connectivity`]) joins them. Walls carry no label.
#[derive(Debug, Clone)]
pub struct Components {
    width: i32,
    height: i32,
    labels: Vec<i32>,
    count: usize,
}

impl Components {
    /// Label every cell of `map`.
    pub fn label(map: &TileMap, connectivity: Connectivity) -> Self {
        let mut labels = vec![-1; map.len()];
        let mut stack = Vec::new();
        let mut nbuf = Vec::with_capacity(8);
        let mut label: i32 = 0;

        for start in 0..map.len() {
            if labels[start] >= 0 || !map.is_passable(map.point(start)) {
                continue;
            }

            // Iterative DFS from `start`.
            stack.clear();
            stack.push(start);
            labels[start] = label;

            while let Some(ci) = stack.pop() {
                nbuf.clear();
                connectivity.neighbors(map, map.point(ci), &mut nbuf);
                for &np in &nbuf {
                    if !map.is_passable(np) {
                        continue;
                    }
                    if let Some(ni) = map.idx(np) {
                        if labels[ni] < 0 {
                            labels[ni] = label;
                            stack.push(ni);
                        }
                    }
                }
            }

            label += 1;
        }

        Self {
            width: map.width(),
            height: map.height(),
            labels,
            count: label as usize,
        }
    }

    /// Label at `p`, `None` for walls and points outside the map.
    pub fn label_at(&self, p: Point) -> Option<i32> {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return None;
        }
        let l = self.labels[p.y as usize * self.width as usize + p.x as usize];
        (l >= 0).then_some(l)
    }

    /// Whether `a` and `b` are both passable and connected.
    pub fn same_component(&self, a: Point, b: Point) -> bool {
        match (self.label_at(a), self.label_at(b)) {
            (Some(la), Some(lb)) => la == lb,
            _ => false,
        }
    }

    /// Number of distinct components.
    pub fn count(&self) -> usize {
        self.count
    }
}
