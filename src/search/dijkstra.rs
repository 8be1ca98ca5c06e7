use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use derive_new::new;
use log::debug;

use super::{can_search, open_neighbors, SearchAlgorithm};
use crate::{Coordinate, Grid, Path};

/// Uniform-cost search driven by a binary heap keyed on distance from start.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

#[derive(PartialEq, Eq, new)]
struct FrontierNode {
    distance: i32,
    point: Coordinate,
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so the smallest distance must compare greatest.
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| (other.point.x, other.point.y).cmp(&(self.point.x, self.point.y)))
    }
}

impl SearchAlgorithm for Dijkstra {
    fn find_path(&self, grid: &Grid, start: Coordinate, goal: Coordinate) -> Option<Path> {
        if !can_search(grid, &start, &goal) {
            debug!("dijkstra: {} -> {} cannot be searched", start, goal);
            return None;
        }

        let mut frontier = BinaryHeap::new();
        let mut distances = HashMap::new();
        let mut came_from = HashMap::new();
        let mut finalized = HashSet::new();

        distances.insert(start, 0);
        frontier.push(FrontierNode::new(0, start));

        while let Some(curr) = frontier.pop() {
            // Stale entries remain in the heap after a distance improves.
            if !finalized.insert(curr.point) {
                continue;
            }

            if curr.point == goal {
                debug!("dijkstra: reached {} at distance {}", goal, curr.distance);
                let path = Path::from_predecessors(&came_from, start, goal)?;
                debug_assert_eq!(path.total_cost(), curr.distance);
                return Some(path);
            }

            for adj in open_neighbors(grid, &curr.point) {
                if finalized.contains(&adj) {
                    continue;
                }

                let next_distance = curr.distance + 1;
                let improves = distances
                    .get(&adj)
                    .map_or(true, |known| next_distance < *known);
                if !improves {
                    continue;
                }

                distances.insert(adj, next_distance);
                came_from.insert(adj, curr.point);
                frontier.push(FrontierNode::new(next_distance, adj));
            }
        }

        debug!("dijkstra: frontier exhausted, {} unreachable", goal);
        None
    }

    fn name(&self) -> &'static str {
        "dijkstra"
    }
}
