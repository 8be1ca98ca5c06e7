use std::collections::{HashMap, VecDeque};

use log::debug;

use super::{can_search, open_neighbors, SearchAlgorithm};
use crate::{Coordinate, Grid, Path};

/// Breadth-first search. With unit edge costs the FIFO order already visits
/// cells by increasing distance, so no priority queue is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl SearchAlgorithm for BreadthFirst {
    fn find_path(&self, grid: &Grid, start: Coordinate, goal: Coordinate) -> Option<Path> {
        if !can_search(grid, &start, &goal) {
            debug!("bfs: {} -> {} cannot be searched", start, goal);
            return None;
        }

        let mut frontier = VecDeque::new();
        let mut seen_from = HashMap::new();

        frontier.push_back(start);
        while let Some(curr) = frontier.pop_front() {
            if curr == goal {
                debug!("bfs: reached {} after {} cells", goal, seen_from.len());
                return Path::from_predecessors(&seen_from, start, goal);
            }

            for adj in open_neighbors(grid, &curr) {
                if adj == start || seen_from.contains_key(&adj) {
                    continue;
                }

                seen_from.insert(adj, curr);
                frontier.push_back(adj);
            }
        }

        debug!("bfs: frontier exhausted, {} unreachable", goal);
        None
    }

    fn name(&self) -> &'static str {
        "bfs"
    }
}
