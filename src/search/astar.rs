use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use derive_new::new;
use log::debug;

use super::{can_search, open_neighbors, SearchAlgorithm};
use crate::{Coordinate, Grid, Path};

/// A* guided by Manhattan distance, which never overestimates on a
/// 4-connected unit-cost grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

#[derive(PartialEq, Eq, new)]
struct AStarNode {
    point: Coordinate,
    cost: i32,
    h_cost: i32,
    g_cost: i32,
}

impl AStarNode {
    fn create(goal: &Coordinate, point: Coordinate, g_cost: i32) -> AStarNode {
        let h_cost = point.manhattan_distance(goal);
        AStarNode::new(point, g_cost + h_cost, h_cost, g_cost)
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lowest f first; among equal f prefer the node closer to the goal.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.h_cost.cmp(&self.h_cost))
            .then_with(|| (other.point.x, other.point.y).cmp(&(self.point.x, self.point.y)))
    }
}

impl SearchAlgorithm for AStar {
    fn find_path(&self, grid: &Grid, start: Coordinate, goal: Coordinate) -> Option<Path> {
        if !can_search(grid, &start, &goal) {
            debug!("astar: {} -> {} cannot be searched", start, goal);
            return None;
        }

        let mut open = BinaryHeap::new();
        let mut closed = HashSet::new();
        let mut g_costs = HashMap::new();
        let mut came_from = HashMap::new();

        g_costs.insert(start, 0);
        open.push(AStarNode::create(&goal, start, 0));

        while let Some(curr) = open.pop() {
            // There can be duplicate nodes for a point with updated g_cost.
            if !closed.insert(curr.point) {
                continue;
            }

            if curr.point == goal {
                debug!("astar: reached {} with g_cost {}", goal, curr.g_cost);
                return Path::from_predecessors(&came_from, start, goal);
            }

            for adj in open_neighbors(grid, &curr.point) {
                if closed.contains(&adj) {
                    continue;
                }

                let next_g_cost = curr.g_cost + 1;
                if let Some(old_g_cost) = g_costs.get(&adj) {
                    if next_g_cost >= *old_g_cost {
                        continue;
                    }
                }

                g_costs.insert(adj, next_g_cost);
                came_from.insert(adj, curr.point);
                open.push(AStarNode::create(&goal, adj, next_g_cost));
            }
        }

        debug!("astar: open set exhausted, {} unreachable", goal);
        None
    }

    fn name(&self) -> &'static str {
        "astar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_order_prefers_low_cost_then_low_heuristic() {
        let goal = Coordinate::new(4, 0);
        let mut open = BinaryHeap::new();
        open.push(AStarNode::create(&goal, Coordinate::new(0, 0), 0));
        open.push(AStarNode::create(&goal, Coordinate::new(3, 0), 1));
        open.push(AStarNode::create(&goal, Coordinate::new(0, 3), 1));

        let first = open.pop().unwrap();
        assert_eq!(first.point, Coordinate::new(3, 0));
        let second = open.pop().unwrap();
        assert_eq!(second.point, Coordinate::new(0, 0));
    }

    #[test]
    fn test_wall() {
        let mut grid = Grid::new(10, 10).unwrap();
        for x in 0..9 {
            grid.add_obstacle(Coordinate::new(x, 5));
        }

        let path = AStar
            .find_path(&grid, Coordinate::new(0, 0), Coordinate::new(0, 9))
            .unwrap();

        assert_eq!(path.total_cost(), 27);
    }
}
