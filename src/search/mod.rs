//! Interchangeable shortest-path strategies over a [`Grid`].
//!
//! Every strategy treats accessible cells as nodes joined to their
//! orthogonal neighbors by unit-cost edges, so all of them return paths of
//! the same optimal cost. Which of several equally short paths comes back
//! depends on the strategy and is not part of the contract.

use std::str::FromStr;

use derive_more::Display;

use crate::{Coordinate, Grid, Path};

mod astar;
mod bfs;
mod dijkstra;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use dijkstra::Dijkstra;

pub trait SearchAlgorithm {
    /// Shortest path from `start` to `goal`, or None when the goal cannot be
    /// reached. Must not mutate the grid.
    fn find_path(&self, grid: &Grid, start: Coordinate, goal: Coordinate) -> Option<Path>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    #[display(fmt = "dijkstra")]
    Dijkstra,
    #[display(fmt = "bfs")]
    BreadthFirst,
    #[display(fmt = "astar")]
    AStar,
}

impl Algorithm {
    pub fn strategy(&self) -> Box<dyn SearchAlgorithm> {
        match self {
            Algorithm::Dijkstra => Box::new(Dijkstra),
            Algorithm::BreadthFirst => Box::new(BreadthFirst),
            Algorithm::AStar => Box::new(AStar),
        }
    }
}

#[derive(Debug, Display, PartialEq, Eq)]
#[display(fmt = "Unknown algorithm: {}", _0)]
pub struct ParseAlgorithmError(String);

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Cells a search may step onto from `coord`.
pub(crate) fn open_neighbors(grid: &Grid, coord: &Coordinate) -> Vec<Coordinate> {
    coord
        .neighbors(grid.width(), grid.height())
        .into_iter()
        .filter(|n| !grid.is_blocked(n))
        .collect()
}

/// Endpoint checks shared by all strategies. False when the search cannot
/// possibly succeed.
pub(crate) fn can_search(grid: &Grid, start: &Coordinate, goal: &Coordinate) -> bool {
    grid.is_in_bounds(start) && grid.is_accessible(goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn strategies() -> Vec<Box<dyn SearchAlgorithm>> {
        vec![
            Algorithm::Dijkstra.strategy(),
            Algorithm::BreadthFirst.strategy(),
            Algorithm::AStar.strategy(),
        ]
    }

    fn assert_valid(grid: &Grid, path: &Path, start: Coordinate, goal: Coordinate) {
        assert_eq!(path.start(), start);
        assert_eq!(path.goal(), goal);
        assert_eq!(path.total_cost() as usize, path.len() - 1);
        for coord in path.coordinates() {
            assert!(grid.is_accessible(coord), "{} not accessible", coord);
        }
        for pair in path.coordinates().windows(2) {
            assert_eq!(pair[0].manhattan_distance(&pair[1]), 1);
        }
    }

    // Deterministic pseudo-random obstacle layout.
    fn scattered_grid(seed: u32) -> Grid {
        let mut grid = Grid::new(12, 9).unwrap();
        let mut state = seed;
        for y in 0..9 {
            for x in 0..12 {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                if (state >> 16) % 4 == 0 {
                    grid.add_obstacle(c(x, y));
                }
            }
        }
        grid
    }

    #[test]
    fn test_open_grid() {
        let grid = Grid::new(3, 3).unwrap();
        for strategy in strategies() {
            let path = strategy.find_path(&grid, c(0, 0), c(2, 2)).unwrap();
            assert_eq!(path.len(), 5, "{}", strategy.name());
            assert_eq!(path.total_cost(), 4, "{}", strategy.name());
            assert_valid(&grid, &path, c(0, 0), c(2, 2));
        }
    }

    #[test]
    fn test_wall_blocks_path() {
        let mut grid = Grid::new(3, 3).unwrap();
        for y in 0..3 {
            grid.add_obstacle(c(1, y));
        }
        for strategy in strategies() {
            assert!(strategy.find_path(&grid, c(0, 0), c(2, 0)).is_none());
        }
    }

    #[test]
    fn test_detour_around_wall() {
        let mut grid = Grid::new(5, 5).unwrap();
        for y in 0..4 {
            grid.add_obstacle(c(2, y));
        }
        for strategy in strategies() {
            let path = strategy.find_path(&grid, c(0, 0), c(4, 0)).unwrap();
            assert_eq!(path.total_cost(), 12, "{}", strategy.name());
            assert_valid(&grid, &path, c(0, 0), c(4, 0));
        }
    }

    #[test]
    fn test_start_equals_goal() {
        let grid = Grid::new(4, 4).unwrap();
        for strategy in strategies() {
            let path = strategy.find_path(&grid, c(2, 1), c(2, 1)).unwrap();
            assert_eq!(path.coordinates(), &[c(2, 1)]);
            assert_eq!(path.total_cost(), 0);
        }
    }

    #[test]
    fn test_blocked_or_out_of_bounds_goal() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.add_obstacle(c(3, 3));
        for strategy in strategies() {
            assert!(strategy.find_path(&grid, c(0, 0), c(3, 3)).is_none());
            assert!(strategy.find_path(&grid, c(0, 0), c(4, 0)).is_none());
            assert!(strategy.find_path(&grid, c(-1, 0), c(1, 1)).is_none());
        }
    }

    #[test]
    fn test_strategies_agree_on_cost() {
        for seed in 1..20 {
            let grid = scattered_grid(seed);
            let start = c(0, 0);
            let goal = c(11, 8);
            let costs: Vec<Option<i32>> = strategies()
                .iter()
                .map(|s| {
                    let path = s.find_path(&grid, start, goal);
                    if let Some(path) = &path {
                        assert_valid(&grid, path, start, goal);
                    }
                    path.map(|p| p.total_cost())
                })
                .collect();
            assert!(costs.windows(2).all(|w| w[0] == w[1]), "seed {}", seed);
        }
    }

    #[test]
    fn test_obstacles_never_shorten_path() {
        let mut grid = Grid::new(8, 8).unwrap();
        let start = c(0, 0);
        let goal = c(7, 7);
        let dijkstra = Dijkstra;
        let mut prev = dijkstra.find_path(&grid, start, goal).map(|p| p.total_cost());

        for (x, y) in [(1, 0), (1, 1), (1, 2), (3, 7), (3, 6), (3, 5), (3, 4), (6, 7), (7, 6)] {
            grid.add_obstacle(c(x, y));
            let cost = dijkstra.find_path(&grid, start, goal).map(|p| p.total_cost());
            match (prev, cost) {
                (Some(before), Some(after)) => assert!(after >= before),
                (None, Some(_)) => panic!("adding an obstacle made the goal reachable"),
                _ => {}
            }
            prev = cost;
        }
        assert_eq!(prev, None);
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("dijkstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!(" BFS ".parse::<Algorithm>(), Ok(Algorithm::BreadthFirst));
        assert_eq!("breadth-first".parse::<Algorithm>(), Ok(Algorithm::BreadthFirst));
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(
            "greedy".parse::<Algorithm>(),
            Err(ParseAlgorithmError("greedy".to_string()))
        );
        assert_eq!(Algorithm::default(), Algorithm::Dijkstra);
        assert_eq!(Algorithm::AStar.to_string(), "astar");
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(Algorithm::Dijkstra.strategy().name(), "dijkstra");
        assert_eq!(Algorithm::BreadthFirst.strategy().name(), "bfs");
        assert_eq!(Algorithm::AStar.strategy().name(), "astar");
    }
}
