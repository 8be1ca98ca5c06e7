use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use crate::Coordinate;

/// A walkable route from start to goal, both inclusive.
///
/// Consecutive coordinates are orthogonally adjacent, so the cost is always
/// one less than the number of coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    coordinates: Vec<Coordinate>,
    total_cost: i32,
}

impl Path {
    /**
     * Walks the predecessor links back from `goal` until `start` is reached.
     * None if the chain breaks or loops before reaching `start`.
     */
    pub fn from_predecessors(
        predecessors: &HashMap<Coordinate, Coordinate>,
        start: Coordinate,
        goal: Coordinate,
    ) -> Option<Self> {
        let mut coordinates = vec![goal];
        let mut curr = goal;
        while curr != start {
            if coordinates.len() > predecessors.len() {
                return None;
            }
            curr = *predecessors.get(&curr)?;
            coordinates.push(curr);
        }
        coordinates.reverse();

        let total_cost = coordinates.len() as i32 - 1;
        Some(Self {
            coordinates,
            total_cost,
        })
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn total_cost(&self) -> i32 {
        self.total_cost
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn start(&self) -> Coordinate {
        self.coordinates[0]
    }

    pub fn goal(&self) -> Coordinate {
        self.coordinates[self.coordinates.len() - 1]
    }

    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.coordinates.contains(coord)
    }

    pub fn describe(&self) -> String {
        format!(
            "Path found:\n\
             Total length: {} steps\n\
             Total cost: {}\n\
             Start point: {}\n\
             End point: {}",
            self.len(),
            self.total_cost,
            self.start(),
            self.goal()
        )
    }

    /**
     * Returns the start, every point where the route turns, and the goal.
     */
    pub fn minify(&self) -> Vec<Coordinate> {
        let mut minified = vec![self.start()];

        for window in self.coordinates.windows(3) {
            let (prev, curr, next) = (window[0], window[1], window[2]);
            let dx = curr.x - prev.x;
            let dy = curr.y - prev.y;
            let dx2 = next.x - curr.x;
            let dy2 = next.y - curr.y;

            if dx != dx2 || dy != dy2 {
                minified.push(curr);
            }
        }

        if self.len() > 1 {
            minified.push(self.goal());
        }
        minified
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Path of {} steps (cost: {})", self.len(), self.total_cost)
    }
}
