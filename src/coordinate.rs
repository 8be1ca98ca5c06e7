use std::fmt::{Display, Formatter};

use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, new)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn manhattan_distance(&self, other: &Coordinate) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /**
     * Returns the orthogonal neighbors (down, up, right, left) that lie
     * inside 0 <= x < max_x, 0 <= y < max_y.
     */
    pub fn neighbors(&self, max_x: i32, max_y: i32) -> Vec<Coordinate> {
        DIRECTIONS
            .iter()
            .map(|(dx, dy)| Coordinate::new(self.x + dx, self.y + dy))
            .filter(|c| c.x >= 0 && c.y >= 0 && c.x < max_x && c.y < max_y)
            .collect()
    }
}

const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = Coordinate::new(0, 0);
        let b = Coordinate::new(3, -4);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(b.manhattan_distance(&a), 7);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn test_neighbors_interior() {
        let neighbors = Coordinate::new(1, 1).neighbors(3, 3);
        assert_eq!(
            neighbors,
            vec![
                Coordinate::new(1, 2),
                Coordinate::new(1, 0),
                Coordinate::new(2, 1),
                Coordinate::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_neighbors_corner() {
        let neighbors = Coordinate::new(0, 0).neighbors(3, 3);
        assert_eq!(neighbors.len(), 2);
        assert!(neighbors.contains(&Coordinate::new(1, 0)));
        assert!(neighbors.contains(&Coordinate::new(0, 1)));
    }

    #[test]
    fn test_neighbors_single_cell() {
        assert!(Coordinate::new(0, 0).neighbors(1, 1).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(2, 7).to_string(), "(2, 7)");
    }
}
