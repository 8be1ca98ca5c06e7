use std::collections::HashSet;

use derive_more::Display;
use log::{debug, warn};

use crate::Coordinate;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum GridError {
    #[display(fmt = "Invalid grid dimensions {}x{}", width, height)]
    InvalidDimensions { width: i32, height: i32 },
    #[display(fmt = "Endpoint {} out of bounds", _0)]
    InvalidEndpoint(Coordinate),
}

impl std::error::Error for GridError {}

/// Rectangular map of cells, some of them blocked, with optional start and
/// goal points.
///
/// The blocked set never holds the current start or goal: obstacles on an
/// endpoint are rejected, and endpoints placed on an obstacle clear it.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    blocked: HashSet<Coordinate>,
    start: Option<Coordinate>,
    goal: Option<Coordinate>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width < 1 || height < 1 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            blocked: HashSet::new(),
            start: None,
            goal: None,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn start(&self) -> Option<Coordinate> {
        self.start
    }

    pub fn goal(&self) -> Option<Coordinate> {
        self.goal
    }

    pub fn is_in_bounds(&self, coord: &Coordinate) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.width && coord.y < self.height
    }

    pub fn is_blocked(&self, coord: &Coordinate) -> bool {
        self.blocked.contains(coord)
    }

    pub fn is_accessible(&self, coord: &Coordinate) -> bool {
        self.is_in_bounds(coord) && !self.is_blocked(coord)
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Coordinate> {
        self.blocked.iter()
    }

    /**
     * Sets both endpoints, or neither if one is out of bounds.
     * Obstacles under the new endpoints are cleared.
     */
    pub fn set_endpoints(&mut self, start: Coordinate, goal: Coordinate) -> Result<(), GridError> {
        if !self.is_in_bounds(&start) {
            return Err(GridError::InvalidEndpoint(start));
        }

        if !self.is_in_bounds(&goal) {
            return Err(GridError::InvalidEndpoint(goal));
        }

        for endpoint in [start, goal] {
            if self.blocked.remove(&endpoint) {
                warn!("cleared obstacle under endpoint {}", endpoint);
            }
        }

        debug!("endpoints set: start {} goal {}", start, goal);
        self.start = Some(start);
        self.goal = Some(goal);
        Ok(())
    }

    /**
     * Returns false, leaving the grid untouched, if the cell is out of
     * bounds or is the current start or goal.
     */
    pub fn add_obstacle(&mut self, coord: Coordinate) -> bool {
        if !self.is_in_bounds(&coord) {
            debug!("obstacle {} out of bounds", coord);
            return false;
        }

        if self.start == Some(coord) || self.goal == Some(coord) {
            debug!("obstacle {} overlaps an endpoint", coord);
            return false;
        }

        self.blocked.insert(coord);
        true
    }
}
