//! Shortest walkable routes on a 2-D grid with blocked cells.
//!
//! A [`Grid`] holds the map, a [`PathfindingService`] runs one of the
//! [`search`] strategies over it, and [`render::render_map`] draws the
//! result as text.

mod coordinate;
mod grid;
mod path;
mod pathfinder;
pub mod prompt;
pub mod render;
pub mod search;

pub use coordinate::Coordinate;
pub use grid::{Grid, GridError};
pub use path::Path;
pub use pathfinder::{PathfindingService, PreconditionError};
pub use search::{Algorithm, ParseAlgorithmError, SearchAlgorithm};

/// Smallest map side accepted from users.
pub const MIN_GRID_SIDE: i32 = 2;
/// Largest map side accepted from users.
pub const MAX_GRID_SIDE: i32 = 50;
