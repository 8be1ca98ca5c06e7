use std::fmt::Write;

use derive_more::Display;

use crate::{Coordinate, Grid, Path};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    #[display(fmt = ".")]
    Free,
    #[display(fmt = "#")]
    Obstacle,
    #[display(fmt = "I")]
    Start,
    #[display(fmt = "F")]
    Goal,
    #[display(fmt = "*")]
    Route,
}

impl CellKind {
    pub fn of(grid: &Grid, path: Option<&Path>, coord: &Coordinate) -> Self {
        if grid.start() == Some(*coord) {
            CellKind::Start
        } else if grid.goal() == Some(*coord) {
            CellKind::Goal
        } else if path.is_some_and(|p| p.contains(coord)) {
            CellKind::Route
        } else if grid.is_blocked(coord) {
            CellKind::Obstacle
        } else {
            CellKind::Free
        }
    }
}

/**
 * Draws the grid row by row (y grows downward), framed by `=` borders and
 * followed by a legend.
 */
pub fn render_map(grid: &Grid, path: Option<&Path>) -> String {
    let border = "=".repeat((grid.width() * 2 + 1) as usize);
    let mut out = String::new();

    out.push_str(&border);
    out.push('\n');
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let kind = CellKind::of(grid, path, &Coordinate::new(x, y));
            // Writing into a String cannot fail.
            let _ = write!(out, "{} ", kind);
        }
        out.push('\n');
    }
    out.push_str(&border);
    out.push('\n');
    let _ = writeln!(
        out,
        "Legend: {}=Start  {}=Goal  {}=Path  {}=Obstacle",
        CellKind::Start,
        CellKind::Goal,
        CellKind::Route,
        CellKind::Obstacle
    );
    out
}
