use derive_more::Display;
use log::{info, warn};

use crate::search::{Dijkstra, SearchAlgorithm};
use crate::{Grid, Path};

/// Why a search was not attempted. Distinct from a search that ran and found
/// no path, which is `Ok(None)`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionError {
    #[display(fmt = "Start or destination is not set")]
    MissingEndpoints,
    #[display(fmt = "The destination is not accessible")]
    DestinationUnreachable,
}

impl std::error::Error for PreconditionError {}

/// Runs searches over one grid with a replaceable strategy, remembering the
/// outcome of the last search that was attempted.
pub struct PathfindingService {
    grid: Grid,
    strategy: Box<dyn SearchAlgorithm>,
    last_result: Option<Path>,
}

impl PathfindingService {
    pub fn new(grid: Grid, strategy: Box<dyn SearchAlgorithm>) -> Self {
        Self {
            grid,
            strategy,
            last_result: None,
        }
    }

    pub fn with_dijkstra(grid: Grid) -> Self {
        Self::new(grid, Box::new(Dijkstra))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn SearchAlgorithm>) {
        info!("search strategy: {} -> {}", self.strategy.name(), strategy.name());
        self.strategy = strategy;
    }

    pub fn last_result(&self) -> Option<&Path> {
        self.last_result.as_ref()
    }

    /**
     * Ok(None) if the search ran and the goal could not be reached.
     * Err if the grid is not ready to be searched; the last result is kept.
     */
    pub fn compute_shortest_path(&mut self) -> Result<Option<Path>, PreconditionError> {
        let (Some(start), Some(goal)) = (self.grid.start(), self.grid.goal()) else {
            warn!("search requested without both endpoints");
            return Err(PreconditionError::MissingEndpoints);
        };

        if !self.grid.is_accessible(&goal) {
            warn!("destination {} is not accessible", goal);
            return Err(PreconditionError::DestinationUnreachable);
        }

        info!(
            "searching {} -> {} with {}",
            start,
            goal,
            self.strategy.name()
        );
        let result = self.strategy.find_path(&self.grid, start, goal);
        match &result {
            Some(path) => info!("{}", path),
            None => info!("no path from {} to {}", start, goal),
        }

        self.last_result = result.clone();
        Ok(result)
    }
}
