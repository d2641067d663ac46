//! # Grid Store Port
//!
//! Trait for loading and saving antenna maps.
//!
//! Implemented by storage adapters (text file, in-memory buffer).

use std::path::PathBuf;

use crate::core::{Grid, GridParseError, PointSet};

/// Result type for grid store operations
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur while loading or saving a grid
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The map does not exist
    #[error("Map not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading or writing failed
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The map text is malformed
    #[error("Invalid map {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: GridParseError,
    },
}

/// Trait for loading and saving grids
///
/// Storage adapters implement this trait.
pub trait GridStore {
    /// Read and parse the grid
    fn load(&self) -> GridResult<Grid>;

    /// Write the grid, replacing whatever was stored
    fn save(&mut self, grid: &Grid) -> GridResult<()>;

    /// Load the grid and extract its antennas
    fn load_antennas(&self) -> GridResult<(Grid, PointSet)> {
        let grid = self.load()?;
        let antennas = grid.antennas();
        Ok((grid, antennas))
    }

    /// Save a copy of `original` with every effect cell marked `#`
    fn save_with_effects(&mut self, original: &Grid, effects: &PointSet) -> GridResult<()> {
        self.save(&original.with_effects(effects))
    }
}
