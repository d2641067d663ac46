//! # Memory Adapter
//!
//! Grid store holding the map text in memory.
//!
//! Good for tests and for running the pipeline on text that never touched
//! a disk.

use std::path::PathBuf;

use crate::core::Grid;
use crate::ports::{GridError, GridResult, GridStore};

/// A map kept as an in-memory text buffer
#[derive(Clone, Debug, Default)]
pub struct MemoryGrid {
    text: String,
}

impl MemoryGrid {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Current contents, in grid text format
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl GridStore for MemoryGrid {
    fn load(&self) -> GridResult<Grid> {
        Grid::parse(&self.text).map_err(|source| GridError::Parse {
            path: PathBuf::from("<memory>"),
            source,
        })
    }

    fn save(&mut self, grid: &Grid) -> GridResult<()> {
        self.text = grid.to_text();
        Ok(())
    }
}
