//! # Antenna Map
//!
//! Find the cells of an antenna map that suffer interference.
//!
//! ## Overview
//!
//! A map is a rectangular grid of cells. Every non-`.` cell holds an antenna,
//! labeled by its frequency. Two antennas on the same frequency that line up
//! (same row, same column, diagonal, or a 2:1 / 3:1 slope) project an effect
//! location beyond each end of the pair. Those locations are marked `#`.
//!
//! ## Layout
//!
//! - `core` - Points, point sets, the effect resolver, grid parsing (pure)
//! - `ports` - The grid store contract
//! - `adapters` - Text file and in-memory grid stores
//!
//! ## Usage
//!
//! ```rust
//! use antenna_map::{resolve, Grid};
//!
//! let grid = Grid::parse("4 4\nA...\n....\nA...\n....\n").unwrap();
//! let antennas = grid.antennas();
//! let effects = resolve(&antennas);
//!
//! assert!(effects.contains(0, 4));
//! println!("{}", grid.with_effects(&effects));
//! ```

pub mod core;
pub mod ports;
pub mod adapters;

// Re-exports for convenience
pub use crate::core::{
    render_grid, resolve, Alignment, EffectResolver, Grid, Notice, Order, Point, PointSet,
    ResolverConfig, EFFECT_LABEL,
};
pub use crate::ports::{GridError, GridResult, GridStore};
pub use crate::adapters::{load_grid, save_grid, MemoryGrid, TextGridFile};
