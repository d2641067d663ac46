//! # Core Domain
//!
//! Pure logic, no I/O.
//!
//! This module contains the fundamental types and operations:
//! - `Point` - A labeled cell (antenna or effect marker)
//! - `PointSet` - Ordered, coordinate-deduplicated collection of points
//! - `EffectResolver` - Derives effect locations from antenna pairs
//! - `Grid` - The rectangular text map, parsed and rendered in memory
//!
//! Nothing here touches the filesystem; see `ports` and `adapters` for that.

mod point;
mod point_set;
pub mod resolve;
pub mod grid;
pub mod config;

// Re-exports
pub use point::{Point, PointKind, EFFECT_LABEL};
pub use point_set::{Notice, Order, PointSet};
pub use resolve::{resolve, Alignment, EffectResolver};
pub use grid::{render_grid, Grid, GridParseError};
pub use config::{Bounds, ResolverConfig};
