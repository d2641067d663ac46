//! # Configuration
//!
//! Resolver configuration.
//!
//! The effect domain is a fixed 12×12 square by default. It is deliberately
//! NOT taken from the loaded map's dimensions: effects are validated against
//! this domain, and the grid writer drops anything outside the map.

use super::point_set::Order;

/// Default width of the effect domain (columns)
pub const DEFAULT_WIDTH: usize = 12;

/// Default height of the effect domain (rows)
pub const DEFAULT_HEIGHT: usize = 12;

/// Half-open rectangle `0 <= x < width`, `0 <= y < height`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: usize,
    pub height: usize,
}

impl Bounds {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Check a signed candidate coordinate, returning it unsigned when inside
    pub fn admit(&self, x: i128, y: i128) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Effect resolver configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Domain every derived effect must fall inside
    pub bounds: Bounds,

    /// Traversal order of the produced effect set
    pub order: Order,
}

impl ResolverConfig {
    /// Default configuration: 12×12 domain, sorted output
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the effect domain
    pub fn with_bounds(mut self, width: usize, height: usize) -> Self {
        self.bounds = Bounds::new(width, height);
        self
    }

    /// Set the output order
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }
}
