//! # Point
//!
//! A labeled cell on the antenna map.
//!
//! The label is the antenna's frequency ('A'-'Z', '0'-'9', or any other
//! printable symbol read from a map). The reserved label `#` marks a derived
//! effect location.
//!
//! Two points are the same location when their coordinates match,
//! whatever their labels.

use serde::Serialize;

/// Label reserved for derived effect locations
pub const EFFECT_LABEL: char = '#';

/// Whether a point is a real antenna or a derived effect marker
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointKind {
    Antenna,
    Effect,
}

impl PointKind {
    /// Display tag used when listing a point set
    pub fn tag(&self) -> &'static str {
        match self {
            PointKind::Antenna => "Antenna",
            PointKind::Effect => "Effect",
        }
    }
}

/// A labeled coordinate: `x` is the column, `y` is the row (both 0-based)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    label: char,
    x: usize,
    y: usize,
}

impl Point {
    /// Create a new point
    ///
    /// # Example
    /// ```
    /// use antenna_map::Point;
    /// let p = Point::new('A', 3, 4);
    /// assert_eq!((p.x(), p.y()), (3, 4));
    /// assert!(!p.is_effect());
    /// ```
    pub fn new(label: char, x: usize, y: usize) -> Self {
        Self { label, x, y }
    }

    /// Create an effect marker at (x, y)
    pub fn effect(x: usize, y: usize) -> Self {
        Self::new(EFFECT_LABEL, x, y)
    }

    pub fn label(&self) -> char {
        self.label
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// Coordinate pair (column, row)
    pub fn coord(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn is_effect(&self) -> bool {
        self.label == EFFECT_LABEL
    }

    pub fn kind(&self) -> PointKind {
        if self.is_effect() {
            PointKind::Effect
        } else {
            PointKind::Antenna
        }
    }

    /// True when both points occupy the same cell, labels ignored
    pub fn same_location(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// True when this point sits at (x, y)
    pub fn is_at(&self, x: usize, y: usize) -> bool {
        self.x == x && self.y == y
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({}, {})", self.kind().tag(), self.label, self.x, self.y)
    }
}
