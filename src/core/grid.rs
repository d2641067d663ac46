//! # Grid
//!
//! The rectangular text map antennas are read from and written to.
//!
//! ## Format
//!
//! ```text
//! 3 3        <- rows cols
//! .A.        <- one token per row, '.' is an empty cell
//! ..0
//! ...
//! ```
//!
//! Rows are read as whitespace-delimited tokens, the way the header is.
//! A short token leaves its trailing cells empty, a long one is cut at
//! `cols`, and missing rows are empty.

use super::point::EFFECT_LABEL;
use super::point_set::PointSet;

/// Marker for an empty cell
pub const EMPTY_CELL: char = '.';

/// Errors raised while parsing grid text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    #[error("Missing grid header: expected `rows cols`")]
    MissingHeader,

    #[error("Invalid grid header field `{0}`: expected a non-negative integer")]
    InvalidHeader(String),
}

/// A `rows × cols` map of cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Create a grid of empty cells
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![EMPTY_CELL; cols]; rows],
        }
    }

    /// Parse grid text
    ///
    /// # Example
    /// ```
    /// use antenna_map::Grid;
    /// let grid = Grid::parse("3 3\n.A.\n..0\n...\n").unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (3, 3));
    /// assert_eq!(grid.antennas().len(), 2);
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridParseError> {
        let mut tokens = text.split_whitespace();
        let rows = header_field(tokens.next())?;
        let cols = header_field(tokens.next())?;

        let mut grid = Grid::new(rows, cols);
        for row in grid.cells.iter_mut() {
            let Some(token) = tokens.next() else {
                break;
            };
            for (cell, c) in row.iter_mut().zip(token.chars()) {
                *cell = c;
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at column x, row y
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y)?.get(x).copied()
    }

    /// Overwrite a cell. Returns false when (x, y) is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, c: char) -> bool {
        match self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(cell) => {
                *cell = c;
                true
            }
            None => false,
        }
    }

    /// Every non-empty cell as a point, x = column, y = row
    pub fn antennas(&self) -> PointSet {
        let mut set = PointSet::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                if c != EMPTY_CELL {
                    set.insert_mut(c, x, y);
                }
            }
        }
        set
    }

    /// Copy of this grid with `#` stamped on every in-range effect cell
    pub fn with_effects(&self, effects: &PointSet) -> Grid {
        let mut grid = self.clone();
        for p in effects {
            grid.set(p.x(), p.y(), EFFECT_LABEL);
        }
        grid
    }

    /// Grid text: header line then one line per row
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {}", self.rows, self.cols)?;
        for row in &self.cells {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn header_field(token: Option<&str>) -> Result<usize, GridParseError> {
    let token = token.ok_or(GridParseError::MissingHeader)?;
    token
        .parse::<usize>()
        .map_err(|_| GridParseError::InvalidHeader(token.to_string()))
}

/// Render both sets onto a fresh `rows × cols` grid
///
/// An antenna label wins over an effect marker, which wins over `.`.
/// Points outside the grid are ignored.
pub fn render_grid(antennas: &PointSet, effects: &PointSet, rows: usize, cols: usize) -> String {
    let mut grid = Grid::new(rows, cols).with_effects(effects);
    for p in antennas {
        grid.set(p.x(), p.y(), p.label());
    }
    grid.to_text()
}
