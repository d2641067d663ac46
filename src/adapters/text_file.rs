//! # Text File Adapter
//!
//! Grid store backed by a plain text file on disk.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (grid, antennas) = load_grid("map.txt")?;
//! let effects = resolve(&antennas);
//! save_grid("map_effects.txt", &grid, &effects)?;
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::{Grid, PointSet};
use crate::ports::{GridError, GridResult, GridStore};

/// A map stored as a text file
#[derive(Clone, Debug)]
pub struct TextGridFile {
    path: PathBuf,
}

impl TextGridFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> GridError {
        if source.kind() == io::ErrorKind::NotFound {
            GridError::NotFound(self.path.clone())
        } else {
            GridError::Io {
                path: self.path.clone(),
                source,
            }
        }
    }
}

impl GridStore for TextGridFile {
    fn load(&self) -> GridResult<Grid> {
        let text = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let grid = Grid::parse(&text).map_err(|source| GridError::Parse {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), rows = grid.rows(), cols = grid.cols(), "loaded map");
        Ok(grid)
    }

    fn save(&mut self, grid: &Grid) -> GridResult<()> {
        fs::write(&self.path, grid.to_text()).map_err(|source| GridError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), rows = grid.rows(), cols = grid.cols(), "saved map");
        Ok(())
    }
}

/// Load a map file, returning the grid and its antennas
pub fn load_grid(path: impl AsRef<Path>) -> GridResult<(Grid, PointSet)> {
    TextGridFile::new(path.as_ref()).load_antennas()
}

/// Write `original` with effects overlaid to `path`, replacing any existing file
pub fn save_grid(path: impl AsRef<Path>, original: &Grid, effects: &PointSet) -> GridResult<()> {
    TextGridFile::new(path.as_ref()).save_with_effects(original, effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolve;
    use tempfile::TempDir;

    #[test]
    fn test_load_grid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("map.txt");
        fs::write(&path, "3 3\n.A.\n..0\n...\n").unwrap();

        let (grid, antennas) = load_grid(&path).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
        assert_eq!(antennas.len(), 2);
        assert!(antennas.contains(1, 0));
        assert!(antennas.contains(2, 1));
        assert!(resolve(&antennas).is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");

        match load_grid(&path) {
            Err(GridError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("Expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_load_bad_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "three 3\n...\n").unwrap();

        let err = load_grid(&path).unwrap_err();
        assert!(matches!(err, GridError::Parse { .. }));
        assert!(err.to_string().contains("three"));
    }

    #[test]
    fn test_save_and_reload_with_effects() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("map.txt");
        let target = dir.path().join("effects.txt");
        fs::write(&source, "4 4\nA...\n....\nA...\n....\n").unwrap();

        let (grid, antennas) = load_grid(&source).unwrap();
        // The only effect is (0,4): inside the 12x12 domain, outside this map
        let effects = resolve(&antennas);
        assert!(effects.contains(0, 4));
        save_grid(&target, &grid, &effects).unwrap();

        let written = fs::read_to_string(&target).unwrap();
        assert_eq!(written, "4 4\nA...\n....\nA...\n....\n");

        let (grid, antennas) = load_grid(&source).unwrap();
        let effects = PointSet::new().insert('#', 0, 1).insert('#', 3, 3);
        save_grid(&target, &grid, &effects).unwrap();
        let reloaded = TextGridFile::new(&target).load().unwrap();

        assert_eq!(reloaded.to_text(), "4 4\nA...\n#...\nA...\n...#\n");
        assert_eq!(reloaded.antennas().len(), antennas.len() + 2);
    }

    #[test]
    fn test_sample_map() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/map.txt");
        let (grid, antennas) = load_grid(&path).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (12, 12));
        assert_eq!(antennas.len(), 7);

        let effects = resolve(&antennas);
        // '0' at (8,1) and (5,2): d = (-3,1)
        assert!(effects.contains(11, 0));
        assert!(effects.contains(2, 3));
        for p in &effects {
            assert!(!antennas.contains(p.x(), p.y()));
        }
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "stale contents that are much longer than the grid\n").unwrap();

        let mut store = TextGridFile::new(&path);
        store.save(&Grid::new(1, 2)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1 2\n..\n");
    }
}
