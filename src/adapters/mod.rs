//! Adapters - Swappable implementations of port interfaces

mod memory;
mod text_file;

pub use memory::MemoryGrid;
pub use text_file::{load_grid, save_grid, TextGridFile};
