//! # Ports
//!
//! Contracts for the grid I/O collaborator. No implementations live here.
//!
//! - Ports say WHAT the pipeline needs from storage
//! - Adapters decide HOW (a text file, a buffer in memory)
//!
//! `core` never imports from this module.

mod grid_store;

pub use grid_store::{GridError, GridResult, GridStore};
