//! Spatial data structures
//!
//! This module contains:
//! - Edge directions and per-tile edge classes
//! - The row-major placement grid
//! - Tile variants

/// Directions and edge masks
pub mod edges;
/// Placement grid and neighbor lookup
pub mod grid;
/// Tile variants and ids
pub mod tiles;

pub use grid::Grid;
