//! Tile image analysis

/// Tile catalog construction and lookup
pub mod catalog;
/// Edge-midpoint sampling and classification
pub mod sampling;
