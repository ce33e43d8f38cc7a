//! Randomized greedy Wang tile layouts
//!
//! Tiles are loaded from a directory of images, their four edges classified
//! against one reference color, and a viewport-sized grid is filled cell by
//! cell so that every shared edge carries the same class on both sides.

#![forbid(unsafe_code)]

/// Candidate sets, random sources and the greedy grid filler
pub mod algorithm;
/// Edge sampling and the tile catalog
pub mod analysis;
/// Pointer state, widget focus and the regeneration trigger
pub mod interaction;
/// Input/output operations and error handling
pub mod io;
/// Edges, tiles and the placement grid
pub mod spatial;

pub use io::error::{Result, TilingError};
