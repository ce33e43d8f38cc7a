//! Input handling around the grid filler

/// Per-frame pointer state
pub mod pointer;
/// Session state and the regeneration trigger
pub mod session;
