/// Command-line interface
pub mod cli;
/// Defaults and fixed limits
pub mod configuration;
/// Error type and result alias
pub mod error;
/// Layout rendering and PNG export
pub mod image;
/// Progress display for multi-layout runs
pub mod progress;
/// Painted demo tile sets
pub mod tileset;
