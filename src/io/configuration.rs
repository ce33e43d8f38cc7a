//! Runtime defaults and fixed limits

// Catalog input
/// Directory searched for tile images
pub const DEFAULT_TILE_DIRECTORY: &str = "./tile_sets";
/// Extension of tile image files (`0.png`, `1.png`, ...)
pub const TILE_EXTENSION: &str = "png";
/// Default tile width in pixels
pub const DEFAULT_TILE_WIDTH: u32 = 32;
/// Default tile height in pixels
pub const DEFAULT_TILE_HEIGHT: u32 = 32;
/// Default number of tiles in a catalog
pub const DEFAULT_TILE_COUNT: usize = 16;

// Edge samples sit one pixel inside the border
/// Smallest tile side for which every sample point lies inside the tile
pub const MIN_TILE_DIMENSION: u32 = 2;

/// Smallest side of a painted demo tile
pub const MIN_DEMO_TILE_DIMENSION: u32 = 8;

// Viewport
/// Default viewport width in pixels
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1920;
/// Default viewport height in pixels
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 960;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension in cells
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Generation
/// Fill passes attempted per layout before giving up
pub const DEFAULT_ATTEMPTS: usize = 8;
/// Number of layouts generated per run
pub const DEFAULT_LAYOUTS: usize = 1;

// Rendering
/// Canvas color behind the tiles
pub const BACKGROUND_COLOR: [u8; 4] = [50, 50, 50, 255];
/// Outline of the last consulted west neighbor
pub const WEST_PROBE_COLOR: [u8; 4] = [0, 255, 0, 255];
/// Outline of the last consulted north neighbor
pub const NORTH_PROBE_COLOR: [u8; 4] = [208, 105, 240, 255];
/// Probe outline thickness in pixels
pub const PROBE_BORDER_WIDTH: u32 = 5;

// Demo tile set
/// Band color of matching-class edges
pub const DEMO_MATCHING_COLOR: [u8; 4] = [5, 163, 63, 255];
/// Fill color of everything else
pub const DEMO_OTHER_COLOR: [u8; 4] = [20, 20, 20, 255];

// Output
/// Default layout image path
pub const DEFAULT_OUTPUT: &str = "wang_layout.png";
