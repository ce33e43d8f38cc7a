//! Error types for catalog loading, grid filling and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// A tile image is missing or could not be decoded
    TileLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// A tile image does not have the catalog's tile size
    TileDimensions {
        /// Path to the image file
        path: PathBuf,
        /// Required size (width, height)
        expected: (u32, u32),
        /// Size found on disk (width, height)
        actual: (u32, u32),
    },

    /// No catalog tile satisfies the neighbor constraints of a cell
    ///
    /// The filler does not backtrack, so a catalog that cannot continue a
    /// partially built row or column fails here even when a different
    /// arrangement of earlier cells would have succeeded.
    Unsatisfiable {
        /// Row-major cell index
        index: usize,
        /// Cell row
        row: usize,
        /// Cell column
        column: usize,
    },

    /// A constraining neighbor has not been placed yet
    MissingNeighbor {
        /// Cell being filled
        index: usize,
        /// Neighbor expected to hold a tile
        neighbor: usize,
    },

    /// Cell index outside the grid
    CellOutOfBounds {
        /// Requested index
        index: usize,
        /// Number of cells in the grid
        cells: usize,
    },

    /// Tile id does not belong to the catalog
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Number of tiles in the catalog
        max_tiles: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Rendering was requested before a fill pass completed
    IncompleteLayout,

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl TilingError {
    /// Whether the catalog could not be built from its images
    pub const fn is_load_error(&self) -> bool {
        matches!(self, Self::TileLoad { .. } | Self::TileDimensions { .. })
    }

    /// Whether a fill pass ran out of compatible tiles
    pub const fn is_unsatisfiable(&self) -> bool {
        matches!(self, Self::Unsatisfiable { .. })
    }
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TileLoad { path, source } => {
                write!(f, "Failed to load tile '{}': {source}", path.display())
            }
            Self::TileDimensions {
                path,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Tile '{}' is {}x{} pixels, expected {}x{}",
                    path.display(),
                    actual.0,
                    actual.1,
                    expected.0,
                    expected.1
                )
            }
            Self::Unsatisfiable { index, row, column } => {
                write!(
                    f,
                    "No catalog tile fits cell {index} (row {row}, column {column})"
                )
            }
            Self::MissingNeighbor { index, neighbor } => {
                write!(
                    f,
                    "Cell {index} depends on cell {neighbor}, which holds no tile"
                )
            }
            Self::CellOutOfBounds { index, cells } => {
                write!(f, "Cell index {index} is out of bounds (grid has {cells} cells)")
            }
            Self::InvalidTileIndex { index, max_tiles } => {
                write!(f, "Tile index {index} is out of bounds (catalog has {max_tiles} tiles)")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::IncompleteLayout => {
                write!(f, "Grid has no complete layout to render")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TileLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
