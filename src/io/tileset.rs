//! Painted demo tiles covering every edge combination
//!
//! Each flagged edge gets a band of the matching color across the middle of
//! that edge; everything else is the other color. Bands stay clear of the
//! other edges' sample points, so loading the tiles back reproduces their
//! masks exactly.

use crate::analysis::catalog::{Catalog, tile_path};
use crate::io::configuration::{DEMO_MATCHING_COLOR, DEMO_OTHER_COLOR, MIN_DEMO_TILE_DIMENSION};
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::spatial::edges::EdgeMask;
use crate::spatial::tiles::TileVariant;
use image::{Rgba, RgbaImage};
use log::info;
use std::path::{Path, PathBuf};

/// Colors used to paint demo tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePalette {
    /// Color of flagged edge bands
    pub matching: Rgba<u8>,
    /// Color of everything else
    pub other: Rgba<u8>,
}

impl Default for TilePalette {
    fn default() -> Self {
        Self {
            matching: Rgba(DEMO_MATCHING_COLOR),
            other: Rgba(DEMO_OTHER_COLOR),
        }
    }
}

/// All sixteen masks, starting with the fully flagged one
///
/// The first tile's north edge sets the catalog's reference color, so
/// leading with a flagged north edge keeps painted and loaded masks equal.
pub fn demo_masks() -> Vec<EdgeMask> {
    (0..EdgeMask::COMBINATIONS)
        .map(|bits| EdgeMask::from_bits(!bits & 0b1111))
        .collect()
}

/// Paint a `width` x `height` tile for `edges`
///
/// # Errors
///
/// Returns an error if either dimension is below `MIN_DEMO_TILE_DIMENSION`
pub fn paint_tile(
    edges: EdgeMask,
    width: u32,
    height: u32,
    palette: TilePalette,
) -> Result<RgbaImage> {
    for (parameter, value) in [("tile_width", width), ("tile_height", height)] {
        if value < MIN_DEMO_TILE_DIMENSION {
            return Err(invalid_parameter(
                parameter,
                &value,
                &format!("demo tiles need at least {MIN_DEMO_TILE_DIMENSION} pixels"),
            ));
        }
    }

    let thickness = (width.min(height) / 4).max(2);
    let across = width / 4..width - width / 4;
    let down = height / 4..height - height / 4;

    let image = RgbaImage::from_fn(width, height, |x, y| {
        let north = edges.north && y < thickness && across.contains(&x);
        let south = edges.south && y >= height - thickness && across.contains(&x);
        let west = edges.west && x < thickness && down.contains(&y);
        let east = edges.east && x >= width - thickness && down.contains(&y);
        if north || south || west || east {
            palette.matching
        } else {
            palette.other
        }
    });
    Ok(image)
}

/// Catalog of painted tiles carrying exactly the given masks
///
/// # Errors
///
/// Returns an error if `masks` is empty or the tile size is too small to
/// paint
pub fn catalog_from_masks(
    masks: &[EdgeMask],
    width: u32,
    height: u32,
    palette: TilePalette,
) -> Result<Catalog> {
    let variants = masks
        .iter()
        .enumerate()
        .map(|(index, &edges)| {
            let surface = paint_tile(edges, width, height, palette)?;
            Ok(TileVariant::new(
                PathBuf::from(format!("painted/{index}")),
                surface,
                edges,
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    Catalog::from_variants(variants)
}

/// Write the demo tile set as `0.png` ... `15.png` into `directory`
///
/// # Errors
///
/// Returns an error if the tile size is too small, the directory cannot be
/// created, or an image cannot be saved
pub fn write_tileset(
    directory: &Path,
    width: u32,
    height: u32,
    palette: TilePalette,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(directory).map_err(|e| TilingError::FileSystem {
        path: directory.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let mut written = Vec::new();
    for (index, edges) in demo_masks().into_iter().enumerate() {
        let path = tile_path(directory, index);
        paint_tile(edges, width, height, palette)?
            .save(&path)
            .map_err(|e| TilingError::ImageExport {
                path: path.clone(),
                source: e,
            })?;
        written.push(path);
    }

    info!(
        "Wrote {} demo tiles ({width}x{height}) to {}",
        written.len(),
        directory.display()
    );
    Ok(written)
}
