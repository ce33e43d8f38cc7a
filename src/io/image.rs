//! Layout rendering, probe overlay and PNG export

use crate::algorithm::filler::NeighborProbe;
use crate::analysis::catalog::Catalog;
use crate::io::configuration::{NORTH_PROBE_COLOR, PROBE_BORDER_WIDTH, WEST_PROBE_COLOR};
use crate::io::error::{Result, TilingError};
use crate::spatial::grid::{CellRef, Grid};
use image::{Rgba, RgbaImage, imageops};
use std::path::Path;

/// Composite every placed tile onto a canvas
///
/// Tiles are drawn at `(column * tile_width, row * tile_height)`; pixels the
/// grid does not cover keep the background color.
///
/// # Errors
///
/// Returns `TilingError::IncompleteLayout` if the grid is not settled
pub fn render_layout(
    grid: &Grid,
    catalog: &Catalog,
    canvas_size: (u32, u32),
    background: [u8; 4],
) -> Result<RgbaImage> {
    let placements = grid
        .placements(catalog)
        .ok_or(TilingError::IncompleteLayout)?;

    let mut canvas = RgbaImage::from_pixel(canvas_size.0, canvas_size.1, Rgba(background));
    for placement in placements {
        imageops::overlay(
            &mut canvas,
            placement.variant.surface(),
            i64::from(placement.x),
            i64::from(placement.y),
        );
    }
    Ok(canvas)
}

/// Outline the neighbors a fill step consulted
///
/// West neighbor in green, north neighbor in purple.
pub fn draw_probe(canvas: &mut RgbaImage, probe: &NeighborProbe, tile_width: u32, tile_height: u32) {
    let outlines = [(probe.west, WEST_PROBE_COLOR), (probe.north, NORTH_PROBE_COLOR)];
    for (cell, color) in outlines {
        if let Some(cell) = cell {
            outline_cell(canvas, cell, tile_width, tile_height, Rgba(color));
        }
    }
}

fn outline_cell(
    canvas: &mut RgbaImage,
    cell: CellRef,
    tile_width: u32,
    tile_height: u32,
    color: Rgba<u8>,
) {
    let left = cell.column as u32 * tile_width;
    let top = cell.row as u32 * tile_height;
    let border = PROBE_BORDER_WIDTH.min(tile_width / 2).min(tile_height / 2).max(1);

    for dy in 0..tile_height {
        for dx in 0..tile_width {
            let on_border = dx < border
                || dy < border
                || dx >= tile_width - border
                || dy >= tile_height - border;
            if !on_border {
                continue;
            }
            if let Some(pixel) = canvas.get_pixel_mut_checked(left + dx, top + dy) {
                *pixel = color;
            }
        }
    }
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(output_path)
        .map_err(|e| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
