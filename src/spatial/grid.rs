//! Row-major grid of placed tiles
//!
//! Cells are addressed by a flat row-major index; `index / width` is the row
//! and `index % width` the column. A grid only counts as settled after a
//! complete fill pass. Any manual placement or clearing unsettles it, and
//! renderers only ever see placements of a settled grid.

use crate::analysis::catalog::Catalog;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::spatial::edges::Direction;
use crate::spatial::tiles::{TileId, TileVariant};
use ndarray::Array2;

/// Location of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    /// Row-major index
    pub index: usize,
    /// Zero-based row
    pub row: usize,
    /// Zero-based column
    pub column: usize,
}

/// A placed tile and where a renderer should draw it
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    /// Cell holding the tile
    pub cell: CellRef,
    /// Catalog id of the tile
    pub tile: TileId,
    /// The tile itself
    pub variant: &'a TileVariant,
    /// Left pixel coordinate (`column * tile_width`)
    pub x: u32,
    /// Top pixel coordinate (`row * tile_height`)
    pub y: u32,
}

/// Adjacent pair whose touching edges disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeViolation {
    /// Cell whose west or north edge was checked
    pub cell: CellRef,
    /// The west or north neighbor
    pub neighbor: CellRef,
    /// Edge of `cell` facing `neighbor`
    pub direction: Direction,
}

/// Fixed-size grid of optional tile references
#[derive(Debug, Clone)]
pub struct Grid {
    /// Indexed by (row, column), standard row-major layout
    cells: Array2<Option<TileId>>,
    settled: bool,
}

impl Grid {
    /// Create an empty grid
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or above
    /// `MAX_GRID_DIMENSION`
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        Ok(Self {
            cells: Array2::from_elem((height, width), None),
            settled: false,
        })
    }

    /// Create the largest grid of whole tiles that fits a viewport
    ///
    /// # Errors
    ///
    /// Returns an error if a tile dimension is zero or the viewport cannot
    /// hold a single tile
    pub fn for_viewport(
        viewport_width: u32,
        viewport_height: u32,
        tile_width: u32,
        tile_height: u32,
    ) -> Result<Self> {
        if tile_width == 0 || tile_height == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &format!("{tile_width}x{tile_height}"),
                &"tile dimensions must be positive",
            ));
        }
        let width = (viewport_width / tile_width) as usize;
        let height = (viewport_height / tile_height) as usize;
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "viewport",
                &format!("{viewport_width}x{viewport_height}"),
                &format!("cannot hold a {tile_width}x{tile_height} tile"),
            ));
        }
        Self::new(width, height)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; construction rejects empty grids
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Location of a flat index, `None` when out of bounds
    pub fn cell_ref(&self, index: usize) -> Option<CellRef> {
        let width = self.width();
        (index < self.len()).then(|| CellRef {
            index,
            row: index / width,
            column: index % width,
        })
    }

    /// Tile at a flat index, `None` when empty or out of bounds
    pub fn get(&self, index: usize) -> Option<TileId> {
        let cell = self.cell_ref(index)?;
        self.cells.get([cell.row, cell.column]).copied().flatten()
    }

    /// West neighbor, absent in the leftmost column
    pub fn west_of(&self, index: usize) -> Option<CellRef> {
        let cell = self.cell_ref(index)?;
        if cell.column > 0 {
            self.cell_ref(index - 1)
        } else {
            None
        }
    }

    /// North neighbor, absent in the top row
    pub fn north_of(&self, index: usize) -> Option<CellRef> {
        let cell = self.cell_ref(index)?;
        if cell.row > 0 {
            self.cell_ref(index - self.width())
        } else {
            None
        }
    }

    /// Put a tile into a cell
    ///
    /// No edge checks are made here; the grid becomes unsettled until the
    /// next complete fill pass.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is outside the grid
    pub fn place(&mut self, index: usize, tile: TileId) -> Result<()> {
        let cells = self.len();
        let cell = self
            .cell_ref(index)
            .ok_or(TilingError::CellOutOfBounds { index, cells })?;
        if let Some(slot) = self.cells.get_mut([cell.row, cell.column]) {
            *slot = Some(tile);
        }
        self.settled = false;
        Ok(())
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.settled = false;
    }

    /// Whether every cell holds a tile
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Whether the last fill pass completed
    pub const fn is_settled(&self) -> bool {
        self.settled
    }

    /// Mark the grid settled if every cell holds a tile
    pub(crate) fn settle(&mut self) -> bool {
        self.settled = self.is_filled();
        self.settled
    }

    /// Row-major snapshot of all cells
    pub fn tiles(&self) -> Vec<Option<TileId>> {
        self.cells.iter().copied().collect()
    }

    /// Tiles with pixel positions, available only once settled
    pub fn placements<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> Option<impl Iterator<Item = Placement<'a>> + 'a> {
        let tile_width = catalog.tile_width();
        let tile_height = catalog.tile_height();
        let width = self.width();

        self.settled.then(move || {
            self.cells
                .indexed_iter()
                .filter_map(move |((row, column), slot)| {
                    let tile = (*slot)?;
                    let variant = catalog.get(tile)?;
                    Some(Placement {
                        cell: CellRef {
                            index: row * width + column,
                            row,
                            column,
                        },
                        tile,
                        variant,
                        x: column as u32 * tile_width,
                        y: row as u32 * tile_height,
                    })
                })
        })
    }

    /// Every adjacent pair of placed tiles whose shared edges disagree
    ///
    /// Empty cells and tiles unknown to `catalog` are skipped.
    pub fn edge_violations(&self, catalog: &Catalog) -> Vec<EdgeViolation> {
        let edges_at = |index: usize| {
            self.get(index)
                .and_then(|tile| catalog.get(tile))
                .map(TileVariant::edges)
        };

        let mut violations = Vec::new();
        for index in 0..self.len() {
            let (Some(cell), Some(edges)) = (self.cell_ref(index), edges_at(index)) else {
                continue;
            };
            let neighbors = [
                (Direction::West, self.west_of(index)),
                (Direction::North, self.north_of(index)),
            ];
            for (direction, neighbor) in neighbors {
                let Some(neighbor) = neighbor else {
                    continue;
                };
                let Some(neighbor_edges) = edges_at(neighbor.index) else {
                    continue;
                };
                if !edges.accepts(direction, neighbor_edges) {
                    violations.push(EdgeViolation {
                        cell,
                        neighbor,
                        direction,
                    });
                }
            }
        }
        violations
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 || value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be between 1 and {MAX_GRID_DIMENSION} cells"),
        ));
    }
    Ok(())
}
