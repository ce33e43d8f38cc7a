//! Greedy row-major Wang tile placement
//!
//! Cells are filled left-to-right, top-to-bottom. Each cell receives a tile
//! chosen uniformly among the catalog variants whose west edge matches the
//! east edge of the tile to its left and whose north edge matches the south
//! edge of the tile above. There is no backtracking: when no variant fits,
//! the pass stops with [`TilingError::Unsatisfiable`] and the caller decides
//! whether to try again.

use crate::algorithm::bitset::CandidateSet;
use crate::algorithm::random::TileChooser;
use crate::analysis::catalog::Catalog;
use crate::io::error::{Result, TilingError};
use crate::spatial::edges::{Direction, EdgeMask};
use crate::spatial::grid::{CellRef, Grid};
use crate::spatial::tiles::{TileId, TileVariant};
use log::{debug, trace};

/// Neighbors consulted while choosing a cell's tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborProbe {
    /// Cell being filled
    pub cell: CellRef,
    /// West neighbor whose east edge constrained the choice
    pub west: Option<CellRef>,
    /// North neighbor whose south edge constrained the choice
    pub north: Option<CellRef>,
    /// Number of variants that satisfied every constraint
    pub candidates: usize,
}

/// Variants allowed at `index`, given the tiles already placed around it
///
/// Index 0 is unconstrained. Elsewhere the west neighbor (if any) and the
/// north neighbor (if any) must both hold a tile.
///
/// # Errors
///
/// Returns an error if `index` is outside the grid or a constraining
/// neighbor is empty
pub fn candidates_at(
    grid: &Grid,
    catalog: &Catalog,
    index: usize,
) -> Result<(CandidateSet, NeighborProbe)> {
    let cell = grid.cell_ref(index).ok_or(TilingError::CellOutOfBounds {
        index,
        cells: grid.len(),
    })?;

    if index == 0 {
        let probe = NeighborProbe {
            cell,
            west: None,
            north: None,
            candidates: catalog.len(),
        };
        return Ok((catalog.all().clone(), probe));
    }

    let west = grid.west_of(index);
    let north = grid.north_of(index);
    let mut candidates = catalog.all().clone();

    if let Some(neighbor) = west {
        let edges = neighbor_edges(grid, catalog, cell, neighbor)?;
        candidates.intersect_with(catalog.with_edge(Direction::West, edges.east));
    }
    if let Some(neighbor) = north {
        let edges = neighbor_edges(grid, catalog, cell, neighbor)?;
        candidates.intersect_with(catalog.with_edge(Direction::North, edges.south));
    }

    let probe = NeighborProbe {
        cell,
        west,
        north,
        candidates: candidates.count(),
    };
    Ok((candidates, probe))
}

fn neighbor_edges(
    grid: &Grid,
    catalog: &Catalog,
    cell: CellRef,
    neighbor: CellRef,
) -> Result<EdgeMask> {
    let tile = grid
        .get(neighbor.index)
        .ok_or(TilingError::MissingNeighbor {
            index: cell.index,
            neighbor: neighbor.index,
        })?;
    catalog
        .get(tile)
        .map(TileVariant::edges)
        .ok_or(TilingError::InvalidTileIndex {
            index: tile.index(),
            max_tiles: catalog.len(),
        })
}

/// Fills grids with randomly chosen, edge-consistent tiles
#[derive(Debug, Clone)]
pub struct WangFiller<C> {
    chooser: C,
    probe: Option<NeighborProbe>,
}

impl<C: TileChooser> WangFiller<C> {
    /// Create a filler drawing its choices from `chooser`
    pub const fn new(chooser: C) -> Self {
        Self {
            chooser,
            probe: None,
        }
    }

    /// Neighbors consulted for the most recently attempted cell
    pub const fn last_probe(&self) -> Option<&NeighborProbe> {
        self.probe.as_ref()
    }

    /// Recompute every cell of `grid` from scratch
    ///
    /// The grid is cleared first. On success it is settled; on failure the
    /// cells before the failing index hold this pass's tiles, the rest are
    /// empty, and the grid stays unsettled.
    ///
    /// # Errors
    ///
    /// Returns `TilingError::Unsatisfiable` when some cell has no
    /// compatible tile
    pub fn fill_all(&mut self, grid: &mut Grid, catalog: &Catalog) -> Result<()> {
        grid.clear();
        self.probe = None;

        for index in 0..grid.len() {
            self.fill_cell(grid, catalog, index)?;
        }

        grid.settle();
        debug!(
            "Filled {}x{} grid from {} tiles",
            grid.width(),
            grid.height(),
            catalog.len()
        );
        Ok(())
    }

    /// Choose and place a tile for one cell
    ///
    /// The cell is left untouched when no tile fits.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `index` is outside the grid
    /// - A west or north neighbor has not been placed yet
    /// - No catalog tile satisfies the neighbor constraints
    pub fn fill_cell(&mut self, grid: &mut Grid, catalog: &Catalog, index: usize) -> Result<TileId> {
        let (candidates, probe) = candidates_at(grid, catalog, index)?;
        self.probe = Some(probe);

        let count = candidates.count();
        let unsatisfiable = TilingError::Unsatisfiable {
            index,
            row: probe.cell.row,
            column: probe.cell.column,
        };
        if count == 0 {
            return Err(unsatisfiable);
        }

        let pick = self.chooser.choose(count).min(count - 1);
        let tile = candidates.nth(pick).ok_or(unsatisfiable)?;
        grid.place(index, tile)?;

        trace!(
            "Cell {index} (row {}, column {}) <- tile {tile} of {count} candidates",
            probe.cell.row, probe.cell.column
        );
        Ok(tile)
    }
}
