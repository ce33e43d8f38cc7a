//! Application state around the grid filler
//!
//! A session owns the catalog, the viewport grid and the filler. Input is
//! handed in per frame; a left click that lands on no widget while no
//! widget is active triggers exactly one full regeneration.

use crate::algorithm::filler::{NeighborProbe, WangFiller};
use crate::algorithm::random::TileChooser;
use crate::analysis::catalog::Catalog;
use crate::interaction::pointer::PointerState;
use crate::io::configuration::{
    BACKGROUND_COLOR, DEFAULT_TILE_COUNT, DEFAULT_TILE_DIRECTORY, DEFAULT_TILE_HEIGHT,
    DEFAULT_TILE_WIDTH, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{draw_probe, render_layout};
use crate::spatial::grid::Grid;
use image::RgbaImage;
use log::debug;
use std::path::PathBuf;

/// Where tiles come from and how large the viewport is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilingConfig {
    /// Directory holding `0.png` ... `<count - 1>.png`
    pub tile_directory: PathBuf,
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
    /// Number of tiles to load
    pub tile_count: usize,
    /// Viewport width in pixels
    pub viewport_width: u32,
    /// Viewport height in pixels
    pub viewport_height: u32,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            tile_directory: PathBuf::from(DEFAULT_TILE_DIRECTORY),
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            tile_count: DEFAULT_TILE_COUNT,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl TilingConfig {
    /// Check values that do not need the file system
    ///
    /// # Errors
    ///
    /// Returns an error if the tile count is zero or the viewport is smaller
    /// than one tile
    pub fn validate(&self) -> Result<()> {
        if self.tile_count == 0 {
            return Err(invalid_parameter(
                "tile_count",
                &self.tile_count,
                &"catalog needs at least one tile",
            ));
        }
        if self.viewport_width < self.tile_width || self.viewport_height < self.tile_height {
            return Err(invalid_parameter(
                "viewport",
                &format!("{}x{}", self.viewport_width, self.viewport_height),
                &format!(
                    "cannot hold a {}x{} tile",
                    self.tile_width, self.tile_height
                ),
            ));
        }
        Ok(())
    }
}

/// Identifier of a widget owned by the surrounding UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u32);

/// Hot (under the pointer) and active (clicked) widgets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Focus {
    /// Widget under the pointer
    pub hot: Option<WidgetId>,
    /// Widget that received the last click
    pub active: Option<WidgetId>,
}

/// What a frame's input resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Nothing to do
    Idle,
    /// The grid was refilled
    Regenerated,
    /// A widget became active
    WidgetActivated(WidgetId),
    /// The active widget was clicked again
    WidgetClicked(WidgetId),
    /// The active widget lost focus
    WidgetReleased(WidgetId),
}

/// Catalog, grid and filler owned together
#[derive(Debug)]
pub struct Session<C> {
    catalog: Catalog,
    grid: Grid,
    filler: WangFiller<C>,
    focus: Focus,
    viewport: (u32, u32),
    layouts: usize,
}

impl<C: TileChooser> Session<C> {
    /// Load the catalog and size the grid to the viewport
    ///
    /// The grid starts empty; call [`Session::regenerate`] or deliver a
    /// click to fill it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the catalog
    /// cannot be loaded
    pub fn open(config: &TilingConfig, chooser: C) -> Result<Self> {
        config.validate()?;
        let catalog = Catalog::build(
            &config.tile_directory,
            config.tile_width,
            config.tile_height,
            config.tile_count,
        )?;
        Self::with_catalog(catalog, (config.viewport_width, config.viewport_height), chooser)
    }

    /// Start from an existing catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the viewport cannot hold a single tile
    pub fn with_catalog(catalog: Catalog, viewport: (u32, u32), chooser: C) -> Result<Self> {
        let grid = Grid::for_viewport(
            viewport.0,
            viewport.1,
            catalog.tile_width(),
            catalog.tile_height(),
        )?;
        Ok(Self {
            catalog,
            grid,
            filler: WangFiller::new(chooser),
            focus: Focus::default(),
            viewport,
            layouts: 0,
        })
    }

    /// Refill the whole grid
    ///
    /// # Errors
    ///
    /// Returns `TilingError::Unsatisfiable` when the pass gets stuck; the
    /// grid then stays unsettled until a later pass succeeds
    pub fn regenerate(&mut self) -> Result<()> {
        self.filler.fill_all(&mut self.grid, &self.catalog)?;
        self.layouts += 1;
        Ok(())
    }

    /// Resolve one frame of pointer input
    ///
    /// # Errors
    ///
    /// Propagates fill errors when the frame triggered a regeneration
    pub fn handle_frame(&mut self, pointer: &PointerState) -> Result<FrameOutcome> {
        if !pointer.left_released {
            return Ok(FrameOutcome::Idle);
        }

        let outcome = match (self.focus.active, self.focus.hot) {
            (Some(active), Some(hot)) if active == hot => FrameOutcome::WidgetClicked(active),
            (_, Some(hot)) => {
                self.focus.active = Some(hot);
                FrameOutcome::WidgetActivated(hot)
            }
            (Some(active), None) => {
                self.focus.active = None;
                FrameOutcome::WidgetReleased(active)
            }
            (None, None) => {
                self.regenerate()?;
                FrameOutcome::Regenerated
            }
        };
        debug!("Frame at {:?} resolved to {outcome:?}", pointer.position);
        Ok(outcome)
    }

    /// Set the widget under the pointer
    pub const fn set_hot(&mut self, widget: Option<WidgetId>) {
        self.focus.hot = widget;
    }

    /// Current hot/active widgets
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// The loaded catalog
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The grid in its current state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Viewport size in pixels
    pub const fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Neighbors consulted for the last filled cell
    pub const fn last_probe(&self) -> Option<&NeighborProbe> {
        self.filler.last_probe()
    }

    /// Number of successful fill passes
    pub const fn layouts_generated(&self) -> usize {
        self.layouts
    }

    /// Draw the current layout at viewport size
    ///
    /// With `overlay`, the neighbors consulted for the last cell are
    /// outlined.
    ///
    /// # Errors
    ///
    /// Returns `TilingError::IncompleteLayout` if no fill pass has completed
    /// since the grid was last changed
    pub fn render(&self, overlay: bool) -> Result<RgbaImage> {
        let mut canvas = render_layout(&self.grid, &self.catalog, self.viewport, BACKGROUND_COLOR)?;
        if let Some(probe) = self.last_probe().filter(|_| overlay) {
            draw_probe(
                &mut canvas,
                probe,
                self.catalog.tile_width(),
                self.catalog.tile_height(),
            );
        }
        Ok(canvas)
    }
}
