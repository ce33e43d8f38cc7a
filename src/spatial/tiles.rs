//! Tile variants held by a catalog
//!
//! A variant pairs a decoded tile image with the edge classes sampled from
//! it. Grid cells never own variants; they store a [`TileId`] pointing back
//! into the catalog that produced it.

use crate::spatial::edges::EdgeMask;
use image::RgbaImage;
use std::fmt;
use std::path::{Path, PathBuf};

/// Position of a variant within its catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

impl TileId {
    /// Zero-based catalog index
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One tile image with its classified edges
#[derive(Debug, Clone)]
pub struct TileVariant {
    source: PathBuf,
    surface: RgbaImage,
    edges: EdgeMask,
}

impl TileVariant {
    /// Create a variant from an already decoded surface
    pub const fn new(source: PathBuf, surface: RgbaImage, edges: EdgeMask) -> Self {
        Self {
            source,
            surface,
            edges,
        }
    }

    /// Path the surface was loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Drawable pixels
    pub const fn surface(&self) -> &RgbaImage {
        &self.surface
    }

    /// Edge classes
    pub const fn edges(&self) -> EdgeMask {
        self.edges
    }

    /// Surface size in pixels (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.surface.dimensions()
    }
}
