//! Tile catalog loading and edge classification
//!
//! The catalog is built once at startup and stays read-only afterwards.
//! Every tile's four edges are classified against a single reference color,
//! the north sample of the first tile, so edge classes are comparable across
//! the whole catalog.

use crate::algorithm::bitset::CandidateSet;
use crate::analysis::sampling::{EdgeColor, EdgeSamples};
use crate::io::configuration::{MIN_TILE_DIMENSION, TILE_EXTENSION};
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::spatial::edges::Direction;
use crate::spatial::tiles::{TileId, TileVariant};
use image::RgbaImage;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Candidate sets for each (edge, class) pair
#[derive(Debug, Clone)]
struct EdgeClassIndex {
    north: [CandidateSet; 2],
    east: [CandidateSet; 2],
    south: [CandidateSet; 2],
    west: [CandidateSet; 2],
}

impl EdgeClassIndex {
    fn build(variants: &[TileVariant]) -> Self {
        let partition = |direction: Direction| {
            let mut unflagged = CandidateSet::new(variants.len());
            let mut flagged = CandidateSet::new(variants.len());
            for (index, variant) in variants.iter().enumerate() {
                if variant.edges().get(direction) {
                    flagged.insert(TileId(index));
                } else {
                    unflagged.insert(TileId(index));
                }
            }
            [unflagged, flagged]
        };

        Self {
            north: partition(Direction::North),
            east: partition(Direction::East),
            south: partition(Direction::South),
            west: partition(Direction::West),
        }
    }

    const fn get(&self, direction: Direction, flag: bool) -> &CandidateSet {
        let [unflagged, flagged] = match direction {
            Direction::North => &self.north,
            Direction::East => &self.east,
            Direction::South => &self.south,
            Direction::West => &self.west,
        };
        if flag { flagged } else { unflagged }
    }
}

/// Immutable, ordered set of tile variants
#[derive(Debug, Clone)]
pub struct Catalog {
    variants: Vec<TileVariant>,
    tile_width: u32,
    tile_height: u32,
    reference_color: Option<EdgeColor>,
    everything: CandidateSet,
    edge_index: EdgeClassIndex,
}

/// Path of the `index`-th tile image inside `directory`
pub fn tile_path(directory: &Path, index: usize) -> PathBuf {
    directory.join(format!("{index}.{TILE_EXTENSION}"))
}

impl Catalog {
    /// Load `count` tiles named `0.png`, `1.png`, ... from `directory`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `count` is zero or a tile dimension is below two pixels
    /// - Any tile image is missing or cannot be decoded
    /// - Any tile image is not exactly `tile_width` x `tile_height`
    pub fn build<P: AsRef<Path>>(
        directory: P,
        tile_width: u32,
        tile_height: u32,
        count: usize,
    ) -> Result<Self> {
        let directory = directory.as_ref();
        if count == 0 {
            return Err(invalid_parameter(
                "count",
                &count,
                &"catalog needs at least one tile",
            ));
        }
        validate_tile_size(tile_width, tile_height)?;

        let mut images = Vec::new();
        for index in 0..count {
            let path = tile_path(directory, index);
            let surface = image::open(&path)
                .map_err(|e| TilingError::TileLoad {
                    path: path.clone(),
                    source: e,
                })?
                .to_rgba8();
            images.push((path, surface));
        }

        let catalog = Self::from_images(images, tile_width, tile_height)?;
        info!(
            "Loaded {} tiles ({}x{}) from {}",
            catalog.len(),
            tile_width,
            tile_height,
            directory.display()
        );
        Ok(catalog)
    }

    /// Classify already decoded tile images
    ///
    /// Images keep their order; the first image's north sample becomes the
    /// reference color.
    ///
    /// # Errors
    ///
    /// Returns an error if `images` is empty, the tile size is below two
    /// pixels, or any image does not match the tile size
    pub fn from_images(
        images: Vec<(PathBuf, RgbaImage)>,
        tile_width: u32,
        tile_height: u32,
    ) -> Result<Self> {
        validate_tile_size(tile_width, tile_height)?;

        let mut reference_color = None;
        let mut variants = Vec::with_capacity(images.len());

        for (path, surface) in images {
            let actual = surface.dimensions();
            let dimension_error = |path: PathBuf| TilingError::TileDimensions {
                path,
                expected: (tile_width, tile_height),
                actual,
            };
            if actual != (tile_width, tile_height) {
                return Err(dimension_error(path));
            }
            let Some(samples) = EdgeSamples::from_image(&surface) else {
                return Err(dimension_error(path));
            };

            let reference = *reference_color.get_or_insert(samples.north);
            let edges = samples.classify(reference);
            debug!("Classified {} as {edges}", path.display());
            variants.push(TileVariant::new(path, surface, edges));
        }

        let mut catalog = Self::from_variants(variants)?;
        catalog.reference_color = reference_color;
        Ok(catalog)
    }

    /// Wrap variants whose edges are already classified
    ///
    /// The tile size is taken from the first variant; every other variant
    /// must match it.
    ///
    /// # Errors
    ///
    /// Returns an error if `variants` is empty or the variants differ in size
    pub fn from_variants(variants: Vec<TileVariant>) -> Result<Self> {
        let Some(first) = variants.first() else {
            return Err(invalid_parameter(
                "variants",
                &0,
                &"catalog needs at least one tile",
            ));
        };
        let (tile_width, tile_height) = first.dimensions();
        if let Some(mismatch) = variants
            .iter()
            .find(|variant| variant.dimensions() != (tile_width, tile_height))
        {
            return Err(TilingError::TileDimensions {
                path: mismatch.source().to_path_buf(),
                expected: (tile_width, tile_height),
                actual: mismatch.dimensions(),
            });
        }

        Ok(Self {
            tile_width,
            tile_height,
            reference_color: None,
            everything: CandidateSet::all(variants.len()),
            edge_index: EdgeClassIndex::build(&variants),
            variants,
        })
    }

    /// Number of variants
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Always false; construction rejects empty catalogs
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Look up a variant
    pub fn get(&self, tile: TileId) -> Option<&TileVariant> {
        self.variants.get(tile.index())
    }

    /// All variants in catalog order
    pub fn variants(&self) -> &[TileVariant] {
        &self.variants
    }

    /// Variants with their ids
    pub fn iter(&self) -> impl Iterator<Item = (TileId, &TileVariant)> + '_ {
        self.variants
            .iter()
            .enumerate()
            .map(|(index, variant)| (TileId(index), variant))
    }

    /// Tile width in pixels
    pub const fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Tile height in pixels
    pub const fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Color that defines the matching edge class, when built from images
    pub const fn reference_color(&self) -> Option<EdgeColor> {
        self.reference_color
    }

    /// Every variant
    pub const fn all(&self) -> &CandidateSet {
        &self.everything
    }

    /// Variants whose `direction` edge carries `flag`
    pub const fn with_edge(&self, direction: Direction, flag: bool) -> &CandidateSet {
        self.edge_index.get(direction, flag)
    }
}

fn validate_tile_size(tile_width: u32, tile_height: u32) -> Result<()> {
    if tile_width < MIN_TILE_DIMENSION {
        return Err(invalid_parameter(
            "tile_width",
            &tile_width,
            &format!("must be at least {MIN_TILE_DIMENSION} pixels"),
        ));
    }
    if tile_height < MIN_TILE_DIMENSION {
        return Err(invalid_parameter(
            "tile_height",
            &tile_height,
            &format!("must be at least {MIN_TILE_DIMENSION} pixels"),
        ));
    }
    Ok(())
}
