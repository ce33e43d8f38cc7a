//! Edge-midpoint sampling and binary edge classification

use crate::spatial::edges::{Direction, EdgeMask};
use image::{Rgba, RgbaImage};

/// Sampled pixel color, compared by exact channel equality
pub type EdgeColor = Rgba<u8>;

/// Pixel sampled for an edge of a `width` x `height` tile
///
/// Points sit one pixel inside the left and top borders so anti-aliased
/// outlines do not leak into the classification.
pub const fn sample_point(direction: Direction, width: u32, height: u32) -> (u32, u32) {
    match direction {
        Direction::North => (width / 2, 1),
        Direction::East => (width.saturating_sub(1), height / 2),
        Direction::South => (width / 2, height.saturating_sub(1)),
        Direction::West => (1, height / 2),
    }
}

/// Colors found at the four edge sample points of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSamples {
    /// Top edge color
    pub north: EdgeColor,
    /// Right edge color
    pub east: EdgeColor,
    /// Bottom edge color
    pub south: EdgeColor,
    /// Left edge color
    pub west: EdgeColor,
}

impl EdgeSamples {
    /// Read the four sample points of `image`
    ///
    /// Returns `None` when a point falls outside the image, which only
    /// happens for images narrower or shorter than two pixels.
    pub fn from_image(image: &RgbaImage) -> Option<Self> {
        let (width, height) = image.dimensions();
        let at = |direction| {
            let (x, y) = sample_point(direction, width, height);
            image.get_pixel_checked(x, y).copied()
        };

        Some(Self {
            north: at(Direction::North)?,
            east: at(Direction::East)?,
            south: at(Direction::South)?,
            west: at(Direction::West)?,
        })
    }

    /// Color sampled for one edge
    pub const fn get(&self, direction: Direction) -> EdgeColor {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Flag every edge whose color equals `reference`
    pub fn classify(&self, reference: EdgeColor) -> EdgeMask {
        EdgeMask::new(
            self.north == reference,
            self.east == reference,
            self.south == reference,
            self.west == reference,
        )
    }
}
