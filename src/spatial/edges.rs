//! Compass directions and per-tile edge classes

use std::fmt;

/// One side of a square tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Top edge
    North,
    /// Right edge
    East,
    /// Bottom edge
    South,
    /// Left edge
    West,
}

impl Direction {
    /// All directions, clockwise from north
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The side facing this one across a shared edge
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::North => 0b0001,
            Self::East => 0b0010,
            Self::South => 0b0100,
            Self::West => 0b1000,
        }
    }
}

/// Matching-class membership of the four edges of a tile
///
/// A flag is `true` when the sampled edge color equals the catalog's
/// reference color. Two tiles may sit side by side only when the touching
/// edges carry the same flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EdgeMask {
    /// Top edge class
    pub north: bool,
    /// Right edge class
    pub east: bool,
    /// Bottom edge class
    pub south: bool,
    /// Left edge class
    pub west: bool,
}

impl EdgeMask {
    /// Number of distinct masks
    pub const COMBINATIONS: u8 = 16;

    /// Create a mask from individual flags
    pub const fn new(north: bool, east: bool, south: bool, west: bool) -> Self {
        Self {
            north,
            east,
            south,
            west,
        }
    }

    /// Decode from the low four bits (N=1, E=2, S=4, W=8)
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            north: bits & Direction::North.bit() != 0,
            east: bits & Direction::East.bit() != 0,
            south: bits & Direction::South.bit() != 0,
            west: bits & Direction::West.bit() != 0,
        }
    }

    /// Encode into the low four bits (N=1, E=2, S=4, W=8)
    pub const fn bits(self) -> u8 {
        let mut bits = 0;
        if self.north {
            bits |= Direction::North.bit();
        }
        if self.east {
            bits |= Direction::East.bit();
        }
        if self.south {
            bits |= Direction::South.bit();
        }
        if self.west {
            bits |= Direction::West.bit();
        }
        bits
    }

    /// Flag of a single edge
    pub const fn get(self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Whether `neighbor` may sit on the `direction` side of this tile
    pub const fn accepts(self, direction: Direction, neighbor: Self) -> bool {
        self.get(direction) == neighbor.get(direction.opposite())
    }
}

impl fmt::Display for EdgeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N{} E{} S{} W{}",
            u8::from(self.north),
            u8::from(self.east),
            u8::from(self.south),
            u8::from(self.west)
        )
    }
}
