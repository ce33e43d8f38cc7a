use crate::spatial::tiles::TileId;
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size set of catalog indices
///
/// Every catalog precomputes one set per (edge, class) pair, so a cell's
/// candidates are the intersection of at most two of those sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    bits: BitVec,
}

impl CandidateSet {
    /// Create a set with no tiles present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Create a set containing every tile
    pub fn all(capacity: usize) -> Self {
        Self {
            bits: bitvec![1; capacity],
        }
    }

    /// Number of catalog slots this set covers
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a tile; ids beyond the capacity are ignored
    pub fn insert(&mut self, tile: TileId) {
        if tile.index() < self.bits.len() {
            self.bits.set(tile.index(), true);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: TileId) -> bool {
        self.bits.get(tile.index()).as_deref() == Some(&true)
    }

    /// Intersect this set with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// The `n`-th member in ascending catalog order
    pub fn nth(&self, n: usize) -> Option<TileId> {
        self.bits.iter_ones().nth(n).map(TileId)
    }

    /// Members in ascending catalog order
    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.bits.iter_ones().map(TileId)
    }

    /// Extract all members as a vector
    pub fn to_vec(&self) -> Vec<TileId> {
        self.iter().collect()
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<usize> = self.iter().map(TileId::index).collect();
        write!(f, "CandidateSet({} tiles: {members:?})", self.count())
    }
}
