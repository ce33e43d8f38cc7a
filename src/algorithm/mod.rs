/// Fixed-size candidate sets over catalog indices
pub mod bitset;
/// Greedy row-major placement with edge constraints
pub mod filler;
/// Injectable random sources for tile choice
pub mod random;
