pub mod isaac32;
pub mod isaac64;
mod state;
pub mod word;

pub use isaac32::Isaac;
pub use isaac64::Isaac64;
pub use word::Word;

/// Log2 of the number of words in the mixing and result arrays
pub const RAND_SIZE_LEN: usize = 8;

/// Number of words in the mixing and result arrays
pub const RAND_SIZE: usize = 1 << RAND_SIZE_LEN;

// Offset pairing each mixing word with one from the other half of the array
const HALF_SIZE: usize = RAND_SIZE / 2;

// Words produced per block of the mixing permutation
const LANES: usize = 4;

/// Mask clearing the sign bit of a 64-bit draw
pub const INT63_MASK: u64 = (1 << 63) - 1;
