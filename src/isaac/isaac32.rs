//! Implementation of ISAAC, Bob Jenkins' 32-bit "Indirection, Shift, Accumulate, Add, Count" PRNG:
//!
//! http://burtleburtle.net/bob/rand/isaacafa.html
//!
//! Not a secure generator, the classic behavior is reproduced bit-for-bit

use core::fmt;

use rand::{Error, RngCore, SeedableRng};

use super::state::State;
use super::INT63_MASK;

/// Maximum number of seed bytes consumed by `seed_bytes`
pub const SEED_BYTES: usize = super::RAND_SIZE * 4;

/// ISAAC PRNG (32-bit)
#[derive(Clone, PartialEq, Eq)]
pub struct Isaac {
    pub(crate) state: State<u32>,
}

impl Isaac {
    /// Create a zeroed ISAAC PRNG
    ///
    /// The zero state still produces a reproducible stream, but should be seeded before use
    pub fn new() -> Self {
        Self { state: State::new() }
    }

    /// Seed from an integer
    ///
    /// The low half goes into seed word 0, the high half into seed word 1
    pub fn seed(&mut self, seed: u64) {
        self.seed_words(&[seed as u32, (seed >> 32) as u32]);
    }

    /// Seed from up to 256 words, any more are ignored
    pub fn seed_words(&mut self, seed: &[u32]) {
        self.state.seed_words(seed);
    }

    /// Seed from a byte sequence
    ///
    /// Bytes are packed little-endian, at most `SEED_BYTES` are used.
    /// An empty sequence is an all-zero seed
    pub fn seed_bytes(&mut self, seed: &[u8]) {
        self.state.seed_bytes(seed);
    }

    /// Seed from the UTF-8 bytes of a string
    pub fn seed_str(&mut self, seed: &str) {
        self.seed_bytes(seed.as_bytes());
    }

    /// Reinitialize to the seed-independent baseline state
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Random 32-bit unsigned integer
    pub fn next_u32(&mut self) -> u32 {
        self.state.next_word()
    }

    /// Random 64-bit unsigned integer, first draw in the high half
    pub fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    /// Non-negative 63-bit integer
    pub fn next_i63(&mut self) -> i64 {
        (self.next_u64() & INT63_MASK) as i64
    }

    /// Non-negative 31-bit integer, the top bits of `next_i63`
    pub fn next_i31(&mut self) -> i32 {
        (self.next_i63() >> 32) as i32
    }

    /// Non-negative platform-width integer
    pub fn next_isize(&mut self) -> isize {
        let u = self.next_u64() as usize;
        (u << 1 >> 1) as isize
    }
}

impl Default for Isaac {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Isaac {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Isaac {{ cc: {}, cnt: {} }}", self.state.cc, self.state.cnt)
    }
}

impl RngCore for Isaac {
    fn next_u32(&mut self) -> u32 {
        Isaac::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        Isaac::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        crate::bytes::fill_le(dest, || self.state.next_word());
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Isaac {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut rng = Self::new();
        rng.seed_bytes(&seed);
        rng
    }

    fn seed_from_u64(state: u64) -> Self {
        let mut rng = Self::new();
        rng.seed(state);
        rng
    }
}
