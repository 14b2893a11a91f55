use super::word::Word;
use super::{HALF_SIZE, LANES, RAND_SIZE};

/// Generator state shared by ISAAC and ISAAC-64
///
/// `rsl` holds the seed material while seeding, and the current batch of output afterwards
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct State<W: Word> {
    pub(crate) rsl: [W; RAND_SIZE],
    pub(crate) mem: [W; RAND_SIZE],
    pub(crate) aa: W,
    pub(crate) bb: W,
    pub(crate) cc: W,
    pub(crate) cnt: usize,
}

impl<W: Word> State<W> {
    /// Create a zeroed state
    pub(crate) fn new() -> Self {
        Self {
            rsl: [W::ZERO; RAND_SIZE],
            mem: [W::ZERO; RAND_SIZE],
            aa: W::ZERO,
            bb: W::ZERO,
            cc: W::ZERO,
            cnt: 0,
        }
    }

    /// Seed from words, using at most RAND_SIZE of them
    pub(crate) fn seed_words(&mut self, seed: &[W]) {
        self.clear();
        let len = core::cmp::min(seed.len(), RAND_SIZE);
        self.rsl[..len].copy_from_slice(&seed[..len]);
        self.init(true);
    }

    /// Seed from little-endian bytes, using at most RAND_SIZE * W::BYTES of them
    pub(crate) fn seed_bytes(&mut self, seed: &[u8]) {
        self.clear();
        crate::bytes::copy_le(&mut self.rsl, seed);
        self.init(true);
    }

    /// Reinitialize without seed material
    pub(crate) fn reset(&mut self) {
        self.clear();
        self.init(false);
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    /// Scramble the golden ratio, fold in the seed, and produce the first batch
    ///
    /// Without `use_seed` a single unseeded mix pass fills the mixing array
    pub(crate) fn init(&mut self, use_seed: bool) {
        let mut r = [W::GOLDEN_RATIO; 8];

        // scramble
        for _ in 0..4 {
            W::mix(&mut r);
        }

        if use_seed {
            for i in (0..RAND_SIZE).step_by(8) {
                Self::absorb(&mut r, &self.rsl[i..i + 8]);
                W::mix(&mut r);
                self.mem[i..i + 8].copy_from_slice(&r);
            }

            // second pass makes every seed word affect every mixing word
            for i in (0..RAND_SIZE).step_by(8) {
                Self::absorb(&mut r, &self.mem[i..i + 8]);
                W::mix(&mut r);
                self.mem[i..i + 8].copy_from_slice(&r);
            }
        } else {
            for i in (0..RAND_SIZE).step_by(8) {
                W::mix(&mut r);
                self.mem[i..i + 8].copy_from_slice(&r);
            }
        }

        self.step();
        self.cnt = RAND_SIZE;
    }

    fn absorb(r: &mut [W; 8], words: &[W]) {
        for (reg, &word) in r.iter_mut().zip(words.iter()) {
            *reg = reg.wrapping_add(word);
        }
    }

    /// Run one pass of the mixing permutation, refilling the output batch
    pub(crate) fn step(&mut self) {
        self.cc = self.cc.wrapping_add(W::ONE);

        let mut a = self.aa;
        let mut b = self.bb.wrapping_add(self.cc);

        for block in (0..RAND_SIZE).step_by(LANES) {
            for lane in 0..LANES {
                let i = block + lane;
                let x = self.mem[i];

                a = W::lane_mix(a, lane).wrapping_add(self.mem[(i + HALF_SIZE) % RAND_SIZE]);

                let y = self.mem[x.index(W::IND_SHIFT)].wrapping_add(a).wrapping_add(b);
                self.mem[i] = y;

                b = self.mem[y.index(W::RSL_SHIFT)].wrapping_add(x);
                self.rsl[i] = b;
            }
        }

        self.bb = b;
        self.aa = a;
    }

    /// Hand out the next word of the batch, from the top down
    pub(crate) fn next_word(&mut self) -> W {
        if self.cnt == 0 {
            self.step();
            self.cnt = RAND_SIZE - 1;
            return self.rsl[RAND_SIZE - 1];
        }

        self.cnt -= 1;
        self.rsl[self.cnt]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, RngCore};

    #[test]
    fn check_zero_state() {
        let state = State::<u32>::new();

        assert!(state.rsl.iter().all(|&w| w == 0));
        assert!(state.mem.iter().all(|&w| w == 0));
        assert_eq!((state.aa, state.bb, state.cc, state.cnt), (0, 0, 0, 0));
    }

    #[test]
    fn check_zero_state_draws_deterministically() {
        let mut left = State::<u64>::new();
        let mut right = State::<u64>::new();

        for _ in 0..600 {
            assert_eq!(left.next_word(), right.next_word());
        }
        assert_eq!(left.cc, 3);
    }

    #[test]
    fn check_step_is_pure() {
        let mut seed = [0_u64; 16];
        for word in seed.iter_mut() {
            *word = thread_rng().next_u64();
        }

        let mut state = State::<u64>::new();
        state.seed_words(&seed);

        let mut other = state.clone();
        state.step();
        other.step();

        assert!(state == other);
        assert_eq!(state.cc, 2);
    }

    #[test]
    fn check_init_leaves_full_batch() {
        let mut state = State::<u32>::new();
        state.seed_words(&[1, 2, 3]);

        assert_eq!(state.cnt, RAND_SIZE);
        assert_eq!(state.cc, 1);
    }

    #[test]
    fn check_cursor_descends_then_refills() {
        let mut state = State::<u32>::new();
        state.seed_words(&[thread_rng().next_u32()]);

        let batch = state.rsl;
        for i in (0..RAND_SIZE).rev() {
            assert_eq!(state.next_word(), batch[i]);
            assert_eq!(state.cnt, i);
        }

        let mut expected = state.clone();
        expected.step();

        let word = state.next_word();
        assert_eq!(state.cnt, RAND_SIZE - 1);
        assert_eq!(word, expected.rsl[RAND_SIZE - 1]);
        assert!(state.rsl != batch);
    }

    #[test]
    fn check_reseed_leaves_no_residue() {
        let mut state = State::<u64>::new();
        state.seed_bytes(b"first seed material");
        for _ in 0..1000 {
            let _ = state.next_word();
        }
        state.seed_bytes(b"second");

        let mut fresh = State::<u64>::new();
        fresh.seed_bytes(b"second");

        assert!(state == fresh);
    }

    #[test]
    fn check_reset_is_seed_independent() {
        let mut left = State::<u32>::new();
        left.seed_bytes(b"some seed");
        left.reset();

        let mut right = State::<u32>::new();
        right.reset();

        assert!(left == right);
        assert_eq!(right.cnt, RAND_SIZE);

        let mut seeded = State::<u32>::new();
        seeded.seed_words(&[]);
        assert!(seeded != right);
    }

    #[test]
    fn check_seed_words_truncates() {
        let long = [0x5a5a_5a5a_u32; RAND_SIZE + 10];

        let mut left = State::<u32>::new();
        left.seed_words(&long);

        let mut right = State::<u32>::new();
        right.seed_words(&long[..RAND_SIZE]);

        assert!(left == right);
    }
}
