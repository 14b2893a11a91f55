use isaac::isaac::RAND_SIZE;
use isaac::{Isaac, Isaac64};

// draw one full batch, reordered to match the generator's result array
#[allow(dead_code)]
pub fn batch_32(rng: &mut Isaac) -> Vec<u32> {
    let mut res = vec![0_u32; RAND_SIZE];
    for i in (0..RAND_SIZE).rev() {
        res[i] = rng.next_u32();
    }
    res
}

// draw one full batch, reordered to match the generator's result array
#[allow(dead_code)]
pub fn batch_64(rng: &mut Isaac64) -> Vec<u64> {
    let mut res = vec![0_u64; RAND_SIZE];
    for i in (0..RAND_SIZE).rev() {
        res[i] = rng.next_u64();
    }
    res
}
