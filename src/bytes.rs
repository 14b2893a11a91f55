use crate::isaac::Word;

/// Copy bytes into a word slice
///
/// Bytes are packed little-endian, so the resulting words are the same on every platform
///
/// Copies at most `dst.len() * W::BYTES` bytes, silently ignoring the rest
///
/// Words not reached by `src` are left untouched, a partially covered word
/// gets its missing high bytes zeroed
///
/// Returns the number of bytes copied
pub fn copy_le<W: Word>(dst: &mut [W], src: &[u8]) -> usize {
    let len = core::cmp::min(src.len(), dst.len() * W::BYTES);

    for (word, chunk) in dst.iter_mut().zip(src[..len].chunks(W::BYTES)) {
        *word = W::from_le_slice(chunk);
    }

    len
}

/// Fill a byte slice from a stream of words
///
/// Each word is written little-endian, a trailing partial chunk still consumes a full word
pub fn fill_le<W: Word, F: FnMut() -> W>(dst: &mut [u8], mut next: F) {
    for chunk in dst.chunks_mut(W::BYTES) {
        next().write_le(chunk);
    }
}
