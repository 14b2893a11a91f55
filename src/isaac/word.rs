/// Word type of an ISAAC generator
///
/// Carries everything that differs between ISAAC (32-bit) and ISAAC-64:
/// the golden ratio constant, the indirection shifts, the four lane
/// transforms of the permutation and the eight-register mix network.
///
/// Implemented for `u32` and `u64`
pub trait Word: Copy + Eq + core::fmt::Debug {
    /// Width of the word in bytes
    const BYTES: usize;

    const ZERO: Self;
    const ONE: Self;

    /// Initial value of all eight mix registers
    const GOLDEN_RATIO: Self;

    /// Shift selecting the first gather index from the old mixing word
    const IND_SHIFT: u32;

    /// Shift selecting the second gather index from the new mixing word
    const RSL_SHIFT: u32;

    fn wrapping_add(self, rhs: Self) -> Self;

    /// Apply the lane transform to the `a` accumulator
    ///
    /// `lane` is the position inside a block of four, and must be below four
    fn lane_mix(a: Self, lane: usize) -> Self;

    /// One round of the eight-register mix network
    fn mix(r: &mut [Self; 8]);

    /// Select an index into a 256-word array from the bits above `shift`
    fn index(self, shift: u32) -> usize;

    /// Pack up to `BYTES` little-endian bytes into a word, zero-filling missing high bytes
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Write the low `dst.len()` little-endian bytes of the word, at most `BYTES`
    fn write_le(self, dst: &mut [u8]);
}

impl Word for u32 {
    const BYTES: usize = 4;

    const ZERO: Self = 0;
    const ONE: Self = 1;

    const GOLDEN_RATIO: Self = 0x9e37_79b9;

    const IND_SHIFT: u32 = 2;
    const RSL_SHIFT: u32 = 10;

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        u32::wrapping_add(self, rhs)
    }

    #[inline]
    fn lane_mix(a: Self, lane: usize) -> Self {
        match lane {
            0 => a ^ (a << 13),
            1 => a ^ (a >> 6),
            2 => a ^ (a << 2),
            3 => a ^ (a >> 16),
            _ => unreachable!("lane {} outside a block of four", lane),
        }
    }

    fn mix(r: &mut [Self; 8]) {
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *r;

        a ^= b << 11;
        d = d.wrapping_add(a);
        b = b.wrapping_add(c);

        b ^= c >> 2;
        e = e.wrapping_add(b);
        c = c.wrapping_add(d);

        c ^= d << 8;
        f = f.wrapping_add(c);
        d = d.wrapping_add(e);

        d ^= e >> 16;
        g = g.wrapping_add(d);
        e = e.wrapping_add(f);

        e ^= f << 10;
        h = h.wrapping_add(e);
        f = f.wrapping_add(g);

        f ^= g >> 4;
        a = a.wrapping_add(f);
        g = g.wrapping_add(h);

        g ^= h << 8;
        b = b.wrapping_add(g);
        h = h.wrapping_add(a);

        h ^= a >> 9;
        c = c.wrapping_add(h);
        a = a.wrapping_add(b);

        *r = [a, b, c, d, e, f, g, h];
    }

    #[inline]
    fn index(self, shift: u32) -> usize {
        ((self >> shift) & 0xff) as usize
    }

    fn from_le_slice(bytes: &[u8]) -> Self {
        let mut buf = [0_u8; 4];
        buf[..bytes.len()].copy_from_slice(bytes);
        u32::from_le_bytes(buf)
    }

    fn write_le(self, dst: &mut [u8]) {
        let len = dst.len();
        dst.copy_from_slice(&self.to_le_bytes()[..len]);
    }
}

impl Word for u64 {
    const BYTES: usize = 8;

    const ZERO: Self = 0;
    const ONE: Self = 1;

    const GOLDEN_RATIO: Self = 0x9e37_79b9_7f4a_7c13;

    const IND_SHIFT: u32 = 3;
    const RSL_SHIFT: u32 = 11;

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        u64::wrapping_add(self, rhs)
    }

    #[inline]
    fn lane_mix(a: Self, lane: usize) -> Self {
        match lane {
            0 => !(a ^ (a << 21)),
            1 => a ^ (a >> 5),
            2 => a ^ (a << 12),
            3 => a ^ (a >> 33),
            _ => unreachable!("lane {} outside a block of four", lane),
        }
    }

    fn mix(r: &mut [Self; 8]) {
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *r;

        a = a.wrapping_sub(e);
        f ^= h >> 9;
        h = h.wrapping_add(a);

        b = b.wrapping_sub(f);
        g ^= a << 9;
        a = a.wrapping_add(b);

        c = c.wrapping_sub(g);
        h ^= b >> 23;
        b = b.wrapping_add(c);

        d = d.wrapping_sub(h);
        a ^= c << 15;
        c = c.wrapping_add(d);

        e = e.wrapping_sub(a);
        b ^= d >> 14;
        d = d.wrapping_add(e);

        f = f.wrapping_sub(b);
        c ^= e << 20;
        e = e.wrapping_add(f);

        g = g.wrapping_sub(c);
        d ^= f >> 17;
        f = f.wrapping_add(g);

        h = h.wrapping_sub(d);
        e ^= g << 14;
        g = g.wrapping_add(h);

        *r = [a, b, c, d, e, f, g, h];
    }

    #[inline]
    fn index(self, shift: u32) -> usize {
        ((self >> shift) & 0xff) as usize
    }

    fn from_le_slice(bytes: &[u8]) -> Self {
        let mut buf = [0_u8; 8];
        buf[..bytes.len()].copy_from_slice(bytes);
        u64::from_le_bytes(buf)
    }

    fn write_le(self, dst: &mut [u8]) {
        let len = dst.len();
        dst.copy_from_slice(&self.to_le_bytes()[..len]);
    }
}
