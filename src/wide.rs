use equator::debug_assert;

/// Returns the 64-bit window of the full product `a * b` that starts `shift` bits below its most
/// significant end. `shift == 0` is the high word, `shift == 64` the low word.
#[inline]
pub const fn mul_shift(a: u64, b: u64, shift: u32) -> u64 {
    let full = a as u128 * b as u128;
    ((full << shift) >> 64) as u64
}

/// Same as [`mul_shift`], composed from four 32x32 partial products.
#[inline]
pub fn mul_shift_halves(a: u64, b: u64, shift: u32) -> u64 {
    debug_assert!(shift <= 64);

    let (a_lo, a_hi) = (a & 0xFFFF_FFFF, a >> 32);
    let (b_lo, b_hi) = (b & 0xFFFF_FFFF, b >> 32);

    let lo_lo = a_lo * b_lo;
    let hi_lo = a_hi * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_hi = a_hi * b_hi;

    let mid = (lo_lo >> 32) + (hi_lo & 0xFFFF_FFFF) + (lo_hi & 0xFFFF_FFFF);
    let hi = hi_hi + (hi_lo >> 32) + (lo_hi >> 32) + (mid >> 32);
    let lo = (mid << 32) | (lo_lo & 0xFFFF_FFFF);

    match shift {
        0 => hi,
        64 => lo,
        shift => (hi << shift) | (lo >> (64 - shift)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rug::Integer;

    fn reference(a: u64, b: u64, shift: u32) -> u64 {
        let full = Integer::from(a) * Integer::from(b);
        let window = (full << shift) >> 64u32;
        let window = window.keep_bits(64);
        window.to_u64().unwrap()
    }

    #[test]
    fn test_mul_shift_edges() {
        assert!(mul_shift(u64::MAX, u64::MAX, 0) == u64::MAX - 1);
        assert!(mul_shift(u64::MAX, u64::MAX, 64) == 1);
        assert!(mul_shift(1, 1 << 63, 0) == 0);
        assert!(mul_shift(1, 1 << 63, 64) == 1 << 63);
        assert!(mul_shift(2, 1 << 63, 0) == 1);
        assert!(mul_shift(0, u64::MAX, 17) == 0);
        assert!(mul_shift(3, 1 << 62, 1) == 1);
    }

    #[test]
    fn test_mul_shift_matches_rug() {
        let rng = &mut StdRng::seed_from_u64(0);
        for _ in 0..2000 {
            let a: u64 = rng.random();
            let b: u64 = rng.random();
            let shift = rng.random_range(0..=64);
            let expected = reference(a, b, shift);
            assert!(all(mul_shift(a, b, shift) == expected, mul_shift_halves(a, b, shift) == expected));
        }
    }

    #[test]
    fn test_halves_match_u128() {
        let rng = &mut StdRng::seed_from_u64(1);
        for _ in 0..2000 {
            let a: u64 = rng.random();
            let b: u64 = rng.random();
            for shift in [0, 1, 7, 32, 63, 64] {
                assert!(mul_shift_halves(a, b, shift) == mul_shift(a, b, shift));
            }
        }
    }
}
