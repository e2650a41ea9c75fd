use super::*;
use crate::consts::{GUARD_BITS, HALF_UNIT, SIGNIFICAND_BITS, WINDOW_BITS};
use equator::debug_assert;

/// Converts `sign * significand * 10^decimal_exponent` to binary64.
///
/// The result is only as accurate as the significand is wide: callers are expected to pass
/// significands of at least `2^60` (see [`Decimal::widen`]), which leaves five guard bits after
/// the 64-bit multiply. Rounding is to nearest on the truncated product; exact ties are not
/// resolved to even.
///
/// Total over its domain: exponents above the table window give signed infinity, exponents
/// below it give signed zero.
#[cfg_attr(feature = "no-panic", no_panic::no_panic)]
pub fn synthesize(significand: u64, decimal_exponent: i32, sign: Sign) -> Binary64 {
    if significand == 0 {
        return Binary64::zero(sign);
    }

    let pow = match usize::try_from(table::index(decimal_exponent)) {
        Err(_) => return Binary64::infinity(sign),
        Ok(index) => match table::get(index) {
            Some(pow) => pow,
            None => return Binary64::zero(sign),
        },
    };

    // the high word is empty only for `significand == 1`, where the low word is exact
    let (mut mantissa, mut exponent) = match wide::mul_shift(significand, pow.mantissa, 0) {
        0 => (wide::mul_shift(significand, pow.mantissa, 64), pow.exponent - 1 - 64),
        high => (high, pow.exponent - 1),
    };

    let target = u64::BITS - WINDOW_BITS;
    let leading = mantissa.leading_zeros();
    if leading < target {
        mantissa >>= target - leading;
        exponent += (target - leading) as i32;
    } else {
        mantissa <<= leading - target;
        exponent -= (leading - target) as i32;
    }
    debug_assert!(mantissa >> (WINDOW_BITS - 1) == 1);

    if exponent >= consts::MAX_BIASED_EXPONENT as i32 {
        return Binary64::infinity(sign);
    }

    let bits = if exponent <= 0 {
        // gradual underflow: denormalize first so the half unit lands on the subnormal lsb
        let mantissa = mantissa.checked_shr((1 - exponent) as u32).unwrap_or(0);
        (mantissa + HALF_UNIT) >> GUARD_BITS
    } else {
        // a rounding carry out of the window bumps the exponent, up to infinity
        (((exponent - 1) as u64) << SIGNIFICAND_BITS) + ((mantissa + HALF_UNIT) >> GUARD_BITS)
    };

    Binary64::from_bits(bits).with_sign(sign)
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn parse(text: &str) -> Decimal {
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (digits, exponent) = match text.split_once('e') {
            Some((digits, exponent)) => (digits, exponent.parse::<i32>().unwrap()),
            None => (text, 0),
        };
        let (int, frac) = digits.split_once('.').unwrap_or((digits, ""));
        let significand = std::format!("{int}{frac}").parse::<u64>().unwrap();
        Decimal::new(significand, exponent - frac.len() as i32, Sign::from(negative))
    }

    fn ulp_distance(a: Binary64, b: Binary64) -> u64 {
        a.to_bits().abs_diff(b.to_bits())
    }

    #[test]
    fn test_zero() {
        for e in [i32::MIN, -1000, -348, -347, 0, 1, 312, 313, 1000, i32::MAX] {
            assert!(synthesize(0, e, Sign::Pos).to_bits() == 0);
            assert!(synthesize(0, e, Sign::Neg).to_bits() == consts::SIGN_BIT);
        }
    }

    #[test]
    fn test_exact() {
        assert!(synthesize(1, 0, Sign::Pos).to_f64() == 1.0);
        assert!(synthesize(10_000_000_000_000_000_000, -19, Sign::Pos).to_f64() == 1.0);
        assert!(synthesize(15_000_000_000_000_000_000, -19, Sign::Neg).to_f64() == -1.5);
        assert!(parse("123456789").to_f64() == 123456789.0);
        assert!(parse("5").to_f64() == 5.0);
        assert!(parse("0.1").to_f64() == 0.1);
        assert!(parse("-2.5e-3").to_f64() == -2.5e-3);
    }

    #[test]
    fn test_sign_symmetry() {
        let rng = &mut StdRng::seed_from_u64(0);
        for _ in 0..10_000 {
            let significand: u64 = rng.random();
            let exponent = rng.random_range(-400..=400);
            let pos = synthesize(significand, exponent, Sign::Pos);
            let neg = synthesize(significand, exponent, Sign::Neg);
            assert!(pos.to_bits() ^ neg.to_bits() == consts::SIGN_BIT);
        }
    }

    #[test]
    fn test_monotonic_in_exponent() {
        for significand in [1, 5, 12_345_678_901_234_567, 1_000_000_000_000_000_000, 1_234_567_890_123_456_789, u64::MAX] {
            let mut prev = 0.0f64;
            for exponent in -400..=400 {
                let x = synthesize(significand, exponent, Sign::Pos).to_f64();
                assert!(x >= prev);
                prev = x;
            }
            assert!(synthesize(significand, table::OFFSET + 1, Sign::Pos) == Binary64::INFINITY);
            assert!(synthesize(significand, i32::MAX, Sign::Neg) == Binary64::infinity(Sign::Neg));
            assert!(synthesize(significand, i32::MIN, Sign::Neg) == Binary64::zero(Sign::Neg));
        }
    }

    #[test]
    fn test_overflow_boundary() {
        assert!(parse("1.7976931348623157e308").to_binary64() == Binary64::MAX);
        assert!(parse("1.7976931348623158e308").to_binary64() == Binary64::MAX);
        assert!(parse("1.7976931348623159e308").to_binary64() == Binary64::INFINITY);
        assert!(parse("-1.8e308").to_binary64() == Binary64::infinity(Sign::Neg));
        assert!(parse("1e309").to_binary64() == Binary64::INFINITY);
    }

    #[test]
    fn test_subnormal_boundary() {
        assert!(parse("4.9406564584124654e-324").to_binary64() == Binary64::MIN_POSITIVE_SUBNORMAL);
        assert!(parse("2.5e-324").to_binary64() == Binary64::MIN_POSITIVE_SUBNORMAL);
        assert!(parse("3e-324").to_binary64() == Binary64::MIN_POSITIVE_SUBNORMAL);
        assert!(parse("2.4e-324").to_binary64() == Binary64::ZERO);
        assert!(parse("1e-324").to_binary64() == Binary64::ZERO);
        assert!(parse("-1e-400").to_binary64() == Binary64::zero(Sign::Neg));

        let min_normal = parse("2.2250738585072014e-308").to_binary64();
        assert!(all(min_normal.biased_exponent() == 1, min_normal.significand_field() == 0));
        let max_subnormal = parse("2.2250738585072011e-308").to_binary64();
        assert!(all(max_subnormal.exponent() == Exponent::Subnormal, max_subnormal.significand_field() == consts::SIGNIFICAND_MASK));
    }

    #[test]
    fn test_rounding_carries_into_exponent() {
        // 2^53 - 0.25 rounds up to 2^53
        assert!(parse("9007199254740991.75").to_f64() == 9007199254740992.0);
        assert!(parse("4503599627370495.875").to_f64() == 4503599627370496.0);
        assert!(parse("99999999999999999").to_f64() == 1e17);
    }

    #[test]
    fn test_cross_check_corpus() {
        let rng = &mut StdRng::seed_from_u64(0x5eed);
        let count = 10_000;
        let mut mismatches = std::vec::Vec::new();

        for _ in 0..count {
            let significand = rng.random_range(1_000_000_000_000_000..=u64::MAX);
            let exponent = rng.random_range(-345..=292);
            let negative: bool = rng.random();
            let text = std::format!("{}{significand}e{exponent}", if negative { "-" } else { "" });

            let expected = Binary64::from_f64(text.parse::<f64>().unwrap());
            let mpfr = rug::Float::with_val(4096, rug::Float::parse(&text).unwrap()).to_f64();
            assert!(expected == Binary64::from_f64(mpfr));

            let got = Decimal::new(significand, exponent, Sign::from(negative)).to_binary64();
            if got != expected {
                assert!(ulp_distance(got, expected) <= 1);
                mismatches.push((text, got, expected));
            }
        }

        for (text, got, expected) in &mismatches {
            std::println!("{text}: got {got:?}, expected {expected:?}");
        }
        std::println!("{} / {count} mismatches", mismatches.len());
        assert!(mismatches.len() * 100 <= count);
    }
}
