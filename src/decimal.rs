use super::*;

/// `sign * significand * 10^exponent`, as produced by a decimal scanner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Decimal {
    pub significand: u64,
    pub exponent: i32,
    pub sign: Sign,
}

impl Decimal {
    #[inline]
    pub const fn new(significand: u64, exponent: i32, sign: Sign) -> Self {
        Self {
            significand,
            exponent,
            sign,
        }
    }

    /// Scales the significand by powers of ten until another digit would overflow `u64`.
    /// The value is unchanged; afterwards a nonzero significand is at least `u64::MAX / 10`.
    #[inline]
    #[must_use]
    pub const fn widen(self) -> Self {
        let Self {
            mut significand,
            mut exponent,
            sign,
        } = self;

        if significand == 0 {
            return self;
        }
        while significand <= u64::MAX / 10 {
            significand *= 10;
            exponent = exponent.saturating_sub(1);
        }

        Self {
            significand,
            exponent,
            sign,
        }
    }

    #[inline]
    pub fn to_binary64(self) -> Binary64 {
        let Self {
            significand,
            exponent,
            sign,
        } = self.widen();
        synthesize(significand, exponent, sign)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.to_binary64().to_f64()
    }
}

impl From<Decimal> for Binary64 {
    #[inline]
    fn from(value: Decimal) -> Self {
        value.to_binary64()
    }
}

impl From<Decimal> for f64 {
    #[inline]
    fn from(value: Decimal) -> Self {
        value.to_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;

    #[test]
    fn test_widen() {
        let d = Decimal::new(5, 0, Sign::Pos).widen();
        assert!(all(d.significand == 5_000_000_000_000_000_000, d.exponent == -18));

        let d = Decimal::new(1, 3, Sign::Neg).widen();
        assert!(all(d.significand == 10_000_000_000_000_000_000, d.exponent == -16, d.sign == Sign::Neg));

        let d = Decimal::new(u64::MAX, 7, Sign::Pos);
        assert!(d.widen() == d);

        let d = Decimal::new(0, 7, Sign::Neg);
        assert!(d.widen() == d);

        let d = Decimal::new(1, i32::MIN, Sign::Pos).widen();
        assert!(d.exponent == i32::MIN);
    }

    #[test]
    fn test_widened_significand_fills_window() {
        for significand in [1, 9, 10, 1_844_674_407_370_955_161, 1_844_674_407_370_955_162, u64::MAX] {
            let d = Decimal::new(significand, 0, Sign::Pos).widen();
            assert!(all(d.significand > u64::MAX / 10, d.significand >> 60 != 0));
        }
    }

    #[test]
    fn test_conversions() {
        let d = Decimal::new(15, -1, Sign::Neg);
        assert!(all(f64::from(d) == -1.5, Binary64::from(d) == Binary64::from_f64(-1.5)));
        assert!(Decimal::default().to_f64() == 0.0);
    }
}
