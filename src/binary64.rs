use super::*;
use bytemuck::{Pod, Zeroable};

/// Bit pattern of an IEEE-754 binary64 value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Binary64(u64);

unsafe impl Zeroable for Binary64 {}
unsafe impl Pod for Binary64 {}

impl Binary64 {
    pub const ZERO: Self = Self(0);
    pub const INFINITY: Self = Self(consts::EXPONENT_MASK);
    pub const MAX: Self = Self(consts::EXPONENT_MASK - 1);
    pub const MIN_POSITIVE_SUBNORMAL: Self = Self(1);

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        bytemuck::cast(self)
    }

    #[inline]
    pub fn from_f64(x: f64) -> Self {
        bytemuck::cast(x)
    }

    /// Signed zero.
    #[inline]
    pub const fn zero(sign: Sign) -> Self {
        Self::ZERO.with_sign(sign)
    }

    /// Signed infinity.
    #[inline]
    pub const fn infinity(sign: Sign) -> Self {
        Self::INFINITY.with_sign(sign)
    }

    /// Assembles a pattern from its fields. Bits of `biased_exponent` and `significand_field`
    /// beyond their widths are discarded.
    #[inline]
    pub const fn from_parts(sign: Sign, biased_exponent: u64, significand_field: u64) -> Self {
        Self(((biased_exponent << consts::SIGNIFICAND_BITS) & consts::EXPONENT_MASK) | (significand_field & consts::SIGNIFICAND_MASK))
            .with_sign(sign)
    }

    #[inline]
    #[must_use]
    pub const fn with_sign(self, sign: Sign) -> Self {
        Self((self.0 & !consts::SIGN_BIT) | ((sign.is_negative() as u64) << consts::SIGN_SHIFT))
    }

    #[inline]
    pub const fn sign(self) -> Sign {
        if self.0 >> consts::SIGN_SHIFT == 1 {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }

    #[inline]
    pub const fn biased_exponent(self) -> u64 {
        (self.0 & consts::EXPONENT_MASK) >> consts::SIGNIFICAND_BITS
    }

    #[inline]
    pub const fn significand_field(self) -> u64 {
        self.0 & consts::SIGNIFICAND_MASK
    }

    #[inline]
    pub const fn exponent(self) -> Exponent {
        match (self.biased_exponent(), self.significand_field()) {
            (0, 0) => Exponent::Zero,
            (0, _) => Exponent::Subnormal,
            (consts::MAX_BIASED_EXPONENT, 0) => Exponent::Inf,
            (consts::MAX_BIASED_EXPONENT, _) => Exponent::NaN,
            (biased, _) => Exponent::Normal(biased as i32 - consts::EXPONENT_BIAS),
        }
    }
}

impl core::fmt::Debug for Binary64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Binary64")
            .field("sign", &self.sign())
            .field("exponent", &self.exponent())
            .field("biased_exponent", &utils::BinRepr::<11>(self.biased_exponent()))
            .field("significand", &utils::BinRepr::<52>(self.significand_field()))
            .finish()
    }
}

impl From<Binary64> for f64 {
    #[inline]
    fn from(value: Binary64) -> Self {
        value.to_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;

    #[test]
    fn test_constants() {
        assert!(all(
            Binary64::ZERO.to_f64() == 0.0,
            Binary64::INFINITY.to_f64() == f64::INFINITY,
            Binary64::MAX.to_f64() == f64::MAX,
            Binary64::MIN_POSITIVE_SUBNORMAL.to_f64() == 5e-324,
        ));
        assert!(Binary64::infinity(Sign::Neg).to_f64() == f64::NEG_INFINITY);
        assert!(Binary64::zero(Sign::Neg).to_bits() == 1 << 63);
    }

    #[test]
    fn test_fields() {
        let x = Binary64::from_f64(-1.5);
        assert!(all(
            x.sign() == Sign::Neg,
            x.biased_exponent() == 1023,
            x.significand_field() == 1 << 51,
            x.exponent() == Exponent::Normal(0),
        ));
        assert!(Binary64::from_parts(Sign::Neg, 1023, 1 << 51) == x);
        assert!(Binary64::from_parts(Sign::Pos, 0, 1).exponent() == Exponent::Subnormal);
        assert!(Binary64::from_f64(f64::NAN).exponent() == Exponent::NaN);
        assert!(Binary64::from_f64(-0.0).exponent() == Exponent::Zero);
    }

    #[test]
    fn test_debug() {
        let s = std::format!("{:?}", Binary64::from_f64(1.0));
        assert!(s.contains("0b01111111111"));
    }
}
