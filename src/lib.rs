#![cfg_attr(not(test), no_std)]

#[allow(unused_imports)]
use utils::BinRepr as bin;

mod binary64;
mod decimal;
mod synth;

pub mod table;
pub mod wide;

pub use binary64::Binary64;
pub use decimal::Decimal;
pub use synth::synthesize;

pub mod utils {
    #[repr(transparent)]
    pub struct BinRepr<const WIDTH: usize = 64>(pub u64);
    impl<const WIDTH: usize> core::fmt::Debug for BinRepr<WIDTH> {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            let width = WIDTH + 2;
            write!(f, "{:0>#0width$b}", self.0)
        }
    }
}

pub mod consts {
    pub const SIGN_SHIFT: u64 = 63;
    pub const SIGN_BIT: u64 = 1u64 << SIGN_SHIFT;

    pub const SIGNIFICAND_BITS: u64 = 52;
    pub const SIGNIFICAND_MASK: u64 = (1u64 << SIGNIFICAND_BITS) - 1;

    pub const MAX_BIASED_EXPONENT: u64 = 2047;
    pub const EXPONENT_MASK: u64 = MAX_BIASED_EXPONENT << SIGNIFICAND_BITS;
    pub const EXPONENT_BIAS: i32 = 1023;

    /// Normalized mantissas live in `[2^(WINDOW_BITS - 1), 2^WINDOW_BITS)`.
    pub const WINDOW_BITS: u32 = 58;
    /// Bits below the explicit significand inside the window.
    pub const GUARD_BITS: u32 = 5;
    pub const HALF_UNIT: u64 = 1u64 << (GUARD_BITS - 1);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    Neg,
    #[default]
    Pos,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Exponent {
    Zero,
    Subnormal,
    Normal(i32),
    Inf,
    NaN,
}

impl Sign {
    #[inline]
    pub const fn from_negative(negative: bool) -> Self {
        if negative {
            Self::Neg
        } else {
            Self::Pos
        }
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Pos)
    }
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Neg)
    }

    #[inline]
    #[must_use]
    pub const fn neg(self) -> Self {
        match self {
            Sign::Neg => Self::Pos,
            Sign::Pos => Self::Neg,
        }
    }
}

impl From<bool> for Sign {
    #[inline]
    fn from(negative: bool) -> Self {
        Self::from_negative(negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;

    #[test]
    fn test_sign() {
        assert!(all(
            Sign::from(true) == Sign::Neg,
            Sign::from(false) == Sign::Pos,
            Sign::Neg.neg() == Sign::Pos,
            Sign::default().is_positive(),
        ));
    }

    #[test]
    fn test_bin_repr() {
        assert!(std::format!("{:?}", bin::<64>(5)).len() == 66);
        assert!(std::format!("{:?}", utils::BinRepr::<4>(5)) == "0b0101");
    }
}
