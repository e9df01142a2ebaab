use std::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};

use crate::util::Primitive;
use crate::{Float, FloatFormat};

mod add;
mod div;
mod mul;
mod sub;

impl<F: FloatFormat> Neg for Float<F> {
    type Output = Self;

    /// Flips the sign bit only, which also negates zero, infinity and the
    /// sign of a NaN payload.
    fn neg(self) -> Self {
        let sign_mask = 1u128 << (F::EXPONENT_WIDTH + F::MANTISSA_WIDTH);
        Float::from_bits(F::Primitive::from_u128(self.to_bits().to_u128() ^ sign_mask))
    }
}

// Compound assignment recomputes with the binary operator and rebinds;
// there is no in-place accumulation.

impl<F: FloatFormat> AddAssign for Float<F> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<F: FloatFormat> SubAssign for Float<F> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<F: FloatFormat> MulAssign for Float<F> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<F: FloatFormat> DivAssign for Float<F> {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}
