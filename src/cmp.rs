use std::cmp::Ordering;

use crate::{Float, FloatFormat};

impl<F: FloatFormat> PartialEq for Float<F> {
    /// NaN is equal to nothing, including itself; the two zeros are equal
    /// to each other; everything else reduces to raw packed-scalar
    /// equality.
    fn eq(&self, other: &Self) -> bool {
        if self.is_unordered(*other) {
            return false;
        }
        if self.is_zero() && other.is_zero() {
            return true;
        }
        self.bits == other.bits
    }

    /// Deliberate deviation from IEEE-754: `!=` on unordered operands is
    /// false, mirroring `==`, instead of the conventional `NaN != NaN`
    /// being true.
    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        if self.is_unordered(*other) {
            return false;
        }
        !self.eq(other)
    }
}

impl<F: FloatFormat> PartialOrd for Float<F> {
    /// Unordered operands have no ordering. Otherwise differing signs
    /// decide directly; with equal signs the biased exponent orders
    /// first and the mantissa breaks ties, both reversed for negative
    /// values.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_unordered(*other) {
            return None;
        }
        if self.is_zero() && other.is_zero() {
            return Some(Ordering::Equal);
        }
        if self.sign_bit() != other.sign_bit() {
            return if self.sign_bit() {
                Some(Ordering::Less)
            } else {
                Some(Ordering::Greater)
            };
        }

        let ordering = (self.exponent_bits(), self.mantissa_bits())
            .cmp(&(other.exponent_bits(), other.mantissa_bits()));
        if self.sign_bit() {
            Some(ordering.reverse())
        } else {
            Some(ordering)
        }
    }
}
