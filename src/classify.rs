use std::num::FpCategory;

use crate::{Float, FloatFormat};

impl<F: FloatFormat> Float<F> {
    /// The `fpclassify` equivalent. A zero exponent field is zero or
    /// subnormal, an all-ones field is infinite or NaN, everything else
    /// is a normal value.
    pub fn classify(self) -> FpCategory {
        match (self.exponent_bits(), self.mantissa_bits()) {
            (0, 0) => FpCategory::Zero,
            (0, _) => FpCategory::Subnormal,
            (e, 0) if e == F::EXPONENT_MASK => FpCategory::Infinite,
            (e, _) if e == F::EXPONENT_MASK => FpCategory::Nan,
            _ => FpCategory::Normal,
        }
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.exponent_bits() == F::EXPONENT_MASK && self.mantissa_bits() != 0
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        self.exponent_bits() == F::EXPONENT_MASK && self.mantissa_bits() == 0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.exponent_bits() != F::EXPONENT_MASK
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.exponent_bits() == 0 && self.mantissa_bits() == 0
    }

    #[inline]
    pub fn is_subnormal(self) -> bool {
        self.exponent_bits() == 0 && self.mantissa_bits() != 0
    }

    #[inline]
    pub fn is_normal(self) -> bool {
        self.exponent_bits() != 0 && self.exponent_bits() != F::EXPONENT_MASK
    }

    #[inline]
    pub fn is_sign_negative(self) -> bool {
        self.sign_bit()
    }

    #[inline]
    pub fn is_sign_positive(self) -> bool {
        !self.sign_bit()
    }

    /// True iff no ordering exists between the operands, i.e. at least
    /// one of them is NaN.
    pub fn is_unordered(self, other: Self) -> bool {
        self.is_nan() || other.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use std::num::FpCategory;

    use crate::{Binary16, Binary32, Binary64, Binary8, Float, FloatFormat};

    fn check_special_values<F: FloatFormat>() {
        let nan = Float::<F>::quiet_nan();
        assert!(nan.is_nan());
        assert!(!nan.is_infinite());
        assert!(!nan.is_finite());
        assert!(!nan.is_normal());
        assert_eq!(nan.classify(), FpCategory::Nan);

        for &sign in &[false, true] {
            let inf = Float::<F>::infinite(sign);
            assert!(inf.is_infinite());
            assert!(!inf.is_nan());
            assert!(!inf.is_finite());
            assert_eq!(inf.sign_bit(), sign);
            assert_eq!(inf.classify(), FpCategory::Infinite);

            let zero = Float::<F>::zero(sign);
            assert!(zero.is_zero());
            assert!(zero.is_finite());
            assert!(!zero.is_normal());
            assert_eq!(zero.sign_bit(), sign);
            assert_eq!(zero.classify(), FpCategory::Zero);
        }

        let tiny = Float::<F>::denorm_min();
        assert!(tiny.is_subnormal());
        assert!(!tiny.is_normal());
        assert_eq!(tiny.classify(), FpCategory::Subnormal);

        assert_eq!(Float::<F>::min_positive().classify(), FpCategory::Normal);
        assert_eq!(Float::<F>::max_finite().classify(), FpCategory::Normal);
    }

    #[test]
    fn special_values_classify() {
        check_special_values::<Binary8>();
        check_special_values::<Binary16>();
        check_special_values::<Binary32>();
        check_special_values::<Binary64>();
    }

    #[test]
    fn agrees_with_native_classify() {
        for &value in &[
            1.0,
            0.1,
            0.2,
            -2.5,
            1.0 / 1.5e308,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NAN,
            0.0,
            -0.0,
        ] {
            let soft = Float::<Binary64>::from(value);
            assert_eq!(soft.classify(), value.classify(), "value {}", value);
        }
    }

    #[test]
    fn unordered_needs_a_nan() {
        let nan = Float::<Binary32>::quiet_nan();
        let one = Float::<Binary32>::from(1u32);
        assert!(nan.is_unordered(one));
        assert!(one.is_unordered(nan));
        assert!(nan.is_unordered(nan));
        assert!(!one.is_unordered(one));
    }
}
