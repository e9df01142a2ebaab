use crate::util::{pack, signed_shift};
use crate::{Float, FloatFormat};

impl<F: FloatFormat> Float<F> {
    /// Re-encode into another layout: the exponent is re-biased (zero and
    /// all-ones fields map to their counterparts, so zeros, infinities and
    /// NaNs survive) and the mantissa shifts by the precision difference.
    ///
    /// No overflow or underflow check is applied beyond masking the
    /// re-biased exponent to the target field, so narrowing to a smaller
    /// exponent or mantissa width silently loses range and precision, the
    /// same risk a native `f64` to `f32` cast carries.
    pub fn convert<G: FloatFormat>(self) -> Float<G> {
        let exponent = self.exponent_bits();
        let mantissa = self.mantissa_bits();

        let exponent2 = if exponent == 0 {
            0
        } else if exponent == F::EXPONENT_MASK {
            G::EXPONENT_MASK
        } else {
            (exponent as i64 - F::BIAS as i64 + G::BIAS as i64) as u64
        };
        let mantissa2 = if G::MANTISSA_WIDTH >= F::MANTISSA_WIDTH {
            mantissa << (G::MANTISSA_WIDTH - F::MANTISSA_WIDTH)
        } else {
            mantissa >> (F::MANTISSA_WIDTH - G::MANTISSA_WIDTH)
        };
        // A NaN payload must not narrow away to an infinity.
        let mantissa2 = if exponent == F::EXPONENT_MASK && mantissa != 0 && mantissa2 == 0 {
            1
        } else {
            mantissa2
        };

        Float::from_components(self.sign_bit(), exponent2, mantissa2)
    }

    /// The value shifted to integer scale, as a magnitude. Total for every
    /// bit pattern: shift distances beyond the intermediate width resolve
    /// to 0.
    fn integral_magnitude(self) -> u128 {
        let exponent = self.exponent_bits();
        let (effective, significand) = if exponent == 0 {
            (1, self.mantissa_bits())
        } else {
            (
                exponent as i128,
                self.mantissa_bits() | (1 << F::MANTISSA_WIDTH),
            )
        };
        signed_shift(
            significand as u128,
            effective - F::BIAS as i128 - F::MANTISSA_WIDTH as i128,
        )
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {$(
        impl<F: FloatFormat> From<$ty> for Float<F> {
            fn from(value: $ty) -> Self {
                if value == 0 {
                    return Float::zero(false);
                }
                pack(
                    false,
                    F::BIAS as i128 + F::MANTISSA_WIDTH as i128,
                    value as u128,
                )
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {$(
        impl<F: FloatFormat> From<$ty> for Float<F> {
            fn from(value: $ty) -> Self {
                if value == 0 {
                    return Float::zero(false);
                }
                pack(
                    value < 0,
                    F::BIAS as i128 + F::MANTISSA_WIDTH as i128,
                    value.unsigned_abs() as u128,
                )
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64);
impl_from_signed!(i8, i16, i32, i64);

// Native-to-packed goes through the native value's own bit fields; the
// significand and decomposed exponent then take the same saturation and
// subnormal-shift path as the integer codec.
macro_rules! impl_from_native_float {
    ($($float:ty: ($man_width:expr, $exp_width:expr)),*) => {$(
        impl<F: FloatFormat> From<$float> for Float<F> {
            fn from(value: $float) -> Self {
                let bits = value.to_bits() as u64;
                let sign = bits >> ($man_width + $exp_width) != 0;
                let exponent = (bits >> $man_width) & ((1u64 << $exp_width) - 1);
                let mantissa = bits & ((1u64 << $man_width) - 1);

                if exponent == (1u64 << $exp_width) - 1 {
                    return if mantissa == 0 {
                        Float::infinite(sign)
                    } else {
                        Float::from_components(sign, F::EXPONENT_MASK, 1)
                    };
                }
                if exponent == 0 && mantissa == 0 {
                    return Float::zero(sign);
                }

                let (effective, significand) = if exponent == 0 {
                    (1i128, mantissa)
                } else {
                    (exponent as i128, mantissa | (1u64 << $man_width))
                };
                let bias = (1i128 << ($exp_width - 1)) - 1;
                let scale = effective - bias - $man_width as i128
                    + F::BIAS as i128
                    + F::MANTISSA_WIDTH as i128;
                pack(sign, scale, significand as u128)
            }
        }
    )*};
}

impl_from_native_float!(f32: (23, 8), f64: (52, 11));

impl<F: FloatFormat> From<Float<F>> for f64 {
    fn from(value: Float<F>) -> f64 {
        let exponent = value.exponent_bits();
        let mantissa = value.mantissa_bits();

        if exponent == F::EXPONENT_MASK {
            if mantissa != 0 {
                return f64::NAN;
            }
            return if value.sign_bit() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }

        let (leading, power) = if exponent == 0 {
            (0.0, 1 - F::BIAS)
        } else {
            (1.0, exponent as i32 - F::BIAS)
        };
        let fraction = leading + mantissa as f64 / 2f64.powi(F::MANTISSA_WIDTH as i32);
        let magnitude = fraction * 2f64.powi(power);
        if value.sign_bit() {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl<F: FloatFormat> From<Float<F>> for f32 {
    fn from(value: Float<F>) -> f32 {
        f64::from(value) as f32
    }
}

// Signed targets negate through `(u ^ -s) + s`; with s in {0, 1} this is
// the two's complement of the magnitude exactly when the sign bit is set,
// with wrapping semantics for out-of-range values.
macro_rules! impl_into_int {
    ($($ty:ty => $via:ty),*) => {$(
        impl<F: FloatFormat> From<Float<F>> for $ty {
            fn from(value: Float<F>) -> $ty {
                let magnitude = value.integral_magnitude() as $via;
                let sign = value.sign_bit() as $via;
                ((magnitude ^ sign.wrapping_neg()).wrapping_add(sign)) as $ty
            }
        }
    )*};
}

impl_into_int! {
    u8 => u8, u16 => u16, u32 => u32, u64 => u64,
    i8 => u8, i16 => u16, i32 => u32, i64 => u64
}
