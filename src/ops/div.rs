use std::ops::Div;

use either::Either;

use crate::util::{make_exp_sig, pack};
use crate::{Float, FloatFormat};

impl<F: FloatFormat> Div for Float<F> {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        div_impl(self, other)
    }
}

pub(crate) fn div_impl<F: FloatFormat>(fx: Float<F>, fy: Float<F>) -> Float<F> {
    if fx.is_nan() {
        return fx;
    }
    if fy.is_nan() {
        return fy;
    }

    let sign = fx.sign_bit() ^ fy.sign_bit();

    if fx.is_infinite() {
        if fy.is_infinite() {
            return Float::quiet_nan();
        }
        return Float::infinite(sign);
    }
    if fy.is_infinite() {
        return Float::zero(sign);
    }
    if fy.is_zero() {
        if fx.is_zero() {
            return Float::quiet_nan();
        }
        return Float::infinite(sign);
    }

    let (exp_x, sig_x) = match make_exp_sig(sign, fx) {
        Either::Left(zero) => return zero,
        Either::Right(pair) => pair,
    };
    let (exp_y, sig_y) = match make_exp_sig(sign, fy) {
        Either::Left(zero) => return zero,
        Either::Right(pair) => pair,
    };

    // An (M+1)-bit dividend widened by M bits keeps the truncating integer
    // quotient at the packing scale; a quotient below 1.0 in fixed-point
    // terms renormalizes downward in the re-encoder.
    let quotient = ((sig_x as u128) << F::MANTISSA_WIDTH) / sig_y as u128;
    let scale = exp_x - exp_y + F::BIAS as i128;
    let result = pack(sign, scale, quotient);

    // A computed exponent at or past the all-ones field is an invalid
    // quotient, not an overflow to infinity; division does not saturate
    // the way multiplication does.
    if result.is_infinite() {
        return Float::quiet_nan();
    }
    result
}
