use std::ops::Mul;

use either::Either;

use crate::util::{make_exp_sig, pack};
use crate::{Float, FloatFormat};

impl<F: FloatFormat> Mul for Float<F> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        mul_impl(self, other)
    }
}

pub(crate) fn mul_impl<F: FloatFormat>(fx: Float<F>, fy: Float<F>) -> Float<F> {
    if fx.is_nan() {
        return fx;
    }
    if fy.is_nan() {
        return fy;
    }

    let sign = fx.sign_bit() ^ fy.sign_bit();

    if fx.is_infinite() || fy.is_infinite() {
        if fx.is_zero() || fy.is_zero() {
            return Float::quiet_nan();
        }
        return Float::infinite(sign);
    }

    // zero multiplication derives zero
    let (exp_x, sig_x) = match make_exp_sig(sign, fx) {
        Either::Left(zero) => return zero,
        Either::Right(pair) => pair,
    };
    let (exp_y, sig_y) = match make_exp_sig(sign, fy) {
        Either::Left(zero) => return zero,
        Either::Right(pair) => pair,
    };

    /*
        1.1
    *   1.1
    -------
        1 1
      1 1
    --------
    1 0 0 1 ==> 10.01

    The product of two (M+1)-bit significands carries 2M+1 or 2M+2 bits,
    so its scale sits 2M below the significand scale; folding one M into
    the biased exponent leaves `exp_x + exp_y - BIAS` at the packing scale
    the re-encoder expects, and the possible extra leading bit becomes the
    one-step exponent bump there.
    */
    let product = sig_x as u128 * sig_y as u128;
    let scale = exp_x + exp_y - F::BIAS as i128 - F::MANTISSA_WIDTH as i128;
    pack(sign, scale, product)
}
