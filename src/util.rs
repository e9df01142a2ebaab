use std::fmt;

use either::Either;

use crate::{Float, FloatFormat};

/// Unsigned scalar a packed value can be stored in.
///
/// Sealed: the set of backing types is exactly u8/u16/u32/u64. Field
/// arithmetic happens in u128/i128 intermediates, so implementations only
/// widen and truncate.
pub trait Primitive: Copy + Eq + fmt::Debug + 'static + private::Sealed {
    const WIDTH: u32;

    fn from_u128(value: u128) -> Self;
    fn to_u128(self) -> u128;
}

mod private {
    pub trait Sealed {}
}

macro_rules! impl_primitive {
    ($($ty:ty),*) => {$(
        impl private::Sealed for $ty {}

        impl Primitive for $ty {
            const WIDTH: u32 = <$ty>::BITS;

            #[inline]
            fn from_u128(value: u128) -> $ty {
                value as $ty
            }

            #[inline]
            fn to_u128(self) -> u128 {
                self as u128
            }
        }
    )*};
}

impl_primitive!(u8, u16, u32, u64);

/// Shift that accepts negative distances: left for positive amounts,
/// right for negative ones. Distances at or beyond the intermediate
/// width resolve to 0, keeping the helper total.
pub(crate) fn signed_shift(value: u128, amount: i128) -> u128 {
    if amount >= 128 || amount <= -128 {
        0
    } else if amount >= 0 {
        value << amount
    } else {
        value >> -amount
    }
}

/// Right shift that ors the dropped bits into the lowest result bit, so a
/// nonzero value never shifts to nothing. Used when aligning addends: the
/// surviving bit makes a borrow across a power-of-two boundary come out
/// right under truncation.
pub(crate) fn right_shift(sig: u128, shamt: i128) -> u128 {
    if shamt <= 0 {
        sig
    } else if shamt >= 128 {
        (sig != 0) as u128
    } else {
        let dropped = sig & ((1u128 << shamt) - 1);
        (sig >> shamt) | (dropped != 0) as u128
    }
}

/// Re-encode a raw magnitude into canonical fields.
///
/// `sig` carries the value `sig * 2^(exp - BIAS - MANTISSA_WIDTH)`, i.e.
/// `exp` is the biased exponent the value would have if the significand's
/// leading bit sat at bit `MANTISSA_WIDTH`. The magnitude may be
/// arbitrarily far from normalized; excess low bits truncate. Overflow
/// saturates to signed infinity, underflow falls into the subnormal band
/// and then to signed zero.
pub(crate) fn pack<F: FloatFormat>(sign: bool, exp: i128, sig: u128) -> Float<F> {
    if sig == 0 {
        return Float::zero(sign);
    }

    let top = 127 - sig.leading_zeros() as i128;
    let packed_exp = exp + top - F::MANTISSA_WIDTH as i128;

    if packed_exp >= F::EXPONENT_MASK as i128 {
        return Float::infinite(sign);
    }

    if packed_exp > 0 {
        let mantissa = signed_shift(sig, F::MANTISSA_WIDTH as i128 - top);
        return Float::from_components(sign, packed_exp as u64, mantissa as u64);
    }

    // Subnormal band: stored with exponent field 0 at scale 2^(1 - BIAS),
    // so the magnitude shifts right by one more than the deficit.
    let mantissa = signed_shift(sig, exp - 1);
    if mantissa == 0 {
        return Float::zero(sign);
    }
    Float::from_components(sign, 0, mantissa as u64)
}

/// Split a finite operand into its effective biased exponent and its
/// significand with the hidden bit restored. Zero cannot take part in a
/// product or quotient mantissa, so it short-circuits to a signed zero
/// result for the caller to return.
pub(crate) fn make_exp_sig<F: FloatFormat>(
    sign: bool,
    f: Float<F>,
) -> Either<Float<F>, (i128, u64)> {
    if f.exponent_bits() != 0 {
        Either::Right((
            f.exponent_bits() as i128,
            f.mantissa_bits() | (1 << F::MANTISSA_WIDTH),
        ))
    } else if f.mantissa_bits() == 0 {
        Either::Left(Float::zero(sign))
    } else {
        // Subnormal: no hidden bit, same scale as exponent field 1.
        Either::Right((1, f.mantissa_bits()))
    }
}
