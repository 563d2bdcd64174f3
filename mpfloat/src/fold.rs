// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! In-place arithmetic on [`Float`].
//!
//! Binary operations come in two forms: `x.op(&y)` computes `x = x ∘ y`, and
//! `x.op_all(operands)` folds every operand into `x` from left to right.
//! Unary operations also come in two forms: `x.op()` replaces `x` with
//! `op(x)`, and `x.op_of(&y)` replaces `x` with `op(y)`. Every form rounds
//! with the rounding algorithm of `x` and returns `x` for chaining.

use std::iter::{self, Product, Sum};

use gmp_mpfr_sys::mpfr::{self, mpfr_t, rnd_t};
use libc::{c_int, c_long, c_ulong};

use crate::context::DEFAULT_PRECISION;
use crate::error::ArithmeticError;
use crate::float::Float;

impl Float {
    /// Folds `operands` into the value from left to right with `op`, which
    /// receives the destination, the accumulator, the next operand and the
    /// rounding direction.
    pub(crate) fn fold<'a, I, F>(&mut self, operands: I, mut op: F) -> &mut Self
    where
        I: IntoIterator<Item = &'a Float>,
        F: FnMut(*mut mpfr_t, *const mpfr_t, *const mpfr_t, rnd_t),
    {
        let rnd = self.rounding().to_c();
        let acc = self.as_mut_ptr();
        for operand in operands {
            operand.with_raw(|y| op(acc, acc, y, rnd));
        }
        self
    }

    fn map_in_place<F>(&mut self, op: F) -> &mut Self
    where
        F: FnOnce(*mut mpfr_t, *const mpfr_t, rnd_t),
    {
        let rnd = self.rounding().to_c();
        let acc = self.as_mut_ptr();
        op(acc, acc, rnd);
        self
    }

    fn map_from<F>(&mut self, operand: &Float, op: F) -> &mut Self
    where
        F: FnOnce(*mut mpfr_t, *const mpfr_t, rnd_t),
    {
        let rnd = self.rounding().to_c();
        let acc = self.as_mut_ptr();
        operand.with_raw(|x| op(acc, x, rnd));
        self
    }
}

macro_rules! binary_ops {
    ($($(#[$attr:meta])* $name:ident => $f:path;)*) => {
        paste::paste! {
            impl Float {
                $(
                    $(#[$attr])*
                    pub fn $name(&mut self, operand: &Float) -> &mut Self {
                        self.fold(iter::once(operand), |r, x, y, rnd| unsafe {
                            $f(r, x, y, rnd);
                        })
                    }

                    #[doc = concat!(
                        "Folds every operand into the value with [`Float::",
                        stringify!($name),
                        "`], from left to right. Without operands the value is unchanged."
                    )]
                    pub fn [<$name _all>]<'a, I>(&mut self, operands: I) -> &mut Self
                    where
                        I: IntoIterator<Item = &'a Float>,
                    {
                        self.fold(operands, |r, x, y, rnd| unsafe {
                            $f(r, x, y, rnd);
                        })
                    }
                )*
            }
        }
    };
}

binary_ops! {
    /// Adds `operand` to the value.
    add => mpfr::add;
    /// Subtracts `operand` from the value.
    sub => mpfr::sub;
    /// Multiplies the value by `operand`.
    mul => mpfr::mul;
    /// Divides the value by `operand`.
    ///
    /// Division by zero follows IEEE 754 and produces an infinity or NaN. See
    /// [`Float::quo`] for a division that refuses zero divisors.
    div => mpfr::div;
    /// Raises the value to the power of `operand`.
    pow => mpfr::pow;
    /// Computes the arc-tangent of the value divided by `operand`, using the
    /// signs of both to determine the quadrant.
    atan2 => mpfr::atan2;
    /// Computes the arithmetic-geometric mean of the value and `operand`.
    agm => mpfr::agm;
    /// Computes the Euclidean norm of the value and `operand`.
    hypot => mpfr::hypot;
    /// Computes the remainder of dividing the value by `operand`, with the
    /// quotient rounded toward zero.
    fmod => mpfr::fmod;
    /// Computes the remainder of dividing the value by `operand`, with the
    /// quotient rounded to the nearest integer.
    remainder => mpfr::remainder;
    /// Keeps the larger of the value and `operand`. A NaN loses to any number.
    max => mpfr::max;
    /// Keeps the smaller of the value and `operand`. A NaN loses to any number.
    min => mpfr::min;
    /// Computes the relative difference `|value − operand| / value`.
    reldiff => mpfr::reldiff;
    /// Computes the upper incomplete gamma function of the value at `operand`.
    gamma_inc => mpfr::gamma_inc;
}

macro_rules! unary_ops {
    ($($(#[$attr:meta])* $name:ident => $f:path;)*) => {
        paste::paste! {
            impl Float {
                $(
                    $(#[$attr])*
                    pub fn $name(&mut self) -> &mut Self {
                        self.map_in_place(|r, x, rnd| unsafe {
                            $f(r, x, rnd);
                        })
                    }

                    #[doc = concat!(
                        "Replaces the value with the result of [`Float::",
                        stringify!($name),
                        "`] applied to `operand`."
                    )]
                    pub fn [<$name _of>](&mut self, operand: &Float) -> &mut Self {
                        self.map_from(operand, |r, x, rnd| unsafe {
                            $f(r, x, rnd);
                        })
                    }
                )*
            }
        }
    };
}

unary_ops! {
    /// Negates the value.
    neg => mpfr::neg;
    /// Takes the absolute value.
    abs => mpfr::abs;
    /// Computes the square root. The square root of a negative number is NaN.
    sqrt => mpfr::sqrt;
    /// Computes the reciprocal of the square root.
    rec_sqrt => mpfr::rec_sqrt;
    /// Computes the cube root.
    cbrt => mpfr::cbrt;
    /// Computes the exponential.
    exp => mpfr::exp;
    /// Computes two raised to the power of the value.
    exp2 => mpfr::exp2;
    /// Computes ten raised to the power of the value.
    exp10 => mpfr::exp10;
    /// Computes the natural logarithm.
    ln => mpfr::log;
    /// Computes the base-2 logarithm.
    log2 => mpfr::log2;
    /// Computes the base-10 logarithm.
    log10 => mpfr::log10;
    /// Computes the sine.
    sin => mpfr::sin;
    /// Computes the cosine.
    cos => mpfr::cos;
    /// Computes the tangent.
    tan => mpfr::tan;
    /// Computes the secant.
    sec => mpfr::sec;
    /// Computes the cosecant.
    csc => mpfr::csc;
    /// Computes the cotangent.
    cot => mpfr::cot;
    /// Computes the arc-sine.
    asin => mpfr::asin;
    /// Computes the arc-cosine.
    acos => mpfr::acos;
    /// Computes the arc-tangent.
    atan => mpfr::atan;
    /// Computes the hyperbolic sine.
    sinh => mpfr::sinh;
    /// Computes the hyperbolic cosine.
    cosh => mpfr::cosh;
    /// Computes the hyperbolic tangent.
    tanh => mpfr::tanh;
    /// Computes the hyperbolic secant.
    sech => mpfr::sech;
    /// Computes the hyperbolic cosecant.
    csch => mpfr::csch;
    /// Computes the hyperbolic cotangent.
    coth => mpfr::coth;
    /// Computes the inverse hyperbolic sine.
    asinh => mpfr::asinh;
    /// Computes the inverse hyperbolic cosine.
    acosh => mpfr::acosh;
    /// Computes the inverse hyperbolic tangent.
    atanh => mpfr::atanh;
    /// Computes the gamma function.
    gamma => mpfr::gamma;
    /// Computes the digamma function, the logarithmic derivative of gamma.
    digamma => mpfr::digamma;
    /// Computes the real part of the dilogarithm.
    li2 => mpfr::li2;
    /// Computes the Riemann zeta function.
    zeta => mpfr::zeta;
    /// Computes the first-kind Bessel function of order 0.
    j0 => mpfr::j0;
    /// Computes the first-kind Bessel function of order 1.
    j1 => mpfr::j1;
    /// Computes the second-kind Bessel function of order 0.
    y0 => mpfr::y0;
    /// Computes the second-kind Bessel function of order 1.
    y1 => mpfr::y1;
    /// Keeps the fractional part, with the sign of the value.
    frac => mpfr::frac;
}

// Integers wider than the precision are rounded with the value's rounding.
unary_ops! {
    /// Rounds up to the next integer.
    ceil => mpfr::rint_ceil;
    /// Rounds down to the next integer.
    floor => mpfr::rint_floor;
    /// Rounds to the nearest integer, with ties away from zero.
    round => mpfr::rint_round;
    /// Rounds to the nearest integer, with ties to even.
    roundeven => mpfr::rint_roundeven;
    /// Rounds toward zero to the next integer.
    trunc => mpfr::rint_trunc;
}

impl Float {
    /// Divides the value by `divisor`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero. [`Float::div`] returns an infinity
    /// instead, and [`Float::try_quo`] returns an error.
    pub fn quo(&mut self, divisor: &Float) -> &mut Self {
        self.quo_all(iter::once(divisor))
    }

    /// Divides the value by every divisor in turn.
    ///
    /// # Panics
    ///
    /// Panics if any divisor is zero. The check happens before any division
    /// is performed.
    pub fn quo_all<'a, I>(&mut self, divisors: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Float>,
    {
        let divisors: Vec<&Float> = divisors.into_iter().collect();
        if divisors.iter().any(|d| d.is_zero()) {
            panic!("{}", ArithmeticError::DivisionByZero);
        }
        self.div_all(divisors)
    }

    /// Like [`Float::quo`], but reports a zero divisor as an error and leaves
    /// the value unchanged.
    pub fn try_quo(&mut self, divisor: &Float) -> Result<&mut Self, ArithmeticError> {
        self.try_quo_all(iter::once(divisor))
    }

    /// Like [`Float::quo_all`], but reports a zero divisor as an error and
    /// leaves the value unchanged.
    pub fn try_quo_all<'a, I>(&mut self, divisors: I) -> Result<&mut Self, ArithmeticError>
    where
        I: IntoIterator<Item = &'a Float>,
    {
        let divisors: Vec<&Float> = divisors.into_iter().collect();
        if divisors.iter().any(|d| d.is_zero()) {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.div_all(divisors))
    }

    /// Replaces the value with its `k`th root.
    ///
    /// # Panics
    ///
    /// Panics if `k` is zero, if `k` is even and the value is negative, or if
    /// the result is NaN. See [`Float::try_root`].
    pub fn root(&mut self, k: u32) -> &mut Self {
        self.try_root(k).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Replaces the value with the `k`th root of `operand`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Float::root`].
    pub fn root_of(&mut self, operand: &Float, k: u32) -> &mut Self {
        self.try_root_of(operand, k)
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Like [`Float::root`], but reports failures as errors and leaves the
    /// value unchanged.
    pub fn try_root(&mut self, k: u32) -> Result<&mut Self, ArithmeticError> {
        let root = self.checked_root(self, k)?;
        self.commit(root);
        Ok(self)
    }

    /// Like [`Float::root_of`], but reports failures as errors and leaves the
    /// value unchanged.
    pub fn try_root_of(&mut self, operand: &Float, k: u32) -> Result<&mut Self, ArithmeticError> {
        let root = self.checked_root(operand, k)?;
        self.commit(root);
        Ok(self)
    }

    /// Computes the `k`th root of `operand` into a new value with this value's
    /// precision and rounding algorithm.
    fn checked_root(&self, operand: &Float, k: u32) -> Result<Float, ArithmeticError> {
        if k == 0 {
            return Err(ArithmeticError::InvalidRootDegree);
        }
        if k % 2 == 0 && operand.is_sign_negative() && !operand.is_zero() && !operand.is_nan() {
            return Err(ArithmeticError::NegativeEvenRoot);
        }
        let mut root = Float::fresh(self.precision(), self.rounding());
        root.map_from(operand, |r, x, rnd| unsafe {
            mpfr::rootn_ui(r, x, c_ulong::from(k), rnd);
        });
        if root.is_nan() {
            return Err(ArithmeticError::NanResult);
        }
        Ok(root)
    }

    /// Replaces the value with the first-kind Bessel function of order `n`
    /// evaluated at the value.
    pub fn jn(&mut self, n: i32) -> &mut Self {
        self.map_in_place(|r, x, rnd| unsafe {
            mpfr::jn(r, c_long::from(n), x, rnd);
        })
    }

    /// Replaces the value with the first-kind Bessel function of order `n`
    /// evaluated at `operand`.
    pub fn jn_of(&mut self, n: i32, operand: &Float) -> &mut Self {
        self.map_from(operand, |r, x, rnd| unsafe {
            mpfr::jn(r, c_long::from(n), x, rnd);
        })
    }

    /// Replaces the value with the second-kind Bessel function of order `n`
    /// evaluated at the value.
    pub fn yn(&mut self, n: i32) -> &mut Self {
        self.map_in_place(|r, x, rnd| unsafe {
            mpfr::yn(r, c_long::from(n), x, rnd);
        })
    }

    /// Replaces the value with the second-kind Bessel function of order `n`
    /// evaluated at `operand`.
    pub fn yn_of(&mut self, n: i32, operand: &Float) -> &mut Self {
        self.map_from(operand, |r, x, rnd| unsafe {
            mpfr::yn(r, c_long::from(n), x, rnd);
        })
    }

    /// Replaces the value with the logarithm of the absolute value of its
    /// gamma function, and returns the sign of the gamma function.
    pub fn lgamma(&mut self) -> i32 {
        let mut sign: c_int = 0;
        self.map_in_place(|r, x, rnd| unsafe {
            mpfr::lgamma(r, &mut sign, x, rnd);
        });
        sign
    }

    /// Like [`Float::lgamma`], evaluated at `operand`.
    pub fn lgamma_of(&mut self, operand: &Float) -> i32 {
        let mut sign: c_int = 0;
        self.map_from(operand, |r, x, rnd| unsafe {
            mpfr::lgamma(r, &mut sign, x, rnd);
        });
        sign
    }

    /// Computes the same remainder as [`Float::fmod`] and returns the low
    /// significant bits of the quotient, with its sign.
    pub fn fmodquo(&mut self, operand: &Float) -> i64 {
        let mut quotient: c_long = 0;
        self.fold(iter::once(operand), |r, x, y, rnd| unsafe {
            mpfr::fmodquo(r, &mut quotient, x, y, rnd);
        });
        i64::from(quotient)
    }

    /// Computes the same remainder as [`Float::remainder`] and returns the low
    /// significant bits of the quotient, with its sign.
    pub fn remquo(&mut self, operand: &Float) -> i64 {
        let mut quotient: c_long = 0;
        self.fold(iter::once(operand), |r, x, y, rnd| unsafe {
            mpfr::remquo(r, &mut quotient, x, y, rnd);
        });
        i64::from(quotient)
    }

    /// Computes `self × y + z` with a single rounding.
    pub fn fma(&mut self, y: &Float, z: &Float) -> &mut Self {
        self.fused(y, z, |r, a, b, c, rnd| unsafe {
            mpfr::fma(r, a, b, c, rnd);
        })
    }

    /// Computes `self × y − z` with a single rounding.
    pub fn fms(&mut self, y: &Float, z: &Float) -> &mut Self {
        self.fused(y, z, |r, a, b, c, rnd| unsafe {
            mpfr::fms(r, a, b, c, rnd);
        })
    }

    /// Computes `self × b + c × d` with a single rounding.
    pub fn fmma(&mut self, b: &Float, c: &Float, d: &Float) -> &mut Self {
        let rnd = self.rounding().to_c();
        let acc = self.as_mut_ptr();
        b.with_raw(|b| {
            c.with_raw(|c| {
                d.with_raw(|d| unsafe {
                    mpfr::fmma(acc, acc, b, c, d, rnd);
                })
            })
        });
        self
    }

    /// Computes `self × b − c × d` with a single rounding.
    pub fn fmms(&mut self, b: &Float, c: &Float, d: &Float) -> &mut Self {
        let rnd = self.rounding().to_c();
        let acc = self.as_mut_ptr();
        b.with_raw(|b| {
            c.with_raw(|c| {
                d.with_raw(|d| unsafe {
                    mpfr::fmms(acc, acc, b, c, d, rnd);
                })
            })
        });
        self
    }

    fn fused<F>(&mut self, y: &Float, z: &Float, op: F) -> &mut Self
    where
        F: FnOnce(*mut mpfr_t, *const mpfr_t, *const mpfr_t, *const mpfr_t, rnd_t),
    {
        let rnd = self.rounding().to_c();
        let acc = self.as_mut_ptr();
        y.with_raw(|y| z.with_raw(|z| op(acc, acc, y, z, rnd)));
        self
    }

    /// Replaces the value with the next representable number toward positive
    /// infinity at the value's precision.
    pub fn next_above(&mut self) -> &mut Self {
        unsafe { mpfr::nextabove(self.as_mut_ptr()) };
        self
    }

    /// Replaces the value with the next representable number toward negative
    /// infinity at the value's precision.
    pub fn next_below(&mut self) -> &mut Self {
        unsafe { mpfr::nextbelow(self.as_mut_ptr()) };
        self
    }

    /// Replaces the value with the next representable number in the direction
    /// of `target`.
    pub fn next_toward(&mut self, target: &Float) -> &mut Self {
        let acc = self.as_mut_ptr();
        target.with_raw(|y| unsafe { mpfr::nexttoward(acc, y) });
        self
    }
}

fn widest(operands: &[&Float]) -> u32 {
    operands
        .iter()
        .map(|f| f.precision())
        .max()
        .unwrap_or(DEFAULT_PRECISION)
}

impl<'a> Sum<&'a Float> for Float {
    fn sum<I>(iter: I) -> Float
    where
        I: Iterator<Item = &'a Float>,
    {
        let operands: Vec<&Float> = iter.collect();
        let mut sum = Float::with_precision(widest(&operands));
        sum.add_all(operands);
        sum
    }
}

impl<'a> Product<&'a Float> for Float {
    fn product<I>(iter: I) -> Float
    where
        I: Iterator<Item = &'a Float>,
    {
        let operands: Vec<&Float> = iter.collect();
        let mut product = Float::with_precision(widest(&operands));
        product.set_u32(1);
        product.mul_all(operands);
        product
    }
}
