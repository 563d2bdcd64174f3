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

//! Arithmetic over explicit operands.
//!
//! Every function here leaves its operands untouched and returns a new value.
//! The result has the widest precision of the operands and the rounding
//! algorithm passed in, which it keeps for any later in-place operations.
//!
//! ```
//! use mpfloat::{ops, Float, Rounding};
//!
//! let x = Float::from(5);
//! let y = Float::from(3);
//! let down = ops::div(&x, &y, Rounding::Down);
//! let up = ops::div(&x, &y, Rounding::Up);
//! assert!(down < up);
//! assert_eq!(x.to_string(), "5.0");
//! ```

use gmp_mpfr_sys::mpfr;

use crate::context::Rounding;
use crate::error::ArithmeticError;
use crate::float::Float;

/// Builds a result that starts out as `first`.
fn accumulator(first: &Float, precision: u32, rounding: Rounding) -> Float {
    let mut acc = Float::fresh(precision, rounding);
    acc.assign(first);
    acc
}

macro_rules! binary_fns {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!(
                "Computes [`Float::",
                stringify!($name),
                "`] of `x` and `y` into a new value rounded with `rounding`."
            )]
            pub fn $name(x: &Float, y: &Float, rounding: Rounding) -> Float {
                let mut acc = accumulator(x, x.precision().max(y.precision()), rounding);
                acc.$name(y);
                acc
            }
        )*
    };
}

binary_fns!(
    add, sub, mul, div, pow, atan2, agm, hypot, fmod, remainder, max, min, reldiff, gamma_inc,
);

macro_rules! unary_fns {
    ($($name:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!(
                    "Computes [`Float::",
                    stringify!($name),
                    "`] of `x` into a new value rounded with `rounding`."
                )]
                pub fn $name(x: &Float, rounding: Rounding) -> Float {
                    let mut result = Float::fresh(x.precision(), rounding);
                    result.[<$name _of>](x);
                    result
                }
            )*
        }
    };
}

unary_fns!(
    neg, abs, sqrt, rec_sqrt, cbrt, exp, exp2, exp10, ln, log2, log10, sin, cos, tan, sec, csc,
    cot, asin, acos, atan, sinh, cosh, tanh, sech, csch, coth, asinh, acosh, atanh, gamma,
    digamma, li2, zeta, j0, j1, y0, y1, frac, ceil, floor, round, roundeven, trunc,
);

/// Divides `x` by `y` into a new value rounded with `rounding`.
///
/// # Panics
///
/// Panics if `y` is zero. See [`try_quo`].
pub fn quo(x: &Float, y: &Float, rounding: Rounding) -> Float {
    let mut acc = accumulator(x, x.precision().max(y.precision()), rounding);
    acc.quo(y);
    acc
}

/// Like [`quo`], but reports a zero divisor as an error.
pub fn try_quo(x: &Float, y: &Float, rounding: Rounding) -> Result<Float, ArithmeticError> {
    let mut acc = accumulator(x, x.precision().max(y.precision()), rounding);
    acc.try_quo(y)?;
    Ok(acc)
}

/// Computes the `k`th root of `x` into a new value rounded with `rounding`.
///
/// # Panics
///
/// Panics under the same conditions as [`Float::root`].
pub fn root(x: &Float, k: u32, rounding: Rounding) -> Float {
    let mut result = Float::fresh(x.precision(), rounding);
    result.root_of(x, k);
    result
}

/// Like [`root`], but reports failures as errors.
pub fn try_root(x: &Float, k: u32, rounding: Rounding) -> Result<Float, ArithmeticError> {
    let mut result = Float::fresh(x.precision(), rounding);
    result.try_root_of(x, k)?;
    Ok(result)
}

/// Computes the first-kind Bessel function of order `n` at `x`.
pub fn jn(n: i32, x: &Float, rounding: Rounding) -> Float {
    let mut result = Float::fresh(x.precision(), rounding);
    result.jn_of(n, x);
    result
}

/// Computes the second-kind Bessel function of order `n` at `x`.
pub fn yn(n: i32, x: &Float, rounding: Rounding) -> Float {
    let mut result = Float::fresh(x.precision(), rounding);
    result.yn_of(n, x);
    result
}

/// Computes the logarithm of the absolute value of the gamma function at `x`,
/// together with the sign of the gamma function.
pub fn lgamma(x: &Float, rounding: Rounding) -> (Float, i32) {
    let mut result = Float::fresh(x.precision(), rounding);
    let sign = result.lgamma_of(x);
    (result, sign)
}

/// Computes `x × y + z` with a single rounding.
pub fn fma(x: &Float, y: &Float, z: &Float, rounding: Rounding) -> Float {
    let precision = x.precision().max(y.precision()).max(z.precision());
    let mut acc = accumulator(x, precision, rounding);
    acc.fma(y, z);
    acc
}

/// Computes `x × y − z` with a single rounding.
pub fn fms(x: &Float, y: &Float, z: &Float, rounding: Rounding) -> Float {
    let precision = x.precision().max(y.precision()).max(z.precision());
    let mut acc = accumulator(x, precision, rounding);
    acc.fms(y, z);
    acc
}

/// Splits `x` into its integral and fractional parts, both carrying the sign
/// of `x`.
pub fn modf(x: &Float, rounding: Rounding) -> (Float, Float) {
    let mut int = Float::fresh(x.precision(), rounding);
    let mut frac = Float::fresh(x.precision(), rounding);
    let (i, f) = (int.as_mut_ptr(), frac.as_mut_ptr());
    let rnd = rounding.to_c();
    x.with_raw(|x| unsafe { mpfr::modf(i, f, x, rnd) });
    (int, frac)
}

/// Frees the caches MPFR keeps for constants like π on the current thread.
pub fn free_cache() {
    unsafe { mpfr::free_cache() }
}

/// Frees the memory MPFR keeps in its per-thread memory pools.
///
/// Returns whether the cleanup succeeded.
pub fn memory_cleanup() -> bool {
    // gmp-mpfr-sys binds this function without its `int` return value, so
    // declare it with the signature from mpfr.h.
    extern "C" {
        fn mpfr_mp_memory_cleanup() -> libc::c_int;
    }
    unsafe { mpfr_mp_memory_cleanup() == 0 }
}
