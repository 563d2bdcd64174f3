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

//! Conversions between [`Float`] and integers, primitive floats and
//! arbitrary-precision decimal types.
//!
//! Machine words go through MPFR's native conversions. Everything wider goes
//! through decimal text, which is exact but slower.

use std::convert::TryFrom;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use gmp_mpfr_sys::mpfr;
use libc::{c_long, c_ulong};
use num_bigint::BigInt;
use tracing::trace;

use crate::conv::{self, Notation};
use crate::error::{ParseFloatError, TryFromFloatError};
use crate::float::Float;

impl Float {
    /// Sets the value to an `f64`, rounded to the value's precision.
    pub fn set_f64(&mut self, n: f64) -> &mut Self {
        let rnd = self.rounding().to_c();
        unsafe { mpfr::set_d(self.as_mut_ptr(), n, rnd) };
        self
    }

    /// Sets the value to an `f32`, rounded to the value's precision.
    pub fn set_f32(&mut self, n: f32) -> &mut Self {
        self.set_f64(f64::from(n))
    }

    /// Sets the value to an `i32` through MPFR's native word conversion.
    pub fn set_i32(&mut self, n: i32) -> &mut Self {
        let rnd = self.rounding().to_c();
        unsafe { mpfr::set_si(self.as_mut_ptr(), c_long::from(n), rnd) };
        self
    }

    /// Sets the value to a `u32` through MPFR's native word conversion.
    pub fn set_u32(&mut self, n: u32) -> &mut Self {
        let rnd = self.rounding().to_c();
        unsafe { mpfr::set_ui(self.as_mut_ptr(), c_ulong::from(n), rnd) };
        self
    }

    /// Sets the value to an `i64`.
    ///
    /// Values that fit in an `i32` take the native fast path of
    /// [`Float::set_i32`]; all others go through
    /// [`Float::set_decimal_text`].
    pub fn set_i64(&mut self, n: i64) -> &mut Self {
        match i32::try_from(n) {
            Ok(n) => self.set_i32(n),
            Err(_) => self.set_integer_text(&n.to_string()),
        }
    }

    /// Sets the value to a `u64`.
    ///
    /// Values that fit in a `u32` take the native fast path of
    /// [`Float::set_u32`]; all others go through
    /// [`Float::set_decimal_text`].
    pub fn set_u64(&mut self, n: u64) -> &mut Self {
        match u32::try_from(n) {
            Ok(n) => self.set_u32(n),
            Err(_) => self.set_integer_text(&n.to_string()),
        }
    }

    /// Sets the value to an arbitrary-precision integer, through its decimal
    /// text.
    pub fn set_big_int(&mut self, n: &BigInt) -> &mut Self {
        self.set_integer_text(&n.to_str_radix(10))
    }

    /// Sets the value to an arbitrary-precision decimal, through its decimal
    /// text.
    pub fn set_big_decimal(&mut self, n: &BigDecimal) -> &mut Self {
        if let Err(e) = self.set_decimal_text(&n.to_string()) {
            unreachable!("BigDecimal text rejected by MPFR: {}", e);
        }
        self
    }

    /// Sets the value from base-10 text.
    ///
    /// This is the slow path behind every conversion from a number wider than
    /// a machine word. It is equivalent to `set_str(text, 10)`.
    pub fn set_decimal_text(&mut self, text: &str) -> Result<&mut Self, ParseFloatError> {
        trace!(text, "converting through decimal text");
        self.set_str(text, 10)
    }

    fn set_integer_text(&mut self, text: &str) -> &mut Self {
        if let Err(e) = self.set_decimal_text(text) {
            unreachable!("integer text rejected by MPFR: {}", e);
        }
        self
    }

    /// Converts the value to the nearest `f64` in the direction of the value's
    /// rounding algorithm.
    pub fn to_f64(&self) -> f64 {
        let rnd = self.rounding().to_c();
        self.with_raw(|x| unsafe { mpfr::get_d(x, rnd) })
    }

    /// Converts the value to an `f64` and releases its native handle.
    pub fn into_f64(mut self) -> f64 {
        let n = self.to_f64();
        self.release();
        n
    }

    /// Converts the value to an integer, rounding with the value's rounding
    /// algorithm, and releases its native handle.
    ///
    /// Values outside the range of a C `long` saturate at its bounds, and NaN
    /// converts to zero. Use `i64::try_from` to detect either case.
    pub fn into_i64(mut self) -> i64 {
        let rnd = self.rounding().to_c();
        let n = self.with_raw(|x| unsafe { mpfr::get_si(x, rnd) });
        self.release();
        i64::from(n)
    }

    /// Converts the value to an unsigned integer, rounding with the value's
    /// rounding algorithm, and releases its native handle.
    ///
    /// Values outside the range of a C `unsigned long` saturate at its bounds,
    /// and NaN converts to zero. Use `u64::try_from` to detect either case.
    pub fn into_u64(mut self) -> u64 {
        let rnd = self.rounding().to_c();
        let n = self.with_raw(|x| unsafe { mpfr::get_ui(x, rnd) });
        self.release();
        u64::from(n)
    }

    /// Returns the decimal digits of the value truncated toward zero, with
    /// enough digits to represent that integer exactly.
    fn integral_digits(&self) -> Result<conv::Digits, TryFromFloatError> {
        if !self.is_finite() {
            return Err(TryFromFloatError);
        }
        let mut int = Float::fresh(self.precision(), self.rounding());
        int.trunc_of(self);
        let rnd = int.rounding().to_c();
        int.with_raw(|x| {
            let shortest = unsafe { conv::digits(x, 0, rnd) };
            if shortest.exponent <= 0 {
                return Ok(shortest);
            }
            let n = usize::try_from(shortest.exponent).map_err(|_| TryFromFloatError)?;
            Ok(unsafe { conv::digits(x, n.max(2), rnd) })
        })
    }
}

macro_rules! from_primitive {
    ($($t:ty => $set:ident),*) => {
        $(
            impl From<$t> for Float {
                fn from(n: $t) -> Float {
                    let mut f = Float::new();
                    f.$set(n);
                    f
                }
            }
        )*
    };
}

from_primitive!(
    i32 => set_i32,
    u32 => set_u32,
    i64 => set_i64,
    u64 => set_u64,
    f32 => set_f32,
    f64 => set_f64
);

impl From<&BigInt> for Float {
    fn from(n: &BigInt) -> Float {
        let mut f = Float::new();
        f.set_big_int(n);
        f
    }
}

impl From<&BigDecimal> for Float {
    fn from(n: &BigDecimal) -> Float {
        let mut f = Float::new();
        f.set_big_decimal(n);
        f
    }
}

macro_rules! try_from_float {
    ($($t:ty => $fits:ident, $get:path);*) => {
        $(
            impl TryFrom<&Float> for $t {
                type Error = TryFromFloatError;

                fn try_from(f: &Float) -> Result<$t, TryFromFloatError> {
                    if !f.$fits() {
                        return Err(TryFromFloatError);
                    }
                    let rnd = f.rounding().to_c();
                    let n = f.with_raw(|x| unsafe { $get(x, rnd) });
                    <$t>::try_from(n).map_err(|_| TryFromFloatError)
                }
            }
        )*
    };
}

try_from_float!(
    i16 => fits_signed_short, mpfr::get_si;
    u16 => fits_unsigned_short, mpfr::get_ui;
    i32 => fits_signed_int, mpfr::get_si;
    u32 => fits_unsigned_int, mpfr::get_ui;
    i64 => fits_signed_long, mpfr::get_si;
    u64 => fits_unsigned_long, mpfr::get_ui
);

/// Truncates toward zero. Integers of any magnitude convert exactly.
impl TryFrom<&Float> for BigInt {
    type Error = TryFromFloatError;

    fn try_from(f: &Float) -> Result<BigInt, TryFromFloatError> {
        let digits = f.integral_digits()?;
        let mut text = String::new();
        if digits.negative {
            text.push('-');
        }
        text.push_str(digits.integral());
        BigInt::parse_bytes(text.as_bytes(), 10).ok_or(TryFromFloatError)
    }
}

impl TryFrom<&Float> for BigDecimal {
    type Error = TryFromFloatError;

    fn try_from(f: &Float) -> Result<BigDecimal, TryFromFloatError> {
        if !f.is_finite() {
            return Err(TryFromFloatError);
        }
        BigDecimal::from_str(&f.to_decimal_string(Notation::Positional))
            .map_err(|_| TryFromFloatError)
    }
}

#[cfg(feature = "num-traits")]
impl num_traits::ToPrimitive for Float {
    fn to_i64(&self) -> Option<i64> {
        i64::try_from(self).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self).ok()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Float::to_f64(self))
    }
}

#[cfg(feature = "num-traits")]
impl num_traits::FromPrimitive for Float {
    fn from_i64(n: i64) -> Option<Float> {
        Some(Float::from(n))
    }

    fn from_u64(n: u64) -> Option<Float> {
        Some(Float::from(n))
    }

    fn from_f64(n: f64) -> Option<Float> {
        Some(Float::from(n))
    }
}
