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

use std::convert::TryFrom;
use std::fmt;

use gmp_mpfr_sys::mpfr::{self, prec_t, rnd_t};
use num_bigint::BigInt;

use crate::error::{InvalidPrecisionError, ParseFloatError};
use crate::float::Float;

/// The precision, in bits, of values that are not given one explicitly.
///
/// This matches the significand width of an IEEE 754 binary64 number, so that
/// a default [`Float`] represents every `f64` exactly.
pub const DEFAULT_PRECISION: u32 = 53;

/// A context for constructing floating-point values.
///
/// A context configures the precision and rounding algorithm of the values it
/// builds. Values remember both settings individually after construction, so
/// changing the context afterwards does not affect values that already exist.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Context {
    precision: u32,
    rounding: Rounding,
}

impl Default for Context {
    fn default() -> Context {
        Context {
            precision: DEFAULT_PRECISION,
            rounding: Rounding::default(),
        }
    }
}

impl Context {
    /// Returns the context's precision, in bits.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Sets the context's precision, in bits.
    ///
    /// The precision must be within the range supported by MPFR.
    pub fn set_precision(&mut self, precision: u32) -> Result<(), InvalidPrecisionError> {
        validate_precision(precision)?;
        self.precision = precision;
        Ok(())
    }

    /// Returns the context's rounding algorithm.
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Set's the context's rounding algorithm.
    pub fn set_rounding(&mut self, rounding: Rounding) {
        self.rounding = rounding;
    }

    /// Constructs a zero with the context's precision and rounding algorithm.
    ///
    /// No native resources are acquired until the value is first modified.
    pub fn float(&self) -> Float {
        Float::fresh(self.precision, self.rounding)
    }

    /// Parses a number from its string representation in the given base.
    ///
    /// Bases from 2 to 62 are supported. Besides ordinary digits, the string
    /// may carry a sign, a fractional part, an exponent (introduced by `e` for
    /// bases up to 10 or by `@` in any base), or spell out `NaN` or `Inf`.
    pub fn parse<S>(&self, s: S, base: i32) -> Result<Float, ParseFloatError>
    where
        S: Into<Vec<u8>>,
    {
        self.float().parsed(s, base)
    }

    /// Constructs a number from an `f64`, rounding it to the context's
    /// precision if necessary.
    pub fn from_f64(&self, n: f64) -> Float {
        let mut f = self.float();
        f.set_f64(n);
        f
    }

    /// Constructs a number from an `i64`.
    pub fn from_i64(&self, n: i64) -> Float {
        let mut f = self.float();
        f.set_i64(n);
        f
    }

    /// Constructs a number from a `u64`.
    pub fn from_u64(&self, n: u64) -> Float {
        let mut f = self.float();
        f.set_u64(n);
        f
    }

    /// Constructs a number from an arbitrary-precision integer.
    pub fn from_big_int(&self, n: &BigInt) -> Float {
        let mut f = self.float();
        f.set_big_int(n);
        f
    }
}

pub(crate) fn validate_precision(precision: u32) -> Result<prec_t, InvalidPrecisionError> {
    match prec_t::try_from(precision) {
        Ok(p) if (mpfr::PREC_MIN..=mpfr::PREC_MAX).contains(&p) => Ok(p),
        _ => Err(InvalidPrecisionError),
    }
}

/// Algorithms for rounding binary floating-point numbers.
///
/// Every value carries its own rounding algorithm, which is used by all
/// operations that store a result into that value.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity.
    Ceiling,
    /// Round towards zero (truncation).
    Down,
    /// Round towards negative infinity.
    Floor,
    /// Round to nearest; if equidistant, round so that the final bit is even.
    HalfEven,
    /// Round away from zero.
    Up,
}

impl Default for Rounding {
    fn default() -> Rounding {
        Rounding::HalfEven
    }
}

impl Rounding {
    pub(crate) fn to_c(self) -> rnd_t {
        match self {
            Rounding::Ceiling => rnd_t::RNDU,
            Rounding::Down => rnd_t::RNDZ,
            Rounding::Floor => rnd_t::RNDD,
            Rounding::HalfEven => rnd_t::RNDN,
            Rounding::Up => rnd_t::RNDA,
        }
    }
}

/// The class of a floating-point number.
///
/// MPFR's exponent range is wide enough that it never produces subnormal
/// numbers, so there is no subnormal class.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Class {
    /// Not a Number.
    Nan,
    /// Negative infinity.
    NegInfinity,
    /// Negative normal.
    NegNormal,
    /// Negative zero.
    NegZero,
    /// Positive zero.
    PosZero,
    /// Positive normal.
    PosNormal,
    /// Positive infinity.
    PosInfinity,
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Class::Nan => f.write_str("NaN"),
            Class::NegInfinity => f.write_str("-Infinity"),
            Class::NegNormal => f.write_str("-Normal"),
            Class::NegZero => f.write_str("-Zero"),
            Class::PosZero => f.write_str("+Zero"),
            Class::PosNormal => f.write_str("+Normal"),
            Class::PosInfinity => f.write_str("+Infinity"),
        }
    }
}
