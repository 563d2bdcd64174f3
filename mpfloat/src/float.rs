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
use std::ffi::CString;
use std::fmt;
use std::mem::{self, MaybeUninit};
use std::str::FromStr;

use gmp_mpfr_sys::mpfr::{self, mpfr_t, prec_t};
use tracing::trace;

use crate::context::{validate_precision, Class, Context, Rounding, DEFAULT_PRECISION};
use crate::conv::{self, Notation};
use crate::error::{InvalidPrecisionError, ParseFloatError};

/// The state of the native MPFR handle behind a [`Float`].
///
/// A value starts out uninitialized, acquires its handle on first
/// modification, and gives it back when released. A released value that is
/// modified again acquires a fresh handle holding zero.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Lifecycle {
    /// No handle has been acquired yet.
    Uninitialized,
    /// The value owns a live handle.
    Initialized,
    /// The handle has been released.
    Cleared,
}

enum Handle {
    Uninitialized,
    Initialized(mpfr_t),
    Cleared,
}

/// An arbitrary-precision binary floating-point number.
///
/// A `Float` has a precision, measured in bits of significand, and a rounding
/// algorithm. Every operation that stores a result into a `Float` rounds that
/// result to the value's precision using the value's rounding algorithm, so
/// both settings persist across a whole chain of operations.
///
/// Arithmetic follows a fold convention. Methods like [`Float::sub`] apply one
/// operand to the value in place; their `_all` counterparts like
/// [`Float::sub_all`] fold any number of operands into the value from left to
/// right. Unary methods like [`Float::sqrt`] operate on the value's own
/// contents, while their `_of` counterparts like [`Float::sqrt_of`] overwrite
/// the value with the result of applying the function to another operand.
/// Pure functions over explicit operands live in the [`ops`](crate::ops)
/// module.
///
/// The native handle is acquired lazily and released by [`Float::release`], by
/// the consuming conversions, or when the value is dropped. Reading a value
/// that has no live handle observes zero.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// use mpfloat::Float;
///
/// let x: Float = "1.5".parse()?;
/// let y: Float = "2.25".parse()?;
///
/// let mut acc = Float::new();
/// acc.add_all([&x, &y]);
/// assert_eq!(acc.to_string(), "3.75");
/// # Ok::<_, Box<dyn Error>>(())
/// ```
pub struct Float {
    handle: Handle,
    precision: u32,
    rounding: Rounding,
}

// Each `Float` exclusively owns the limbs behind its handle.
unsafe impl Send for Float {}

impl Float {
    /// Constructs a zero with the default precision and rounding algorithm.
    ///
    /// No native resources are acquired until the value is first modified.
    pub fn new() -> Float {
        Float::fresh(DEFAULT_PRECISION, Rounding::default())
    }

    /// Constructs a zero with the specified precision, in bits.
    ///
    /// # Panics
    ///
    /// Panics if the precision is outside the range supported by MPFR. Use
    /// [`Context::set_precision`] to validate a precision without panicking.
    pub fn with_precision(precision: u32) -> Float {
        if validate_precision(precision).is_err() {
            panic!("precision {} is outside the range supported by MPFR", precision);
        }
        Float::fresh(precision, Rounding::default())
    }

    pub(crate) fn fresh(precision: u32, rounding: Rounding) -> Float {
        Float {
            handle: Handle::Uninitialized,
            precision,
            rounding,
        }
    }

    /// Returns the precision of the value, in bits.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Changes the precision of the value, in bits.
    ///
    /// The current value is preserved, rounded to the new precision with the
    /// value's rounding algorithm.
    pub fn set_precision(&mut self, precision: u32) -> Result<(), InvalidPrecisionError> {
        let p = validate_precision(precision)?;
        if let Handle::Initialized(raw) = &mut self.handle {
            unsafe { mpfr::prec_round(raw, p, self.rounding.to_c()) };
        }
        self.precision = precision;
        Ok(())
    }

    /// Returns the value's rounding algorithm.
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Sets the rounding algorithm used by subsequent operations that store
    /// into this value. The current value is unaffected.
    pub fn set_rounding(&mut self, rounding: Rounding) {
        self.rounding = rounding;
    }

    /// Reports the state of the value's native handle.
    pub fn lifecycle(&self) -> Lifecycle {
        match self.handle {
            Handle::Uninitialized => Lifecycle::Uninitialized,
            Handle::Initialized(_) => Lifecycle::Initialized,
            Handle::Cleared => Lifecycle::Cleared,
        }
    }

    /// Reports whether the value currently owns a live native handle.
    pub fn is_initialized(&self) -> bool {
        matches!(self.handle, Handle::Initialized(_))
    }

    /// Acquires a native handle holding zero if the value does not own one.
    ///
    /// Every modifying operation calls this implicitly.
    pub fn ensure_initialized(&mut self) {
        self.raw_mut();
    }

    /// Releases the value's native handle.
    ///
    /// Releasing a value that holds no handle does nothing. A released value
    /// reads as zero, and modifying it acquires a fresh handle.
    pub fn release(&mut self) {
        if !self.is_initialized() {
            return;
        }
        if let Handle::Initialized(mut raw) = mem::replace(&mut self.handle, Handle::Cleared) {
            unsafe { mpfr::clear(&mut raw) };
            trace!(precision = self.precision, "released native handle");
        }
    }

    fn raw_mut(&mut self) -> &mut mpfr_t {
        if !self.is_initialized() {
            if let Handle::Cleared = self.handle {
                trace!(precision = self.precision, "reinitializing released value");
            }
            self.handle = Handle::Initialized(new_raw(self.precision));
        }
        match &mut self.handle {
            Handle::Initialized(raw) => raw,
            _ => unreachable!("handle initialized above"),
        }
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut mpfr_t {
        self.raw_mut()
    }

    /// Runs `f` against the value's handle, or against a scratch zero of the
    /// same precision if the value holds no handle.
    pub(crate) fn with_raw<R, F>(&self, f: F) -> R
    where
        F: FnOnce(*const mpfr_t) -> R,
    {
        match &self.handle {
            Handle::Initialized(raw) => f(raw as *const mpfr_t),
            _ => {
                let zero = Scratch::zero(self.precision);
                f(&zero.0 as *const mpfr_t)
            }
        }
    }

    /// Replaces the value's contents with those of `result`, which must share
    /// the value's rounding algorithm. The previous handle is released.
    pub(crate) fn commit(&mut self, mut result: Float) {
        mem::swap(&mut self.handle, &mut result.handle);
        self.precision = result.precision;
    }

    /// Sets the value to `src`, rounded to this value's precision.
    pub(crate) fn assign(&mut self, src: &Float) -> &mut Self {
        let rnd = self.rounding.to_c();
        let dst = self.as_mut_ptr();
        src.with_raw(|x| unsafe { mpfr::set(dst, x, rnd) });
        self
    }

    /// Copies the full magnitude of `src` into this value.
    ///
    /// The value adopts the precision of `src`, so no bits are lost, but keeps
    /// its own rounding algorithm.
    pub fn copy_from(&mut self, src: &Float) -> &mut Self {
        self.precision = src.precision;
        let dst = self.as_mut_ptr();
        unsafe { mpfr::set_prec(dst, src.precision as prec_t) };
        self.assign(src)
    }

    /// Exchanges the contents and precision of two values. The rounding
    /// algorithms stay where they are.
    pub fn swap(&mut self, other: &mut Float) {
        mem::swap(&mut self.handle, &mut other.handle);
        mem::swap(&mut self.precision, &mut other.precision);
    }

    /// Sets the value from its string representation in the given base.
    ///
    /// See [`Context::parse`] for the accepted syntax. On failure the value is
    /// left unchanged.
    pub fn set_str(&mut self, s: &str, base: i32) -> Result<&mut Self, ParseFloatError> {
        let parsed = Float::fresh(self.precision, self.rounding).parsed(s, base)?;
        self.commit(parsed);
        Ok(self)
    }

    pub(crate) fn parsed<S>(mut self, s: S, base: i32) -> Result<Float, ParseFloatError>
    where
        S: Into<Vec<u8>>,
    {
        if !(2..=62).contains(&base) {
            return Err(ParseFloatError);
        }
        let c_string = CString::new(s).map_err(|_| ParseFloatError)?;
        let rnd = self.rounding.to_c();
        let ret = unsafe { mpfr::set_str(self.as_mut_ptr(), c_string.as_ptr(), base, rnd) };
        if ret != 0 {
            Err(ParseFloatError)
        } else {
            Ok(self)
        }
    }

    /// Formats the value as decimal text in the requested notation.
    ///
    /// The digits are the fewest that read back as the same value at this
    /// precision, rounded with the value's rounding algorithm. Special values
    /// are spelled `NaN`, `inf` and `-inf`.
    pub fn to_decimal_string(&self, notation: Notation) -> String {
        let rnd = self.rounding.to_c();
        self.with_raw(|x| unsafe {
            if mpfr::nan_p(x) != 0 {
                "NaN".into()
            } else if mpfr::inf_p(x) != 0 {
                let s = if mpfr::signbit(x) != 0 { "-inf" } else { "inf" };
                s.into()
            } else {
                let digits = conv::digits(x, 0, rnd);
                match notation {
                    Notation::Positional => digits.to_positional(),
                    Notation::Exponent => digits.to_exponent(),
                }
            }
        })
    }

    /// Computes the classification of the number.
    pub fn class(&self) -> Class {
        self.with_raw(|x| unsafe {
            let negative = mpfr::signbit(x) != 0;
            if mpfr::nan_p(x) != 0 {
                Class::Nan
            } else if mpfr::inf_p(x) != 0 {
                if negative {
                    Class::NegInfinity
                } else {
                    Class::PosInfinity
                }
            } else if mpfr::zero_p(x) != 0 {
                if negative {
                    Class::NegZero
                } else {
                    Class::PosZero
                }
            } else if negative {
                Class::NegNormal
            } else {
                Class::PosNormal
            }
        })
    }

    /// Reports whether the number is positive or negative zero.
    pub fn is_zero(&self) -> bool {
        self.with_raw(|x| unsafe { mpfr::zero_p(x) != 0 })
    }

    /// Reports whether the number is NaN.
    pub fn is_nan(&self) -> bool {
        self.with_raw(|x| unsafe { mpfr::nan_p(x) != 0 })
    }

    /// Reports whether the number is positive or negative infinity.
    pub fn is_infinite(&self) -> bool {
        self.with_raw(|x| unsafe { mpfr::inf_p(x) != 0 })
    }

    /// Reports whether the number is neither infinite nor NaN.
    pub fn is_finite(&self) -> bool {
        self.with_raw(|x| unsafe { mpfr::number_p(x) != 0 })
    }

    /// Reports whether the number is finite and nonzero.
    pub fn is_regular(&self) -> bool {
        self.with_raw(|x| unsafe { mpfr::regular_p(x) != 0 })
    }

    /// Reports whether the sign bit is set, including for negative zero and
    /// NaNs with a negative sign.
    pub fn is_sign_negative(&self) -> bool {
        self.with_raw(|x| unsafe { mpfr::signbit(x) != 0 })
    }

    /// Returns the minimal number of bits needed to represent the significand
    /// of the value exactly. Zero and the special values need none.
    pub fn min_prec(&self) -> u32 {
        let bits = self.with_raw(|x| unsafe { mpfr::min_prec(x) });
        u32::try_from(bits).unwrap_or(self.precision)
    }
}

impl Default for Float {
    fn default() -> Float {
        Float::new()
    }
}

impl Clone for Float {
    fn clone(&self) -> Float {
        let mut f = Float::fresh(self.precision, self.rounding);
        if self.is_initialized() {
            f.assign(self);
        }
        f
    }
}

impl Drop for Float {
    fn drop(&mut self) {
        if let Handle::Initialized(raw) = &mut self.handle {
            trace!(precision = self.precision, "releasing native handle on drop");
            unsafe { mpfr::clear(raw) };
        }
    }
}

impl fmt::Debug for Float {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_decimal_string(Notation::Positional))
    }
}

impl fmt::LowerExp for Float {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_decimal_string(Notation::Exponent))
    }
}

impl FromStr for Float {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Float, ParseFloatError> {
        Context::default().parse(s, 10)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Float {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Float {
    fn deserialize<D>(deserializer: D) -> Result<Float, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;

        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A zero handle that lives for one read of a value without a handle of its
/// own.
struct Scratch(mpfr_t);

impl Scratch {
    fn zero(precision: u32) -> Scratch {
        Scratch(new_raw(precision))
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        unsafe { mpfr::clear(&mut self.0) };
    }
}

fn new_raw(precision: u32) -> mpfr_t {
    // Precisions are validated before they are stored in a value.
    let precision = precision as prec_t;
    let mut raw = MaybeUninit::<mpfr_t>::uninit();
    unsafe {
        mpfr::init2(raw.as_mut_ptr(), precision);
        mpfr::set_zero(raw.as_mut_ptr(), 1);
        raw.assume_init()
    }
}
