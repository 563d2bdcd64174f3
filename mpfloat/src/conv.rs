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
use std::ffi::CStr;
use std::ptr;

use gmp_mpfr_sys::mpfr::{self, exp_t, mpfr_t, rnd_t};

/// The notation used when formatting a [`Float`](crate::Float) as decimal
/// text.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Notation {
    /// Plain positional notation, like `1234.5` or `0.000123`.
    Positional,
    /// Scientific notation with one integral digit, like `1.2345e3` or
    /// `1.23e-4`.
    Exponent,
}

/// The decimal digits of a finite number, such that the number equals
/// `0.DIGITS × 10^exponent`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Digits {
    pub(crate) negative: bool,
    pub(crate) digits: String,
    pub(crate) exponent: i64,
}

/// Extracts `n` significant decimal digits of a finite number. When `n` is
/// zero, MPFR picks enough digits to read back the same value.
///
/// # Safety
///
/// `x` must point to an initialized, finite MPFR number.
pub(crate) unsafe fn digits(x: *const mpfr_t, n: usize, rnd: rnd_t) -> Digits {
    let mut exp: exp_t = 0;
    let s = mpfr::get_str(ptr::null_mut(), &mut exp, 10, n, x, rnd);
    assert!(!s.is_null(), "mpfr_get_str failed for base 10");
    let text = CStr::from_ptr(s)
        .to_str()
        .expect("mpfr_get_str yields valid UTF-8")
        .to_owned();
    mpfr::free_str(s);
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits.to_owned()),
        None => (false, text),
    };
    Digits {
        negative,
        digits,
        exponent: i64::from(exp),
    }
}

impl Digits {
    pub(crate) fn to_positional(&self) -> String {
        let mut s = String::with_capacity(self.digits.len() + 3);
        if self.negative {
            s.push('-');
        }
        if self.exponent <= 0 {
            s.push_str("0.");
            push_zeros(&mut s, self.exponent.unsigned_abs());
            s.push_str(&self.digits);
        } else {
            let point = to_len(self.exponent);
            if point >= self.digits.len() {
                s.push_str(&self.digits);
                push_zeros(&mut s, (point - self.digits.len()) as u64);
                s.push_str(".0");
            } else {
                s.push_str(&self.digits[..point]);
                s.push('.');
                s.push_str(&self.digits[point..]);
            }
        }
        trim_fraction(s)
    }

    pub(crate) fn to_exponent(&self) -> String {
        let mut s = String::with_capacity(self.digits.len() + 8);
        if self.negative {
            s.push('-');
        }
        let significant = self.digits.trim_end_matches('0');
        if significant.is_empty() {
            s.push_str("0e0");
            return s;
        }
        s.push_str(&significant[..1]);
        if significant.len() > 1 {
            s.push('.');
            s.push_str(&significant[1..]);
        }
        s.push('e');
        s.push_str(&(self.exponent - 1).to_string());
        s
    }

    /// Returns the digits of the integral part, without sign. `self` must
    /// hold at least as many digits as its exponent.
    pub(crate) fn integral(&self) -> &str {
        if self.exponent <= 0 {
            "0"
        } else {
            &self.digits[..to_len(self.exponent).min(self.digits.len())]
        }
    }
}

fn to_len(exponent: i64) -> usize {
    usize::try_from(exponent).expect("decimal exponent exceeds the addressable length")
}

fn push_zeros(s: &mut String, n: u64) {
    for _ in 0..n {
        s.push('0');
    }
}

/// Removes trailing zeros after the decimal point, keeping one fractional
/// digit.
fn trim_fraction(mut s: String) -> String {
    let trimmed = s.trim_end_matches('0').len();
    s.truncate(trimmed);
    if s.ends_with('.') {
        s.push('0');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(negative: bool, digits: &str, exponent: i64) -> Digits {
        Digits {
            negative,
            digits: digits.into(),
            exponent,
        }
    }

    #[test]
    fn test_positional() {
        for (d, expected) in &[
            (digits(false, "32500000000000000", 1), "3.25"),
            (digits(true, "32500000000000000", 1), "-3.25"),
            (digits(false, "5", 3), "500.0"),
            (digits(false, "10000000000000000", 21), "100000000000000000000.0"),
            (digits(false, "12", 2), "12.0"),
            (digits(false, "12", 0), "0.12"),
            (digits(false, "123", -2), "0.00123"),
            (digits(true, "12345600000000000", -3), "-0.000123456"),
            (digits(false, "00000000000000000", 0), "0.0"),
            (digits(true, "00000000000000000", 0), "-0.0"),
        ] {
            assert_eq!(d.to_positional(), *expected, "{:?}", d);
        }
    }

    #[test]
    fn test_exponent() {
        for (d, expected) in &[
            (digits(false, "32500000000000000", 1), "3.25e0"),
            (digits(false, "12345000000000000", 4), "1.2345e3"),
            (digits(false, "10000000000000000", -2), "1e-3"),
            (digits(true, "5", 1), "-5e0"),
            (digits(false, "00000000000000000", 0), "0e0"),
            (digits(true, "00000000000000000", 0), "-0e0"),
        ] {
            assert_eq!(d.to_exponent(), *expected, "{:?}", d);
        }
    }

    #[test]
    fn test_integral() {
        assert_eq!(digits(false, "1234567", 5).integral(), "12345");
        assert_eq!(digits(false, "12", 2).integral(), "12");
        assert_eq!(digits(false, "123", 0).integral(), "0");
        assert_eq!(digits(false, "123", -4).integral(), "0");
    }
}
