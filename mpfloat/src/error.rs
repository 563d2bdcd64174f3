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

use std::error::Error;
use std::fmt;

/// An error indicating that a string is not a valid floating-point number in
/// the requested base.
#[derive(Debug, Eq, PartialEq)]
pub struct ParseFloatError;

impl fmt::Display for ParseFloatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid string for floating-point conversion")
    }
}

impl Error for ParseFloatError {}

/// An error indicating that a precision is outside the range supported by
/// MPFR.
#[derive(Debug, Eq, PartialEq)]
pub struct InvalidPrecisionError;

impl fmt::Display for InvalidPrecisionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid floating-point precision")
    }
}

impl Error for InvalidPrecisionError {}

/// An error indicating that a value cannot be converted to the target type.
///
/// Causes for this failure include converting values:
/// - Representing infinity or NaN
/// - Whose rounded integral value doesn't fit into the target type
#[derive(Debug, Eq, PartialEq)]
pub struct TryFromFloatError;

impl fmt::Display for TryFromFloatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("float cannot be expressed in target type")
    }
}

impl Error for TryFromFloatError {}

/// An error raised by the operations that refuse to produce a result rather
/// than return an IEEE special value.
///
/// The panicking forms of these operations (e.g. [`Float::quo`] and
/// [`Float::root`]) panic with this error's message; the `try_` forms return
/// it. In either case the target value is left unchanged.
///
/// [`Float::quo`]: crate::Float::quo
/// [`Float::root`]: crate::Float::root
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ArithmeticError {
    /// A divisor was exactly zero.
    DivisionByZero,
    /// A root of degree zero was requested.
    InvalidRootDegree,
    /// An even root of a negative number was requested.
    NegativeEvenRoot,
    /// The operation produced NaN.
    NanResult,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ArithmeticError::DivisionByZero => "division by zero",
            ArithmeticError::InvalidRootDegree => "root of degree zero",
            ArithmeticError::NegativeEvenRoot => "even root of a negative number",
            ArithmeticError::NanResult => "operation produced NaN",
        })
    }
}

impl Error for ArithmeticError {}
