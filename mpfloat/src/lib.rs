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

//! mpfloat is an arbitrary-precision binary floating-point library for Rust.
//!
//! # Introduction
//!
//! Hardware floating-point numbers have a fixed number of significand bits
//! and always round to nearest. mpfloat numbers instead carry their own
//! precision, which may be as large as memory allows, and their own rounding
//! algorithm, which may direct every result toward zero, away from zero, or
//! toward either infinity. Directed rounding makes it possible to compute
//! guaranteed lower and upper bounds of a result, as in interval arithmetic.
//!
//! # Details
//!
//! mpfloat is a safe Rust API atop [MPFR], the GNU multiple-precision
//! floating-point library, which computes every supported function correctly
//! rounded. Unsafe C bindings to MPFR are provided by the [gmp-mpfr-sys]
//! crate, which builds MPFR and GMP from source.
//!
//! The main types exposed by this library are as follows:
//!
//!  * [`Float`], a binary floating-point number with configurable precision
//!    and rounding. Arithmetic on a `Float` happens in place, either with a
//!    single operand or by folding any number of operands into the value.
//!
//!  * [`Context`], which configures the precision and rounding of the values
//!    it constructs and parses.
//!
//!  * The [`ops`] module, which offers every operation as a pure function over
//!    explicit operands with an explicit rounding algorithm.
//!
//! Each `Float` owns a native MPFR handle, acquired on first modification and
//! released by [`Float::release`], by the consuming conversions like
//! [`Float::into_f64`], or when the value is dropped.
//!
//! # Examples
//!
//! The following example demonstrates the basic usage of the library:
//!
//! ```
//! # use std::error::Error;
//! use mpfloat::{ops, Float, Rounding};
//!
//! let x: Float = "1.5".parse()?;
//! let y: Float = "2.25".parse()?;
//!
//! let mut acc = x.clone();
//! acc.add(&y);
//! assert_eq!(acc.to_string(), "3.75");
//! assert_eq!(ops::add(&x, &y, Rounding::HalfEven), acc);
//!
//! let mut third = Float::from(1);
//! third.set_rounding(Rounding::Ceiling);
//! third.div(&Float::from(3)).mul(&Float::from(3));
//! assert!(third > Float::from(1));
//!
//! # Ok::<_, Box<dyn Error>>(())
//! ```
//!
//! [MPFR]: https://www.mpfr.org
//! [gmp-mpfr-sys]: https://docs.rs/gmp-mpfr-sys

#![deny(missing_debug_implementations, missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bridge;
mod cmp;
mod context;
mod conv;
mod error;
mod fits;
mod float;
mod fold;
#[macro_use]
mod macros;
pub mod ops;

pub use context::{Class, Context, Rounding, DEFAULT_PRECISION};
pub use conv::Notation;
pub use error::{ArithmeticError, InvalidPrecisionError, ParseFloatError, TryFromFloatError};
pub use float::{Float, Lifecycle};

static_assertions::assert_impl_all!(Float: Send, Clone, Default);
static_assertions::assert_not_impl_any!(Float: Sync, Copy);
