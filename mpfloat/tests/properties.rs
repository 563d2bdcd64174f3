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

use num_bigint::BigInt;
use proptest::prelude::*;

use mpfloat::{Float, Notation, Rounding};

fn finite() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |v| v.is_finite())
}

proptest! {
    #[test]
    fn format_parse_round_trip(v in finite()) {
        let x = Float::from(v);
        let positional: Float = x.to_decimal_string(Notation::Positional).parse().unwrap();
        prop_assert_eq!(&positional, &x);
        let exponent: Float = x.to_decimal_string(Notation::Exponent).parse().unwrap();
        prop_assert_eq!(&exponent, &x);
    }

    #[test]
    fn sub_folds_left_to_right(
        x in -1e6..1e6f64,
        a in -1e6..1e6f64,
        b in -1e6..1e6f64,
        c in -1e6..1e6f64,
    ) {
        let mut folded = Float::from(x);
        folded.sub_all([&Float::from(a), &Float::from(b), &Float::from(c)]);

        let mut stepped = Float::from(x);
        stepped.sub(&Float::from(a)).sub(&Float::from(b)).sub(&Float::from(c));

        prop_assert_eq!(&folded, &stepped);
        prop_assert_eq!(folded.to_f64(), ((x - a) - b) - c);
    }

    #[test]
    fn free_functions_match_instance_forms(x in finite(), y in finite()) {
        let (fx, fy) = (Float::from(x), Float::from(y));
        for &rounding in &[Rounding::HalfEven, Rounding::Down, Rounding::Up] {
            let mut acc = fx.clone();
            acc.set_rounding(rounding);
            acc.mul(&fy);
            prop_assert_eq!(&mpfloat::ops::mul(&fx, &fy, rounding), &acc);
        }
    }

    #[test]
    fn directed_rounding_brackets(x in 1..1_000_000i32, y in 1..1_000_000i32) {
        let (fx, fy) = (Float::from(x), Float::from(y));
        let floor = mpfloat::ops::div(&fx, &fy, Rounding::Floor);
        let ceiling = mpfloat::ops::div(&fx, &fy, Rounding::Ceiling);
        let nearest = mpfloat::ops::div(&fx, &fy, Rounding::HalfEven);
        prop_assert!(floor <= nearest);
        prop_assert!(nearest <= ceiling);
    }

    #[test]
    fn fits_signed_int_matches_range(n in any::<i64>()) {
        let mut x = Float::with_precision(64);
        x.set_i64(n);
        prop_assert_eq!(x.fits_signed_int(), i32::try_from(n).is_ok());
        prop_assert_eq!(i64::try_from(&x), Ok(n));
    }

    #[test]
    fn big_int_truncates(v in -1e15..1e15f64) {
        let truncated = BigInt::try_from(&Float::from(v)).unwrap();
        prop_assert_eq!(truncated, BigInt::from(v.trunc() as i64));
    }
}
