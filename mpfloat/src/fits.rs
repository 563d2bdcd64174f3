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

use gmp_mpfr_sys::mpfr;

use crate::float::Float;

macro_rules! fits {
    ($($name:ident => $f:path, $ty:literal;)*) => {
        impl Float {
            $(
                #[doc = concat!(
                    "Reports whether the value, rounded to an integer with its ",
                    "rounding algorithm, fits in a C `",
                    $ty,
                    "`. NaN and infinities never fit."
                )]
                pub fn $name(&self) -> bool {
                    let rnd = self.rounding().to_c();
                    self.with_raw(|x| unsafe { $f(x, rnd) != 0 })
                }
            )*
        }
    };
}

fits! {
    fits_signed_short => mpfr::fits_sshort_p, "short";
    fits_unsigned_short => mpfr::fits_ushort_p, "unsigned short";
    fits_signed_int => mpfr::fits_sint_p, "int";
    fits_unsigned_int => mpfr::fits_uint_p, "unsigned int";
    fits_signed_long => mpfr::fits_slong_p, "long";
    fits_unsigned_long => mpfr::fits_ulong_p, "unsigned long";
    fits_intmax => mpfr::fits_intmax_p, "intmax_t";
    fits_uintmax => mpfr::fits_uintmax_p, "uintmax_t";
}
