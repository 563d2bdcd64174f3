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

use std::cmp::Ordering;

use gmp_mpfr_sys::mpfr;

use crate::float::Float;

impl Float {
    /// Compares the absolute values of two numbers.
    ///
    /// Returns `None` if either number is NaN.
    pub fn cmp_abs(&self, other: &Float) -> Option<Ordering> {
        self.with_raw(|x| {
            other.with_raw(|y| unsafe {
                if mpfr::nan_p(x) != 0 || mpfr::nan_p(y) != 0 {
                    None
                } else {
                    Some(mpfr::cmpabs(x, y).cmp(&0))
                }
            })
        })
    }

    /// Reports whether the numbers are ordered and unequal, i.e. whether
    /// `self < other || self > other`.
    pub fn less_greater(&self, other: &Float) -> bool {
        self.with_raw(|x| other.with_raw(|y| unsafe { mpfr::lessgreater_p(x, y) != 0 }))
    }
}

/// Numbers compare by value, regardless of precision. Positive and negative
/// zero are equal, and NaN is unequal to everything, including itself.
impl PartialEq for Float {
    fn eq(&self, other: &Float) -> bool {
        self.with_raw(|x| other.with_raw(|y| unsafe { mpfr::equal_p(x, y) != 0 }))
    }
}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Float) -> Option<Ordering> {
        self.with_raw(|x| {
            other.with_raw(|y| unsafe {
                if mpfr::unordered_p(x, y) != 0 {
                    None
                } else {
                    Some(mpfr::cmp(x, y).cmp(&0))
                }
            })
        })
    }
}
