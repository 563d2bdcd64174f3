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

#[macro_export]
/// A macro to construct a [`Float`] from a literal.
/// Converts the input tokens to a string, and then parses the string into a
/// [`Float`] with the default precision, or with the precision given as a
/// second argument.
/// Panics if the provided input is not a valid literal or the precision is
/// out of range.
///
/// [`Float`]: crate::Float
///
/// # Examples:
/// ```
/// use mpfloat::float;
///
/// assert!(float!(NaN).is_nan());
/// assert!(float!(0).is_zero());
/// assert!(float!(-0.1).is_sign_negative());
/// assert_eq!(float!(0.1, 200).precision(), 200);
/// ```
macro_rules! float {
    ($l:expr) => {
        <$crate::Float as ::std::str::FromStr>::from_str(stringify!($l))
            .unwrap_or_else(|e| panic!("{}", e.to_string()))
    };
    ($l:expr, $precision:expr) => {{
        let mut cx = $crate::Context::default();
        cx.set_precision($precision)
            .unwrap_or_else(|e| panic!("{}", e.to_string()));
        cx.parse(stringify!($l), 10)
            .unwrap_or_else(|e| panic!("{}", e.to_string()))
    }};
}
