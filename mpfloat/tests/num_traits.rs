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

use num_traits::{FromPrimitive, ToPrimitive};

use mpfloat::{float, Float};

#[test]
fn test_to_primitive() {
    let x = float!(-42);
    assert_eq!(ToPrimitive::to_i64(&x), Some(-42));
    assert_eq!(ToPrimitive::to_u64(&x), None);
    assert_eq!(ToPrimitive::to_f64(&x), Some(-42.0));
    assert_eq!(x.to_i32(), Some(-42));

    assert_eq!(ToPrimitive::to_u64(&float!(7)), Some(7));
    assert_eq!(ToPrimitive::to_i64(&float!(NaN)), None);
    assert_eq!(ToPrimitive::to_i64(&float!(1e30)), None);
    assert!(ToPrimitive::to_f64(&float!(NaN)).map_or(false, f64::is_nan));
}

#[test]
fn test_from_primitive() {
    assert_eq!(<Float as FromPrimitive>::from_i64(-3), Some(float!(-3)));
    assert_eq!(<Float as FromPrimitive>::from_u64(u64::MAX), Some(Float::from(u64::MAX)));
    assert_eq!(<Float as FromPrimitive>::from_f64(0.5), Some(float!(0.5)));
    assert_eq!(Float::from_i32(12), Some(float!(12)));
}
