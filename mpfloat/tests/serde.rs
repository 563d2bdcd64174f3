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

use serde_json::json;
use serde_test::{assert_de_tokens_error, assert_tokens, Token};

use mpfloat::{float, Float};

#[test]
fn test_serde() {
    assert_tokens(&float!(-12.25), &[Token::Str("-12.25")]);
    assert_tokens(&Float::from(f64::INFINITY), &[Token::Str("inf")]);
    assert_de_tokens_error::<Float>(
        &[Token::Str("twelve")],
        "invalid string for floating-point conversion",
    );
}

#[test]
fn test_serde_json() {
    let x = Float::from(3.25);
    assert_eq!(serde_json::to_value(&x).unwrap(), json!("3.25"));
    assert_eq!(serde_json::to_string(&x).unwrap(), "\"3.25\"");

    let y: Float = serde_json::from_str("\"0.001\"").unwrap();
    assert_eq!(y, Float::from(0.001));
    assert!(serde_json::from_str::<Float>("\"nope\"").is_err());
    assert!(serde_json::from_str::<Float>("1.5").is_err());
}
