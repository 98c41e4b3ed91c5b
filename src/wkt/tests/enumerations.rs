// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use oci_sdk_wkt::{Enumeration, UnknownEnumValue};
use serde_json::json;
use test_case::test_case;

type Result = anyhow::Result<()>;

// Mirrors the shape of the generated enums.
#[derive(Clone, Debug, PartialEq)]
enum Shape {
    Standard,
    DenseIo,
    UnknownValue(UnknownEnumValue),
}

impl From<&str> for Shape {
    fn from(value: &str) -> Self {
        match value {
            "STANDARD" => Self::Standard,
            "DENSE_IO" => Self::DenseIo,
            _ => Self::UnknownValue(UnknownEnumValue::new(value)),
        }
    }
}

impl Enumeration for Shape {
    fn labels() -> &'static [&'static str] {
        &["STANDARD", "DENSE_IO"]
    }
    fn value(&self) -> &str {
        match self {
            Self::Standard => "STANDARD",
            Self::DenseIo => "DENSE_IO",
            Self::UnknownValue(u) => u.as_str(),
        }
    }
}

impl serde::ser::Serialize for Shape {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        oci_sdk_wkt::internal::serialize_enum(self, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for Shape {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        oci_sdk_wkt::internal::deserialize_enum(deserializer, "Shape")
    }
}

#[test]
fn values() {
    assert_eq!(Shape::values(), vec![Shape::Standard, Shape::DenseIo]);
}

#[test_case("STANDARD", Some(Shape::Standard))]
#[test_case("dense_io", Some(Shape::DenseIo))]
#[test_case("Dense_Io", Some(Shape::DenseIo))]
#[test_case("GPU", None)]
#[test_case("", None)]
fn lookup(input: &str, want: Option<Shape>) {
    assert_eq!(Shape::lookup(input), want);
}

#[test_case("STANDARD", true)]
#[test_case("", true)]
#[test_case("GPU", false)]
fn is_supported(input: &str, want: bool) {
    assert_eq!(Shape::from(input).is_supported(), want, "{input}");
}

#[test]
fn unknown_values_round_trip() -> Result {
    let got = serde_json::from_value::<Vec<Shape>>(json!(["STANDARD", "GPU", ""]))?;
    assert_eq!(
        got,
        vec![
            Shape::Standard,
            Shape::UnknownValue(UnknownEnumValue::new("GPU")),
            Shape::UnknownValue(UnknownEnumValue::new("")),
        ]
    );
    assert!(!got[1].is_known());
    assert_eq!(serde_json::to_value(&got)?, json!(["STANDARD", "GPU", ""]));
    Ok(())
}

#[test]
fn not_a_string() {
    let got = serde_json::from_value::<Shape>(json!(42));
    assert!(got.is_err(), "{got:?}");
}
