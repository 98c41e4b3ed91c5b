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

//! Implementation details used by the generated code.
//!
//! These are not part of the public API and may change without notice.

use crate::Enumeration;
use std::marker::PhantomData;

/// Deserializes a generated enum from its string form.
///
/// There is no membership check, unknown strings become `UnknownValue`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnumVisitor<T> {
    name: &'static str,
    _unused: PhantomData<T>,
}

impl<T> EnumVisitor<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            _unused: PhantomData,
        }
    }
}

impl<T> serde::de::Visitor<'_> for EnumVisitor<T>
where
    T: for<'a> From<&'a str>,
{
    type Value = T;

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(T::from(value))
    }

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a {} enum value in string format", self.name)
    }
}

/// Deserializes any generated enum.
pub fn deserialize_enum<'de, T, D>(deserializer: D, name: &'static str) -> Result<T, D::Error>
where
    T: Enumeration,
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_str(EnumVisitor::<T>::new(name))
}

/// Serializes any generated enum as its string value.
pub fn serialize_enum<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Enumeration,
    S: serde::Serializer,
{
    serializer.serialize_str(value.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnknownEnumValue;
    use serde_json::json;
    use test_case::test_case;

    #[derive(Clone, Debug, PartialEq)]
    enum FakeEnum {
        Red,
        Green,
        UnknownValue(UnknownEnumValue),
    }

    impl From<&str> for FakeEnum {
        fn from(value: &str) -> Self {
            match value {
                "RED" => Self::Red,
                "GREEN" => Self::Green,
                _ => Self::UnknownValue(UnknownEnumValue::new(value)),
            }
        }
    }

    impl Enumeration for FakeEnum {
        fn labels() -> &'static [&'static str] {
            &["RED", "GREEN"]
        }
        fn value(&self) -> &str {
            match self {
                Self::Red => "RED",
                Self::Green => "GREEN",
                Self::UnknownValue(u) => u.as_str(),
            }
        }
    }

    impl serde::Serialize for FakeEnum {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serialize_enum(self, serializer)
        }
    }

    impl<'de> serde::Deserialize<'de> for FakeEnum {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserialize_enum(deserializer, "FakeEnum")
        }
    }

    #[test_case(json!("RED"), FakeEnum::Red)]
    #[test_case(json!("GREEN"), FakeEnum::Green)]
    #[test_case(json!("green"), FakeEnum::UnknownValue(UnknownEnumValue::new("green")))]
    #[test_case(json!(""), FakeEnum::UnknownValue(UnknownEnumValue::new("")))]
    fn visitor(input: serde_json::Value, want: FakeEnum) -> anyhow::Result<()> {
        let got = serde_json::from_value::<FakeEnum>(input.clone())?;
        assert_eq!(got, want);
        // Unknown values are passed through unchanged.
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn visitor_rejects_non_strings() {
        let got = serde_json::from_value::<FakeEnum>(json!(42));
        let err = got.unwrap_err();
        assert!(err.to_string().contains("FakeEnum"), "{err}");
    }
}
