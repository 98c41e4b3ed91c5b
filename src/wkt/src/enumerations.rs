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

/// The contract implemented by every generated string enum.
///
/// Generated enums are closed sets of string constants. The service may add
/// new values at any time, so each enum also has an `UnknownValue` branch
/// that preserves whatever string was received. Decoding never checks
/// membership, validation does.
///
/// # Example
/// ```
/// # use oci_sdk_wkt::{Enumeration, UnknownEnumValue};
/// #[derive(Clone, Debug, PartialEq)]
/// enum Color {
///     Red,
///     Blue,
///     UnknownValue(UnknownEnumValue),
/// }
/// impl From<&str> for Color {
///     fn from(value: &str) -> Self {
///         match value {
///             "RED" => Self::Red,
///             "BLUE" => Self::Blue,
///             _ => Self::UnknownValue(UnknownEnumValue::new(value)),
///         }
///     }
/// }
/// impl Enumeration for Color {
///     fn labels() -> &'static [&'static str] {
///         &["RED", "BLUE"]
///     }
///     fn value(&self) -> &str {
///         match self {
///             Self::Red => "RED",
///             Self::Blue => "BLUE",
///             Self::UnknownValue(u) => u.as_str(),
///         }
///     }
/// }
///
/// assert_eq!(Color::lookup("blue"), Some(Color::Blue));
/// assert_eq!(Color::lookup(""), None);
/// assert!(Color::from("").is_supported());
/// assert!(!Color::from("GREEN").is_supported());
/// ```
pub trait Enumeration: Clone + PartialEq + Sized + for<'a> From<&'a str> {
    /// The string representation of each known value, in declaration order.
    fn labels() -> &'static [&'static str];

    /// The string representation of this value.
    ///
    /// For unknown values this is the string received from the service, or
    /// set by the application.
    fn value(&self) -> &str;

    /// All the known values.
    fn values() -> Vec<Self> {
        Self::labels().iter().map(|l| Self::from(*l)).collect()
    }

    /// Finds the known value matching `value`.
    ///
    /// The match ignores ASCII case. The empty string never matches.
    fn lookup(value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }
        Self::labels()
            .iter()
            .find(|l| l.eq_ignore_ascii_case(value))
            .map(|l| Self::from(*l))
    }

    /// Returns true if the value is one of the known labels.
    fn is_known(&self) -> bool {
        Self::labels().iter().any(|l| *l == self.value())
    }

    /// Returns true if the value passes validation.
    ///
    /// The empty string means "unset" and is always supported.
    fn is_supported(&self) -> bool {
        let value = self.value();
        value.is_empty() || Self::lookup(value).is_some()
    }
}

/// Holds the string received for an enum value the client does not know.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct UnknownEnumValue(String);

impl UnknownEnumValue {
    /// Creates a new unknown value.
    pub fn new<T: Into<String>>(value: T) -> Self {
        Self(value.into())
    }

    /// The string received from the service.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for UnknownEnumValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
