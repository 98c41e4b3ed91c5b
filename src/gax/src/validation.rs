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

//! Enum validation for generated models.
//!
//! Decoding a model never rejects unknown enum values, the service may add
//! new values at any time. Requests are validated before they are sent, and
//! applications may validate any model explicitly. Validation only examines
//! the enum fields of the model itself, nested records are not visited.
//!
//! # Example
//! ```
//! # use oci_sdk_gax::validation::{EnumValidator, Validate};
//! # use oci_sdk_gax::error::ValidationError;
//! # use wkt::{Enumeration, UnknownEnumValue};
//! # #[derive(Clone, Debug, PartialEq)]
//! # enum Action { Stop, UnknownValue(UnknownEnumValue) }
//! # impl From<&str> for Action {
//! #     fn from(v: &str) -> Self {
//! #         if v == "STOP" { Self::Stop } else { Self::UnknownValue(UnknownEnumValue::new(v)) }
//! #     }
//! # }
//! # impl Enumeration for Action {
//! #     fn labels() -> &'static [&'static str] { &["STOP"] }
//! #     fn value(&self) -> &str {
//! #         match self { Self::Stop => "STOP", Self::UnknownValue(u) => u.as_str() }
//! #     }
//! # }
//! struct Request {
//!     action: Option<Action>,
//! }
//! impl Validate for Request {
//!     fn validate(&self) -> Result<(), ValidationError> {
//!         EnumValidator::new()
//!             .check("Action", self.action.as_ref())
//!             .finish()
//!     }
//! }
//!
//! let request = Request { action: Some(Action::from("JUMP")) };
//! let err = request.validate().unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "unsupported enum value for Action: JUMP. Supported values are: STOP."
//! );
//! ```

use crate::error::ValidationError;
use wkt::Enumeration;

/// Implemented by every generated model with enum fields.
pub trait Validate {
    /// Checks every enum field of this model.
    ///
    /// Returns all the violations in a single error.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Accumulates the enum violations of a single model.
#[derive(Debug, Default)]
pub struct EnumValidator {
    messages: Vec<String>,
}

impl EnumValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks an optional enum field.
    ///
    /// Absent values, and values set to the empty string, are valid.
    pub fn check<E: Enumeration>(mut self, field_name: &str, value: Option<&E>) -> Self {
        if let Some(v) = value {
            self.record::<E>(field_name, v);
        }
        self
    }

    /// Checks every element of a repeated enum field.
    pub fn check_all<E: Enumeration>(mut self, field_name: &str, values: &[E]) -> Self {
        for v in values {
            self.record::<E>(field_name, v);
        }
        self
    }

    /// Returns the combined result.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.messages.is_empty() {
            return Ok(());
        }
        Err(ValidationError::new(self.messages))
    }

    fn record<E: Enumeration>(&mut self, field_name: &str, value: &E) {
        if value.is_supported() {
            return;
        }
        self.messages.push(format!(
            "unsupported enum value for {field_name}: {}. Supported values are: {}.",
            value.value(),
            E::labels().join(",")
        ));
    }
}

/// Models without enum fields are always valid.
impl Validate for () {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use wkt::UnknownEnumValue;

    #[derive(Clone, Debug, PartialEq)]
    enum Mode {
        Local,
        Radius,
        UnknownValue(UnknownEnumValue),
    }

    impl From<&str> for Mode {
        fn from(value: &str) -> Self {
            match value {
                "LOCAL" => Self::Local,
                "RADIUS" => Self::Radius,
                _ => Self::UnknownValue(UnknownEnumValue::new(value)),
            }
        }
    }

    impl Enumeration for Mode {
        fn labels() -> &'static [&'static str] {
            &["LOCAL", "RADIUS"]
        }
        fn value(&self) -> &str {
            match self {
                Self::Local => "LOCAL",
                Self::Radius => "RADIUS",
                Self::UnknownValue(u) => u.as_str(),
            }
        }
    }

    #[test_case(None)]
    #[test_case(Some(Mode::Local))]
    #[test_case(Some(Mode::from("radius")))]
    #[test_case(Some(Mode::from("")))]
    fn valid(input: Option<Mode>) {
        let got = EnumValidator::new().check("Mode", input.as_ref()).finish();
        assert!(got.is_ok(), "{got:?}");
    }

    #[test]
    fn single() {
        let input = Mode::from("LDAP");
        let got = EnumValidator::new().check("Mode", Some(&input)).finish();
        let err = got.unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported enum value for Mode: LDAP. Supported values are: LOCAL,RADIUS."
        );
    }

    #[test]
    fn multiple() {
        let first = Mode::from("A");
        let second = Mode::from("B");
        let repeated = vec![Mode::Local, Mode::from("C")];
        let got = EnumValidator::new()
            .check("First", Some(&first))
            .check("Second", Some(&second))
            .check_all("Repeated", &repeated)
            .finish();
        let err = got.unwrap_err();
        assert_eq!(err.messages().len(), 3, "{err:?}");
        let fmt = err.to_string();
        let lines: Vec<&str> = fmt.lines().collect();
        assert!(lines[0].starts_with("unsupported enum value for First: A."), "{err}");
        assert!(lines[1].starts_with("unsupported enum value for Second: B."), "{err}");
        assert!(lines[2].starts_with("unsupported enum value for Repeated: C."), "{err}");
    }

    #[test]
    fn deterministic() {
        let input = Mode::from("BOGUS");
        let validate = || EnumValidator::new().check("Mode", Some(&input)).finish();
        assert_eq!(validate(), validate());
    }

    #[test]
    fn unit() {
        assert!(().validate().is_ok());
    }
}
