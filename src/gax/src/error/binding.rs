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

use crate::binding::Location;

/// A failure to convert a request into an HTTP request.
///
/// The client cannot bind a request when a mandatory path, query, or header
/// parameter is missing, or when one of the parameters cannot be represented
/// in the HTTP request. All the problems are reported at once.
#[derive(thiserror::Error, Debug, PartialEq)]
pub struct BindingError {
    /// The name of the operation, e.g. `InstanceAction`.
    pub operation: &'static str,
    /// All the missing or malformed fields.
    pub mismatches: Vec<FieldMismatch>,
}

/// A single field that could not be bound.
#[derive(Debug, PartialEq)]
pub struct FieldMismatch {
    /// The name of the field, or the name of an unbound path placeholder.
    pub field_name: String,
    /// Where the field was supposed to go.
    pub location: Location,
    /// Why the binding failed.
    pub problem: BindingFail,
}

/// Ways binding a field can fail.
#[derive(Debug, PartialEq)]
pub enum BindingFail {
    /// A mandatory field was not set.
    Unset,
    /// A path parameter was set to the empty string.
    Empty,
    /// The field value cannot be formatted or is not a valid header value.
    ///
    /// # Parameters
    ///
    /// - self.0 - a description of the problem
    Invalid(String),
    /// The path template has a placeholder no field fills.
    Unbound,
}

impl std::fmt::Display for FieldMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = &self.field_name;
        let location = &self.location;
        match &self.problem {
            BindingFail::Unset => write!(f, "{location} field `{name}` needs to be set"),
            BindingFail::Empty => write!(f, "{location} field `{name}` cannot be empty"),
            BindingFail::Invalid(why) => {
                write!(f, "{location} field `{name}` is invalid: {why}")
            }
            BindingFail::Unbound => write!(f, "placeholder `{{{name}}}` was not substituted"),
        }
    }
}

impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ", self.operation)?;
        for (i, m) in self.mismatches.iter().enumerate() {
            if i != 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}
