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

//! The resources and request details of the Core Services API.
//!
//! Every field is optional: the service omits fields it does not return, and
//! the client omits unset fields from the request bodies. Polymorphic types,
//! such as [PlatformConfig], are Rust enums with one branch per known
//! discriminator value, plus an `Unknown` branch that preserves the JSON
//! payload of values introduced after this client was released.

mod compute;
mod network;

pub use compute::*;
pub use network::*;

/// The sort fields accepted by the list operations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SortBy {
    /// Sorts by creation time, in descending order by default.
    Timecreated,
    /// Sorts by display name, in ascending order by default. The sort is case sensitive.
    Displayname,
    /// A value not known to this version of the client.
    ///
    /// The service may add new values at any time, they are preserved
    /// verbatim but fail validation.
    UnknownValue(wkt::UnknownEnumValue),
}

impl wkt::Enumeration for SortBy {
    fn labels() -> &'static [&'static str] {
        &[
            "TIMECREATED",
            "DISPLAYNAME",
        ]
    }

    fn value(&self) -> &str {
        match self {
            Self::Timecreated => "TIMECREATED",
            Self::Displayname => "DISPLAYNAME",
            Self::UnknownValue(u) => u.as_str(),
        }
    }
}

impl std::convert::From<&str> for SortBy {
    fn from(value: &str) -> Self {
        match value {
            "TIMECREATED" => Self::Timecreated,
            "DISPLAYNAME" => Self::Displayname,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value)),
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(wkt::Enumeration::value(self))
    }
}

impl serde::ser::Serialize for SortBy {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        wkt::internal::serialize_enum(self, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for SortBy {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        wkt::internal::deserialize_enum(deserializer, "SortBy")
    }
}

/// The sort orders accepted by the list operations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SortOrder {
    Asc,
    Desc,
    /// A value not known to this version of the client.
    ///
    /// The service may add new values at any time, they are preserved
    /// verbatim but fail validation.
    UnknownValue(wkt::UnknownEnumValue),
}

impl wkt::Enumeration for SortOrder {
    fn labels() -> &'static [&'static str] {
        &[
            "ASC",
            "DESC",
        ]
    }

    fn value(&self) -> &str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::UnknownValue(u) => u.as_str(),
        }
    }
}

impl std::convert::From<&str> for SortOrder {
    fn from(value: &str) -> Self {
        match value {
            "ASC" => Self::Asc,
            "DESC" => Self::Desc,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value)),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(wkt::Enumeration::value(self))
    }
}

impl serde::ser::Serialize for SortOrder {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        wkt::internal::serialize_enum(self, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for SortOrder {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        wkt::internal::deserialize_enum(deserializer, "SortOrder")
    }
}
