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

//! Well-known types for the Core Services SDK.
//!
//! The generated models use a handful of primitive types that are not part
//! of the Rust standard library:
//!
//! - [Timestamp]: an instant in time, sent over the wire in RFC 3339 format.
//! - [Enumeration]: the contract shared by all the generated string enums,
//!   including the lookup operations used by model validation.
//!
//! Optional scalars are plain [Option] values. An absent field is `None`,
//! and `Some(0)`, `Some(false)`, or `Some("")` are present with a zero value.

mod enumerations;
pub use crate::enumerations::*;
mod timestamp;
pub use crate::timestamp::*;

#[doc(hidden)]
pub mod internal;
