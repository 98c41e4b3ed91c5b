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

//! Errors returned by the Core Services SDK.
//!
//! All the functions in the SDK return [Error]. Applications can use the
//! `is_*()` predicates to classify the error, and [Error::as_service] to
//! examine the error details returned by the service.

mod core_error;
pub use core_error::*;

pub mod binding;

mod service_error;
pub use service_error::*;

mod validation;
pub use validation::*;
