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

//! Core Services SDK helpers.
//!
//! This crate contains the runtime used by the generated models and clients:
//! enum validation, discriminated unions, request and response binding, and
//! the retry machinery.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions making requests.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Well-known HTTP header names.
pub mod headers;

pub mod validation;

/// Encode and decode discriminated unions.
pub mod polymorphic;

/// Formats values for path, query, and header parameters.
pub mod request_parameter;

pub mod binding;
pub mod response;

pub mod backoff_policy;
pub mod exponential_backoff;
pub mod retry_policy;
pub mod retry_result;
pub mod retry_token;

/// Implementation of the retry loop, shared by the HTTP clients.
#[doc(hidden)]
pub mod retry_loop_internal;

pub mod client_builder;
pub mod options;

/// Defines some types and traits to convert list operations into streams.
pub mod paginator;
