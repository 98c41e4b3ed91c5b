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

//! Idempotency tokens for the `opc-retry-token` header.

use rand::Rng;
use rand::distr::Alphanumeric;

const TOKEN_LENGTH: usize = 30;

/// Generates a random retry token.
///
/// The client calls this once per request, before the first attempt, so all
/// the attempts share the same token.
pub fn generate() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Sets `token` to a fresh value unless it already holds a non-empty one.
pub fn ensure(token: &mut Option<String>) {
    if token.as_deref().is_none_or(str::is_empty) {
        *token = Some(generate());
    }
}
