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

//! Well-known HTTP header names.

/// An idempotency key, retried creation requests with the same token are
/// deduplicated by the service.
pub const OPC_RETRY_TOKEN: &str = "opc-retry-token";

/// Optimistic concurrency control, compared against the resource `etag`.
pub const IF_MATCH: &str = "if-match";

/// Correlates requests and responses, sent by the client and returned by the
/// service.
pub const OPC_REQUEST_ID: &str = "opc-request-id";

/// The entity tag of the returned resource.
pub const ETAG: &str = "etag";

/// The cursor for the next page of a list operation.
pub const OPC_NEXT_PAGE: &str = "opc-next-page";
