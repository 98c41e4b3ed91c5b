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

//! Rust client library for the Core Services API.
//!
//! The Core Services API manages compute instances, their volume
//! attachments, and the virtual networking resources around them.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use oci_sdk_core::client::Compute;
//! use oci_sdk_core::requests::compute::GetInstanceRequest;
//! let client = Compute::builder().with_region("us-ashburn-1").build().await?;
//! let response = client
//!     .get_instance(GetInstanceRequest::new().set_instance_id("ocid1.instance.oc1..example"))
//!     .send()
//!     .await?;
//! println!("{:?}", response.instance.lifecycle_state);
//! # anyhow::Result::<()>::Ok(()) });
//! ```

pub use gax::Result;
pub use gax::error::Error;

pub mod model;

/// The request and response envelopes of each operation.
pub mod requests;

/// Request builders for the clients.
pub mod builder;

/// The clients for each service in the Core Services API.
pub mod client;
