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

//! Format values for path, query, and header parameters.

use base64::Engine;

type Result = std::result::Result<String, Error>;

/// Values that can be sent as path, query, or header parameters.
pub trait RequestParameter {
    fn format(&self) -> Result;
}

/// The error returned when a value cannot be formatted.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot format as request parameter {0:?}")]
    Format(Box<dyn std::error::Error + Send + Sync>),
}

macro_rules! display_parameter {
    ($($t:ty),*) => {
        $(
            impl RequestParameter for $t {
                fn format(&self) -> Result {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

display_parameter!(i32, i64, u32, u64, f32, f64, bool, str, String);

impl RequestParameter for bytes::Bytes {
    fn format(&self) -> Result {
        use base64::engine::general_purpose::STANDARD;
        Ok(STANDARD.encode(self.iter()))
    }
}

impl RequestParameter for wkt::Timestamp {
    fn format(&self) -> Result {
        use std::fmt::Write;
        let mut buffer = String::new();
        write!(&mut buffer, "{self}").map_err(|e| Error::Format(e.into()))?;
        Ok(buffer)
    }
}

impl<T: RequestParameter + ?Sized> RequestParameter for &T {
    fn format(&self) -> Result {
        (**self).format()
    }
}
