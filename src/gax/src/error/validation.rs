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

/// One or more enum fields contain unsupported values.
///
/// Each message has the form
/// `unsupported enum value for <Field>: <value>. Supported values are: <labels>.`
/// and the messages are joined by newlines when displayed.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("{}", .messages.join("\n"))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    /// Creates a new error from the individual violation messages.
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// The individual violations, in field order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = ValidationError::new(vec!["first".to_string(), "second".to_string()]);
        assert_eq!(e.to_string(), "first\nsecond");
        assert_eq!(e.messages(), &["first".to_string(), "second".to_string()]);
        assert!(std::error::Error::source(&e).is_none(), "{e:?}");
    }
}
