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

use time::OffsetDateTime;
use time::format_description::well_known::{Rfc2822, Rfc3339};

/// An instant in time, independent of any time zone or calendar.
///
/// The service sends timestamps as RFC 3339 strings, for example
/// `2016-08-25T21:10:29.600Z`. In memory the value is a count of seconds and
/// nanoseconds since the Unix epoch.
///
/// The range is restricted to `0001-01-01T00:00:00Z` through
/// `9999-12-31T23:59:59.999999999Z`, which keeps every value printable in
/// RFC 3339 format.
///
/// # Examples
/// ```
/// # use oci_sdk_wkt::Timestamp;
/// let ts = Timestamp::try_from("2016-08-25T21:10:29.6Z")?;
/// assert_eq!(ts.seconds(), 1472159429);
/// assert_eq!(ts.nanos(), 600_000_000);
/// assert_eq!(ts.to_string(), "2016-08-25T21:10:29.6Z");
/// # Ok::<(), oci_sdk_wkt::TimestampError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

/// Represent failures in converting or creating [Timestamp] instances.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TimestampError {
    /// One of the components (seconds and/or nanoseconds) was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// The input is not a valid RFC 3339 (or RFC 2822) timestamp.
    #[error("cannot parse timestamp {input:?}, source={source}")]
    Parse {
        input: String,
        #[source]
        source: time::error::Parse,
    },
}

type Error = TimestampError;

impl Timestamp {
    const NS: i32 = 1_000_000_000;

    // `date +%s --date='0001-01-01T00:00:00Z'`
    /// The minimum value for the `seconds` component.
    pub const MIN_SECONDS: i64 = -62135596800;

    // `date +%s --date='9999-12-31T23:59:59Z'`
    /// The maximum value for the `seconds` component.
    pub const MAX_SECONDS: i64 = 253402300799;

    /// The maximum value for the `nanos` component.
    pub const MAX_NANOS: i32 = Self::NS - 1;

    /// Creates a new [Timestamp] from the seconds and nanoseconds.
    ///
    /// Returns an error if either component is out of range.
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(0..=Self::MAX_NANOS).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        Ok(Self { seconds, nanos })
    }

    /// Seconds since the Unix epoch.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The sub-second component, always in `0..1_000_000_000`.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    /// Parses a timestamp received in an HTTP header.
    ///
    /// Headers may carry RFC 3339 values, or the RFC 2822 format used by
    /// `Date` and `Last-Modified`.
    pub fn from_header_value(value: &str) -> Result<Self, Error> {
        match Self::try_from(value) {
            Ok(ts) => Ok(ts),
            Err(Error::Parse { .. }) => {
                let odt = OffsetDateTime::parse(value, &Rfc2822).map_err(|source| {
                    Error::Parse {
                        input: value.to_string(),
                        source,
                    }
                })?;
                Self::try_from(odt)
            }
            Err(e) => Err(e),
        }
    }

    fn to_offset_date_time(self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp_nanos(
            self.seconds as i128 * Self::NS as i128 + self.nanos as i128,
        )
        .ok()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The range checks in `new()` guarantee both conversions succeed.
        let odt = self.to_offset_date_time().ok_or(std::fmt::Error)?;
        let formatted = odt.format(&Rfc3339).map_err(|_| std::fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let odt = OffsetDateTime::parse(value, &Rfc3339).map_err(|source| Error::Parse {
            input: value.to_string(),
            source,
        })?;
        Self::try_from(odt)
    }
}

impl TryFrom<OffsetDateTime> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: OffsetDateTime) -> Result<Self, Self::Error> {
        let seconds = value.unix_timestamp();
        let nanos = value.nanosecond() as i32;
        Self::new(seconds, nanos)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(value: Timestamp) -> Self {
        value
            .to_offset_date_time()
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
}

impl serde::ser::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

struct TimestampVisitor;

impl serde::de::Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with a timestamp in RFC 3339 format")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Timestamp::try_from(value).map_err(E::custom)
    }
}

impl<'de> serde::de::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    use time::macros::datetime;

    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test_case(0, 0)]
    #[test_case(Timestamp::MIN_SECONDS, 0)]
    #[test_case(Timestamp::MAX_SECONDS, Timestamp::MAX_NANOS)]
    #[test_case(1472159429, 600_000_000)]
    fn new_in_range(seconds: i64, nanos: i32) -> Result {
        let ts = Timestamp::new(seconds, nanos)?;
        assert_eq!(ts.seconds(), seconds);
        assert_eq!(ts.nanos(), nanos);
        Ok(())
    }

    #[test_case(Timestamp::MIN_SECONDS - 1, 0)]
    #[test_case(Timestamp::MAX_SECONDS + 1, 0)]
    #[test_case(0, -1)]
    #[test_case(0, 1_000_000_000)]
    fn new_out_of_range(seconds: i64, nanos: i32) {
        let got = Timestamp::new(seconds, nanos);
        assert!(matches!(got, Err(TimestampError::OutOfRange)), "{got:?}");
    }

    #[test_case("1970-01-01T00:00:00Z", 0, 0)]
    #[test_case("2016-08-25T21:10:29.600Z", 1472159429, 600_000_000)]
    #[test_case("2016-08-25T23:10:29.6+02:00", 1472159429, 600_000_000)]
    #[test_case("0001-01-01T00:00:00Z", Timestamp::MIN_SECONDS, 0)]
    #[test_case("9999-12-31T23:59:59.999999999Z", Timestamp::MAX_SECONDS, Timestamp::MAX_NANOS)]
    fn parse(input: &str, seconds: i64, nanos: i32) -> Result {
        let got = Timestamp::try_from(input)?;
        assert_eq!(got, Timestamp::new(seconds, nanos)?);
        Ok(())
    }

    #[test_case("")]
    #[test_case("2016-08-25")]
    #[test_case("not a timestamp")]
    fn parse_error(input: &str) {
        let got = Timestamp::try_from(input);
        assert!(matches!(got, Err(TimestampError::Parse { .. })), "{got:?}");
    }

    #[test_case(0, 0, "1970-01-01T00:00:00Z")]
    #[test_case(1472159429, 600_000_000, "2016-08-25T21:10:29.6Z")]
    #[test_case(1472159429, 123_456_789, "2016-08-25T21:10:29.123456789Z")]
    fn format(seconds: i64, nanos: i32, want: &str) -> Result {
        let ts = Timestamp::new(seconds, nanos)?;
        assert_eq!(ts.to_string(), want);
        Ok(())
    }

    #[test]
    fn header_value() -> Result {
        let got = Timestamp::from_header_value("Thu, 25 Aug 2016 21:10:29 +0000")?;
        assert_eq!(got, Timestamp::new(1472159429, 0)?);
        let got = Timestamp::from_header_value("2016-08-25T21:10:29Z")?;
        assert_eq!(got, Timestamp::new(1472159429, 0)?);
        assert!(Timestamp::from_header_value("garbage").is_err());
        Ok(())
    }

    #[test]
    fn offset_date_time() -> Result {
        let odt = datetime!(2016-08-25 21:10:29.6 UTC);
        let ts = Timestamp::try_from(odt)?;
        assert_eq!(ts, Timestamp::new(1472159429, 600_000_000)?);
        assert_eq!(OffsetDateTime::from(ts), odt);
        Ok(())
    }

    #[test]
    fn serde() -> Result {
        let ts = Timestamp::new(1472159429, 600_000_000)?;
        let json = serde_json::to_value(ts)?;
        assert_eq!(json, json!("2016-08-25T21:10:29.6Z"));
        let got = serde_json::from_value::<Timestamp>(json)?;
        assert_eq!(got, ts);
        Ok(())
    }

    #[test]
    fn deserialize_errors() {
        let got = serde_json::from_value::<Timestamp>(json!("2016-13-45T00:00:00Z"));
        assert!(got.is_err(), "{got:?}");
        let got = serde_json::from_value::<Timestamp>(json!(123));
        assert!(got.is_err(), "{got:?}");
    }
}
