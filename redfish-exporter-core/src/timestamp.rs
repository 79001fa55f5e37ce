// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Event-log timestamp wrapper
//!
//! Redfish log entries report their `Created` field as an RFC 3339 string.
//! [`EventTimestamp`] wraps `time::OffsetDateTime` and (de)serializes using
//! RFC 3339, mirroring the way the rest of this codebase wraps `time` types
//! for wire-format fields.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EventTimestamp(#[serde(with = "time::serde::rfc3339")] OffsetDateTime);

impl EventTimestamp {
    /// Seconds since the Unix epoch, used as the counter value for
    /// `log_entry` samples.
    #[must_use]
    pub fn unix_seconds(&self) -> i64 {
        self.0.unix_timestamp()
    }

    /// Age relative to `now`, in seconds. Negative if the entry is in the future.
    #[must_use]
    pub fn age_seconds(&self, now: OffsetDateTime) -> f64 {
        (now - self.0).as_seconds_f64()
    }
}

impl From<OffsetDateTime> for EventTimestamp {
    fn from(dt: OffsetDateTime) -> Self {
        Self(dt)
    }
}

impl From<EventTimestamp> for OffsetDateTime {
    fn from(w: EventTimestamp) -> Self {
        w.0
    }
}

impl Display for EventTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let s = self.0.format(&Rfc3339).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl FromStr for EventTimestamp {
    type Err = time::error::Parse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(OffsetDateTime::parse(s, &Rfc3339)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_utc() {
        let ts: EventTimestamp = "2024-01-02T03:04:05Z".parse().unwrap();
        assert_eq!(ts.to_string(), "2024-01-02T03:04:05Z");
        assert_eq!(ts.unix_seconds(), 1_704_164_645);
    }

    #[test]
    fn rejects_missing_offset() {
        assert!("2024-01-02T03:04:05".parse::<EventTimestamp>().is_err());
    }

    #[test]
    fn age_seconds_positive_for_past_events() {
        let ts: EventTimestamp = "2024-01-02T03:04:05Z".parse().unwrap();
        let now: EventTimestamp = "2024-01-02T04:04:05Z".parse().unwrap();
        assert!((ts.age_seconds(now.into()) - 3600.0).abs() < 1e-6);
    }

    #[test]
    fn serde_roundtrip_preserves_offset() {
        let ts: EventTimestamp = "2024-06-01T12:00:00+02:00".parse().unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, r#""2024-06-01T12:00:00+02:00""#);
        let back: EventTimestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
