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

//! Tolerant polymorphic-string decoding (the *xstring* shape, §4.C)
//!
//! Several Redfish enumerations are reported inconsistently across BMC
//! firmware: as a plain string, as `null`, or as a single-element member
//! array `[{"Member": "..."}]`. [`XString`] decodes all three shapes into a
//! plain string, using empty string to mean "absent" rather than introducing
//! a second optionality layer on top of the one the schema already has.
//!
//! The decode itself is a custom [`serde::Deserialize`] impl rather than an
//! untagged enum, because the member-array shape needs to reach inside the
//! first element for a specific key — something `#[serde(untagged)]` alone
//! cannot express directly.

use serde::de::Deserializer;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XString(pub String);

impl XString {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<XString> for String {
    fn from(value: XString) -> Self {
        value.0
    }
}

impl AsRef<str> for XString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for XString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for XString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Any other shape (number, bool, object without Member) decodes to empty
        // rather than erroring, per the tolerance rule in §4.C.
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Null => Ok(XString(String::new())),
            serde_json::Value::String(s) => Ok(XString(s)),
            serde_json::Value::Array(items) => {
                let member = items
                    .first()
                    .and_then(|v| v.get("Member"))
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
                    .unwrap_or_default();
                Ok(XString(member))
            }
            _ => Ok(XString(String::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> XString {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn decodes_null_to_empty() {
        assert_eq!(decode("null"), XString(String::new()));
    }

    #[test]
    fn decodes_plain_string_verbatim() {
        assert_eq!(decode("\"Enabled\""), XString("Enabled".to_string()));
    }

    #[test]
    fn decodes_member_array_first_element() {
        assert_eq!(
            decode(r#"[{"Member": "OEM"}]"#),
            XString("OEM".to_string())
        );
    }

    #[test]
    fn decodes_member_array_ignoring_extra_elements() {
        assert_eq!(
            decode(r#"[{"Member": "OEM"}, {"Member": "Other"}]"#),
            XString("OEM".to_string())
        );
    }

    #[test]
    fn decodes_unrecognised_shape_to_empty() {
        assert_eq!(decode("42"), XString(String::new()));
        assert_eq!(decode("true"), XString(String::new()));
        assert_eq!(decode(r#"{"foo": "bar"}"#), XString(String::new()));
    }

    #[test]
    fn decodes_array_without_member_key_to_empty() {
        assert_eq!(decode(r#"[{"Other": "x"}]"#), XString(String::new()));
        assert_eq!(decode("[]"), XString(String::new()));
    }

    #[test]
    fn is_empty_reflects_absence() {
        assert!(decode("null").is_empty());
        assert!(!decode("\"x\"").is_empty());
    }
}
