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

//! Vendor tag detection.
//!
//! Derived once per client from the System resource's `Manufacturer` string,
//! using case-insensitive substring matching, and used to key vendor-specific
//! event-log paths, OEM payload extraction, and the workarounds in §4.F.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Vendor {
    #[default]
    Unknown,
    Dell,
    Hpe,
    Lenovo,
    Inspur,
    H3c,
    Inventec,
    Fujitsu,
    Supermicro,
}

impl Vendor {
    /// Detects the vendor from a System resource's `Manufacturer` field.
    #[must_use]
    pub fn detect(manufacturer: &str) -> Self {
        let m = manufacturer.to_ascii_lowercase();
        if m.contains("dell") {
            Self::Dell
        } else if m.contains("hpe") || m.contains("hewlett") {
            Self::Hpe
        } else if m.contains("lenovo") {
            Self::Lenovo
        } else if m.contains("inspur") {
            Self::Inspur
        } else if m.contains("h3c") {
            Self::H3c
        } else if m.contains("inventec") {
            Self::Inventec
        } else if m.contains("fujitsu") {
            Self::Fujitsu
        } else if m.contains("supermicro") || m.contains("smc") {
            Self::Supermicro
        } else {
            Self::Unknown
        }
    }

    /// Detects the HPE iLO 4 legacy layout, which reports a distinct
    /// service-root `Name` rather than a recognisable `Manufacturer`.
    #[must_use]
    pub fn is_ilo4(service_root_name: &str) -> bool {
        service_root_name.contains("HP RESTful")
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unknown => "unknown",
            Self::Dell => "dell",
            Self::Hpe => "hpe",
            Self::Lenovo => "lenovo",
            Self::Inspur => "inspur",
            Self::H3c => "h3c",
            Self::Inventec => "inventec",
            Self::Fujitsu => "fujitsu",
            Self::Supermicro => "supermicro",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_vendors_case_insensitively() {
        assert_eq!(Vendor::detect("Dell Inc."), Vendor::Dell);
        assert_eq!(Vendor::detect("HPE"), Vendor::Hpe);
        assert_eq!(Vendor::detect("lenovo"), Vendor::Lenovo);
        assert_eq!(Vendor::detect("INSPUR"), Vendor::Inspur);
        assert_eq!(Vendor::detect("H3C Technologies"), Vendor::H3c);
        assert_eq!(Vendor::detect("Inventec Corp"), Vendor::Inventec);
        assert_eq!(Vendor::detect("FUJITSU"), Vendor::Fujitsu);
        assert_eq!(Vendor::detect("Super Micro Computer"), Vendor::Supermicro);
    }

    #[test]
    fn unrecognised_manufacturer_is_unknown() {
        assert_eq!(Vendor::detect("Acme Corp"), Vendor::Unknown);
        assert_eq!(Vendor::detect(""), Vendor::Unknown);
    }

    #[test]
    fn ilo4_detected_from_service_root_name() {
        assert!(Vendor::is_ilo4("HP RESTful"));
        assert!(!Vendor::is_ilo4("Redfish"));
    }
}
