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

//! Health-string to numeric-gauge mapping, shared by every worker that
//! exposes a `*_health` family and by the event-log severity filter (§4.D).

/// `OK`/`GoodInUse` map to 0, `Warning` to 1, `Critical` to 2, anything else
/// (including an unrecognised or vendor-specific string) to 10.
#[must_use]
pub fn health_value(health: &str) -> f64 {
    match health {
        "OK" | "GoodInUse" => 0.0,
        "Warning" => 1.0,
        "Critical" => 2.0,
        _ => 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_severities() {
        assert_eq!(health_value("OK"), 0.0);
        assert_eq!(health_value("GoodInUse"), 0.0);
        assert_eq!(health_value("Warning"), 1.0);
        assert_eq!(health_value("Critical"), 2.0);
    }

    #[test]
    fn unrecognised_health_maps_to_ten() {
        assert_eq!(health_value("Unknown"), 10.0);
        assert_eq!(health_value(""), 10.0);
    }
}
