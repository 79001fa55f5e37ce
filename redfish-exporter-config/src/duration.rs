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

//! Parses the restricted `<number><unit>` duration grammar used by
//! `events.maxage` (§6.2): a single non-nested pair, unit one of
//! `s`/`m`/`h`/`d`. `1h30m` is not supported, matching the original.

use crate::error::ConfigError;

pub fn parse_seconds(input: &str) -> Result<f64, ConfigError> {
    let input = input.trim();
    let unit = input
        .chars()
        .last()
        .ok_or_else(|| ConfigError::InvalidDuration(input.to_string()))?;

    let (digits, multiplier) = match unit {
        's' => (&input[..input.len() - 1], 1.0),
        'm' => (&input[..input.len() - 1], 60.0),
        'h' => (&input[..input.len() - 1], 3600.0),
        'd' => (&input[..input.len() - 1], 86400.0),
        _ if unit.is_ascii_digit() => (input, 1.0),
        _ => return Err(ConfigError::InvalidDuration(input.to_string())),
    };

    digits
        .parse::<f64>()
        .map(|n| n * multiplier)
        .map_err(|_| ConfigError::InvalidDuration(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_unit() {
        assert_eq!(parse_seconds("30s").unwrap(), 30.0);
        assert_eq!(parse_seconds("5m").unwrap(), 300.0);
        assert_eq!(parse_seconds("2h").unwrap(), 7200.0);
        assert_eq!(parse_seconds("7d").unwrap(), 604_800.0);
    }

    #[test]
    fn bare_number_is_seconds() {
        assert_eq!(parse_seconds("45").unwrap(), 45.0);
    }

    #[test]
    fn rejects_unknown_unit() {
        assert!(parse_seconds("1w").is_err());
    }

    #[test]
    fn rejects_compound_durations() {
        assert!(parse_seconds("1h30m").is_err());
    }
}
