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

//! Exposition formatter (§4.A): turns already-validated samples into the
//! textual metrics line protocol, grouped by family with `# HELP`/`# TYPE`
//! preambles.

use crate::sample::Sample;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Renders `samples` as exposition text under `prefix`.
///
/// Samples are grouped by family and emitted in the family's first
/// appearance order; within a family, in the order they were pushed. No
/// attempt is made to validate label arity here — that is the caller's
/// responsibility (§4.A: "accepts samples already validated for label
/// arity").
#[must_use]
pub fn format_exposition(prefix: &str, samples: &[Sample]) -> String {
    let mut order: Vec<&'static str> = Vec::new();
    let mut grouped: BTreeMap<&'static str, Vec<&Sample>> = BTreeMap::new();
    for sample in samples {
        let key = sample.family.name;
        if !grouped.contains_key(key) {
            order.push(key);
        }
        grouped.entry(key).or_default().push(sample);
    }

    let mut out = String::new();
    for key in order {
        let bucket = &grouped[key];
        let family = bucket[0].family;
        let fq_name = family.fq_name(prefix);
        let _ = writeln!(out, "# HELP {fq_name} {}", family.help);
        let _ = writeln!(out, "# TYPE {fq_name} {}", family.kind.exposition_type());
        for sample in bucket.iter() {
            write_sample_line(&mut out, &fq_name, sample);
        }
    }
    out
}

fn write_sample_line(out: &mut String, fq_name: &str, sample: &Sample) {
    out.push_str(fq_name);
    if !sample.family.labels.is_empty() {
        out.push('{');
        for (i, (label, value)) in sample
            .family
            .labels
            .iter()
            .zip(sample.label_values.iter())
            .enumerate()
        {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "{label}=\"{}\"", escape_label_value(value));
        }
        out.push('}');
    }
    out.push(' ');
    out.push_str(&format_value(sample.value));
    out.push('\n');
}

/// Escapes backslash and double-quote, in that order so that backslashes
/// introduced by the quote escape are not themselves re-escaped.
fn escape_label_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Integer-valued doubles render without a decimal point; all others
/// render to approximately four significant digits, per §4.A.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value < 0.0 && value.is_infinite() {
        return "NaN".to_string();
    }
    if value == value.trunc() && value.abs() < 1e15 {
        return format!("{value:.0}");
    }
    format_significant(value, 4)
}

fn format_significant(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let formatted = format!("{value:.decimals$}");
    trim_trailing_zeros(&formatted)
}

fn trim_trailing_zeros(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::families;

    #[test]
    fn integer_valued_doubles_render_without_decimal() {
        assert_eq!(format_value(1.0), "1");
        assert_eq!(format_value(137_438_953_472.0), "137438953472");
        assert_eq!(format_value(0.0), "0");
    }

    #[test]
    fn fractional_values_render_to_four_significant_digits() {
        assert_eq!(format_value(3.14159), "3.142");
        assert_eq!(format_value(0.0123456789), "0.01235");
        assert_eq!(format_value(12345.6), "12346");
    }

    #[test]
    fn label_values_escape_backslash_before_quote() {
        assert_eq!(escape_label_value(r#"a"b"#), r#"a\"b"#);
        assert_eq!(escape_label_value(r"a\b"), r"a\\b");
        assert_eq!(escape_label_value(r#"a\"b"#), r#"a\\\"b"#);
    }

    #[test]
    fn exposition_groups_samples_under_one_help_and_type_block() {
        let samples = vec![
            Sample::with_labels(&families::SYSTEM_CPU_COUNT, 2.0, vec!["Xeon".to_string()]),
            Sample::new(&families::SYSTEM_POWER_ON, 1.0),
        ];
        let text = format_exposition("idrac", &samples);
        assert!(text.contains("# HELP idrac_system_cpu_count"));
        assert!(text.contains("# TYPE idrac_system_cpu_count gauge"));
        assert!(text.contains(r#"idrac_system_cpu_count{model="Xeon"} 2"#));
        assert!(text.contains("idrac_system_power_on 1"));
    }

    #[test]
    fn exposition_omits_label_braces_for_unlabeled_families() {
        let samples = vec![Sample::new(&families::SYSTEM_POWER_ON, 1.0)];
        let text = format_exposition("idrac", &samples);
        assert!(text.lines().any(|l| l == "idrac_system_power_on 1"));
    }

    #[test]
    fn counter_typed_event_sample_value_is_epoch_seconds() {
        let ts: crate::timestamp::EventTimestamp = "2024-01-02T03:04:05Z".parse().unwrap();
        let sample = Sample::with_timestamp(
            &families::EVENTS_LOG_ENTRY,
            vec!["1".to_string(), "msg".to_string(), "Critical".to_string()],
            ts,
        );
        assert_eq!(format_value(sample.value), "1704164645");
    }
}
