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

//! Typed samples and the metric-family descriptors they point back to
//! (§3, §4.D).

use crate::metrics::MetricFamily;
use crate::timestamp::EventTimestamp;

/// The exposition-format value kind, carried on every [`MetricFamily`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Gauge,
    Counter,
    /// Emitted as Prometheus `untyped`/`gauge`-with-value-1 info metrics —
    /// the value is always 1 and the interesting content lives in labels.
    Info,
}

impl MetricKind {
    #[must_use]
    pub fn exposition_type(self) -> &'static str {
        match self {
            Self::Gauge | Self::Info => "gauge",
            Self::Counter => "counter",
        }
    }
}

/// One measurement: a reference to its family descriptor, a value, the
/// label values in descriptor-declared order, and (for event-log entries
/// only) a timestamp.
#[derive(Debug, Clone)]
pub struct Sample {
    pub family: &'static MetricFamily,
    pub value: f64,
    pub label_values: Vec<String>,
    pub timestamp: Option<EventTimestamp>,
}

impl Sample {
    /// Builds a sample with no labels.
    #[must_use]
    pub fn new(family: &'static MetricFamily, value: f64) -> Self {
        debug_assert!(
            family.labels.is_empty(),
            "{} declares labels but was built with none",
            family.name
        );
        Self {
            family,
            value,
            label_values: Vec::new(),
            timestamp: None,
        }
    }

    /// Builds a sample with label values in descriptor-declared order.
    ///
    /// # Panics
    /// Panics if `label_values.len()` does not match the family's declared
    /// label arity — a programming error in the caller, not a data problem.
    #[must_use]
    pub fn with_labels(family: &'static MetricFamily, value: f64, label_values: Vec<String>) -> Self {
        assert_eq!(
            label_values.len(),
            family.labels.len(),
            "{} expects {} labels, got {}",
            family.name,
            family.labels.len(),
            label_values.len()
        );
        Self {
            family,
            value,
            label_values,
            timestamp: None,
        }
    }

    /// Builds a counter-typed sample carrying an event timestamp as its
    /// value (§4.A): epoch seconds of event creation time.
    #[must_use]
    pub fn with_timestamp(
        family: &'static MetricFamily,
        label_values: Vec<String>,
        timestamp: EventTimestamp,
    ) -> Self {
        assert_eq!(label_values.len(), family.labels.len());
        Self {
            family,
            value: timestamp.unix_seconds() as f64,
            label_values,
            timestamp: Some(timestamp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::families;

    #[test]
    fn new_rejects_families_with_labels_in_debug_builds() {
        let family = &families::SYSTEM_CPU_COUNT;
        let result = std::panic::catch_unwind(|| Sample::new(family, 1.0));
        assert!(result.is_err());
    }

    #[test]
    fn with_labels_matches_declared_arity() {
        let sample = Sample::with_labels(
            &families::SYSTEM_CPU_COUNT,
            2.0,
            vec!["Xeon".to_string()],
        );
        assert_eq!(sample.label_values, vec!["Xeon".to_string()]);
    }

    #[test]
    #[should_panic]
    fn with_labels_panics_on_arity_mismatch() {
        Sample::with_labels(&families::SYSTEM_CPU_COUNT, 2.0, vec![]);
    }
}
