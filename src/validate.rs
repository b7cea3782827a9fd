//! Cross-validation of an outline document against the sutra table.
//!
//! For every data entry in the outline (metadata keys starting with `_` are
//! skipped), the declared span is compared against the span recomputed from
//! the table's label aggregate. The aggregate covers every occurrence of a
//! label, adjacency not required, so for a label that appears in several
//! separated runs the actual span stretches from its first appearance to its
//! last. Findings are collected per entry; a bad entry never stops the scan.

use serde_json::{Map, Value};

use crate::constants::outline::{FIELD_NAME, FIELD_SUTRAS, METADATA_KEY_PREFIX};
use crate::errors::OutlineError;
use crate::grouping::{label_aggregate, span_text};
use crate::table::SutraRow;
use crate::types::{AdhikaranaName, EntryKey, SpanText, SutraId};

/// Result of checking one outline entry against the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Declared span matches the recomputed span.
    Match {
        /// The agreed span, for reporting.
        span: SpanText,
    },
    /// The entry's label has no rows in the table.
    LabelNotFound,
    /// Declared span differs from the recomputed span.
    SpanMismatch {
        /// Span declared by the outline entry.
        declared: SpanText,
        /// Span recomputed from the table aggregate.
        actual: SpanText,
        /// Every identifier carrying the label, in table order.
        sutra_ids: Vec<SutraId>,
    },
}

/// One checked outline entry, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryCheck {
    /// Key of the entry in the outline document.
    pub key: EntryKey,
    /// Label the entry declares.
    pub name: AdhikaranaName,
    /// What the check found.
    pub outcome: EntryOutcome,
}

/// Ordered validation findings for one outline document.
#[derive(Clone, Debug, Default)]
pub struct ValidationReport {
    /// Per-entry findings, in outline document order.
    pub checks: Vec<EntryCheck>,
}

impl ValidationReport {
    /// True when at least one entry failed its check.
    pub fn errors_found(&self) -> bool {
        self.checks
            .iter()
            .any(|check| !matches!(check.outcome, EntryOutcome::Match { .. }))
    }
}

/// Check every data entry of `outline` against `rows`.
///
/// Malformed entries (missing or non-string `name`/`sutras`) abort the whole
/// validation with an error; label and span problems are findings in the
/// returned report.
pub fn validate_outline(
    rows: &[SutraRow],
    outline: &Map<String, Value>,
) -> Result<ValidationReport, OutlineError> {
    let aggregate = label_aggregate(rows);
    let mut report = ValidationReport::default();

    for (key, entry) in outline {
        if key.starts_with(METADATA_KEY_PREFIX) {
            continue;
        }
        let name = required_str(key, entry, FIELD_NAME)?;
        let declared = required_str(key, entry, FIELD_SUTRAS)?;

        let outcome = match aggregate.get(name) {
            None => EntryOutcome::LabelNotFound,
            Some(sutra_ids) => {
                let actual = span_text(sutra_ids);
                if declared == actual {
                    EntryOutcome::Match { span: actual }
                } else {
                    EntryOutcome::SpanMismatch {
                        declared: declared.to_string(),
                        actual,
                        sutra_ids: sutra_ids.clone(),
                    }
                }
            }
        };

        report.checks.push(EntryCheck {
            key: key.clone(),
            name: name.to_string(),
            outcome,
        });
    }

    Ok(report)
}

fn required_str<'a>(
    key: &str,
    entry: &'a Value,
    field: &'static str,
) -> Result<&'a str, OutlineError> {
    entry
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| OutlineError::MalformedEntry {
            key: key.to_string(),
            field,
        })
}
