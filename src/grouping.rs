//! Grouping of sutra rows by adhikarana.
//!
//! Two aggregations share the table but differ on adjacency:
//!
//! - [`consecutive_runs`] collapses *adjacent* rows with the same label, in
//!   table order. A label that reappears after an interruption starts a new
//!   run. The rebuild tool works on runs.
//! - [`label_aggregate`] collects *every* identifier carrying a label,
//!   adjacency not required. The validator works on aggregates, so its
//!   "actual" span for a label stretches from first to last appearance.
//!
//! The two agree exactly when no label occupies more than one run;
//! [`repeated_run_labels`] surfaces the labels where they would disagree.

use indexmap::IndexMap;

use crate::table::SutraRow;
use crate::types::{AdhikaranaName, SpanText, SutraId};

/// A maximal run of consecutive rows sharing one adhikarana label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdhikaranaRun {
    /// Label shared by every row in the run.
    pub name: AdhikaranaName,
    /// Identifiers of the run's rows, in table order. Never empty.
    pub sutra_ids: Vec<SutraId>,
}

impl AdhikaranaRun {
    /// Span text for this run.
    pub fn span(&self) -> SpanText {
        span_text(&self.sutra_ids)
    }
}

/// Collapse the table into maximal consecutive equal-label runs.
///
/// An empty table yields no runs. The first row always opens a run; each
/// later row either extends the current run (same label) or closes it and
/// opens the next.
pub fn consecutive_runs(rows: &[SutraRow]) -> Vec<AdhikaranaRun> {
    let mut runs: Vec<AdhikaranaRun> = Vec::new();
    for row in rows {
        let id = row.sutra_id();
        match runs.last_mut() {
            Some(run) if run.name == row.adhikarana => run.sutra_ids.push(id),
            _ => runs.push(AdhikaranaRun {
                name: row.adhikarana.clone(),
                sutra_ids: vec![id],
            }),
        }
    }
    runs
}

/// Map each label to every identifier carrying it, anywhere in the table.
///
/// Labels are keyed in first-appearance order; within a label, identifiers
/// keep table order.
pub fn label_aggregate(rows: &[SutraRow]) -> IndexMap<AdhikaranaName, Vec<SutraId>> {
    let mut aggregate: IndexMap<AdhikaranaName, Vec<SutraId>> = IndexMap::new();
    for row in rows {
        aggregate
            .entry(row.adhikarana.clone())
            .or_default()
            .push(row.sutra_id());
    }
    aggregate
}

/// Format the span of an identifier list: a lone element stands alone, two or
/// more become `first-last` (interior elements do not appear).
pub fn span_text(sutra_ids: &[SutraId]) -> SpanText {
    match sutra_ids {
        [] => SpanText::new(),
        [only] => only.clone(),
        [first, .., last] => format!("{first}-{last}"),
    }
}

/// Labels occupying more than one run, with their run counts, in
/// first-appearance order.
pub fn repeated_run_labels(runs: &[AdhikaranaRun]) -> Vec<(AdhikaranaName, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for run in runs {
        *counts.entry(run.name.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}
