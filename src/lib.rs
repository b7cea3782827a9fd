#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Runners behind the command-line binaries.
pub mod apps;
/// Constants for file layout, document keys, and reporting.
pub mod constants;
/// Grouping of sutra rows by adhikarana.
pub mod grouping;
/// Outline document construction and IO.
pub mod outline;
/// Sutra table reading.
pub mod table;
/// Shared type aliases.
pub mod types;
/// Cross-validation of an outline against the table.
pub mod validate;

mod errors;

pub use errors::OutlineError;
pub use grouping::{AdhikaranaRun, consecutive_runs, label_aggregate, span_text};
pub use outline::{OutlineDocument, OutlineEntry, build_outline, read_outline, write_outline};
pub use table::{SutraRow, read_table};
pub use types::{AdhikaranaName, EntryKey, SpanText, SutraId};
pub use validate::{EntryCheck, EntryOutcome, ValidationReport, validate_outline};
