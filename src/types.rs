/// Dotted three-part sutra identifier derived from a table row.
/// Example: `1.1.12`
pub type SutraId = String;
/// Adhikarana (thematic section) label attached to each sutra row.
/// Example: `जिज्ञासाधिकरणम्`
pub type AdhikaranaName = String;
/// Textual span of a run: a lone identifier or `first-last`.
/// Examples: `1.1.1`, `1.1.5-1.1.11`
pub type SpanText = String;
/// Key of an entry in the outline document.
/// Examples: `Adhikarana_1`, `Adhikarana_42`
pub type EntryKey = String;
