/// Constants describing the sutra table file and row identity.
pub mod table {
    /// Default filename of the sutra table consumed by both tools.
    pub const DEFAULT_TABLE_PATH: &str = "bs.csv";
    /// Separator joining `adhyaya`, `pada`, and `sutra_number` into a sutra id.
    pub const ID_SEPARATOR: &str = ".";
}

/// Constants describing the outline document layout.
pub mod outline {
    /// Default output filename written by the rebuild tool.
    pub const DEFAULT_REBUILD_OUTPUT_PATH: &str = "adhikarana-details-new.json";
    /// Default filename of the (possibly human-edited) outline read by the validator.
    pub const DEFAULT_DETAILS_PATH: &str = "adhikarana-details.json";
    /// Prefix for generated entry keys (`Adhikarana_1`, `Adhikarana_2`, ...).
    pub const ENTRY_KEY_PREFIX: &str = "Adhikarana_";
    /// Entries whose key starts with this prefix are metadata, not data.
    pub const METADATA_KEY_PREFIX: &str = "_";
    /// Field key holding the adhikarana name.
    pub const FIELD_NAME: &str = "name";
    /// Field key holding the declared sutra span.
    pub const FIELD_SUTRAS: &str = "sutras";
    /// Placeholder fields appended to each generated entry, in document order.
    ///
    /// The keys are opaque literal text from the source corpus (four
    /// Devanagari/English headings plus `notes` and `references`); only their
    /// order matters to downstream editors.
    pub const PLACEHOLDER_FIELDS: [&str; 6] = [
        "वषय - Topic",
        "सशय - Samshaya",
        "परवपकष - Purvapaksha",
        "सधदनत - Siddhanta",
        "notes",
        "references",
    ];
    /// Indent unit used when pretty-printing the outline document.
    pub const JSON_INDENT: &str = "    ";
}

/// Constants used by console reporting in both tools.
pub mod report {
    /// Number of entries previewed after a rebuild.
    pub const PREVIEW_LIMIT: usize = 10;
    /// Glyph prefixed to successful validation lines.
    pub const GLYPH_OK: &str = "✅";
    /// Glyph prefixed to failed validation lines.
    pub const GLYPH_ERR: &str = "❌";
}
