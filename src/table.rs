//! Sutra table reading.
//!
//! The table is a CSV with a header row and fields
//! `adhyaya, pada, sutra_number, sutra_text, adhikarana`. The three numeric
//! columns are kept as strings; identifiers are formatting concerns, not
//! arithmetic ones.

use std::path::Path;

use serde::Deserialize;

use crate::constants::table::ID_SEPARATOR;
use crate::errors::OutlineError;
use crate::types::{AdhikaranaName, SutraId};

/// One row of the sutra table.
#[derive(Clone, Debug, Deserialize)]
pub struct SutraRow {
    /// Major division of the corpus.
    pub adhyaya: String,
    /// Sub-division within an adhyaya.
    pub pada: String,
    /// Sequence number within a pada.
    pub sutra_number: String,
    /// Sutra text, carried through but unused by grouping and validation.
    pub sutra_text: String,
    /// Adhikarana label assigned to this sutra.
    pub adhikarana: AdhikaranaName,
}

impl SutraRow {
    /// Dotted identifier for this row, e.g. `1.1.12`.
    pub fn sutra_id(&self) -> SutraId {
        [
            self.adhyaya.as_str(),
            self.pada.as_str(),
            self.sutra_number.as_str(),
        ]
        .join(ID_SEPARATOR)
    }
}

/// Read every row of the table at `path`, in file order.
///
/// The header row is consumed by the reader; a leading UTF-8 BOM (the corpus
/// file is exported with one) is stripped by the CSV reader before the header
/// is matched.
pub fn read_table(path: &Path) -> Result<Vec<SutraRow>, OutlineError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn row(adhyaya: &str, pada: &str, number: &str) -> SutraRow {
        SutraRow {
            adhyaya: adhyaya.to_string(),
            pada: pada.to_string(),
            sutra_number: number.to_string(),
            sutra_text: String::new(),
            adhikarana: String::new(),
        }
    }

    #[test]
    fn sutra_id_joins_divisions_with_dots() {
        assert_eq!(row("1", "2", "33").sutra_id(), "1.2.33");
    }

    #[test]
    fn read_table_skips_header_and_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bs.csv");
        fs::write(
            &path,
            "adhyaya,pada,sutra_number,sutra_text,adhikarana\n\
             1,1,1,text one,A\n\
             1,1,2,text two,B\n",
        )
        .unwrap();

        let rows = read_table(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sutra_id(), "1.1.1");
        assert_eq!(rows[0].adhikarana, "A");
        assert_eq!(rows[1].sutra_id(), "1.1.2");
        assert_eq!(rows[1].adhikarana, "B");
    }

    #[test]
    fn read_table_tolerates_leading_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bs.csv");
        fs::write(
            &path,
            "\u{feff}adhyaya,pada,sutra_number,sutra_text,adhikarana\n1,1,1,t,A\n",
        )
        .unwrap();

        let rows = read_table(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].adhyaya, "1");
    }

    #[test]
    fn read_table_reports_missing_file_as_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.csv");
        assert!(read_table(&missing).is_err());
    }
}
