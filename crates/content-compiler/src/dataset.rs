//! Taxonomy dataset loading.

use crate::error::CompilerError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// One taxonomy entry from the dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyRecord {
    /// Taxonomy code documents reference from their frontmatter.
    pub code: String,
    /// Display name for the taxco report.
    pub name: String,
}

/// The taxonomy dataset seeding a compiler run.
#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<TaxonomyRecord>,
    codes: BTreeSet<String>,
}

impl Dataset {
    /// Load the dataset from a JSON array of records.
    ///
    /// A missing file is a fatal precondition: the run stops before any
    /// report is produced.
    pub fn load(path: &Path) -> Result<Self, CompilerError> {
        if !path.exists() {
            return Err(CompilerError::DatasetMissing(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path).map_err(|e| CompilerError::io(path.to_path_buf(), e))?;
        let records: Vec<TaxonomyRecord> =
            serde_json::from_str(&raw).map_err(|source| CompilerError::DatasetParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<TaxonomyRecord>) -> Self {
        let codes = records.iter().map(|r| r.code.clone()).collect();
        Self { records, codes }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn records(&self) -> &[TaxonomyRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_code() {
        let dataset = Dataset::from_records(vec![TaxonomyRecord {
            code: "ib-19".to_string(),
            name: "Beheerproces".to_string(),
        }]);
        assert!(dataset.contains("ib-19"));
        assert!(!dataset.contains("ib-99"));
    }

    #[test]
    fn missing_file_is_a_precondition_failure() {
        let err = Dataset::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CompilerError::DatasetMissing(_)));
    }
}
