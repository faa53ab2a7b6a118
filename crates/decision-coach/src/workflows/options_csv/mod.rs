mod parser;

use crate::workflows::decision::domain::OptionRecord;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum OptionImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn(&'static str),
}

impl std::fmt::Display for OptionImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionImportError::Io(err) => write!(f, "failed to read options sheet: {}", err),
            OptionImportError::Csv(err) => write!(f, "invalid options CSV data: {}", err),
            OptionImportError::MissingColumn(column) => {
                write!(f, "options CSV is missing the '{}' column", column)
            }
        }
    }
}

impl std::error::Error for OptionImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionImportError::Io(err) => Some(err),
            OptionImportError::Csv(err) => Some(err),
            OptionImportError::MissingColumn(_) => None,
        }
    }
}

impl From<std::io::Error> for OptionImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for OptionImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads the options table from a spreadsheet export with
/// `Name, Cost, ValueScore, Joy, Category` columns.
pub struct OptionSheetImporter;

impl OptionSheetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<OptionRecord>, OptionImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<OptionRecord>, OptionImportError> {
        parser::parse_records(reader)
    }
}
