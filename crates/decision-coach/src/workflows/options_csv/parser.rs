use super::OptionImportError;
use crate::workflows::decision::domain::{CellValue, OptionRecord};
use csv::StringRecord;
use std::io::Read;

struct ColumnMap {
    name: usize,
    cost: usize,
    value_score: usize,
    joy: usize,
    category: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, OptionImportError> {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|header| normalize_header(header) == normalize_header(wanted))
        };
        let require = |wanted: &'static str| find(wanted).ok_or(OptionImportError::MissingColumn(wanted));

        Ok(Self {
            name: require("Name")?,
            cost: require("Cost")?,
            value_score: require("ValueScore")?,
            joy: require("Joy")?,
            category: find("Category"),
        })
    }
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<OptionRecord>, OptionImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(csv_reader.headers()?)?;
    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        let text = |index: usize| row.get(index).unwrap_or_default();

        records.push(OptionRecord {
            name: text(columns.name).to_string(),
            cost: CellValue::from(text(columns.cost)),
            value_score: CellValue::from(text(columns.value_score)),
            joy: CellValue::from(text(columns.joy)),
            category: columns
                .category
                .map(|index| text(index).to_string())
                .unwrap_or_default(),
        });
    }

    Ok(records)
}

/// Header comparison ignores case, spaces, and stray BOM or zero-width characters.
fn normalize_header(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{feff}' && *c != '\u{200b}' && *c != '_')
        .collect::<String>()
        .to_ascii_lowercase()
}
