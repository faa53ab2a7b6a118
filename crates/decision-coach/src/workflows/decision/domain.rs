use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A loosely typed cell from the options table.
///
/// Table editors hand over whatever the user typed: numbers, free text, or
/// nothing at all. The cell keeps that shape until [`CellValue::coerce`] turns
/// it into a number at the scoring boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl CellValue {
    /// Numeric reading of the cell; unparseable, absent, or non-finite input is `0.0`.
    pub fn coerce(&self) -> f64 {
        let value = match self {
            CellValue::Number(value) => *value,
            CellValue::Text(raw) => raw.trim().parse::<f64>().unwrap_or(0.0),
            CellValue::Missing => 0.0,
        };

        if value.is_finite() {
            value
        } else {
            0.0
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.trim().is_empty() {
            Self::Missing
        } else {
            Self::Text(value.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CellValueVisitor)
    }
}

struct CellValueVisitor;

impl<'de> Visitor<'de> for CellValueVisitor {
    type Value = CellValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a string, a boolean, or null")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(CellValue::Number(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(CellValue::Number(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(CellValue::Number(value as f64))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(CellValue::Text(value.to_string()))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(CellValue::from(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        if value.trim().is_empty() {
            Ok(CellValue::Missing)
        } else {
            Ok(CellValue::Text(value))
        }
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(CellValue::Missing)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(CellValue::Missing)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CellValueVisitor)
    }
}

/// Raw row of the options table as the presentation layer submits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub cost: CellValue,
    #[serde(default, alias = "valueScore")]
    pub value_score: CellValue,
    #[serde(default)]
    pub joy: CellValue,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
}

impl OptionRecord {
    pub fn new(
        name: impl Into<String>,
        cost: impl Into<CellValue>,
        value_score: impl Into<CellValue>,
        joy: impl Into<CellValue>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cost: cost.into(),
            value_score: value_score.into(),
            joy: joy.into(),
            category: category.into(),
        }
    }

    /// Rows without a name are editor leftovers and never take part in a run.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Qualitative answer to a heart-check prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    #[serde(alias = "yes", alias = "YES")]
    Yes,
    #[serde(alias = "unsure", alias = "UNSURE")]
    Unsure,
    #[serde(alias = "no", alias = "NO")]
    No,
}

impl Answer {
    pub const fn weight(self) -> f32 {
        match self {
            Self::Yes => 1.0,
            Self::Unsure => 0.5,
            Self::No => 0.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::Unsure => "Unsure",
            Self::No => "No",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Some(Self::Yes),
            "unsure" | "maybe" | "u" => Some(Self::Unsure),
            "no" | "n" => Some(Self::No),
            _ => None,
        }
    }
}

/// Named axis of the heart check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    GodAuthored,
    Want,
    FutureGood,
    FinancialSense,
}

impl Dimension {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::GodAuthored,
            Self::Want,
            Self::FutureGood,
            Self::FinancialSense,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::GodAuthored => "God authored or affirmed this desire",
            Self::Want => "You genuinely want this",
            Self::FutureGood => "Good for future generations",
            Self::FinancialSense => "The numbers make sense",
        }
    }
}

/// One answer per [`Dimension`], as collected from the heart-check prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartCheckAnswers {
    pub god_authored: Answer,
    pub want: Answer,
    pub future_good: Answer,
    pub financial_sense: Answer,
}

impl HeartCheckAnswers {
    pub fn uniform(answer: Answer) -> Self {
        Self {
            god_authored: answer,
            want: answer,
            future_good: answer,
            financial_sense: answer,
        }
    }

    pub fn answer(&self, dimension: Dimension) -> Answer {
        match dimension {
            Dimension::GodAuthored => self.god_authored,
            Dimension::Want => self.want,
            Dimension::FutureGood => self.future_good,
            Dimension::FinancialSense => self.financial_sense,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Answer)> + '_ {
        Dimension::ordered()
            .into_iter()
            .map(move |dimension| (dimension, self.answer(dimension)))
    }

    /// The heart itself is off when the desire is not affirmed or does not serve the future.
    pub fn heart_misaligned(&self) -> bool {
        self.god_authored == Answer::No || self.future_good == Answer::No
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_parses_trimmed_text_and_defaults_garbage_to_zero() {
        assert_eq!(CellValue::Text(" 250 ".to_string()).coerce(), 250.0);
        assert_eq!(CellValue::Text("1e2".to_string()).coerce(), 100.0);
        assert_eq!(CellValue::Text("lots".to_string()).coerce(), 0.0);
        assert_eq!(CellValue::Text("inf".to_string()).coerce(), 0.0);
        assert_eq!(CellValue::Number(f64::NAN).coerce(), 0.0);
        assert_eq!(CellValue::Missing.coerce(), 0.0);
    }

    #[test]
    fn option_records_accept_loose_json_cells() {
        let record: OptionRecord = serde_json::from_value(serde_json::json!({
            "name": "Jeans",
            "cost": "250",
            "valueScore": 8,
            "joy": null,
            "category": null
        }))
        .expect("record deserializes");

        assert_eq!(record.cost, CellValue::Text("250".to_string()));
        assert_eq!(record.value_score, CellValue::Number(8.0));
        assert!(record.joy.is_missing());
        assert!(record.category.is_empty());
    }

    #[test]
    fn blank_names_are_detected_after_trimming() {
        let record = OptionRecord::new("   ", 10.0, 1.0, 1.0, "");
        assert!(record.is_blank());
    }

    #[test]
    fn answers_deserialize_from_labels_and_lowercase() {
        let answers: HeartCheckAnswers = serde_json::from_value(serde_json::json!({
            "god_authored": "Yes",
            "want": "unsure",
            "future_good": "No",
            "financial_sense": "YES"
        }))
        .expect("answers deserialize");

        assert_eq!(answers.want, Answer::Unsure);
        assert_eq!(answers.future_good, Answer::No);
        assert!(answers.heart_misaligned());
    }
}
