use super::records::ScheduleRecord;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleImportError {
    #[error("failed to read asset schedule: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid asset schedule CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads supplemental asset schedules exported as
/// `Category,Description,Value,Secured Creditor,Secured Amount`.
pub struct ScheduleImporter;

impl ScheduleImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ScheduleRecord>, ScheduleImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ScheduleRecord>, ScheduleImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for row in csv_reader.deserialize::<ScheduleRow>() {
            records.push(row?.into_record());
        }

        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct ScheduleRow {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Value", default, deserialize_with = "empty_string_as_none")]
    value: Option<String>,
    #[serde(
        rename = "Secured Creditor",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    secured_creditor: Option<String>,
    #[serde(
        rename = "Secured Amount",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    secured_amount: Option<String>,
}

impl ScheduleRow {
    fn into_record(self) -> ScheduleRecord {
        ScheduleRecord {
            category: self.category,
            description: self.description,
            value: self.value.map(Value::String),
            secured_creditor: self.secured_creditor,
            secured_amount: self.secured_amount.map(Value::String),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_with_blank_optional_columns() {
        let csv = "Category,Description,Value,Secured Creditor,Secured Amount\n\
real_property,123 Main St,\"500,000\",First Bank,200000\n\
intangible_property, Savings ,50000,,\n";

        let records = ScheduleImporter::from_reader(csv.as_bytes()).expect("schedule parses");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].value, Some(Value::String("500,000".to_string())));
        assert_eq!(records[0].secured_creditor.as_deref(), Some("First Bank"));
        assert_eq!(records[1].description, "Savings");
        assert!(records[1].secured_creditor.is_none());
        assert!(records[1].secured_amount.is_none());
    }

    #[test]
    fn missing_category_column_is_a_csv_error() {
        let csv = "Description,Value\nHouse,1\n";
        let err = ScheduleImporter::from_reader(csv.as_bytes()).expect_err("header missing");
        assert!(matches!(err, ScheduleImportError::Csv(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ScheduleImporter::from_path("/nonexistent/schedule.csv").expect_err("no file");
        assert!(matches!(err, ScheduleImportError::Io(_)));
    }
}
