use std::io;

use csv::ReaderBuilder;

use crate::domain::common::entities::app_errors::CoreError;

/// Rectangular table of raw string cells, as read from a CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, CoreError> {
        if let Some((line, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(CoreError::SchemaError(format!(
                "row {} has {} cells, expected {}",
                line + 1,
                row.len(),
                headers.len()
            )));
        }

        Ok(Self { headers, rows })
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, CoreError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| CoreError::SchemaError(format!("unreadable CSV header: {e}")))?
            .iter()
            .map(str::to_string)
            .collect();

        let rows = reader
            .records()
            .map(|record| {
                record
                    .map(|record| record.iter().map(str::to_string).collect())
                    .map_err(|e| CoreError::SchemaError(format!("malformed CSV row: {e}")))
            })
            .collect::<Result<Vec<Vec<String>>, CoreError>>()?;

        Self::new(headers, rows)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }

    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|header| header == name)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }
}
