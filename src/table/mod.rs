//! Tabular input handling
//!
//! A [`Table`] is a header row plus string cells, loaded from and written
//! back to CSV. Column selection is by exact header name and is validated
//! up front, so a wrong column name surfaces as [`TableError::MissingColumn`]
//! rather than an index error halfway through a run.

pub mod csv;

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while reading or querying a table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Input has no header row")]
    Empty,

    #[error("Unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },

    #[error("Line {line}: expected {expected} fields, found {found}")]
    TooManyFields {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Column '{column}' not found in input data. Available columns: {}", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
}

/// In-memory CSV table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, padding short rows with empty cells
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                if row.len() < width {
                    row.resize(width, String::new());
                }
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Parse CSV text. The first record is the header row.
    pub fn from_csv_str(input: &str) -> Result<Self, TableError> {
        let mut records = csv::parse(input)?.into_iter();
        let header = records.next().ok_or(TableError::Empty)?;
        let headers = dedupe_headers(header.fields);
        let width = headers.len();

        let mut rows = Vec::new();
        for record in records {
            if record.fields.len() > width {
                return Err(TableError::TooManyFields {
                    line: record.line,
                    expected: width,
                    found: record.fields.len(),
                });
            }
            rows.push(record.fields);
        }

        Ok(Self::new(headers, rows))
    }

    /// Render the table as CSV, header first
    pub fn to_csv_string(&self) -> String {
        let mut out = String::new();
        csv::write_record(&mut out, &self.headers);
        for row in &self.rows {
            csv::write_record(&mut out, row);
        }
        out
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Index of a column that must exist
    pub fn require_column(&self, name: &str) -> Result<usize, TableError> {
        self.column_index(name)
            .ok_or_else(|| TableError::MissingColumn {
                column: name.to_string(),
                available: self.headers.clone(),
            })
    }

    /// Cell value by row and column index
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Replace the named column's values, or append it as a new column.
    ///
    /// `values` must have one entry per row.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
    }

    /// First `n` rows, for previews
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }
}

/// Disambiguate repeated headers as `name`, `name.1`, `name.2`, ...
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(headers.len());
    for header in headers {
        let mut candidate = header.clone();
        let mut n = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", header, n);
            n += 1;
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out
}
