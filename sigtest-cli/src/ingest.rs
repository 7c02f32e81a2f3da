//! CSV Ingestion and Column Extraction
//!
//! Reads a delimited file into rows of string fields and coerces one 0-based
//! column to finite numbers. Cells that fail to parse are dropped, but never
//! silently: the extraction carries accepted and rejected counts so callers
//! can surface the drop rate.

use std::path::Path;
use thiserror::Error;

/// Errors from CSV loading and column extraction
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path as given on the command line.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not parseable as delimited records.
    #[error("failed to parse {path}: {source}")]
    Csv {
        /// Path as given on the command line.
        path: String,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// The file parsed but holds zero rows.
    #[error("{path} contains no rows")]
    EmptyFile {
        /// Path as given on the command line.
        path: String,
    },

    /// The requested column index exceeds every row in the file.
    #[error("column {column} out of range: widest row has {width} columns")]
    ColumnOutOfRange {
        /// Requested 0-based column.
        column: usize,
        /// Width of the widest row.
        width: usize,
    },
}

/// A parsed delimited file: rows of string fields, no header interpretation.
#[derive(Debug, Clone)]
pub struct CsvTable {
    rows: Vec<csv::StringRecord>,
}

/// One numeric column pulled out of a [`CsvTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnExtraction {
    /// Cells that parsed as finite f64, in row order.
    pub values: Vec<f64>,
    /// Count of parsed cells (equals `values.len()`).
    pub accepted: usize,
    /// Cells dropped: missing from a short row, non-numeric, or non-finite.
    pub rejected: usize,
}

impl CsvTable {
    /// Read a delimited file. Every row is data; ragged rows are allowed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let file = std::fs::File::open(path).map_err(|source| IngestError::Io {
            path: display.clone(),
            source,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| IngestError::Csv {
                path: display.clone(),
                source,
            })?;
            rows.push(record);
        }

        if rows.is_empty() {
            return Err(IngestError::EmptyFile { path: display });
        }

        Ok(Self { rows })
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    /// Extract one 0-based column as finite numbers, counting drops.
    ///
    /// A column index beyond the widest row is an error; a row merely too
    /// short for the column counts as one rejected cell.
    pub fn extract_column(&self, column: usize) -> Result<ColumnExtraction, IngestError> {
        let width = self.width();
        if column >= width {
            return Err(IngestError::ColumnOutOfRange { column, width });
        }

        let mut values = Vec::new();
        let mut rejected = 0usize;

        for row in &self.rows {
            match row.get(column) {
                Some(cell) => match cell.trim().parse::<f64>() {
                    Ok(v) if v.is_finite() => values.push(v),
                    _ => rejected += 1,
                },
                None => rejected += 1,
            }
        }

        let accepted = values.len();
        Ok(ColumnExtraction {
            values,
            accepted,
            rejected,
        })
    }
}
