use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// TableError – fatal data-layer failures
// ---------------------------------------------------------------------------

/// Errors raised while loading a table or extracting columns from it.
/// All of these abort the run; nothing is recovered downstream.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("unsupported file type: .{0}")]
    UnsupportedFileType(String),

    #[error("{file}: missing column '{column}'")]
    MissingColumn { file: String, column: String },

    #[error("{file}: column '{column}' row {row}: '{value}' is not a number")]
    NonNumeric {
        file: String,
        column: String,
        row: usize,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Table – one loaded input file
// ---------------------------------------------------------------------------

/// A loaded tabular file with name-to-index column resolution performed
/// once at construction. Immutable for the rest of the run.
#[derive(Debug, Clone)]
pub struct Table {
    /// Source path, kept for error messages.
    path: PathBuf,
    /// Base filename with the extension stripped; used as the legend label.
    label: String,
    /// Header row, in file order.
    headers: Vec<String>,
    /// column name → position in `headers` / `columns`.
    index: HashMap<String, usize>,
    /// Column-major cells: `columns[i]` holds every row's value for header i.
    columns: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from a header row and column-major cells.
    pub fn new(path: PathBuf, headers: Vec<String>, columns: Vec<Vec<String>>) -> Self {
        let label = stem_label(&path);
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), i))
            .collect();
        Table {
            path,
            label,
            headers,
            index,
            columns,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&[String], TableError> {
        self.index
            .get(name)
            .map(|&i| self.columns[i].as_slice())
            .ok_or_else(|| TableError::MissingColumn {
                file: self.path.display().to_string(),
                column: name.to_string(),
            })
    }

    /// Look up a column by name and parse every cell as `f64`.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, TableError> {
        self.column(name)?
            .iter()
            .enumerate()
            .map(|(row, value)| {
                value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| TableError::NonNumeric {
                        file: self.path.display().to_string(),
                        column: name.to_string(),
                        row,
                        value: value.clone(),
                    })
            })
            .collect()
    }

    /// Extract the (x, y) point series for line/bar/scatter rendering.
    pub fn xy_series(&self, x_column: &str, y_column: &str) -> Result<Series, TableError> {
        let xs = self.numeric_column(x_column)?;
        let ys = self.numeric_column(y_column)?;
        Ok(Series {
            label: self.label.clone(),
            points: xs.into_iter().zip(ys).collect(),
        })
    }

    /// Extract wedge labels (x column, verbatim) and values (y column,
    /// numeric) for pie rendering.
    pub fn wedge_series(&self, x_column: &str, y_column: &str) -> Result<WedgeSeries, TableError> {
        let labels = self.column(x_column)?.to_vec();
        let values = self.numeric_column(y_column)?;
        Ok(WedgeSeries {
            label: self.label.clone(),
            labels,
            values,
        })
    }
}

/// Base filename with the extension stripped.
fn stem_label(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("data")
        .to_string()
}

// ---------------------------------------------------------------------------
// Extracted series
// ---------------------------------------------------------------------------

/// One input file's (x, y) data, plotted as one visual trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// One input file's pie data: wedge labels and wedge values.
#[derive(Debug, Clone, PartialEq)]
pub struct WedgeSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}
