//! In-memory column-oriented table

use serde::{Deserialize, Serialize};

use super::{Column, Table};
use crate::error::{Error, Result};

/// An ordered set of named, equal-length columns.
///
/// # Example
///
/// ```
/// use geoweight_core::table::{DataFrame, Table};
///
/// let df = DataFrame::new()
///     .with_text("id", vec!["a".into(), "b".into()])?
///     .with_numeric("lon", vec![2.35, 13.40])?
///     .with_numeric("lat", vec![48.86, 52.52])?;
///
/// assert_eq!(df.n_rows(), 2);
/// assert_eq!(df.numeric_column("lat")?, &[48.86, 52.52]);
/// # Ok::<(), geoweight_core::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataFrame {
    columns: Vec<(String, Column)>,
}

impl DataFrame {
    /// Create an empty table
    pub fn new() -> Self {
        Self { columns: Vec::new() }
    }

    /// Add (or replace) a column, consuming and returning the table
    pub fn with_column(mut self, name: impl Into<String>, column: impl Into<Column>) -> Result<Self> {
        self.insert(name, column)?;
        Ok(self)
    }

    /// Add (or replace) a numeric column
    pub fn with_numeric(self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        self.with_column(name, Column::Numeric(values))
    }

    /// Add (or replace) a text column
    pub fn with_text(self, name: impl Into<String>, values: Vec<String>) -> Result<Self> {
        self.with_column(name, Column::Text(values))
    }

    /// Add a column, replacing any existing column of the same name.
    ///
    /// The column must have as many rows as the table already has, unless
    /// it is the only column after insertion.
    pub fn insert(&mut self, name: impl Into<String>, column: impl Into<Column>) -> Result<()> {
        let name = name.into();
        let column = column.into();

        let existing = self.position(&name);
        let others_len = self
            .columns
            .iter()
            .enumerate()
            .find(|(i, _)| Some(*i) != existing)
            .map(|(_, (_, c))| c.len());

        if let Some(expected) = others_len {
            Error::check_len("DataFrame column", expected, column.len())?;
        }

        match existing {
            Some(i) => self.columns[i].1 = column,
            None => self.columns.push((name, column)),
        }
        Ok(())
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.position(name).map(|i| &self.columns[i].1)
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|(n, _)| n == name)
    }

    fn require(&self, name: &str) -> Result<&Column> {
        self.column(name).ok_or_else(|| Error::MissingColumn {
            name: name.to_string(),
        })
    }
}

impl Table for DataFrame {
    fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |(_, c)| c.len())
    }

    fn numeric_column(&self, name: &str) -> Result<&[f64]> {
        self.require(name)?
            .as_numeric()
            .ok_or_else(|| Error::ColumnType {
                name: name.to_string(),
                expected: "numeric",
            })
    }

    fn string_column(&self, name: &str) -> Result<Vec<String>> {
        Ok(self.require(name)?.to_text())
    }
}
