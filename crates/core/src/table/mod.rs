//! Tabular data access
//!
//! The aggregators only ever read whole columns by name, so the table
//! collaborator is reduced to the [`Table`] trait. [`DataFrame`] is the
//! in-memory implementation used for results and tests; hosts with their
//! own column store implement [`Table`] directly.

mod frame;

pub use frame::DataFrame;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Column-wise read access to a table.
pub trait Table {
    /// Number of rows
    fn n_rows(&self) -> usize;

    /// Borrow a numeric column by name.
    ///
    /// Fails with [`Error::MissingColumn`](crate::Error::MissingColumn) when
    /// the column does not exist and [`Error::ColumnType`](crate::Error::ColumnType)
    /// when it is not numeric.
    fn numeric_column(&self, name: &str) -> Result<&[f64]>;

    /// Read a column as text.
    ///
    /// Numeric columns are converted value by value, so an identifier column
    /// may hold numbers.
    fn string_column(&self, name: &str) -> Result<Vec<String>>;
}

/// A single named column of a [`DataFrame`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric values, if this is a numeric column
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Column::Numeric(v) => Some(v),
            Column::Text(_) => None,
        }
    }

    /// Text values, if this is a text column
    pub fn as_text(&self) -> Option<&[String]> {
        match self {
            Column::Text(v) => Some(v),
            Column::Numeric(_) => None,
        }
    }

    /// Values rendered as text (numbers use their shortest round-trip form)
    pub fn to_text(&self) -> Vec<String> {
        match self {
            Column::Text(v) => v.clone(),
            Column::Numeric(v) => v.iter().map(|x| x.to_string()).collect(),
        }
    }
}

impl From<Vec<f64>> for Column {
    fn from(v: Vec<f64>) -> Self {
        Column::Numeric(v)
    }
}

impl From<Vec<String>> for Column {
    fn from(v: Vec<String>) -> Self {
        Column::Text(v)
    }
}

impl From<Vec<&str>> for Column {
    fn from(v: Vec<&str>) -> Self {
        Column::Text(v.into_iter().map(String::from).collect())
    }
}
