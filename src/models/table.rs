use std::collections::{BTreeSet, HashMap};

use crate::error::{PipelineError, PipelineResult};

/// A delimited table held in memory as text: one header row, then data rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Column names in file order
    pub headers: Vec<String>,
    /// Each data row, one string per column
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names as a set, ignoring order
    pub fn column_set(&self) -> BTreeSet<&str> {
        self.headers.iter().map(String::as_str).collect()
    }

    /// Position of every column in `order` within this table's headers.
    ///
    /// Returns `None` when a name in `order` is not a column here.
    pub fn positions_of(&self, order: &[String]) -> Option<Vec<usize>> {
        order
            .iter()
            .map(|name| self.headers.iter().position(|h| h == name))
            .collect()
    }

    /// Take ownership of the rows, rearranged so column `i` comes from `positions[i]`
    pub fn into_rows_reordered(self, positions: &[usize]) -> Vec<Vec<String>> {
        let identity = positions.iter().enumerate().all(|(i, &p)| i == p)
            && positions.len() == self.headers.len();
        if identity {
            return self.rows;
        }

        self.rows
            .into_iter()
            .map(|row| {
                positions
                    .iter()
                    .map(|&p| row.get(p).cloned().unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

/// Name to position lookup over a table header
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    pub fn new(headers: &[String]) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self { positions }
    }

    /// Position of a column, or `MissingColumn` if absent
    pub fn require(&self, name: &str) -> PipelineResult<usize> {
        self.positions
            .get(name)
            .copied()
            .ok_or_else(|| PipelineError::MissingColumn(name.to_string()))
    }
}
