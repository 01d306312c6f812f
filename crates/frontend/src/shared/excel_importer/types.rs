use serde_json::Value;
use thiserror::Error;

/// One row of an imported table: `(column name, cell value)` pairs in the
/// order the columns appear in the source file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabularRow {
    pub cells: Vec<(String, Value)>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("file is empty")]
    Empty,
    #[error("malformed file: {0}")]
    Malformed(String),
}

impl TabularRow {
    pub fn new(cells: Vec<(String, Value)>) -> Self {
        Self { cells }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.cells.iter().map(|(_, value)| value)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Build rows from raw data (array of arrays), the first row being the headers
    ///
    /// Blank headers become `column_{n}` (1-based); rows with no cells at all
    /// are dropped.
    pub fn from_raw(raw_data: Vec<Vec<Value>>) -> Result<Vec<Self>, ParseError> {
        let mut iter = raw_data.into_iter();
        let headers: Vec<String> = iter
            .next()
            .ok_or(ParseError::Empty)?
            .iter()
            .enumerate()
            .map(|(idx, h)| {
                let title = crate::shared::text::normalize(&crate::shared::text::cell_text(h));
                if title.is_empty() {
                    format!("column_{}", idx + 1)
                } else {
                    title
                }
            })
            .collect();

        let rows = iter
            .filter(|row| !row.is_empty())
            .map(|row| {
                let cells = row
                    .into_iter()
                    .enumerate()
                    .map(|(idx, value)| {
                        let name = headers
                            .get(idx)
                            .cloned()
                            .unwrap_or_else(|| format!("column_{}", idx + 1));
                        (name, value)
                    })
                    .collect();
                TabularRow { cells }
            })
            .collect();

        Ok(rows)
    }
}
