use crate::workbook::Value;
use std::collections::HashSet;

static MISSING: Value = Value::Missing;

/// A named sheet of rows with unique, trimmed column labels.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Builds a table, normalizing the header and the rows.
    ///
    /// Labels are trimmed; blank labels become `Unnamed: <offset>`; repeated labels get a
    /// `.1`, `.2`, ... suffix. Rows are padded or cut to the header width and rows holding
    /// no value at all are dropped.
    pub fn new(name: &str, header: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let columns = normalize_header(header);
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Value::Missing);
                row
            })
            .filter(|row| row.iter().any(|value| !value.is_blank()))
            .collect();
        Table {
            name: name.to_owned(),
            columns,
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in sheet order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().enumerate().map(move |(index, values)| Row {
            table: self,
            index,
            values,
        })
    }
}

/// A borrowed view of one table row.
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    table: &'a Table,
    index: usize,
    values: &'a [Value],
}

impl<'a> Row<'a> {
    /// Position of the row among the table's data rows.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Value of the named column; missing when the column does not exist.
    pub fn get(&self, column: &str) -> &'a Value {
        self.table
            .column_index(column)
            .and_then(|index| self.values.get(index))
            .unwrap_or(&MISSING)
    }

    /// Column label and value pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> {
        self.table
            .columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// All non-blank values joined by a space, used for free-text matching.
    pub fn joined_text(&self) -> String {
        self.values
            .iter()
            .filter(|value| !value.is_blank())
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn normalize_header(header: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::<String>::new();
    header
        .into_iter()
        .enumerate()
        .map(|(offset, label)| {
            let label = label.trim();
            let base = if label.is_empty() {
                format!("Unnamed: {offset}")
            } else {
                label.to_owned()
            };
            let mut candidate = base.clone();
            let mut suffix = 1;
            while seen.contains(&candidate) {
                candidate = format!("{base}.{suffix}");
                suffix += 1;
            }
            seen.insert(candidate.clone());
            candidate
        })
        .collect()
}
