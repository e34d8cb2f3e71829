//! # Workbook Data Model
//!
//! The loaded workbook: an ordered list of named tables of scalar values. A workbook is
//! built in one piece by [`Workbook::load`]; any failure aborts the whole load so callers
//! never see a partially read workbook.
mod table;
mod value;

pub use crate::spreadsheet::criteria::Criteria;
pub use table::{Row, Table};
pub use value::Value;

use crate::error::{ResultMessage, RustyAlloyError};
use crate::helpers::reader::UnifiedReader;
use crate::spreadsheet::open_spreadsheet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("No worksheet of '{0}' matches the sheet selection")]
    NoSheetSelectedError(String),
}

/// Where a workbook comes from.
#[derive(Clone, Debug)]
pub enum DataSource {
    /// Local path or `file://` URL
    Path(String),
    /// In-memory workbook, e.g. an uploaded file
    Bytes { name: String, bytes: Vec<u8> },
}

impl DataSource {
    pub fn path(location: impl Into<String>) -> Self {
        DataSource::Path(location.into())
    }

    pub fn bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        DataSource::Bytes {
            name: name.into(),
            bytes,
        }
    }

    /// Name of the source for messages
    pub fn name(&self) -> &str {
        match self {
            DataSource::Path(location) => location,
            DataSource::Bytes { name, .. } => name,
        }
    }
}

/// Ordered mapping of sheet name to table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<Table>,
}

impl Workbook {
    /// Wraps already-built tables, keeping their order.
    pub fn new(sheets: Vec<Table>) -> Self {
        Workbook { sheets }
    }

    /// Reads every selected worksheet of the source into a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be opened, is not an Office Open XML workbook,
    /// if any selected worksheet cannot be parsed, or if the criteria select no worksheet.
    pub fn load(source: &DataSource, criteria: &Criteria) -> Result<Workbook, RustyAlloyError> {
        let reader = match source {
            DataSource::Path(location) => UnifiedReader::open(location),
            DataSource::Bytes { name, bytes } => UnifiedReader::from_bytes(name, bytes.to_owned()),
        }
        .with_prefix(&format!("Open workbook '{}'", source.name()))?;

        let mut spreadsheet = open_spreadsheet(reader, source.name())
            .with_prefix(&format!("Read workbook '{}'", source.name()))?;
        let sheets = spreadsheet
            .read_sheets(criteria)
            .with_prefix(&format!("Read worksheets of '{}'", spreadsheet.name()))?;
        if sheets.is_empty() {
            tracing::debug!(available = ?spreadsheet.sheet_names(), "criteria selected no sheet");
            Err(WorkbookError::NoSheetSelectedError(source.name().to_owned()))?;
        }

        let tables: Vec<Table> = sheets.into_iter().map(|sheet| sheet.into_table()).collect();
        for table in &tables {
            tracing::debug!(
                sheet = table.name(),
                rows = table.len(),
                columns = table.columns().len(),
                "loaded table"
            );
        }
        Ok(Workbook::new(tables))
    }

    /// Table with exactly this sheet name.
    pub fn sheet(&self, name: &str) -> Option<&Table> {
        self.sheets.iter().find(|table| table.name() == name)
    }

    /// Tables in workbook order.
    pub fn sheets(&self) -> impl Iterator<Item = &Table> {
        self.sheets.iter()
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(Table::name).collect()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
