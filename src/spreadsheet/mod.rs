//! # Spreadsheet Reading Module
//!
//! Reads workbook packages into sparse sheets of cells. The container format is detected
//! from the leading signature bytes rather than the file extension, so uploaded buffers
//! without a name are handled the same way as files on disk.
pub(crate) mod cell;
pub(crate) mod criteria;
pub(crate) mod excel;
pub(crate) mod reference;
pub(crate) mod sheet;
pub(crate) mod xlsx;

use crate::error::RustyAlloyError;
use crate::helpers::reader::UnifiedReader;
use crate::spreadsheet::criteria::Criteria;
use crate::spreadsheet::sheet::Sheet;
use crate::spreadsheet::xlsx::XlsxSpreadsheet;
use thiserror::Error;

/// Signature of zip containers (Office Open XML)
const ZIP_SIGNATURE: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];
/// Signature of compound file containers (legacy .xls, encrypted workbooks)
const CFB_SIGNATURE: [u8; 4] = [0xD0, 0xCF, 0x11, 0xE0];

/// Errors raised while reading a workbook package
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    #[error("Missing part '{0}' in workbook package")]
    FileError(String),

    #[error("Workbook '{0}' contains no worksheets")]
    SpreadsheetEmptyError(String),

    #[error("Unsupported workbook format for '{0}': {1}")]
    UnsupportedFormatError(String, String),
}

/// A workbook format reader.
pub(crate) trait Spreadsheet {
    /// Returns the name of the data source
    fn name(&self) -> String;

    /// Returns the names of all worksheets in workbook order
    fn sheet_names(&self) -> Vec<String>;

    /// Reads the worksheets selected by the criteria, in workbook order
    fn read_sheets(&mut self, criteria: &Criteria) -> Result<Vec<Sheet>, RustyAlloyError>;
}

/// Opens the reader matching the container signature.
pub(crate) fn open_spreadsheet(mut reader: UnifiedReader, file_name: &str) -> Result<Box<dyn Spreadsheet>, RustyAlloyError> {
    let spreadsheet: Box<dyn Spreadsheet> = match reader.signature()? {
        ZIP_SIGNATURE => Box::new(XlsxSpreadsheet::open(reader, file_name)?),
        CFB_SIGNATURE => Err(SpreadsheetError::UnsupportedFormatError(
            file_name.to_owned(),
            "legacy .xls and password-protected workbooks are not supported, save as .xlsx".to_owned(),
        ))?,
        _ => Err(SpreadsheetError::UnsupportedFormatError(
            file_name.to_owned(),
            "not an Excel workbook".to_owned(),
        ))?,
    };
    Ok(spreadsheet)
}
