//! # Knowledge Index
//!
//! Derived lookup structures over a loaded [`Workbook`]:
//!
//! - series descriptors keyed by series code (1000, 2000, ...)
//! - temper descriptors keyed by upper-case symbol, backed by built-in descriptions
//! - the mechanical-properties table
//! - a catalog of alloy names across all sheets
//!
//! Building is a pure function of the workbook and never fails: rows that do not parse are
//! skipped.
mod catalog;
mod designation;
mod mechanical;
pub mod schema;
mod series;
mod temper;

pub use catalog::{AlloyCatalog, CatalogEntry};
pub use designation::{alloy_label, designation_label, first_digit_run, first_four_digits};
pub use mechanical::AlloyRecord;
pub use series::SeriesDescriptor;
pub use temper::{builtin_description, TemperDescriptor, BUILTIN_TEMPERS};

use crate::workbook::{Table, Workbook};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq)]
pub struct KnowledgeIndex {
    workbook: Workbook,
    series: BTreeMap<u32, SeriesDescriptor>,
    tempers: BTreeMap<String, TemperDescriptor>,
    catalog: AlloyCatalog,
}

impl KnowledgeIndex {
    pub fn build(workbook: Workbook) -> Self {
        let series = workbook
            .sheet(schema::SERIES_SHEET)
            .map(series::scan_series)
            .unwrap_or_default();
        let tempers = workbook
            .sheet(schema::TEMPER_SHEET)
            .map(temper::scan_tempers)
            .unwrap_or_default();
        let catalog = AlloyCatalog::build(&workbook);
        tracing::debug!(
            sheets = workbook.len(),
            series = series.len(),
            tempers = tempers.len(),
            alloys = catalog.len(),
            mechanical = workbook.sheet(schema::MECHANICAL_SHEET).is_some(),
            "built knowledge index"
        );
        KnowledgeIndex {
            workbook,
            series,
            tempers,
            catalog,
        }
    }

    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    /// The `aluminum_handbook_table` sheet, if loaded.
    pub fn mechanical_table(&self) -> Option<&Table> {
        self.workbook.sheet(schema::MECHANICAL_SHEET)
    }

    /// Rows of the mechanical table; empty when the table is absent.
    pub fn alloy_records(&self) -> impl Iterator<Item = AlloyRecord<'_>> {
        self.mechanical_table()
            .into_iter()
            .flat_map(|table| table.rows().map(AlloyRecord::new))
    }

    pub fn series(&self, code: u32) -> Option<&SeriesDescriptor> {
        self.series.get(&code)
    }

    /// Series descriptors in ascending code order.
    pub fn series_descriptors(&self) -> impl Iterator<Item = &SeriesDescriptor> {
        self.series.values()
    }

    /// Temper descriptor from the worksheet, else from the built-in descriptions.
    pub fn temper(&self, symbol: &str) -> Option<TemperDescriptor> {
        let symbol = symbol.trim().to_uppercase();
        self.tempers
            .get(&symbol)
            .cloned()
            .or_else(|| TemperDescriptor::builtin(&symbol))
    }

    /// Temper descriptors read from the worksheet, ordered by symbol.
    pub fn temper_descriptors(&self) -> impl Iterator<Item = &TemperDescriptor> {
        self.tempers.values()
    }

    pub fn catalog(&self) -> &AlloyCatalog {
        &self.catalog
    }
}
