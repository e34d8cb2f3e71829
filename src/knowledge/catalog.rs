use crate::knowledge::schema::ALLOY_COLUMN_MARKERS;
use crate::workbook::{Table, Workbook};
use std::collections::BTreeMap;

/// Where an alloy name occurs: sheet and data row index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub sheet: String,
    pub row: usize,
}

/// Every alloy name found in the alloy-name column of any sheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlloyCatalog {
    entries: BTreeMap<String, Vec<CatalogEntry>>,
}

impl AlloyCatalog {
    pub(crate) fn build(workbook: &Workbook) -> Self {
        let mut entries: BTreeMap<String, Vec<CatalogEntry>> = BTreeMap::new();
        for table in workbook.sheets() {
            let Some(column) = alloy_column(table) else {
                continue;
            };
            for row in table.rows() {
                let name = row.get(column).to_string().trim().to_owned();
                if name.is_empty() {
                    continue;
                }
                entries.entry(name).or_default().push(CatalogEntry {
                    sheet: table.name().to_owned(),
                    row: row.index(),
                });
            }
        }
        AlloyCatalog { entries }
    }

    /// Occurrences of a name in load order.
    pub fn get(&self, name: &str) -> Option<&[CatalogEntry]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Names in ascending order with their occurrences.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CatalogEntry])> {
        self.entries
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// First column whose label mentions an alloy marker, case-insensitively.
fn alloy_column(table: &Table) -> Option<&str> {
    table
        .columns()
        .iter()
        .find(|label| {
            let label = label.to_lowercase();
            ALLOY_COLUMN_MARKERS.iter().any(|marker| label.contains(marker))
        })
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::Value;

    #[test]
    fn collects_names_across_sheets() {
        let mechanical = Table::new(
            "aluminum_handbook_table",
            vec!["ALLOY".to_owned(), "Temper".to_owned()],
            vec![
                vec![Value::Number(6061.0), Value::from("T6")],
                vec![Value::Number(6061.0), Value::from("O")],
                vec![Value::Missing, Value::from("T4")],
            ],
        );
        let usage = Table::new(
            "用途",
            vec!["用途".to_owned(), "材料名".to_owned()],
            vec![vec![Value::from("船舶"), Value::from("5083")]],
        );
        let notes = Table::new("notes", vec!["memo".to_owned()], vec![vec![Value::from("6061")]]);

        let catalog = AlloyCatalog::build(&Workbook::new(vec![mechanical, usage, notes]));
        assert_eq!(catalog.len(), 2);
        let rows: Vec<usize> = catalog.get("6061").unwrap().iter().map(|entry| entry.row).collect();
        assert_eq!(rows, vec![0, 1]);
        assert_eq!(catalog.get("5083").unwrap()[0].sheet, "用途");
        assert_eq!(catalog.iter().map(|(name, _)| name).collect::<Vec<_>>(), vec!["5083", "6061"]);
    }
}
