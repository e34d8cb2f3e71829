use crate::knowledge::designation::{first_four_digits, series_code};
use crate::knowledge::schema::{column, FAMILY_MARKER};
use crate::workbook::{Row, Table, Value};
use std::collections::BTreeMap;

/// Characteristics of one alloy family, e.g. the 6000 series.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesDescriptor {
    pub code: u32,
    pub name: String,
    pub overview: String,
    pub features: String,
}

impl SeriesDescriptor {
    /// Reads a descriptor from a series-sheet row.
    ///
    /// The family name must be text holding the family marker and a four digit number;
    /// any other row yields `None`.
    pub(crate) fn from_row(row: &Row) -> Option<SeriesDescriptor> {
        let Value::Text(family) = row.get(column::FAMILY) else {
            return None;
        };
        if !family.contains(FAMILY_MARKER) {
            return None;
        }
        let number = first_four_digits(family)?.parse::<u64>().ok()?;
        let code = series_code(number)?;
        Some(SeriesDescriptor {
            code,
            name: family.trim().replace(['\r', '\n'], " "),
            overview: row.get(column::OVERVIEW).to_string(),
            features: row.get(column::FEATURES).to_string(),
        })
    }

    /// Name, overview and features in one string for keyword matching.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.overview, self.features)
    }
}

/// Scans the series sheet; a later row with the same code replaces an earlier one.
pub(crate) fn scan_series(table: &Table) -> BTreeMap<u32, SeriesDescriptor> {
    let mut series = BTreeMap::new();
    for row in table.rows() {
        match SeriesDescriptor::from_row(&row) {
            Some(descriptor) => {
                series.insert(descriptor.code, descriptor);
            }
            None => tracing::debug!(sheet = table.name(), row = row.index(), "skip series row"),
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_table(rows: Vec<Vec<Value>>) -> Table {
        Table::new(
            "アルミニウム合金の特性",
            vec![column::FAMILY.to_owned(), column::OVERVIEW.to_owned(), column::FEATURES.to_owned()],
            rows,
        )
    }

    #[test]
    fn scans_family_rows() {
        let table = series_table(vec![
            vec![Value::from("6000系\n(Al-Mg-Si系)"), Value::from("押出材"), Value::from("耐食性良好")],
            vec![Value::from("1000系"), Value::from("純アルミ"), Value::Missing],
        ]);
        let series = scan_series(&table);
        assert_eq!(series.keys().copied().collect::<Vec<_>>(), vec![1000, 6000]);
        assert_eq!(series[&6000].name, "6000系 (Al-Mg-Si系)");
        assert_eq!(series[&1000].features, "");
    }

    #[test]
    fn skips_rows_without_family_marker_or_number() {
        let table = series_table(vec![
            vec![Value::from("6000"), Value::from("marker missing"), Value::Missing],
            vec![Value::from("その他系"), Value::from("no number"), Value::Missing],
            vec![Value::Number(7000.0), Value::from("not text"), Value::Missing],
            vec![Value::from("0999系"), Value::from("below a thousand"), Value::Missing],
        ]);
        assert!(scan_series(&table).is_empty());
    }

    #[test]
    fn last_row_wins() {
        let table = series_table(vec![
            vec![Value::from("5000系"), Value::from("first"), Value::Missing],
            vec![Value::from("5052系"), Value::from("second"), Value::Missing],
        ]);
        let series = scan_series(&table);
        assert_eq!(series.len(), 1);
        assert_eq!(series[&5000].overview, "second");
    }
}
