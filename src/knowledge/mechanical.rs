use crate::knowledge::designation::{alloy_label, padded_designation, series_code};
use crate::knowledge::schema::column;
use crate::workbook::{Row, Value};

/// A row of the mechanical-properties table, identified by designation and temper.
#[derive(Clone, Copy, Debug)]
pub struct AlloyRecord<'a> {
    row: Row<'a>,
}

impl<'a> AlloyRecord<'a> {
    pub fn new(row: Row<'a>) -> Self {
        AlloyRecord { row }
    }

    pub fn row(&self) -> &Row<'a> {
        &self.row
    }

    pub fn designation(&self) -> &'a Value {
        self.row.get(column::ALLOY)
    }

    pub fn temper(&self) -> String {
        self.row.get(column::TEMPER).to_string().trim().to_owned()
    }

    pub fn get(&self, column: &str) -> &'a Value {
        self.row.get(column)
    }

    /// Tensile strength in MPa, `None` when missing or not numeric.
    pub fn tensile_strength(&self) -> Option<f64> {
        self.row.get(column::TENSILE_STRENGTH).as_number()
    }

    /// Series code from the series column; a raw family number such as 6061 is floored.
    pub fn series_code(&self) -> Option<u32> {
        let number = self.row.get(column::SERIES).as_integer()?;
        series_code(u64::try_from(number).ok()?)
    }

    /// Designation zero-padded to four characters.
    pub fn padded_designation(&self) -> String {
        padded_designation(self.designation())
    }

    pub fn label(&self) -> String {
        alloy_label(self.designation(), &self.temper())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::Table;

    #[test]
    fn reads_identity_and_numbers() {
        let table = Table::new(
            "aluminum_handbook_table",
            vec!["Alloy".to_owned(), "Temper".to_owned(), "引張強さ (MPa)".to_owned(), "系列".to_owned()],
            vec![
                vec![Value::Number(6061.0), Value::from("T6"), Value::Number(310.0), Value::Number(6000.0)],
                vec![Value::from("7075"), Value::from("T6"), Value::from("n/a"), Value::from("7075")],
            ],
        );
        let records: Vec<_> = table.rows().map(AlloyRecord::new).collect();
        assert_eq!(records[0].label(), "A6061-T6");
        assert_eq!(records[0].tensile_strength(), Some(310.0));
        assert_eq!(records[0].series_code(), Some(6000));
        assert_eq!(records[1].tensile_strength(), None);
        assert_eq!(records[1].series_code(), Some(7000));
        assert_eq!(records[1].padded_designation(), "7075");
    }
}
