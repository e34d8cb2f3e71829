use crate::spreadsheet::cell::Cell;
use crate::workbook::Table;
use crate::workbook::Value;
use std::collections::BTreeMap;

/// Represents a worksheet as a sparse list of non-empty cells, in reading order.
pub(crate) struct Sheet {
    /// Source file name
    pub(crate) file_name: String,
    /// Sheet name
    pub(crate) name: String,
    /// All non-empty cells in the sheet
    pub(crate) cells: Vec<Cell>,
    /// Maximum number of data rows below the header row
    pub(super) limit: Option<usize>,
    /// Actual data range (determined from cell data)
    pub(crate) row_lower_bound: Option<usize>,
    pub(crate) row_upper_bound: Option<usize>,
    pub(crate) col_lower_bound: Option<usize>,
    pub(crate) col_upper_bound: Option<usize>,
}

impl Sheet {
    /// Creates a new empty sheet.
    pub(super) fn new(file_name: &str, name: &str, limit: Option<usize>) -> Self {
        Self {
            file_name: file_name.to_owned(),
            name: name.to_owned(),
            cells: Vec::new(),
            limit,
            row_lower_bound: None,
            row_upper_bound: None,
            col_lower_bound: None,
            col_upper_bound: None,
        }
    }

    /// Checks if a row lies beyond the row limit.
    /// The first non-empty row is the header and does not count against the limit.
    pub(super) fn after_row_upper_bound(&self, row: usize) -> bool {
        self.row_lower_bound
            .zip(self.limit)
            .map(|(row_lower_bound, limit)| row_lower_bound + limit < row)
            .unwrap_or(false)
    }

    /// Adds a cell to the sheet, updating data ranges.
    pub(super) fn push(&mut self, cell: Cell) {
        self.update_bound(cell.row, cell.col);
        self.cells.push(cell);
    }

    /// Updates the actual data range boundaries based on cell positions.
    fn update_bound(&mut self, row: usize, col: usize) {
        if self.row_lower_bound.map(|lower| row < lower).unwrap_or(true) {
            self.row_lower_bound = Some(row);
        }
        if self.row_upper_bound.map(|upper| upper < row).unwrap_or(true) {
            self.row_upper_bound = Some(row);
        }
        if self.col_lower_bound.map(|lower| col < lower).unwrap_or(true) {
            self.col_lower_bound = Some(col);
        }
        if self.col_upper_bound.map(|upper| upper < col).unwrap_or(true) {
            self.col_upper_bound = Some(col);
        }
    }

    /// Converts the sheet into a table.
    /// The first non-empty row supplies column labels; rows without any value are dropped.
    pub(crate) fn into_table(self) -> Table {
        let (Some(header_row), Some(col_lower), Some(col_upper)) =
            (self.row_lower_bound, self.col_lower_bound, self.col_upper_bound)
        else {
            return Table::new(&self.name, Vec::new(), Vec::new());
        };

        let width = col_upper - col_lower + 1;
        let mut header = vec![String::new(); width];
        let mut records = BTreeMap::<usize, Vec<Value>>::new();
        for cell in &self.cells {
            let offset = cell.col - col_lower;
            if cell.row == header_row {
                header[offset] = cell.to_string();
            } else {
                records
                    .entry(cell.row)
                    .or_insert_with(|| vec![Value::Missing; width])[offset] = cell.to_value();
            }
        }
        Table::new(&self.name, header, records.into_values().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::spreadsheet::cell::{Cell, CellType};
    use crate::spreadsheet::sheet::Sheet;
    use crate::workbook::Value;

    fn push(sheet: &mut Sheet, row: usize, col: usize, kind: CellType, value: &str) {
        sheet.push(Cell {
            row,
            col,
            kind,
            value: value.to_owned(),
        });
    }

    #[test]
    fn sheet_initial() {
        let sheet = Sheet::new("", "", None);

        assert!(sheet.cells.is_empty());
        assert_eq!(sheet.row_lower_bound, None);
        assert_eq!(sheet.row_upper_bound, None);
        assert_eq!(sheet.col_lower_bound, None);
        assert_eq!(sheet.col_upper_bound, None);
        assert!(sheet.into_table().is_empty());
    }

    #[test]
    fn sheet_update() {
        let mut sheet = Sheet::new("", "", None);
        push(&mut sheet, 1, 1, CellType::InlineString, "a");
        push(&mut sheet, 1, 3, CellType::InlineString, "b");
        push(&mut sheet, 3, 1, CellType::Number, "1");
        push(&mut sheet, 3, 3, CellType::Number, "2");

        assert_eq!(sheet.cells.len(), 4);
        assert_eq!(sheet.row_lower_bound, Some(1));
        assert_eq!(sheet.row_upper_bound, Some(3));
        assert_eq!(sheet.col_lower_bound, Some(1));
        assert_eq!(sheet.col_upper_bound, Some(3));
    }

    #[test]
    fn sheet_to_table() {
        let mut sheet = Sheet::new("book.xlsx", "aluminum_handbook_table", None);
        push(&mut sheet, 0, 0, CellType::InlineString, " Alloy ");
        push(&mut sheet, 0, 1, CellType::InlineString, "Temper");
        push(&mut sheet, 1, 0, CellType::Number, "6061");
        push(&mut sheet, 1, 1, CellType::SharedString, "T6");
        push(&mut sheet, 4, 1, CellType::SharedString, "O");

        let table = sheet.into_table();
        assert_eq!(table.name(), "aluminum_handbook_table");
        assert_eq!(table.columns(), &["Alloy".to_owned(), "Temper".to_owned()]);
        assert_eq!(table.len(), 2);

        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows[0].get("Alloy"), &Value::Number(6061.0));
        assert_eq!(rows[0].get("Temper"), &Value::Text("T6".to_owned()));
        assert_eq!(rows[1].get("Alloy"), &Value::Missing);
        assert_eq!(rows[1].get("Temper"), &Value::Text("O".to_owned()));
    }

    #[test]
    fn sheet_row_limit() {
        let mut sheet = Sheet::new("", "", Some(2));
        push(&mut sheet, 2, 0, CellType::InlineString, "header");
        assert!(!sheet.after_row_upper_bound(3));
        assert!(!sheet.after_row_upper_bound(4));
        assert!(sheet.after_row_upper_bound(5));
    }
}
