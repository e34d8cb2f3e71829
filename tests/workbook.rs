mod common;

use common::{handbook, n, sheet, t, xlsx, Cell};
use rusty_alloy::{Criteria, DataSource, KnowledgeIndex, Value, Workbook};
use std::io::Write;

fn load(bytes: Vec<u8>) -> Workbook {
    Workbook::load(&DataSource::bytes("handbook.xlsx", bytes), &Criteria::default()).unwrap()
}

#[test]
fn loads_every_sheet_in_order() {
    let workbook = load(handbook());
    assert_eq!(
        workbook.sheet_names(),
        vec!["aluminum_handbook_table", "アルミニウム合金の特性", "熱処理", "用途"]
    );
    let mechanical = workbook.sheet("aluminum_handbook_table").unwrap();
    assert_eq!(mechanical.len(), 10);
    assert_eq!(mechanical.columns().len(), 13);
    assert_eq!(mechanical.columns()[2], "引張強さ (MPa)");
}

#[test]
fn converts_cells_to_values() {
    let workbook = load(handbook());
    let mechanical = workbook.sheet("aluminum_handbook_table").unwrap();
    let first = mechanical.rows().next().unwrap();
    assert_eq!(first.get("Alloy"), &Value::Number(1100.0));
    assert_eq!(first.get("Temper"), &Value::from("O"));
    assert_eq!(first.get("疲れ強さ (MPa)"), &Value::Missing);
    assert_eq!(first.get("備考"), &Value::Missing);

    let usage = workbook.sheet("用途").unwrap();
    let row = usage.rows().next().unwrap();
    assert_eq!(row.get("主な用途"), &Value::from("自転車フレーム"));
    assert_eq!(row.get("更新日"), &Value::from("2024-01-01"));
    assert_eq!(row.get("在庫"), &Value::from("TRUE"));
}

#[test]
fn header_labels_are_normalized() {
    let bytes = xlsx(&[sheet(
        "labels",
        vec![
            vec![t(" Alloy "), Cell::Empty, t("Temper"), t("Temper")],
            vec![n(6061.0), t("x"), t("T6"), t("T651")],
            vec![Cell::Empty, Cell::Empty, Cell::Empty, Cell::Empty],
            vec![n(7075.0)],
        ],
    )]);
    let workbook = load(bytes);
    let table = workbook.sheet("labels").unwrap();
    assert_eq!(table.columns(), &["Alloy", "Unnamed: 1", "Temper", "Temper.1"]);
    assert_eq!(table.len(), 2);
}

#[test]
fn criteria_select_sheets_and_rows() {
    let criteria = Criteria::default()
        .with_sheet_patterns(&["aluminum_*"])
        .unwrap()
        .with_rows_limit(Some(2));
    let workbook = Workbook::load(&DataSource::bytes("handbook.xlsx", handbook()), &criteria).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["aluminum_handbook_table"]);
    assert_eq!(workbook.sheet("aluminum_handbook_table").unwrap().len(), 2);

    let nothing = Criteria::default().with_sheet_patterns(&["missing*"]).unwrap();
    assert!(Workbook::load(&DataSource::bytes("handbook.xlsx", handbook()), &nothing).is_err());
}

#[test]
fn loads_from_path_and_file_url() {
    let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
    file.write_all(&handbook()).unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap().to_owned();
    let by_path = Workbook::load(&DataSource::path(&path), &Criteria::default()).unwrap();
    assert_eq!(by_path.len(), 4);

    let url = url::Url::from_file_path(file.path()).unwrap().to_string();
    let by_url = Workbook::load(&DataSource::path(url), &Criteria::default()).unwrap();
    assert_eq!(by_url, by_path);
}

#[test]
fn rejects_unreadable_sources() {
    let missing = Workbook::load(&DataSource::path("no/such/handbook.xlsx"), &Criteria::default());
    assert!(missing.is_err());

    let remote = Workbook::load(&DataSource::path("https://example.com/handbook.xlsx"), &Criteria::default());
    assert!(remote.unwrap_err().to_string().contains("not supported"));

    let corrupt = Workbook::load(&DataSource::bytes("corrupt.xlsx", b"PK\x03\x04garbage".to_vec()), &Criteria::default());
    assert!(corrupt.is_err());

    let legacy = Workbook::load(
        &DataSource::bytes("legacy.xls", vec![0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]),
        &Criteria::default(),
    );
    assert!(legacy.unwrap_err().to_string().contains("not supported"));

    let text = Workbook::load(&DataSource::bytes("notes.txt", b"hello".to_vec()), &Criteria::default());
    assert!(text.unwrap_err().to_string().contains("not an Excel workbook"));

    let empty = Workbook::load(&DataSource::bytes("empty.xlsx", Vec::new()), &Criteria::default());
    assert!(empty.is_err());
}

#[test]
fn index_rebuild_is_idempotent() {
    let workbook = load(handbook());
    let first = KnowledgeIndex::build(workbook.clone());
    let second = KnowledgeIndex::build(workbook);
    assert_eq!(first, second);

    assert_eq!(first.series(1000).unwrap().name, "1000系 (純アルミ)");
    assert_eq!(first.temper("H18").unwrap().definition, "完全硬化状態");
    assert_eq!(first.catalog().get("6061").unwrap().len(), 2);
    assert_eq!(first.catalog().get("A5083").unwrap()[0].sheet, "用途");
}
