//! Builds small `.xlsx` packages in memory for integration tests.
#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// A cell as written to the worksheet part.
#[derive(Clone, Debug)]
pub enum Cell {
    /// Shared string
    Text(String),
    /// Inline string
    Inline(String),
    Number(f64),
    /// Number styled with the built-in date format
    Date(f64),
    Bool(bool),
    /// Error cell such as `#N/A`
    Error(String),
    Empty,
}

pub fn t(text: &str) -> Cell {
    Cell::Text(text.to_owned())
}

pub fn n(number: f64) -> Cell {
    Cell::Number(number)
}

pub struct SheetData {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

pub fn sheet(name: &str, rows: Vec<Vec<Cell>>) -> SheetData {
    SheetData {
        name: name.to_owned(),
        rows,
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn column_letters(mut col: usize) -> String {
    let mut letters = String::new();
    col += 1;
    while col > 0 {
        col -= 1;
        letters.insert(0, (b'A' + (col % 26) as u8) as char);
        col /= 26;
    }
    letters
}

fn worksheet_xml(sheet: &SheetData, shared: &mut Vec<String>) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (row, cells) in sheet.rows.iter().enumerate() {
        xml.push_str(&format!(r#"<row r="{}">"#, row + 1));
        for (col, cell) in cells.iter().enumerate() {
            let reference = format!("{}{}", column_letters(col), row + 1);
            let element = match cell {
                Cell::Text(text) => {
                    shared.push(text.to_owned());
                    format!(r#"<c r="{reference}" t="s"><v>{}</v></c>"#, shared.len() - 1)
                }
                Cell::Inline(text) => {
                    format!(r#"<c r="{reference}" t="inlineStr"><is><t>{}</t></is></c>"#, escape(text))
                }
                Cell::Number(number) => format!(r#"<c r="{reference}"><v>{number}</v></c>"#),
                Cell::Date(serial) => format!(r#"<c r="{reference}" s="1"><v>{serial}</v></c>"#),
                Cell::Bool(value) => format!(r#"<c r="{reference}" t="b"><v>{}</v></c>"#, u8::from(*value)),
                Cell::Error(code) => format!(r#"<c r="{reference}" t="e"><v>{}</v></c>"#, escape(code)),
                Cell::Empty => continue,
            };
            xml.push_str(&element);
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Serializes the sheets into an `.xlsx` package.
pub fn xlsx(sheets: &[SheetData]) -> Vec<u8> {
    let mut shared = Vec::<String>::new();
    let worksheets: Vec<String> = sheets.iter().map(|sheet| worksheet_xml(sheet, &mut shared)).collect();

    let mut content_types = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    );
    let mut workbook = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>"#,
    );
    let mut relationships = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for (offset, sheet) in sheets.iter().enumerate() {
        let id = offset + 1;
        content_types.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{id}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        ));
        workbook.push_str(&format!(
            r#"<sheet name="{}" sheetId="{id}" r:id="rId{id}"/>"#,
            escape(&sheet.name)
        ));
        relationships.push_str(&format!(
            r#"<Relationship Id="rId{id}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{id}.xml"/>"#
        ));
    }
    let styles_id = sheets.len() + 1;
    let strings_id = sheets.len() + 2;
    relationships.push_str(&format!(
        r#"<Relationship Id="rId{styles_id}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#
    ));
    relationships.push_str(&format!(
        r#"<Relationship Id="rId{strings_id}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/>"#
    ));
    relationships.push_str("</Relationships>");
    workbook.push_str("</sheets></workbook>");
    content_types.push_str("</Types>");

    let styles = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><cellXfs count="2"><xf numFmtId="0"/><xf numFmtId="14"/></cellXfs></styleSheet>"#;

    let mut shared_strings = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{0}" uniqueCount="{0}">"#,
        shared.len()
    );
    for text in &shared {
        shared_strings.push_str(&format!("<si><t>{}</t></si>", escape(text)));
    }
    shared_strings.push_str("</sst>");

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    let mut part = |name: &str, body: &str| {
        writer.start_file(name, options).unwrap();
        writer.write_all(body.as_bytes()).unwrap();
    };
    part("[Content_Types].xml", &content_types);
    part("xl/workbook.xml", &workbook);
    part("xl/_rels/workbook.xml.rels", &relationships);
    part("xl/styles.xml", styles);
    part("xl/sharedStrings.xml", &shared_strings);
    for (offset, xml) in worksheets.iter().enumerate() {
        part(&format!("xl/worksheets/sheet{}.xml", offset + 1), xml);
    }
    writer.finish().unwrap().into_inner()
}

pub fn mechanical_header() -> Vec<Cell> {
    [
        "Alloy", "Temper", "引張強さ (MPa)", "耐力 (MPa)", "伸び (%)", "疲れ強さ (MPa)", "強度ランク",
        "耐食性", "溶接性", "切削性", "成形性", "備考", "系列",
    ]
    .iter()
    .map(|label| t(label))
    .collect()
}

#[allow(clippy::too_many_arguments)]
pub fn mechanical_row(
    alloy: Cell,
    temper: &str,
    tensile: f64,
    yield_strength: f64,
    rank: &str,
    ratings: [&str; 4],
    remarks: Option<&str>,
    series: f64,
) -> Vec<Cell> {
    let [corrosion, weld, machining, forming] = ratings;
    vec![
        alloy,
        t(temper),
        n(tensile),
        n(yield_strength),
        n(12.0),
        Cell::Error("#N/A".to_owned()),
        t(rank),
        t(corrosion),
        t(weld),
        t(machining),
        t(forming),
        remarks.map(t).unwrap_or(Cell::Empty),
        n(series),
    ]
}

/// The handbook used across the end-to-end tests.
pub fn handbook() -> Vec<u8> {
    xlsx(&[
        sheet(
            "aluminum_handbook_table",
            vec![
                mechanical_header(),
                mechanical_row(n(1100.0), "O", 90.0, 35.0, "低", ["A", "A", "C", "A"], None, 1000.0),
                mechanical_row(n(1100.0), "H18", 165.0, 150.0, "低", ["A", "A", "C", "B"], None, 1000.0),
                mechanical_row(n(2024.0), "T3", 485.0, 345.0, "高", ["C", "C", "A", "C"], Some("航空機材"), 2000.0),
                mechanical_row(n(5083.0), "O", 290.0, 145.0, "中", ["A", "A", "C", "A"], Some("船舶"), 5000.0),
                mechanical_row(n(6061.0), "T6", 310.0, 275.0, "中", ["B", "A", "B", "B"], Some("構造用"), 6000.0),
                mechanical_row(n(6061.0), "T651", 310.0, 275.0, "中", ["B", "A", "B", "B"], None, 6000.0),
                mechanical_row(t("6N01(6005C)"), "T5", 270.0, 225.0, "中", ["B", "A", "B", "B"], None, 6000.0),
                mechanical_row(n(7075.0), "T6", 570.0, 505.0, "高", ["C", "D", "B", "C"], None, 7000.0),
                mechanical_row(n(7075.0), "T651", 570.0, 505.0, "高", ["C", "D", "B", "C"], None, 7000.0),
                mechanical_row(n(7050.0), "T7451", 525.0, 470.0, "高", ["B", "D", "B", "C"], None, 7000.0),
            ],
        ),
        sheet(
            "アルミニウム合金の特性",
            vec![
                vec![t("合金系"), t("概要"), t("代表的な特性（強度、溶接性、耐食性）")],
                vec![t("1000系\n(純アルミ)"), t("99.00%以上の純アルミニウム"), t("耐食性、溶接性に優れる")],
                vec![t("5000系 (Al-Mg系)"), t("非熱処理型の中強度合金"), t("耐食性、溶接性が良好")],
                vec![t("6000系 (Al-Mg-Si系)"), t("押出材に多い熱処理型合金"), t("中強度で耐食性も良い")],
                vec![t("7000系 (Al-Zn-Mg系)"), t("最高強度の熱処理型合金"), t("高強度だが溶接は困難")],
            ],
        ),
        sheet(
            "熱処理",
            vec![
                vec![t("記号"), t("定義"), t("意味")],
                vec![t("T6"), t("溶体化処理後、人工時効硬化処理"), t("高い強度が得られる")],
                vec![t("h18"), t("完全硬化状態"), Cell::Empty],
            ],
        ),
        sheet(
            "用途",
            vec![
                vec![t("材料名"), Cell::Inline("主な用途".to_owned()), t("更新日"), t("在庫")],
                vec![t("A6061"), Cell::Inline("自転車フレーム".to_owned()), Cell::Date(45292.0), Cell::Bool(true)],
                vec![t("A5083"), Cell::Inline("LNGタンク".to_owned()), Cell::Empty, Cell::Bool(false)],
            ],
        ),
    ])
}
