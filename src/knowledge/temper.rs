use crate::knowledge::schema::column;
use crate::workbook::{Row, Table};
use std::collections::BTreeMap;

/// Short descriptions of common temper symbols, available without any worksheet.
pub const BUILTIN_TEMPERS: &[(&str, &str)] = &[
    ("T6", "溶体化処理後、人工時効硬化処理を施したもの。"),
    ("T651", "T6に加え、残留応力除去のため引張処理。"),
    ("T3", "溶体化→冷間加工→自然時効。"),
    ("T4", "溶体化→自然時効。"),
    ("T5", "高温加工後に人工時効硬化。"),
    ("O", "焼なまし材で最も柔らかい。"),
    ("H", "加工硬化材。H12〜H18など。"),
    ("H12", "1/4硬化"),
    ("H14", "1/2硬化"),
    ("H16", "3/4硬化"),
    ("H18", "完全硬化"),
];

/// Built-in short description of an upper-case temper symbol.
pub fn builtin_description(symbol: &str) -> Option<&'static str> {
    BUILTIN_TEMPERS
        .iter()
        .find(|(known, _)| *known == symbol)
        .map(|(_, description)| *description)
}

/// Definition and meaning of one temper symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemperDescriptor {
    pub symbol: String,
    pub definition: String,
    pub meaning: String,
}

impl TemperDescriptor {
    pub(crate) fn from_row(row: &Row) -> Option<TemperDescriptor> {
        let symbol = row.get(column::SYMBOL).to_string().trim().to_uppercase();
        if symbol.is_empty() {
            return None;
        }
        Some(TemperDescriptor {
            symbol,
            definition: row.get(column::DEFINITION).to_string(),
            meaning: row.get(column::MEANING).to_string(),
        })
    }

    /// Descriptor backed by the built-in description only.
    pub fn builtin(symbol: &str) -> Option<TemperDescriptor> {
        builtin_description(symbol).map(|description| TemperDescriptor {
            symbol: symbol.to_owned(),
            definition: description.to_owned(),
            meaning: String::new(),
        })
    }
}

pub(crate) fn scan_tempers(table: &Table) -> BTreeMap<String, TemperDescriptor> {
    table
        .rows()
        .filter_map(|row| TemperDescriptor::from_row(&row))
        .map(|descriptor| (descriptor.symbol.clone(), descriptor))
        .collect()
}
