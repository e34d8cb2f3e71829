//! Lookup handlers: one per [`Intent`], each rendering a Markdown report from the index.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::intent::Intent;
use crate::knowledge::schema::{column, HIGH_STRENGTH_RANK, MECHANICAL_SHEET, TOP_MACHINABILITY_GRADE};
use crate::knowledge::{
    builtin_description, designation_label, first_four_digits, AlloyRecord, KnowledgeIndex, SeriesDescriptor,
};
use crate::workbook::Value;

/// Entries shown by strength and property listings.
pub const MAX_RESULTS: usize = 10;

/// Example questions offered to the user.
pub const QUICK_QUERIES: &[&str] = &[
    "純アルミの特徴を教えて",
    "引張強さが500MPa以上",
    "A6061-T6 の詳細",
    "T6 と T651 の違い",
    "耐食性と溶接性が良い合金",
];

/// Answer to data-dependent questions before any workbook is loaded.
pub const NO_DATA_MESSAGE: &str = "⚠️ データが読み込まれていません。Excel ファイルを読み込んでから質問してください。";

static DETAIL_DESIGNATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4})(?:-?([A-Z][0-9]*))?").expect("Hardcode regex pattern"));

/// Renders the answer to a classified query.
///
/// Help and temper comparison only need built-in text; every other intent answers
/// [`NO_DATA_MESSAGE`] without an index.
pub fn answer(intent: &Intent, index: Option<&KnowledgeIndex>) -> String {
    match (intent, index) {
        (Intent::Help, _) => help(),
        (Intent::TemperComparison(first, second), _) => temper_comparison(first, second),
        (_, None) => NO_DATA_MESSAGE.to_owned(),
        (Intent::HeatTreatmentLookup(symbol), Some(index)) => heat_treatment(index, symbol),
        (Intent::PureAluminumInfo, Some(index)) => pure_aluminum(index),
        (Intent::StrengthThreshold(threshold), Some(index)) => strength_threshold(index, *threshold),
        (Intent::DifficultMachining, Some(index)) => difficult_machining(index),
        (Intent::PropertySearch(tags), Some(index)) => property_search(index, tags),
        (Intent::AlloyDetail(designation), Some(index)) => alloy_detail(index, designation),
    }
}

/// Value as shown in a report; blank values print as `-`.
fn shown(value: &Value) -> String {
    if value.is_blank() {
        "-".to_owned()
    } else {
        value.to_string()
    }
}

fn push_series_text(out: &mut String, series: &SeriesDescriptor) {
    if !series.overview.trim().is_empty() {
        out.push_str(&format!("- 概要: {}\n", series.overview));
    }
    if !series.features.trim().is_empty() {
        out.push_str(&format!("- 特性: {}\n", series.features));
    }
}

pub fn heat_treatment(index: &KnowledgeIndex, symbol: &str) -> String {
    let symbol = symbol.trim().to_uppercase();
    let mut out = format!("## 🔥 調質 {symbol} の説明\n\n");
    let Some(descriptor) = index.temper(&symbol) else {
        out.push_str(&format!("⚠️ 調質記号 {symbol} の情報が見つかりませんでした。\n"));
        return out;
    };
    if !descriptor.definition.trim().is_empty() {
        out.push_str(&format!("- 定義: {}\n", descriptor.definition));
    }
    if !descriptor.meaning.trim().is_empty() {
        out.push_str(&format!("- 意味: {}\n", descriptor.meaning));
    }
    out
}

pub fn pure_aluminum(index: &KnowledgeIndex) -> String {
    let mut out = "## 🥈 純アルミニウム（1000系）\n\n".to_owned();
    let series = index.series(1000);
    if let Some(series) = series {
        out.push_str(&format!("### {}\n", series.name));
        push_series_text(&mut out, series);
        out.push('\n');
    }

    let labels: Vec<String> = index
        .alloy_records()
        .filter(|record| record.series_code() == Some(1000))
        .map(|record| record.label())
        .collect();
    if !labels.is_empty() {
        out.push_str("### 代表的な純アルミ合金\n");
        for label in &labels {
            out.push_str(&format!("- {label}\n"));
        }
    }

    if series.is_none() && labels.is_empty() {
        out.push_str("⚠️ 純アルミニウムのデータが見つかりませんでした。\n");
    }
    out
}

pub fn strength_threshold(index: &KnowledgeIndex, threshold: u64) -> String {
    let mut out = format!("## 🔍 引張強さ {threshold} MPa 以上の合金\n\n");
    let minimum = threshold as f64;
    let mut matches: Vec<(f64, AlloyRecord)> = index
        .alloy_records()
        .filter_map(|record| record.tensile_strength().map(|strength| (strength, record)))
        .filter(|(strength, _)| *strength >= minimum)
        .collect();
    if matches.is_empty() {
        out.push_str("該当する合金が見つかりませんでした。");
        return out;
    }

    // stable: equal strengths keep sheet order
    matches.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    for (strength, record) in matches.iter().take(MAX_RESULTS) {
        out.push_str(&format!("### ✨ {}\n", record.label()));
        out.push_str(&format!("- 引張強さ: {strength} MPa\n"));
        for (key, value) in record.row().iter() {
            if value.is_blank() || [column::ALLOY, column::TEMPER, column::TENSILE_STRENGTH].contains(&key) {
                continue;
            }
            out.push_str(&format!("- **{key}**: {value}\n"));
        }
        out.push('\n');
    }
    out
}

pub fn difficult_machining(index: &KnowledgeIndex) -> String {
    if index.mechanical_table().is_none() {
        return "切削性データがありません。".to_owned();
    }
    let hard: Vec<(String, String)> = index
        .alloy_records()
        .filter(|record| record.get(column::STRENGTH_RANK).to_string().trim() == HIGH_STRENGTH_RANK)
        .filter_map(|record| {
            let grade = record.get(column::MACHINABILITY).to_string().trim().to_owned();
            (!grade.is_empty() && grade != TOP_MACHINABILITY_GRADE).then(|| (record.label(), grade))
        })
        .collect();
    if hard.is_empty() {
        return "難加工材は見つかりませんでした。".to_owned();
    }

    let mut out = "## 🔍 切削加工が難しい合金\n\n".to_owned();
    for (label, grade) in &hard {
        out.push_str(&format!("- {label} | 切削性: {grade}\n"));
    }
    out
}

fn contains_all(text: &str, tags: &[String]) -> bool {
    let text = text.to_lowercase();
    tags.iter().all(|tag| text.contains(&tag.to_lowercase()))
}

pub fn property_search(index: &KnowledgeIndex, tags: &[String]) -> String {
    let mut out = "## 🔎 検索結果\n\n".to_owned();
    let series: Vec<&SeriesDescriptor> = index
        .series_descriptors()
        .filter(|series| contains_all(&series.search_text(), tags))
        .collect();
    let alloys: Vec<AlloyRecord> = index
        .alloy_records()
        .filter(|record| contains_all(&record.row().joined_text(), tags))
        .collect();
    if series.is_empty() && alloys.is_empty() {
        out.push_str("❌ 該当する合金がありません。");
        return out;
    }

    for descriptor in series {
        out.push_str(&format!("### {}\n", descriptor.name));
        push_series_text(&mut out, descriptor);
        let labels: BTreeSet<String> = index
            .alloy_records()
            .filter(|record| record.series_code() == Some(descriptor.code))
            .map(|record| record.label())
            .collect();
        if !labels.is_empty() {
            let labels: Vec<String> = labels.into_iter().collect();
            out.push_str(&format!("- 代表合金: {}\n", labels.join(", ")));
        }
        out.push('\n');
    }

    if !alloys.is_empty() {
        out.push_str("### 🔧 該当する代表合金\n");
        for record in alloys.iter().take(MAX_RESULTS) {
            out.push_str(&format!(
                "- {} | 耐食性: {} / 溶接性: {} / 切削性: {}\n",
                record.label(),
                shown(record.get(column::CORROSION)),
                shown(record.get(column::WELDABILITY)),
                shown(record.get(column::MACHINABILITY)),
            ));
        }
        out.push('\n');
    }
    out
}

pub fn temper_comparison(first: &str, second: &str) -> String {
    let first = first.trim().to_uppercase();
    let second = second.trim().to_uppercase();
    let mut out = format!("## 🔄 {first} と {second} の違い\n\n");
    for symbol in [&first, &second] {
        out.push_str(&format!("### {symbol}\n"));
        match builtin_description(symbol) {
            Some(description) => out.push_str(&format!("- {description}\n\n")),
            None => out.push('\n'),
        }
    }
    out
}

fn push_mechanical_record(out: &mut String, record: &AlloyRecord) {
    out.push_str("### 📊 機械的性質（aluminum_handbook_table）\n");
    out.push_str(&format!("- 合金記号: {}\n", designation_label(record.designation())));
    out.push_str(&format!("- 調質: {}\n", shown(record.get(column::TEMPER))));
    out.push_str(&format!("- 引張強さ: {} MPa\n", shown(record.get(column::TENSILE_STRENGTH))));
    out.push_str(&format!("- 耐力: {} MPa\n", shown(record.get(column::YIELD_STRENGTH))));
    out.push_str(&format!("- 伸び: {} %\n", shown(record.get(column::ELONGATION))));
    out.push_str(&format!("- 疲れ強さ: {} MPa\n", shown(record.get(column::FATIGUE_STRENGTH))));
    out.push_str(&format!("- 強度ランク: {}\n", shown(record.get(column::STRENGTH_RANK))));
    out.push_str(&format!(
        "- 耐食性: {} / 溶接性: {} / 切削性: {} / 成形性: {}\n",
        shown(record.get(column::CORROSION)),
        shown(record.get(column::WELDABILITY)),
        shown(record.get(column::MACHINABILITY)),
        shown(record.get(column::FORMABILITY)),
    ));
    let remarks = record.get(column::REMARKS);
    if !remarks.is_blank() {
        out.push_str(&format!("- 備考: {remarks}\n"));
    }
    out.push('\n');
}

pub fn alloy_detail(index: &KnowledgeIndex, designation: &str) -> String {
    let designation = designation.trim().to_uppercase();
    let mut out = format!("## 📋 {designation} の詳細\n\n");

    let (number, temper) = match DETAIL_DESIGNATION.captures(&designation) {
        Some(captures) => (
            captures[1].to_owned(),
            captures.get(2).map(|temper| temper.as_str().to_owned()),
        ),
        None => (
            first_four_digits(&designation)
                .map(str::to_owned)
                .unwrap_or_else(|| designation.replace(['A', '-'], "")),
            None,
        ),
    };

    let mut found = false;
    for record in index.alloy_records() {
        if record.padded_designation() != number {
            continue;
        }
        if temper.as_ref().is_some_and(|temper| record.temper().to_uppercase() != *temper) {
            continue;
        }
        found = true;
        push_mechanical_record(&mut out, &record);
        if let Some(series) = record.series_code().and_then(|code| index.series(code)) {
            out.push_str(&format!("### 🧾 系列 {} の概要\n", series.code));
            out.push_str(&format!("- 系列名: {}\n", series.name));
            if !series.overview.trim().is_empty() {
                out.push_str(&format!("- 概要: {}\n", series.overview));
            }
            if !series.features.trim().is_empty() {
                out.push_str(&format!("- 特性の要点: {}\n", series.features));
            }
            out.push('\n');
        }
    }
    if found && temper.is_some() {
        return out;
    }

    for table in index.workbook().sheets().filter(|table| table.name() != MECHANICAL_SHEET) {
        let rows: Vec<_> = table
            .rows()
            .filter(|row| row.joined_text().to_uppercase().contains(&number))
            .collect();
        if rows.is_empty() {
            continue;
        }
        found = true;
        out.push_str(&format!("### 📄 {}\n", table.name()));
        for row in rows {
            for (key, value) in row.iter().filter(|(_, value)| !value.is_blank()) {
                out.push_str(&format!("- **{key}**: {value}\n"));
            }
            out.push('\n');
        }
    }

    if !found {
        out.push_str("⚠️ 該当する合金の詳細情報が見つかりませんでした。\n");
    }
    out
}

pub fn help() -> String {
    let mut out = "## 💡 使い方の例\n".to_owned();
    for query in QUICK_QUERIES {
        out.push_str(&format!("- {query}\n"));
    }
    out.push_str("- 切削加工が難しい合金\n");
    out.push_str("- H18 とは？\n");
    out
}
