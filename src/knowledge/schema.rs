//! Well-known sheet names, column labels and category values of the handbook workbook.

/// Primary mechanical-properties table
pub const MECHANICAL_SHEET: &str = "aluminum_handbook_table";
/// Alloy family (series) characteristics
pub const SERIES_SHEET: &str = "アルミニウム合金の特性";
/// Temper (heat treatment) symbols
pub const TEMPER_SHEET: &str = "熱処理";

pub mod column {
    // aluminum_handbook_table
    pub const ALLOY: &str = "Alloy";
    pub const TEMPER: &str = "Temper";
    pub const TENSILE_STRENGTH: &str = "引張強さ (MPa)";
    pub const YIELD_STRENGTH: &str = "耐力 (MPa)";
    pub const ELONGATION: &str = "伸び (%)";
    pub const FATIGUE_STRENGTH: &str = "疲れ強さ (MPa)";
    pub const STRENGTH_RANK: &str = "強度ランク";
    pub const CORROSION: &str = "耐食性";
    pub const WELDABILITY: &str = "溶接性";
    pub const MACHINABILITY: &str = "切削性";
    pub const FORMABILITY: &str = "成形性";
    pub const REMARKS: &str = "備考";
    pub const SERIES: &str = "系列";

    // アルミニウム合金の特性
    pub const FAMILY: &str = "合金系";
    pub const OVERVIEW: &str = "概要";
    pub const FEATURES: &str = "代表的な特性（強度、溶接性、耐食性）";

    // 熱処理
    pub const SYMBOL: &str = "記号";
    pub const DEFINITION: &str = "定義";
    pub const MEANING: &str = "意味";
}

/// Strength rank of the strongest alloys
pub const HIGH_STRENGTH_RANK: &str = "高";
/// Best machinability grade
pub const TOP_MACHINABILITY_GRADE: &str = "A";
/// Marker of a family name in the series sheet ("6000系")
pub const FAMILY_MARKER: char = '系';
/// Column label fragments identifying the alloy-name column of any sheet
pub const ALLOY_COLUMN_MARKERS: &[&str] = &["合金", "alloy", "材料"];
