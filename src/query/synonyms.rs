//! Synonym dictionary mapping query phrases to canonical concept tags

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Canonical concept tags. They are also the keyword stems used in the handbook text.
pub mod tag {
    pub const PURE_ALUMINUM: &str = "純アルミ";
    pub const TENSILE: &str = "引張";
    pub const STRENGTH: &str = "強度";
    pub const MACHINING: &str = "切削";
    pub const DIFFICULT: &str = "難";
    pub const CORROSION: &str = "耐食";
    pub const WELD: &str = "溶接";
}

/// Canonical tag and its trigger phrases; triggers are matched case-insensitively.
pub const SYNONYM_GROUPS: &[(&str, &[&str])] = &[
    (
        tag::PURE_ALUMINUM,
        &["純アルミ", "純アルミニウム", "1000系", "1xxx", "pure aluminum"],
    ),
    (tag::TENSILE, &["引張", "引っ張り", "tensile"]),
    (tag::STRENGTH, &["強度", "強さ", "strength"]),
    (
        tag::MACHINING,
        &["切削", "機械加工", "削り", "machining", "machinability"],
    ),
    (
        tag::DIFFICULT,
        &["難", "むずか", "難し", "悪い", "困難", "difficult", "hard to", "poor"],
    ),
    (tag::CORROSION, &["耐食", "腐食", "錆", "さび", "corrosion"]),
    (tag::WELD, &["溶接", "weld"]),
];

static RAW_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9A-Za-z]+|[\p{Han}\p{Hiragana}\p{Katakana}ー]+").expect("Hardcode regex pattern")
});

/// Expands a query into canonical tags plus its raw lower-cased tokens.
#[derive(Clone, Debug)]
pub struct SynonymExpander {
    groups: Vec<(String, Vec<String>)>,
}

impl Default for SynonymExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl SynonymExpander {
    pub fn new() -> Self {
        Self::with_groups(SYNONYM_GROUPS)
    }

    pub fn with_groups(groups: &[(&str, &[&str])]) -> Self {
        let groups = groups
            .iter()
            .map(|(tag, triggers)| {
                let triggers = triggers.iter().map(|trigger| trigger.to_lowercase()).collect();
                (tag.to_string(), triggers)
            })
            .collect();
        SynonymExpander { groups }
    }

    pub fn expand(&self, query: &str) -> BTreeSet<String> {
        let query_lower = query.to_lowercase();
        let mut tags: BTreeSet<String> = self
            .groups
            .iter()
            .filter(|(_, triggers)| triggers.iter().any(|trigger| query_lower.contains(trigger.as_str())))
            .map(|(tag, _)| tag.clone())
            .collect();
        tags.extend(RAW_TOKEN.find_iter(&query_lower).map(|token| token.as_str().to_owned()));
        tags
    }
}
