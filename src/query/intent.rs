//! Query intent router.
//!
//! Classifies a free-text query into exactly one [`Intent`] by walking an ordered decision
//! table; the first rule that fires wins.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::synonyms::{tag, SynonymExpander};

/// Threshold used when a strength query names no number, in MPa.
pub const DEFAULT_STRENGTH_THRESHOLD: u64 = 400;

static TEMPER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[TH][0-9]{1,3}|O)$").expect("Hardcode regex pattern"));
static ALNUM_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9A-Z]+").expect("Hardcode regex pattern"));
static TEMPERED_DESIGNATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"A?[0-9]{4}-[A-Z]+[0-9]*").expect("Hardcode regex pattern"));
static DESIGNATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"A?[0-9]{4}(?:-?[A-Z][0-9]*)?").expect("Hardcode regex pattern"));
static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("Hardcode regex pattern"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Description of one temper symbol
    HeatTreatmentLookup(String),
    PureAluminumInfo,
    /// Alloys with tensile strength at or above the value in MPa
    StrengthThreshold(u64),
    DifficultMachining,
    /// Series and alloys whose text mentions every tag
    PropertySearch(Vec<String>),
    TemperComparison(String, String),
    /// Full record of a designation such as `A6061-T6`
    AlloyDetail(String),
    Help,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::HeatTreatmentLookup(_) => "heat_treatment_lookup",
            Intent::PureAluminumInfo => "pure_aluminum_info",
            Intent::StrengthThreshold(_) => "strength_threshold",
            Intent::DifficultMachining => "difficult_machining",
            Intent::PropertySearch(_) => "property_search",
            Intent::TemperComparison(_, _) => "temper_comparison",
            Intent::AlloyDetail(_) => "alloy_detail",
            Intent::Help => "help",
        }
    }
}

/// What the rules look at, extracted once per query.
#[derive(Debug)]
struct QueryFeatures {
    tags: BTreeSet<String>,
    /// Distinct standalone temper tokens in order of appearance
    tempers: Vec<String>,
    designation: Option<String>,
    first_integer: Option<u64>,
}

/// Folds full-width digits, Latin letters and hyphen-minus to ASCII.
fn to_halfwidth(query: &str) -> String {
    query
        .chars()
        .map(|c| match c {
            '\u{FF0D}' | '\u{FF10}'..='\u{FF19}' | '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' => {
                char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

impl QueryFeatures {
    fn analyze(query: &str, expander: &SynonymExpander) -> Self {
        let query = to_halfwidth(query);
        let query = query.as_str();
        let upper = query.to_uppercase();

        let masked = TEMPERED_DESIGNATION.replace_all(&upper, " ");
        let mut tempers: Vec<String> = Vec::new();
        for token in ALNUM_RUN.find_iter(&masked).map(|run| run.as_str()) {
            if TEMPER_TOKEN.is_match(token) && !tempers.iter().any(|seen| seen == token) {
                tempers.push(token.to_owned());
            }
        }

        let first_integer = INTEGER
            .find(query)
            .map(|digits| digits.as_str().parse::<u64>().unwrap_or(u64::MAX));

        QueryFeatures {
            tags: expander.expand(query),
            tempers,
            designation: DESIGNATION.find(&upper).map(|found| found.as_str().to_owned()),
            first_integer,
        }
    }

    fn has(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

type Rule = fn(&QueryFeatures) -> Option<Intent>;

/// Rules in priority order.
const RULES: &[(&str, Rule)] = &[
    ("single_temper", single_temper),
    ("pure_aluminum", pure_aluminum),
    ("strength", strength),
    ("machining", machining),
    ("corrosion_or_weld", corrosion_or_weld),
    ("two_tempers", two_tempers),
    ("designation", designation),
];

fn single_temper(features: &QueryFeatures) -> Option<Intent> {
    match features.tempers.as_slice() {
        [symbol] => Some(Intent::HeatTreatmentLookup(symbol.clone())),
        _ => None,
    }
}

fn pure_aluminum(features: &QueryFeatures) -> Option<Intent> {
    features
        .has(tag::PURE_ALUMINUM)
        .then_some(Intent::PureAluminumInfo)
}

fn strength(features: &QueryFeatures) -> Option<Intent> {
    let machining = features.has(tag::MACHINING);
    let difficult = features.has(tag::DIFFICULT);
    let fires = (features.has(tag::TENSILE) && !(machining && difficult))
        || (features.has(tag::STRENGTH) && !machining);
    fires.then(|| {
        Intent::StrengthThreshold(features.first_integer.unwrap_or(DEFAULT_STRENGTH_THRESHOLD))
    })
}

fn machining(features: &QueryFeatures) -> Option<Intent> {
    if !features.has(tag::MACHINING) {
        return None;
    }
    if features.has(tag::DIFFICULT) {
        Some(Intent::DifficultMachining)
    } else {
        Some(Intent::PropertySearch(vec![tag::MACHINING.to_owned()]))
    }
}

fn corrosion_or_weld(features: &QueryFeatures) -> Option<Intent> {
    let tags: Vec<String> = [tag::CORROSION, tag::WELD]
        .into_iter()
        .filter(|tag| features.has(tag))
        .map(str::to_owned)
        .collect();
    (!tags.is_empty()).then_some(Intent::PropertySearch(tags))
}

fn two_tempers(features: &QueryFeatures) -> Option<Intent> {
    match features.tempers.as_slice() {
        [first, second, ..] => Some(Intent::TemperComparison(first.clone(), second.clone())),
        _ => None,
    }
}

fn designation(features: &QueryFeatures) -> Option<Intent> {
    features.designation.clone().map(Intent::AlloyDetail)
}

#[derive(Clone, Debug, Default)]
pub struct IntentRouter {
    expander: SynonymExpander,
}

impl IntentRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expander(expander: SynonymExpander) -> Self {
        IntentRouter { expander }
    }

    pub fn classify(&self, query: &str) -> Intent {
        let features = QueryFeatures::analyze(query, &self.expander);
        let (rule, intent) = RULES
            .iter()
            .find_map(|(name, rule)| rule(&features).map(|intent| (*name, intent)))
            .unwrap_or(("fallback", Intent::Help));
        tracing::debug!(query, rule, intent = intent.name(), "classified query");
        intent
    }
}
