//! # Aluminum Alloy Advisor
//!
//! Answers natural-language questions about aluminum-alloy material properties from a
//! spreadsheet handbook. A workbook is loaded into an in-memory knowledge index once; each
//! question is then classified by keyword rules and answered with a Markdown report.
//!
//! ## Features
//!
//! - **Pure Rust workbook reader**: Office Open XML workbooks (`.xlsx`, `.xlsm`) read straight
//!   from the zip container, with shared strings and date-formatted numbers
//! - **Knowledge index**: alloy series, temper symbols, the mechanical-properties table and a
//!   catalog of alloy names across sheets
//! - **Rule-based intents**: temper lookups and comparisons, pure aluminum, strength thresholds,
//!   machinability, corrosion and weldability searches, alloy details
//! - **Synonyms**: Japanese and English phrasings map to the same concepts
//! - **Safe reloads**: a failed load keeps the previously published index
//!
//! ## Example
//!
//! ```no_run
//! use rusty_alloy::{Advisor, DataSource};
//!
//! let mut advisor = Advisor::new();
//! advisor.load(&DataSource::path("data/temp_data.xlsx"))?;
//! println!("{}", advisor.process_query("引張強さが500MPa以上"));
//! # Ok::<(), rusty_alloy::RustyAlloyError>(())
//! ```
mod advisor;
mod error;
mod helpers;
pub mod knowledge;
pub mod query;
mod spreadsheet;
pub mod workbook;

pub use advisor::{Advisor, SheetSummary};
pub use error::RustyAlloyError;
pub use knowledge::{alloy_label, KnowledgeIndex};
pub use query::{handlers, Intent, IntentRouter, SynonymExpander, QUICK_QUERIES};
pub use workbook::{Criteria, DataSource, Table, Value, Workbook};
