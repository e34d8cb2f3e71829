//! # Query Engine
//!
//! Turns a free-text question into a report: [`SynonymExpander`] tags the query,
//! [`IntentRouter`] picks an [`Intent`] and [`handlers::answer`] renders it from the index.
pub mod handlers;
mod intent;
mod synonyms;

pub use handlers::{answer, NO_DATA_MESSAGE, QUICK_QUERIES};
pub use intent::{Intent, IntentRouter, DEFAULT_STRENGTH_THRESHOLD};
pub use synonyms::{tag, SynonymExpander, SYNONYM_GROUPS};
