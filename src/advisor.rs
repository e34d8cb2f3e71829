use crate::error::RustyAlloyError;
use crate::knowledge::KnowledgeIndex;
use crate::query::{answer, IntentRouter};
use crate::workbook::{Criteria, DataSource, Workbook};

/// Loaded sheet as listed to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetSummary {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
}

/// Question-answering session over one published knowledge index.
///
/// A load builds the new index completely before replacing the published one; when loading
/// fails the previous index stays in place.
#[derive(Debug, Default)]
pub struct Advisor {
    router: IntentRouter,
    criteria: Criteria,
    index: Option<KnowledgeIndex>,
}

impl Advisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose loads only read the sheets selected by `criteria`.
    pub fn with_criteria(criteria: Criteria) -> Self {
        Advisor {
            criteria,
            ..Self::default()
        }
    }

    /// Loads a workbook and publishes its index.
    ///
    /// # Errors
    ///
    /// Returns the load error; the previously published index, if any, is kept.
    pub fn load(&mut self, source: &DataSource) -> Result<(), RustyAlloyError> {
        match Workbook::load(source, &self.criteria) {
            Ok(workbook) => {
                self.publish(KnowledgeIndex::build(workbook));
                tracing::info!(source = source.name(), "published knowledge index");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    source = source.name(),
                    kept_previous = self.index.is_some(),
                    "load failed: {e}"
                );
                Err(e)
            }
        }
    }

    /// Replaces the published index.
    pub fn publish(&mut self, index: KnowledgeIndex) {
        self.index = Some(index);
    }

    pub fn index(&self) -> Option<&KnowledgeIndex> {
        self.index.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.index.is_some()
    }

    /// Answers a question; never fails.
    pub fn process_query(&self, query: &str) -> String {
        let intent = self.router.classify(query);
        answer(&intent, self.index.as_ref())
    }

    /// Sheets of the published workbook in workbook order.
    pub fn sheet_summaries(&self) -> Vec<SheetSummary> {
        self.index
            .iter()
            .flat_map(|index| index.workbook().sheets())
            .map(|table| SheetSummary {
                name: table.name().to_owned(),
                rows: table.len(),
                columns: table.columns().len(),
            })
            .collect()
    }
}
