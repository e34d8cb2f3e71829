use crate::error::RustyAlloyError;
use glob::Pattern;

/// Criteria for selecting which sheets and rows to load from a workbook.
#[derive(Clone, Debug, Default)]
pub struct Criteria {
    /// Sheet name patterns for filtering which sheets to load.
    pub sheet_name_patterns: Option<Vec<Pattern>>,

    /// Maximum number of sheets to load.
    pub sheet_limit: Option<usize>,

    /// Maximum number of data rows to load per sheet (header excluded).
    pub rows_limit: Option<usize>,
}

impl Criteria {
    /// Restricts loading to sheets matching any of the glob patterns.
    /// An empty list leaves every sheet selected.
    pub fn with_sheet_patterns<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self, RustyAlloyError> {
        if patterns.is_empty() {
            self.sheet_name_patterns = None;
        } else {
            let patterns = patterns
                .iter()
                .map(|pattern| Pattern::new(pattern.as_ref()))
                .collect::<Result<Vec<_>, _>>()?;
            self.sheet_name_patterns = Some(patterns);
        }
        Ok(self)
    }

    pub fn with_sheet_limit(mut self, limit: Option<usize>) -> Self {
        self.sheet_limit = limit;
        self
    }

    pub fn with_rows_limit(mut self, limit: Option<usize>) -> Self {
        self.rows_limit = limit;
        self
    }

    /// Checks if a sheet name matches the criteria patterns.
    /// Returns true if no patterns are specified or if name matches any pattern.
    pub(crate) fn accept(&self, sheet_name: &str) -> bool {
        match &self.sheet_name_patterns {
            Some(patterns) => patterns.iter().any(|pattern| pattern.matches(sheet_name)),
            None => true,
        }
    }
}
