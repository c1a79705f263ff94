use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, warn};
use rayon::prelude::*;

use crate::diff_change::DiffChange;
use crate::diff_result::DiffResult;
use crate::error::DiffError;
use crate::inline_diff::InlineDiff;
use crate::lcs::{self, DiffAlgorithm};
use crate::markup::{self, MarkupClasses};
use crate::segment;
use crate::tokenize::{self, Granularity};

/// Largest LCS table `try_diff` accepts by default (a 4000×4000 token pair)
pub const DEFAULT_MAX_TABLE_CELLS: usize = 16_000_000;

/// Options for comparing two texts
#[derive(Debug, Clone)]
pub struct DiffConfig {
    granularity: Granularity,
    algorithm: DiffAlgorithm,
    timeout: Option<Duration>,
    max_table_cells: Option<usize>,
    classes: MarkupClasses,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::Word,
            algorithm: DiffAlgorithm::Lcs,
            timeout: Some(Duration::from_secs(5)),
            max_table_cells: Some(DEFAULT_MAX_TABLE_CELLS),
            classes: MarkupClasses::default(),
        }
    }
}

impl DiffConfig {
    /// Set how texts are split into tokens
    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Set the alignment algorithm
    pub fn algorithm(mut self, algorithm: DiffAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the deadline for [`DiffAlgorithm::Myers`]; `None` waits for the exact result
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the table size `try_diff` refuses above; `None` disables the check
    pub fn max_table_cells(mut self, limit: Option<usize>) -> Self {
        self.max_table_cells = limit;
        self
    }

    /// Set the CSS classes used in the markup
    pub fn classes(mut self, classes: MarkupClasses) -> Self {
        self.classes = classes;
        self
    }

    /// Token-count product of the pair, i.e. the size of the LCS table
    pub fn table_cells(&self, original: &str, modified: &str) -> usize {
        let old = tokenize::tokenize(original, self.granularity);
        let new = tokenize::tokenize(modified, self.granularity);
        lcs::table_cells(old.len(), new.len())
    }

    /// Check the pair against the size limit without diffing it.
    ///
    /// Returns the table size on success.
    pub fn check_size(&self, original: &str, modified: &str) -> Result<usize> {
        let cells = self.table_cells(original, modified);
        self.check_cells(cells)?;
        Ok(cells)
    }

    fn check_cells(&self, cells: usize) -> Result<(), DiffError> {
        match self.max_table_cells {
            Some(limit) if cells > limit => Err(DiffError::TooLarge { cells, limit }),
            _ => Ok(()),
        }
    }

    /// Compare two texts. Never fails; oversized inputs only log a warning.
    pub fn diff(&self, original: &str, modified: &str) -> DiffResult {
        let old = tokenize::tokenize(original, self.granularity);
        let new = tokenize::tokenize(modified, self.granularity);

        if let Err(err) = self.check_cells(lcs::table_cells(old.len(), new.len())) {
            warn!("diffing anyway: {}", err);
        }

        self.diff_tokens(original, modified, &old, &new)
    }

    /// Compare two texts after checking them against the size limit
    pub fn try_diff(&self, original: &str, modified: &str) -> Result<DiffResult> {
        let old = tokenize::tokenize(original, self.granularity);
        let new = tokenize::tokenize(modified, self.granularity);

        if let Err(err) = self.check_cells(lcs::table_cells(old.len(), new.len())) {
            warn!("refusing comparison: {}", err);
            return Err(err.into());
        }

        Ok(self.diff_tokens(original, modified, &old, &new))
    }

    /// Compare many independent pairs in parallel, keeping their order
    pub fn diff_all<S>(&self, pairs: &[(S, S)]) -> Vec<DiffResult>
    where
        S: AsRef<str> + Sync,
    {
        debug!("diffing {} pairs", pairs.len());
        pairs
            .par_iter()
            .map(|(original, modified)| self.diff(original.as_ref(), modified.as_ref()))
            .collect()
    }

    /// Character level highlighting of both texts.
    ///
    /// Always works on characters, whatever the configured granularity.
    pub fn inline_diff(&self, original: &str, modified: &str) -> InlineDiff {
        let old = tokenize::tokenize(original, Granularity::Character);
        let new = tokenize::tokenize(modified, Granularity::Character);
        let common = self.common_subsequence(&old, &new);

        InlineDiff::from_alignment(&old, &new, &common, &self.classes)
    }

    fn diff_tokens(&self, original: &str, modified: &str, old: &[&str], new: &[&str]) -> DiffResult {
        debug!(
            "diffing {} against {} tokens ({:?}, {:?})",
            old.len(),
            new.len(),
            self.granularity,
            self.algorithm
        );

        let changes = if original == modified {
            vec![DiffChange::unchanged(modified, 0)]
        } else if original.is_empty() {
            vec![DiffChange::addition(modified, 0)]
        } else if modified.is_empty() {
            vec![DiffChange::deletion(original, 0)]
        } else {
            let common = self.common_subsequence(old, new);
            segment::segment(old, new, &common)
        };

        let marked_up_text = markup::render_markup(modified, &changes, &self.classes);
        let result = DiffResult::new(changes, marked_up_text);

        debug!("diff finished: {}", result.stats);
        result
    }

    fn common_subsequence<'a>(&self, old: &[&'a str], new: &[&'a str]) -> Vec<&'a str> {
        match self.algorithm {
            DiffAlgorithm::Lcs => lcs::longest_common_subsequence(old, new),
            DiffAlgorithm::Myers => {
                let deadline = self.timeout.map(|timeout| Instant::now() + timeout);
                lcs::myers_common_subsequence(old, new, deadline)
            }
        }
    }
}
