//! Combined branch-name and change-log extraction, the public entry point.

use std::collections::BTreeSet;

use anyhow::Result;
use tracing::{debug, warn};

use crate::build::BuildContext;
use crate::extract::branch::BranchIssueKeyExtractor;
use crate::extract::change_log::ChangeLogIssueKeyExtractor;
use crate::extract::pattern::IssueKey;
use crate::extract::{IssueKeyExtractor, ISSUE_KEY_MAX_LIMIT};

/// Unions branch-name and change-log keys and caps the result at
/// [`ISSUE_KEY_MAX_LIMIT`].
///
/// Truncation policy: when the union exceeds the limit, the first
/// `ISSUE_KEY_MAX_LIMIT` keys in lexicographic key order are kept. Neither
/// source is given priority over the other; the only contract is the
/// cardinality bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchAndChangeLogIssueKeyExtractor {
    branch: BranchIssueKeyExtractor,
    change_log: ChangeLogIssueKeyExtractor,
}

impl BranchAndChangeLogIssueKeyExtractor {
    /// Creates the combined extractor.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IssueKeyExtractor for BranchAndChangeLogIssueKeyExtractor {
    fn extract_issue_keys(&self, context: &dyn BuildContext) -> Result<BTreeSet<IssueKey>> {
        let mut keys = self.branch.extract_issue_keys(context)?;
        keys.extend(self.change_log.extract_issue_keys(context)?);

        if keys.len() > ISSUE_KEY_MAX_LIMIT {
            warn!(
                found = keys.len(),
                limit = ISSUE_KEY_MAX_LIMIT,
                "issue key limit exceeded, truncating"
            );
            keys = keys.into_iter().take(ISSUE_KEY_MAX_LIMIT).collect();
        }

        debug!(count = keys.len(), "combined issue key extraction finished");
        Ok(keys)
    }
}
