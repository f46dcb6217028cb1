//! Issue key extraction from the build's branch name.

use std::collections::BTreeSet;

use anyhow::Result;
use tracing::debug;

use crate::build::BuildContext;
use crate::extract::pattern::{find_all_keys, IssueKey};
use crate::extract::IssueKeyExtractor;

/// Extracts issue keys from the name of the branch the build ran against.
///
/// A build without source-control metadata, or with an empty branch name,
/// yields the empty set rather than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchIssueKeyExtractor;

impl IssueKeyExtractor for BranchIssueKeyExtractor {
    fn extract_issue_keys(&self, context: &dyn BuildContext) -> Result<BTreeSet<IssueKey>> {
        let Some(branch) = context.branch_name()? else {
            return Ok(BTreeSet::new());
        };
        if branch.is_empty() {
            return Ok(BTreeSet::new());
        }

        let keys: BTreeSet<IssueKey> = find_all_keys(&branch).into_iter().collect();
        debug!(branch = %branch, count = keys.len(), "extracted issue keys from branch name");
        Ok(keys)
    }
}
