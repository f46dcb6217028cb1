//! Issue key extraction from the build's change log.

use std::collections::BTreeSet;

use anyhow::Result;
use tracing::debug;

use crate::build::BuildContext;
use crate::extract::pattern::{find_all_keys, IssueKey};
use crate::extract::IssueKeyExtractor;

/// Extracts issue keys from every commit message in the build's change log.
///
/// Entries are visited in group order, then commit order within each group.
/// An entry whose message the platform could not read is skipped; one bad
/// entry never aborts the extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeLogIssueKeyExtractor;

impl IssueKeyExtractor for ChangeLogIssueKeyExtractor {
    fn extract_issue_keys(&self, context: &dyn BuildContext) -> Result<BTreeSet<IssueKey>> {
        let change_sets = context.change_sets()?;

        let mut keys = BTreeSet::new();
        let mut scanned = 0usize;
        for change_set in &change_sets {
            for entry in &change_set.entries {
                let Some(message) = entry.message.as_deref() else {
                    debug!("skipping change log entry without a message");
                    continue;
                };
                keys.extend(find_all_keys(message));
                scanned += 1;
            }
        }

        debug!(
            change_sets = change_sets.len(),
            entries = scanned,
            count = keys.len(),
            "extracted issue keys from change log"
        );
        Ok(keys)
    }
}
