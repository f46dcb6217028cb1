//! Issue key extractors and their shared contract.

use std::collections::BTreeSet;

use anyhow::Result;

use crate::build::BuildContext;

pub mod branch;
pub mod change_log;
pub mod combined;
pub mod pattern;

pub use branch::BranchIssueKeyExtractor;
pub use change_log::ChangeLogIssueKeyExtractor;
pub use combined::BranchAndChangeLogIssueKeyExtractor;
pub use pattern::{find_all_keys, IssueKey, ParseIssueKeyError};

/// Upper bound on the number of issue keys a single extraction returns.
pub const ISSUE_KEY_MAX_LIMIT: usize = 100;

/// Common contract for components that derive issue keys from build metadata.
///
/// Each call is a stateless, synchronous pass over its input; extractors keep
/// no state between calls and are safe to share across threads.
pub trait IssueKeyExtractor {
    /// Extracts the set of issue keys visible to this extractor.
    ///
    /// Errors from the [`BuildContext`] accessors propagate unchanged; this
    /// layer adds no retry or suppression.
    fn extract_issue_keys(&self, context: &dyn BuildContext) -> Result<BTreeSet<IssueKey>>;
}
