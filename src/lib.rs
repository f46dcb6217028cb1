//! # issue-keys
//!
//! Extraction of issue-tracker keys (e.g. `TEST-123`) from the metadata of a
//! build: the name of the source-control branch the build ran against, and
//! the commit messages in the build's change log (including squashed commits
//! that reference several issues at once). Results from both sources are
//! merged into a deduplicated set capped at
//! [`ISSUE_KEY_MAX_LIMIT`](extract::ISSUE_KEY_MAX_LIMIT) keys.
//!
//! The host build platform stays out of this crate; it is modelled by the
//! [`BuildContext`] trait, a read-only provider of the two inputs. Hosts that
//! already hold the metadata in memory can hand over a [`BuildSnapshot`].
//!
//! ## Quick Start
//!
//! ```rust
//! use issue_keys::{
//!     BranchAndChangeLogIssueKeyExtractor, BuildSnapshot, ChangeSet, IssueKeyExtractor,
//! };
//!
//! let build = BuildSnapshot {
//!     branch_name: Some("TEST-456-branch-name".to_string()),
//!     change_sets: vec![ChangeSet::from_messages(["TEST-123 Fix login flow"])],
//! };
//!
//! let keys = BranchAndChangeLogIssueKeyExtractor::new().extract_issue_keys(&build)?;
//! assert_eq!(keys.len(), 2);
//! # anyhow::Ok(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod build;
pub mod extract;

pub use crate::build::{BuildContext, BuildSnapshot, ChangeEntry, ChangeSet};
pub use crate::extract::{
    find_all_keys, BranchAndChangeLogIssueKeyExtractor, BranchIssueKeyExtractor,
    ChangeLogIssueKeyExtractor, IssueKey, IssueKeyExtractor, ParseIssueKeyError,
    ISSUE_KEY_MAX_LIMIT,
};

/// The current version of issue-keys.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
