//! Build metadata supplied by the host build platform.
//!
//! The extractors never talk to the platform directly; they see a build
//! through the read-only [`BuildContext`] trait. [`BuildSnapshot`] is the
//! plain in-memory implementation used by hosts that already materialized
//! the metadata, and by tests.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Read-only view of one build, as handed over by the host platform.
///
/// Accessor errors are the platform's own failures (API errors, broken
/// metadata stores); they propagate to the caller unchanged.
pub trait BuildContext {
    /// Name of the source-control branch the build ran against.
    ///
    /// `None` when the build carries no source-control revision metadata.
    fn branch_name(&self) -> Result<Option<String>>;

    /// Change-set groups in the build's change log, in build order.
    fn change_sets(&self) -> Result<Vec<ChangeSet>>;
}

/// One group of commits in a build's change log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    /// Entries in commit order.
    #[serde(default)]
    pub entries: Vec<ChangeEntry>,
}

impl ChangeSet {
    /// Builds a change set from plain commit message strings.
    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: messages.into_iter().map(ChangeEntry::new).collect(),
        }
    }
}

/// A single commit entry within a change set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    /// Raw commit message; `None` when the platform could not read it.
    #[serde(default)]
    pub message: Option<String>,
}

impl ChangeEntry {
    /// Creates an entry carrying the given commit message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// In-memory [`BuildContext`] over already-materialized build metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSnapshot {
    /// Branch the build ran against, when known.
    #[serde(default)]
    pub branch_name: Option<String>,
    /// Change log of the build.
    #[serde(default)]
    pub change_sets: Vec<ChangeSet>,
}

impl BuildContext for BuildSnapshot {
    fn branch_name(&self) -> Result<Option<String>> {
        Ok(self.branch_name.clone())
    }

    fn change_sets(&self) -> Result<Vec<ChangeSet>> {
        Ok(self.change_sets.clone())
    }
}
