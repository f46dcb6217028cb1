//! Lexical rule for issue keys and free-text scanning.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Issue key shape: project code (uppercase letter, then uppercase letters or
// digits), hyphen, numeric id. The regex crate has no lookaround, so the
// boundary rule is enforced on match positions in `find_all_keys`.
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static ISSUE_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][A-Z0-9]*-[0-9]+").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static ISSUE_KEY_ANCHORED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9]*-[0-9]+$").unwrap());

/// A single issue-tracker key, e.g. `TEST-123`.
///
/// A plain value type: uniqueness is by text and the key carries no identity
/// beyond it. Construct via [`str::parse`] (validated) or receive from the
/// extractors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueKey(String);

impl IssueKey {
    /// Returns the key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<IssueKey> for String {
    fn from(key: IssueKey) -> Self {
        key.0
    }
}

/// Error returned when a string is not a well-formed issue key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a valid issue key: {0:?}")]
pub struct ParseIssueKeyError(String);

impl FromStr for IssueKey {
    type Err = ParseIssueKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if ISSUE_KEY_ANCHORED.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ParseIssueKeyError(s.to_string()))
        }
    }
}

/// Scans free text for issue keys, in left-to-right order of occurrence.
///
/// Duplicates are retained per call; deduplication happens at the set-merge
/// layer. A candidate is dropped when the character immediately before or
/// after it is an ASCII letter or digit, so `xTEST-123` and `TEST-123abc`
/// yield nothing while the key inside `feature/TEST-123-login` matches.
pub fn find_all_keys(text: &str) -> Vec<IssueKey> {
    ISSUE_KEY_PATTERN
        .find_iter(text)
        .filter(|m| {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            !before.is_some_and(|c| c.is_ascii_alphanumeric())
                && !after.is_some_and(|c| c.is_ascii_alphanumeric())
        })
        .map(|m| IssueKey(m.as_str().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(text: &str) -> Vec<String> {
        find_all_keys(text).into_iter().map(String::from).collect()
    }

    // ── find_all_keys ────────────────────────────────────────────────

    #[test]
    fn finds_single_key() {
        assert_eq!(keys("TEST-123 Commit message"), vec!["TEST-123"]);
    }

    #[test]
    fn finds_keys_in_order_of_occurrence() {
        assert_eq!(
            keys("ABC-1 then XYZ-2 then ABC-3"),
            vec!["ABC-1", "XYZ-2", "ABC-3"]
        );
    }

    #[test]
    fn retains_duplicates_per_call() {
        assert_eq!(keys("TEST-1 and TEST-1 again"), vec!["TEST-1", "TEST-1"]);
    }

    #[test]
    fn finds_key_inside_branch_name() {
        assert_eq!(keys("feature/TEST-123-login"), vec!["TEST-123"]);
        assert_eq!(keys("TEST-456-branch-name"), vec!["TEST-456"]);
    }

    #[test]
    fn project_code_may_contain_digits() {
        assert_eq!(keys("TEST2-45 done"), vec!["TEST2-45"]);
    }

    #[test]
    fn multiple_keys_in_squashed_message() {
        assert_eq!(
            keys("Squash: TEST-1 fix login\nTEST-2 fix logout\nTEST-3 docs"),
            vec!["TEST-1", "TEST-2", "TEST-3"]
        );
    }

    #[test]
    fn no_keys_in_plain_text() {
        assert!(keys("merge branch main into develop").is_empty());
        assert!(keys("").is_empty());
    }

    // ── boundary rule ────────────────────────────────────────────────

    #[test]
    fn rejects_key_preceded_by_letter_or_digit() {
        assert!(keys("xTEST-123").is_empty());
        assert!(keys("1TEST-123").is_empty());
    }

    #[test]
    fn rejects_key_followed_by_letter() {
        assert!(keys("TEST-123abc").is_empty());
    }

    #[test]
    fn uppercase_prefix_extends_the_project_code() {
        // An uppercase run before the hyphen is itself part of a valid key.
        assert_eq!(keys("XTEST-123"), vec!["XTEST-123"]);
    }

    #[test]
    fn trailing_digits_extend_the_number() {
        assert_eq!(keys("TEST-1234"), vec!["TEST-1234"]);
    }

    #[test]
    fn lowercase_project_code_is_not_a_key() {
        assert!(keys("test-123").is_empty());
    }

    #[test]
    fn adjacent_keys_without_separator_are_rejected() {
        assert!(keys("TEST-123TEST-456").is_empty());
    }

    // ── IssueKey parsing ─────────────────────────────────────────────

    #[test]
    fn parses_exact_key() -> anyhow::Result<()> {
        let key: IssueKey = "TEST-123".parse()?;
        assert_eq!(key.as_str(), "TEST-123");
        assert_eq!(key.to_string(), "TEST-123");
        Ok(())
    }

    #[test]
    fn rejects_non_key_strings() {
        assert!("TEST-123 trailing".parse::<IssueKey>().is_err());
        assert!("test-123".parse::<IssueKey>().is_err());
        assert!("-123".parse::<IssueKey>().is_err());
        assert!("TEST-".parse::<IssueKey>().is_err());
        assert!("".parse::<IssueKey>().is_err());
    }

    #[test]
    fn parse_error_names_the_input() {
        let err = "nope".parse::<IssueKey>().unwrap_err();
        assert_eq!(err.to_string(), "not a valid issue key: \"nope\"");
    }
}
