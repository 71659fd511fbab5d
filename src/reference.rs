//! Parsing of raw dependency references into structured locators.

use std::fmt;

use crate::error::{Error, Result};

/// A structured pointer to a remote repository.
///
/// Produced by [`RepositoryLocator::parse`]; `owner` and `name` are
/// guaranteed non-empty and free of path separators, and together with
/// `host` uniquely identify the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    host: String,
    owner: String,
    name: String,
}

impl RepositoryLocator {
    /// Parse a `host/owner/repo` path or a full code-hosting URL.
    ///
    /// The path must split into exactly three non-empty segments. Pure
    /// string transformation; no network or disk access.
    pub fn parse(raw: &str) -> Result<Self> {
        // Tolerate a scheme prefix so entries copied out of a browser
        // address bar keep working.
        let trimmed = match raw.split_once("://") {
            Some((_scheme, rest)) => rest,
            None => raw,
        };

        let segments: Vec<&str> = trimmed.split('/').collect();
        if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
            return Err(Error::MalformedReference(raw.to_string()));
        }

        Ok(Self {
            host: segments[0].to_string(),
            owner: segments[1].to_string(),
            name: segments[2].to_string(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The URL handed to the clone backend: `https://` prefix, `.git` suffix.
    pub fn clone_url(&self) -> String {
        format!("https://{}/{}/{}.git", self.host, self.owner, self.name)
    }
}

impl fmt::Display for RepositoryLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_path_reference() {
        let locator = RepositoryLocator::parse("github.com/alice/mylib").unwrap();
        assert_eq!(locator.host(), "github.com");
        assert_eq!(locator.owner(), "alice");
        assert_eq!(locator.name(), "mylib");
    }

    #[test]
    fn parses_reference_with_scheme() {
        let locator = RepositoryLocator::parse("https://github.com/alice/mylib").unwrap();
        assert_eq!(locator.owner(), "alice");
        assert_eq!(locator.name(), "mylib");
    }

    #[test]
    fn rejects_two_segments() {
        let err = RepositoryLocator::parse("github.com/alice").unwrap_err();
        assert!(matches!(err, Error::MalformedReference(_)));
    }

    #[test]
    fn rejects_four_segments() {
        let err = RepositoryLocator::parse("github.com/alice/mylib/extra").unwrap_err();
        assert!(matches!(err, Error::MalformedReference(_)));
    }

    #[test]
    fn rejects_empty_segments() {
        // A trailing slash yields an empty repository name.
        assert!(RepositoryLocator::parse("github.com/alice/").is_err());
        assert!(RepositoryLocator::parse("github.com//mylib").is_err());
        assert!(RepositoryLocator::parse("").is_err());
    }

    #[test]
    fn clone_url_has_https_prefix_and_git_suffix() {
        let locator = RepositoryLocator::parse("github.com/alice/mylib").unwrap();
        assert_eq!(locator.clone_url(), "https://github.com/alice/mylib.git");
    }

    #[test]
    fn display_renders_full_path() {
        let locator = RepositoryLocator::parse("github.com/alice/mylib").unwrap();
        assert_eq!(locator.to_string(), "github.com/alice/mylib");
    }
}
