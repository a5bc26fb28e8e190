//! Git operations
//!
//! Materializes SDK builds by cloning the upstream repository with the gix
//! crate. Channels map to branches and semantic versions map to tags, so a
//! shallow single-ref clone is enough for any cache entry.

use gix::remote::fetch::Shallow;
use std::path::Path;
use thiserror::Error;

use crate::core::cache::Fetcher;
use crate::core::version::VersionLabel;
use crate::error::FetchError;

/// Git operation errors
#[derive(Error, Debug)]
pub enum GitError {
    /// Failed to clone repository
    #[error("Failed to clone '{url}': {error}")]
    CloneFailed { url: String, error: String },

    /// The requested ref name was rejected by git
    #[error("Invalid git ref '{reference}': {error}")]
    InvalidRef { reference: String, error: String },
}

/// Fetches SDK builds by cloning the upstream repository
#[derive(Debug, Clone)]
pub struct GitFetcher {
    repository_url: String,
}

impl GitFetcher {
    /// Create a fetcher for the given clone URL
    pub fn new(repository_url: impl Into<String>) -> Self {
        Self {
            repository_url: repository_url.into(),
        }
    }

    /// Get the upstream repository URL
    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    /// Git ref name for a version
    ///
    /// Channels track moving branches; semantic versions are released as tags.
    fn ref_name(version: &VersionLabel) -> String {
        match version {
            VersionLabel::Channel(channel) => format!("refs/heads/{channel}"),
            VersionLabel::Semantic(semantic) => format!("refs/tags/{semantic}"),
        }
    }

    /// Shallow-clone a single ref into `dest`
    fn clone_ref(&self, reference: &str, dest: &Path) -> Result<(), GitError> {
        let clone_failed = |error: String| GitError::CloneFailed {
            url: self.repository_url.clone(),
            error,
        };

        let prepare = gix::prepare_clone(self.repository_url.as_str(), dest)
            .map_err(|e| clone_failed(e.to_string()))?;

        // Fetch only the requested ref, at depth 1
        let mut prepare = prepare
            .with_ref_name(Some(reference))
            .map_err(|e| GitError::InvalidRef {
                reference: reference.to_string(),
                error: e.to_string(),
            })?
            .with_shallow(Shallow::DepthAtRemote(1.try_into().unwrap()));

        let (mut checkout, _outcome) = prepare
            .fetch_then_checkout(gix::progress::Discard, &gix::interrupt::IS_INTERRUPTED)
            .map_err(|e| clone_failed(e.to_string()))?;

        // Complete the checkout to get a working tree
        let (_repo, _outcome) = checkout
            .main_worktree(gix::progress::Discard, &gix::interrupt::IS_INTERRUPTED)
            .map_err(|e| clone_failed(e.to_string()))?;

        Ok(())
    }
}

impl Fetcher for GitFetcher {
    fn fetch(&self, version: &VersionLabel, dest: &Path) -> Result<(), FetchError> {
        let reference = Self::ref_name(version);
        tracing::debug!(
            "Cloning '{reference}' from '{}' into '{}'",
            self.repository_url,
            dest.display()
        );

        self.clone_ref(&reference, dest)
            .map_err(|e| FetchError::FetchFailed {
                version: version.to_string(),
                error: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::version::Channel;
    use tempfile::TempDir;

    // ============================================
    // Unit Tests - ref mapping
    // ============================================

    #[test]
    fn test_ref_name_channel_is_branch() {
        let version = VersionLabel::Channel(Channel::Stable);
        assert_eq!(GitFetcher::ref_name(&version), "refs/heads/stable");
    }

    #[test]
    fn test_ref_name_semantic_is_tag() {
        let version: VersionLabel = "1.22.0-1.0.pre".parse().unwrap();
        assert_eq!(GitFetcher::ref_name(&version), "refs/tags/1.22.0-1.0.pre");
    }

    #[test]
    fn test_fetcher_keeps_url() {
        let fetcher = GitFetcher::new("https://example.com/sdk.git");
        assert_eq!(fetcher.repository_url(), "https://example.com/sdk.git");
    }

    #[test]
    fn test_fetch_invalid_url() {
        let temp = TempDir::new().unwrap();
        let fetcher = GitFetcher::new("https://invalid-url-that-does-not-exist.example.com/repo.git");

        let result = fetcher.fetch(
            &VersionLabel::Channel(Channel::Master),
            &temp.path().join("master"),
        );

        assert!(result.is_err());
        match result.unwrap_err() {
            FetchError::FetchFailed { version, .. } => {
                assert_eq!(version, "master");
            }
        }
    }

    // ============================================
    // Integration Tests - Clone operations
    // These tests require network access and clone a real repository
    // that uses a `master` branch and bare semver tags.
    // ============================================

    #[test]
    #[ignore = "requires network access - run with --ignored"]
    fn test_fetch_channel_clones_branch() {
        let temp = TempDir::new().unwrap();
        let fetcher = GitFetcher::new("https://github.com/rust-lang/log.git");
        let dest = temp.path().join("master");

        let result = fetcher.fetch(&VersionLabel::Channel(Channel::Master), &dest);

        assert!(result.is_ok(), "Clone with branch should succeed: {result:?}");
        assert!(dest.join(".git").exists());
        assert!(dest.join("Cargo.toml").exists());
    }

    #[test]
    #[ignore = "requires network access - run with --ignored"]
    fn test_fetch_semantic_clones_tag() {
        let temp = TempDir::new().unwrap();
        let fetcher = GitFetcher::new("https://github.com/rust-lang/log.git");
        let dest = temp.path().join("0.4.20");

        let version: VersionLabel = "0.4.20".parse().unwrap();
        let result = fetcher.fetch(&version, &dest);

        assert!(result.is_ok(), "Clone with tag should succeed: {result:?}");
        assert!(dest.join(".git").exists());
    }

    #[test]
    #[ignore = "requires network access - run with --ignored"]
    fn test_fetch_missing_tag_fails() {
        let temp = TempDir::new().unwrap();
        let fetcher = GitFetcher::new("https://github.com/rust-lang/log.git");

        let version: VersionLabel = "999.999.999".parse().unwrap();
        let result = fetcher.fetch(&version, &temp.path().join("999.999.999"));

        assert!(result.is_err());
    }
}
