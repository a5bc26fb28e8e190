//! Version names and ordering
//!
//! This module handles:
//! - Parsing version names into channels or semantic versions
//! - The total order used to present cached versions
//!
//! A version name is either a release channel (`master`, `stable`, `beta`,
//! `dev`) or a strict semantic version such as `2.0.0` or `1.22.0-1.0.pre`.
//! Sorting labels ascending and reading the result in reverse yields the
//! presentation order: channels first by privilege, then semantic versions
//! newest first, with pre-releases directly below their release.

use semver::Version;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors related to version names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The name is neither a channel nor a parseable semantic version
    #[error("Invalid version '{name}': not a channel (master, stable, beta, dev) and not a semantic version ({reason})")]
    InvalidVersion { name: String, reason: String },
}

/// Release channels, most privileged first
///
/// Channels are rolling tracks: the build behind a channel name changes
/// over time, unlike a fixed semantic version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Latest development snapshot
    Master,
    /// Production-ready releases
    Stable,
    /// Pre-release candidates
    Beta,
    /// Legacy development track
    Dev,
}

impl Channel {
    /// Parse a channel name
    ///
    /// Channel membership is an exact match against the fixed channel set;
    /// `"Master"` or `"STABLE"` are not channels.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "master" => Some(Self::Master),
            "stable" => Some(Self::Stable),
            "beta" => Some(Self::Beta),
            "dev" => Some(Self::Dev),
            _ => None,
        }
    }

    /// Channel name, as used for cache directories and git branches
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Stable => "stable",
            Self::Beta => "beta",
            Self::Dev => "dev",
        }
    }

    /// Privilege rank; a channel with a higher rank sorts greater
    fn rank(self) -> u8 {
        match self {
            Self::Master => 3,
            Self::Stable => 2,
            Self::Beta => 1,
            Self::Dev => 0,
        }
    }
}

impl Ord for Channel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Channel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed version name
///
/// Every valid name maps to exactly one variant. Parsing is strict: a name
/// must be a channel or a full semantic version, so `v2.0.0` and `1.2` are
/// rejected rather than guessed at.
///
/// # Examples
/// ```
/// use sdkvm::core::version::{Channel, VersionLabel};
///
/// let stable: VersionLabel = "stable".parse().unwrap();
/// assert_eq!(stable, VersionLabel::Channel(Channel::Stable));
///
/// let release: VersionLabel = "2.0.0".parse().unwrap();
/// assert!(!release.is_channel());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionLabel {
    /// A rolling release channel
    Channel(Channel),
    /// A fixed semantic version
    Semantic(Version),
}

impl VersionLabel {
    /// Whether this label names a channel
    #[must_use]
    pub fn is_channel(&self) -> bool {
        matches!(self, Self::Channel(_))
    }
}

impl Ord for VersionLabel {
    /// Ascending order over version names
    ///
    /// Channels compare above every semantic version, and among themselves
    /// by privilege rank. Semantic versions follow semver precedence, which
    /// places a pre-release strictly below its release. Reversing a sorted
    /// collection therefore gives the presentation order.
    ///
    /// ```
    /// use sdkvm::core::version::VersionLabel;
    ///
    /// let mut labels: Vec<VersionLabel> = ["1.20.0", "stable", "2.0.0"]
    ///     .iter()
    ///     .map(|name| name.parse().unwrap())
    ///     .collect();
    /// labels.sort();
    /// labels.reverse();
    ///
    /// let names: Vec<String> = labels.iter().map(ToString::to_string).collect();
    /// assert_eq!(names, vec!["stable", "2.0.0", "1.20.0"]);
    /// ```
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Channel(a), Self::Channel(b)) => a.cmp(b),
            (Self::Channel(_), Self::Semantic(_)) => Ordering::Greater,
            (Self::Semantic(_), Self::Channel(_)) => Ordering::Less,
            (Self::Semantic(a), Self::Semantic(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for VersionLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for VersionLabel {
    type Err = VersionError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if let Some(channel) = Channel::from_name(name) {
            return Ok(Self::Channel(channel));
        }

        let version = Version::parse(name).map_err(|e| VersionError::InvalidVersion {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self::Semantic(version))
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Channel(channel) => write!(f, "{channel}"),
            Self::Semantic(version) => write!(f, "{version}"),
        }
    }
}
