use std::{fmt, str::FromStr};

use thiserror::Error;

/// The GitHub user or organization that publishes the firmware.
pub const FIRMWARE_OWNER: &str = "albal";

/// The GitHub repository that publishes the firmware.
pub const FIRMWARE_REPO: &str = "keybot";

/**
    Error type representing the possible errors that can occur when parsing a `RepoId`.
*/
#[derive(Debug, Error)]
pub enum RepoIdParseError {
    #[error("repository id is empty")]
    Empty,
    #[error("missing '/' separator")]
    MissingSeparator,
    #[error("owner '{0}' is empty or invalid")]
    InvalidOwner(String),
    #[error("repository name '{0}' is empty or invalid")]
    InvalidName(String),
}

/**
    A GitHub repository identifier, made up of the owner and name of a repository.

    The default identifier points at the repository publishing the keybot firmware.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for RepoId {
    fn default() -> Self {
        Self::new(FIRMWARE_OWNER, FIRMWARE_REPO)
    }
}

impl FromStr for RepoId {
    type Err = RepoIdParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(RepoIdParseError::Empty);
        }

        let Some((owner, name)) = s.split_once('/') else {
            return Err(RepoIdParseError::MissingSeparator);
        };

        let owner = owner.trim();
        let name = name.trim();

        if !is_valid_segment(owner) {
            return Err(RepoIdParseError::InvalidOwner(owner.to_string()));
        }
        if !is_valid_segment(name) {
            return Err(RepoIdParseError::InvalidName(name.to_string()));
        }

        Ok(Self::new(owner, name))
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

// Segments end up in a URL path, only characters GitHub allows in names are accepted
fn is_valid_segment(s: &str) -> bool {
    !s.is_empty()
        && s != "."
        && s != ".."
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_basic() {
        assert_eq!("a/b".parse::<RepoId>().unwrap(), RepoId::new("a", "b"));
        assert_eq!(
            "albal/keybot".parse::<RepoId>().unwrap(),
            RepoId::new("albal", "keybot")
        );
        assert_eq!(
            "some-org/firmware.rs".parse::<RepoId>().unwrap(),
            RepoId::new("some-org", "firmware.rs")
        );
    }

    #[test]
    fn parse_valid_extra_whitespace() {
        // Leading and trailing whitespace around each part is trimmed
        let id = RepoId::new("a", "b");
        assert_eq!("a/ b".parse::<RepoId>().unwrap(), id);
        assert_eq!("a/b ".parse::<RepoId>().unwrap(), id);
        assert_eq!(" a /b".parse::<RepoId>().unwrap(), id);
    }

    #[test]
    fn parse_invalid_missing() {
        assert!(matches!("".parse::<RepoId>(), Err(RepoIdParseError::Empty)));
        assert!(matches!(
            "keybot".parse::<RepoId>(),
            Err(RepoIdParseError::MissingSeparator)
        ));
        assert!("/".parse::<RepoId>().is_err());
        assert!("a/".parse::<RepoId>().is_err());
        assert!("/b".parse::<RepoId>().is_err());
    }

    #[test]
    fn parse_invalid_extra_separator() {
        assert!("a/b/".parse::<RepoId>().is_err());
        assert!("a/b/c".parse::<RepoId>().is_err());
    }

    #[test]
    fn parse_invalid_inner_whitespace() {
        assert!("my org/keybot".parse::<RepoId>().is_err());
        assert!("albal/key bot".parse::<RepoId>().is_err());
    }

    #[test]
    fn parse_invalid_path_characters() {
        assert!("a/..".parse::<RepoId>().is_err());
        assert!("../b".parse::<RepoId>().is_err());
        assert!("a/.".parse::<RepoId>().is_err());
        assert!("a/b?x=1".parse::<RepoId>().is_err());
        assert!("a/b#frag".parse::<RepoId>().is_err());
        assert!("a%2F/b".parse::<RepoId>().is_err());
        assert!("a\\b/c".parse::<RepoId>().is_err());
        // Dots are still fine inside a name
        assert!("a/.github".parse::<RepoId>().is_ok());
        assert!("a/b..c".parse::<RepoId>().is_ok());
    }

    #[test]
    fn default_and_display() {
        let id = RepoId::default();
        assert_eq!(id.owner(), FIRMWARE_OWNER);
        assert_eq!(id.name(), FIRMWARE_REPO);
        assert_eq!(id.to_string(), "albal/keybot");
        assert_eq!(id.to_string().parse::<RepoId>().unwrap(), id);
    }
}
