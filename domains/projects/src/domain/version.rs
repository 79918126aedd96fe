//! Storyboard version labels
//!
//! Labels have the form `sb_v{major}` or `sb_v{major}_locked`. Locking
//! rewrites a label to `sb_v{major + 1}_locked`, and every further lock bumps
//! the major number again. This numbering is independent of the counter the
//! workflow uses to mint labels for new versions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use admock_common::{Error, Result};

/// Regex for parsing version labels (compiled once)
static VERSION_LABEL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^sb_v(\d+)(_locked)?$").expect("version label regex is valid")
});

/// Typed `sb_v{major}[_locked]` label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct VersionLabel {
    major: u32,
    locked: bool,
}

impl VersionLabel {
    /// Label minted for a freshly registered version
    pub fn new(major: u32) -> Self {
        Self {
            major,
            locked: false,
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The label a lock rewrites this one to
    pub fn bump_locked(&self) -> Self {
        Self {
            major: self.major.saturating_add(1),
            locked: true,
        }
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sb_v{}", self.major)?;
        if self.locked {
            write!(f, "_locked")?;
        }
        Ok(())
    }
}

impl FromStr for VersionLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let captures = VERSION_LABEL_REGEX
            .captures(s)
            .ok_or_else(|| Error::Validation(format!("Invalid version label: '{}'", s)))?;

        let major = captures[1]
            .parse::<u32>()
            .map_err(|_| Error::Validation(format!("Version number out of range: '{}'", s)))?;

        Ok(Self {
            major,
            locked: captures.get(2).is_some(),
        })
    }
}

impl From<VersionLabel> for String {
    fn from(label: VersionLabel) -> Self {
        label.to_string()
    }
}

impl TryFrom<String> for VersionLabel {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
