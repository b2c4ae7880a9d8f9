//! License tiers and their ordering.
//!
//! Tiers follow the platform ladder: basic < standard < gold < platinum <
//! enterprise < trial. Trial sorts highest because a trial unlocks every
//! feature for its duration.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A license tier (subscription level).
///
/// Declaration order is ladder order; the derived `Ord` is the comparison
/// behind [`at_least`](Self::at_least).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseTier {
    Basic,
    Standard,
    Gold,
    Platinum,
    Enterprise,
    /// Time-limited evaluation license; unlocks everything while active.
    Trial,
}

impl LicenseTier {
    /// All tiers in ladder order.
    pub const ALL: [Self; 6] = [
        Self::Basic,
        Self::Standard,
        Self::Gold,
        Self::Platinum,
        Self::Enterprise,
        Self::Trial,
    ];

    /// Returns the lowercase wire name for this tier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
            Self::Enterprise => "enterprise",
            Self::Trial => "trial",
        }
    }

    /// Returns true if this tier sits at or above `min` on the ladder.
    #[must_use]
    pub fn at_least(&self, min: Self) -> bool {
        *self >= min
    }
}

impl fmt::Display for LicenseTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "standard" => Ok(Self::Standard),
            "gold" => Ok(Self::Gold),
            "platinum" => Ok(Self::Platinum),
            "enterprise" => Ok(Self::Enterprise),
            "trial" => Ok(Self::Trial),
            other => Err(Error::UnknownTier(other.to_string())),
        }
    }
}
