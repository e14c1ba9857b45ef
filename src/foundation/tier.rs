use std::{fmt, str::FromStr};

use crate::foundation::error::{DowngradeError, DowngradeResult};

/// One of the three supported container format tiers.
///
/// Variants are declared lowest first so the derived `Ord` matches the
/// version ladder: `Tier05 < Tier1 < Tier2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Format 0.5, the oldest runtime.
    Tier05,
    /// Format 1.0.
    Tier1,
    /// Format 2.0, the newest runtime.
    Tier2,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; 3] = [Tier::Tier05, Tier::Tier1, Tier::Tier2];

    /// The tier one step down the ladder, or `None` at the bottom.
    pub fn next_lower(self) -> Option<Tier> {
        match self {
            Tier::Tier2 => Some(Tier::Tier1),
            Tier::Tier1 => Some(Tier::Tier05),
            Tier::Tier05 => None,
        }
    }

    /// Format-version integer written into the container header.
    pub fn header_version(self) -> u32 {
        match self {
            Tier::Tier2 => 5,
            Tier::Tier1 => 4,
            Tier::Tier05 => 1,
        }
    }

    /// Human-facing version label.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Tier2 => "2.0",
            Tier::Tier1 => "1.0",
            Tier::Tier05 => "0.5",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target tier as requested by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestedTier {
    /// Step one tier down from whatever the source is.
    #[default]
    Auto,
    /// A specific tier.
    Explicit(Tier),
}

impl RequestedTier {
    /// Parse a user-facing tier string.
    ///
    /// Tokens are matched textually, never through a float, so `1.0` and
    /// `1` are both accepted but `1.5` or `0.50000001` are not.
    pub fn parse(s: &str) -> DowngradeResult<Self> {
        let token = s.trim();
        let parsed = match token.to_ascii_lowercase().as_str() {
            "auto" | "0" | "0.0" => RequestedTier::Auto,
            "0.5" | ".5" => RequestedTier::Explicit(Tier::Tier05),
            "1" | "1.0" => RequestedTier::Explicit(Tier::Tier1),
            "2" | "2.0" => RequestedTier::Explicit(Tier::Tier2),
            _ => {
                return Err(DowngradeError::invalid_target(format!(
                    "'{token}' (expected one of auto, 0.5, 1.0, 2.0)"
                )));
            }
        };
        Ok(parsed)
    }
}

impl FromStr for RequestedTier {
    type Err = DowngradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RequestedTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestedTier::Auto => f.write_str("auto"),
            RequestedTier::Explicit(t) => fmt::Display::fmt(t, f),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/tier.rs"]
mod tests;
