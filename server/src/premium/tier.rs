//! Premium tier ordering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Premium tier held by a user.
///
/// Variants are declared lowest first; the derived `Ord` is the entitlement
/// order used by the whitelabel gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PremiumTier {
    /// No entitlement.
    None,
    /// Time-limited trial.
    Trial,
    /// Standard premium.
    Premium,
    /// Premium with a custom-branded bot.
    Whitelabel,
}

impl PremiumTier {
    /// Returns the wire name of this tier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Trial => "trial",
            Self::Premium => "premium",
            Self::Whitelabel => "whitelabel",
        }
    }
}

impl fmt::Display for PremiumTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(PremiumTier::None < PremiumTier::Trial);
        assert!(PremiumTier::Trial < PremiumTier::Premium);
        assert!(PremiumTier::Premium < PremiumTier::Whitelabel);
        assert_eq!(
            [
                PremiumTier::Whitelabel,
                PremiumTier::None,
                PremiumTier::Premium,
                PremiumTier::Trial
            ]
            .iter()
            .max(),
            Some(&PremiumTier::Whitelabel)
        );
    }

    #[test]
    fn test_tier_wire_format() {
        let tier: PremiumTier = serde_json::from_str("\"whitelabel\"").unwrap();
        assert_eq!(tier, PremiumTier::Whitelabel);
        assert_eq!(serde_json::to_string(&PremiumTier::Trial).unwrap(), "\"trial\"");
        assert!(serde_json::from_str::<PremiumTier>("\"gold\"").is_err());
    }
}
