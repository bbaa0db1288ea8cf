use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Descriptive fields attached to each investor profile. Shown to the user
/// before a recommendation request is made.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProfileDetails {
    pub focus: &'static str,
    pub risk_tolerance: &'static str,
    pub investments: &'static str,
}

/// Investor risk profile. The catalog is fixed; the recommendation flow is
/// never invoked without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    Conservative,
    Moderate,
    Balanced,
    Growth,
    Aggressive,
}

impl Profile {
    pub const ALL: [Profile; 5] = [
        Profile::Conservative,
        Profile::Moderate,
        Profile::Balanced,
        Profile::Growth,
        Profile::Aggressive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Conservative => "Conservative",
            Profile::Moderate => "Moderate",
            Profile::Balanced => "Balanced",
            Profile::Growth => "Growth",
            Profile::Aggressive => "Aggressive",
        }
    }

    pub fn details(&self) -> &'static ProfileDetails {
        match self {
            Profile::Conservative => &ProfileDetails {
                focus: "Capital preservation with predictable income.",
                risk_tolerance: "Low, suitable for short investment horizons.",
                investments: "Cash equivalents, bonds, and low-volatility assets.",
            },
            Profile::Moderate => &ProfileDetails {
                focus: "Stability with some capital growth over time.",
                risk_tolerance: "Moderate, balancing income and growth.",
                investments: "A mix of fixed income and equities.",
            },
            Profile::Balanced => &ProfileDetails {
                focus: "Long-term capital growth and regular income.",
                risk_tolerance: "Accepts moderate volatility for stable returns.",
                investments: "Diversified portfolios combining equities and bonds.",
            },
            Profile::Growth => &ProfileDetails {
                focus: "Long-term capital appreciation with some income.",
                risk_tolerance: "High, tolerating significant volatility.",
                investments: "Equities dominate, but not exclusively.",
            },
            Profile::Aggressive => &ProfileDetails {
                focus: "Maximizing long-term returns.",
                risk_tolerance: "Very high, accepting substantial fluctuations in value.",
                investments: "Primarily equity-heavy portfolios.",
            },
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Conservative" => Ok(Profile::Conservative),
            "Moderate" => Ok(Profile::Moderate),
            "Balanced" => Ok(Profile::Balanced),
            "Growth" => Ok(Profile::Growth),
            "Aggressive" => Ok(Profile::Aggressive),
            other => anyhow::bail!(
                "unknown profile: {other} (expected one of: Conservative, Moderate, Balanced, Growth, Aggressive)"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for profile in Profile::ALL {
            assert_eq!(profile.as_str().parse::<Profile>().unwrap(), profile);
        }
    }

    #[test]
    fn rejects_unknown_label() {
        assert!("Reckless".parse::<Profile>().is_err());
    }

    #[test]
    fn every_profile_has_non_empty_details() {
        for profile in Profile::ALL {
            let details = profile.details();
            assert!(!details.focus.is_empty());
            assert!(!details.risk_tolerance.is_empty());
            assert!(!details.investments.is_empty());
        }
    }
}
