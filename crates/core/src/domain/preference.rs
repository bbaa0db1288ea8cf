use crate::domain::profile::Profile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sector vocabulary offered by the preference collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sector {
    Technology,
    Healthcare,
    Finance,
    Energy,
    #[serde(rename = "Consumer Discretionary")]
    ConsumerDiscretionary,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Industrials,
    Utilities,
    Materials,
    #[serde(rename = "Communication Services")]
    CommunicationServices,
}

impl Sector {
    pub const ALL: [Sector; 10] = [
        Sector::Technology,
        Sector::Healthcare,
        Sector::Finance,
        Sector::Energy,
        Sector::ConsumerDiscretionary,
        Sector::RealEstate,
        Sector::Industrials,
        Sector::Utilities,
        Sector::Materials,
        Sector::CommunicationServices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sector::Technology => "Technology",
            Sector::Healthcare => "Healthcare",
            Sector::Finance => "Finance",
            Sector::Energy => "Energy",
            Sector::ConsumerDiscretionary => "Consumer Discretionary",
            Sector::RealEstate => "Real Estate",
            Sector::Industrials => "Industrials",
            Sector::Utilities => "Utilities",
            Sector::Materials => "Materials",
            Sector::CommunicationServices => "Communication Services",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sector {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .into_iter()
            .find(|sector| sector.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown sector: {s}"))
    }
}

/// Geographic region vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "USA")]
    Usa,
    Canada,
    Europe,
    Asia,
    #[serde(rename = "Rest of the World")]
    RestOfTheWorld,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Usa,
        Region::Canada,
        Region::Europe,
        Region::Asia,
        Region::RestOfTheWorld,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Usa => "USA",
            Region::Canada => "Canada",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::RestOfTheWorld => "Rest of the World",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown region: {s}"))
    }
}

/// Asset class vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetClass {
    Equity,
    Bonds,
    #[serde(rename = "Cash & Equivalents")]
    CashAndEquivalents,
}

impl AssetClass {
    pub const ALL: [AssetClass; 3] = [
        AssetClass::Equity,
        AssetClass::Bonds,
        AssetClass::CashAndEquivalents,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Equity => "Equity",
            AssetClass::Bonds => "Bonds",
            AssetClass::CashAndEquivalents => "Cash & Equivalents",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetClass::ALL
            .into_iter()
            .find(|asset_class| asset_class.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown asset class: {s}"))
    }
}

/// One user's filters for a single recommendation request. The selection
/// vectors may be empty; their order is preserved into the prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceSet {
    pub profile: Profile,
    #[serde(default)]
    pub sectors: Vec<Sector>,
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub asset_classes: Vec<AssetClass>,
}

impl PreferenceSet {
    pub fn for_profile(profile: Profile) -> Self {
        Self {
            profile,
            sectors: Vec::new(),
            regions: Vec::new(),
            asset_classes: Vec::new(),
        }
    }
}
