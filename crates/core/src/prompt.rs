use crate::domain::preference::PreferenceSet;
use std::fmt::Display;

/// Reply line format the model is instructed to follow. The parser in
/// `llm::lines` is the other half of this contract.
pub const REQUIRED_LINE_FORMAT: &str =
    "Ticker: <ticker>, Name: <long-form name>, Link: <official link>";

pub const NO_SECTOR_PREFERENCE: &str = "No specific sector preference";
pub const NO_REGION_PREFERENCE: &str = "No specific geographic preference";
pub const NO_ASSET_CLASS_PREFERENCE: &str = "No specific asset class preference";

/// Renders a preference set into the completion prompt. Deterministic; empty
/// selections become their placeholder phrase, non-empty ones are
/// comma-space joined in input order.
pub fn build_prompt(prefs: &PreferenceSet) -> String {
    let sectors = join_or(&prefs.sectors, NO_SECTOR_PREFERENCE);
    let regions = join_or(&prefs.regions, NO_REGION_PREFERENCE);
    let asset_classes = join_or(&prefs.asset_classes, NO_ASSET_CLASS_PREFERENCE);

    format!(
        "Recommend the top 10 ETFs suitable for a {profile} investor.\n\
         \n\
         The ETFs should focus on:\n\
         - Sectors: {sectors}\n\
         - Regions: {regions}\n\
         - Asset Classes: {asset_classes}\n\
         \n\
         For each ETF, provide:\n\
         - Ticker symbol\n\
         - Long-form name of the fund\n\
         - Official fund manager's website link\n\
         \n\
         Format your response strictly as:\n\
         {REQUIRED_LINE_FORMAT}",
        profile = prefs.profile,
    )
}

fn join_or<T: Display>(items: &[T], placeholder: &str) -> String {
    if items.is_empty() {
        return placeholder.to_string();
    }
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::preference::{AssetClass, Region, Sector};
    use crate::domain::profile::Profile;

    #[test]
    fn empty_selections_use_placeholders() {
        let prompt = build_prompt(&PreferenceSet::for_profile(Profile::Conservative));
        assert!(prompt.contains("a Conservative investor"));
        assert!(prompt.contains(NO_SECTOR_PREFERENCE));
        assert!(prompt.contains(NO_REGION_PREFERENCE));
        assert!(prompt.contains(NO_ASSET_CLASS_PREFERENCE));
        assert!(prompt.contains(REQUIRED_LINE_FORMAT));
    }

    #[test]
    fn selections_are_joined_in_input_order() {
        let prefs = PreferenceSet {
            profile: Profile::Growth,
            sectors: vec![Sector::Healthcare, Sector::Technology],
            regions: vec![Region::Europe, Region::Usa],
            asset_classes: vec![AssetClass::Equity],
        };

        let prompt = build_prompt(&prefs);
        assert!(prompt.contains("- Sectors: Healthcare, Technology\n"));
        assert!(prompt.contains("- Regions: Europe, USA\n"));
        assert!(prompt.contains("- Asset Classes: Equity\n"));
        assert!(!prompt.contains(NO_SECTOR_PREFERENCE));
        assert!(!prompt.contains(NO_REGION_PREFERENCE));
        assert!(!prompt.contains(NO_ASSET_CLASS_PREFERENCE));
    }

    #[test]
    fn multi_word_labels_survive_rendering() {
        let prefs = PreferenceSet {
            profile: Profile::Balanced,
            sectors: vec![Sector::ConsumerDiscretionary, Sector::RealEstate],
            regions: vec![Region::RestOfTheWorld],
            asset_classes: vec![AssetClass::CashAndEquivalents],
        };

        let prompt = build_prompt(&prefs);
        assert!(prompt.contains("- Sectors: Consumer Discretionary, Real Estate\n"));
        assert!(prompt.contains("- Regions: Rest of the World\n"));
        assert!(prompt.contains("- Asset Classes: Cash & Equivalents\n"));
    }

    #[test]
    fn each_element_appears_exactly_once() {
        let prefs = PreferenceSet {
            profile: Profile::Moderate,
            sectors: vec![Sector::Energy],
            regions: vec![],
            asset_classes: vec![],
        };

        let prompt = build_prompt(&prefs);
        assert_eq!(prompt.matches("Energy").count(), 1);
    }
}
