use serde::{Serialize, Deserialize};
use strum_macros::{AsRefStr, Display, EnumString, VariantNames};

/// The rarity of an MLB card as it appears in card records.
#[derive(Debug, Serialize, Deserialize, Display, EnumString, AsRefStr, VariantNames, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum CardRarity {
    /// Diamond.
    Diamond,
    /// Gold.
    Gold,
    /// Silver.
    Silver,
    /// Bronze.
    Bronze,
    /// Common.
    Common,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::VariantNames;

    #[test]
    fn variant_names_match_wire_values() {
        assert_eq!(CardRarity::VARIANTS, &["Diamond", "Gold", "Silver", "Bronze", "Common"]);
    }

    #[test]
    fn deserializes_case_sensitively() {
        assert_eq!(serde_json::from_str::<CardRarity>(r#""Gold""#).unwrap(), CardRarity::Gold);
        assert!(serde_json::from_str::<CardRarity>(r#""gold""#).is_err());
    }
}
