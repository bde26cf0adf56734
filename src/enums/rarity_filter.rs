use serde::{Serialize, Deserialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Rarity filter for marketplace listings.
///
/// The filter is lowercase on the wire, unlike the rarity in card records (see
/// [`CardRarity`](super::CardRarity)).
#[derive(Debug, Serialize, Deserialize, Display, EnumString, AsRefStr, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RarityFilter {
    Diamond,
    Gold,
    Silver,
    Bronze,
    Common,
}

impl From<super::CardRarity> for RarityFilter {
    fn from(rarity: super::CardRarity) -> Self {
        match rarity {
            super::CardRarity::Diamond => Self::Diamond,
            super::CardRarity::Gold => Self::Gold,
            super::CardRarity::Silver => Self::Silver,
            super::CardRarity::Bronze => Self::Bronze,
            super::CardRarity::Common => Self::Common,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::CardRarity;

    #[test]
    fn converts_from_card_rarity() {
        assert_eq!(RarityFilter::from(CardRarity::Diamond).to_string(), "diamond");
    }
}
