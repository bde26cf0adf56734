use serde::{Serialize, Deserialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The kind of item a marketplace listing is for.
#[derive(Debug, Serialize, Deserialize, Display, EnumString, AsRefStr, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ListingType {
    /// Player cards.
    MlbCard,
    /// Equipment such as bats and gloves.
    Equipment,
    /// Unlockables such as stadiums and uniforms.
    Unlockable,
    /// Sponsorships.
    Sponsorship,
}
