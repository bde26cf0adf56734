use serde::{Serialize, Deserialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Field to sort marketplace listings by.
#[derive(Debug, Serialize, Deserialize, Display, EnumString, AsRefStr, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ListingSort {
    /// By rank.
    Rank,
    /// By the best price an item can be sold for.
    BestSellPrice,
    /// By the best price an item can be bought for.
    BestBuyPrice,
}
