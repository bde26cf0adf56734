use super::InventoryItem;
use crate::schema::{Schema, Shape};
use serde::{Serialize, Deserialize};

/// An unopened pack owned by the account.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct MyPack {
    /// The ID used to open the pack.
    pub id: String,
    pub name: String,
    /// How many of this pack are owned. A numeric string.
    pub qty: String,
    pub type_id: String,
    pub img: String,
}

impl MyPack {
    /// The quantity as a number.
    pub fn quantity(&self) -> Option<u64> {
        self.qty.parse().ok()
    }
}

impl Shape for MyPack {
    fn schema() -> Schema {
        Schema::object([
            ("id", Schema::string()),
            ("name", Schema::string()),
            ("qty", Schema::numeric_string()),
            ("type_id", Schema::string()),
            ("img", Schema::url()),
        ])
    }
}

/// The account's unopened packs.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct MyPacks {
    pub item_draft_pack_id: String,
    #[serde(rename = "data")]
    pub packs: Vec<MyPack>,
}

impl Shape for MyPacks {
    fn schema() -> Schema {
        Schema::object([
            ("item_draft_pack_id", Schema::string()),
            ("data", Schema::array(MyPack::schema())),
        ])
    }
}

/// A card drawn from a pack.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct PackCard {
    pub uuid: String,
    pub name: String,
    pub img: String,
    pub rarity: String,
    pub qty: String,
}

impl Shape for PackCard {
    fn schema() -> Schema {
        Schema::object([
            ("uuid", Schema::string()),
            ("name", Schema::string()),
            ("img", Schema::string()),
            ("rarity", Schema::string()),
            ("qty", Schema::numeric_string()),
        ])
    }
}

/// The result of opening a pack.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct OpenedPack {
    /// Summaries of the drawn cards.
    #[serde(rename = "data")]
    pub cards: Vec<PackCard>,
    /// Full records of the drawn cards.
    pub items: Vec<InventoryItem>,
}

impl OpenedPack {
    /// Gets the full record for a drawn card.
    pub fn item(&self, card: &PackCard) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.uuid == card.uuid)
    }
}

impl Shape for OpenedPack {
    fn schema() -> Schema {
        Schema::object([
            ("data", Schema::array(PackCard::schema())),
            ("items", Schema::array(InventoryItem::schema())),
        ])
    }
}
