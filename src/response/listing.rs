use crate::enums::{CardRarity, ListingType};
use crate::schema::{Schema, Shape};
use serde::{Serialize, Deserialize};
use serde_json::Value;
use strum::VariantNames;

/// An item on the marketplace. The `type` field on the wire selects the variant.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListingItem {
    /// Equipment.
    Equipment(Equipment),
    /// A player card.
    MlbCard(CatalogCard),
    /// An unlockable.
    Unlockable(Unlockable),
    /// A sponsorship.
    Sponsorship(Sponsorship),
}

impl ListingItem {
    /// The kind of item.
    pub fn listing_type(&self) -> ListingType {
        match self {
            Self::Equipment(_) => ListingType::Equipment,
            Self::MlbCard(_) => ListingType::MlbCard,
            Self::Unlockable(_) => ListingType::Unlockable,
            Self::Sponsorship(_) => ListingType::Sponsorship,
        }
    }

    /// The UUID of the item.
    pub fn uuid(&self) -> &str {
        match self {
            Self::Equipment(item) => &item.uuid,
            Self::MlbCard(item) => &item.uuid,
            Self::Unlockable(item) => &item.uuid,
            Self::Sponsorship(item) => &item.uuid,
        }
    }

    /// The display name of the item.
    pub fn name(&self) -> &str {
        match self {
            Self::Equipment(item) => &item.name,
            Self::MlbCard(item) => &item.name,
            Self::Unlockable(item) => &item.name,
            Self::Sponsorship(item) => &item.name,
        }
    }

    /// The URL of the item's image.
    pub fn img(&self) -> &str {
        match self {
            Self::Equipment(item) => &item.img,
            Self::MlbCard(item) => &item.img,
            Self::Unlockable(item) => &item.img,
            Self::Sponsorship(item) => &item.img,
        }
    }

    /// The player card, if this is one.
    pub fn as_card(&self) -> Option<&CatalogCard> {
        match self {
            Self::MlbCard(card) => Some(card),
            _ => None,
        }
    }
}

impl Shape for ListingItem {
    fn schema() -> Schema {
        Schema::union("type", [
            (Value::from("equipment"), Equipment::schema()),
            (Value::from("mlb_card"), CatalogCard::schema()),
            (Value::from("unlockable"), Unlockable::schema()),
            (Value::from("sponsorship"), Sponsorship::schema()),
        ])
    }
}

// Fields every catalog item carries.
fn item_fields(tag: &'static str) -> Vec<(&'static str, Schema)> {
    vec![
        ("type", Schema::literal(tag)),
        ("uuid", Schema::string()),
        ("img", Schema::url()),
        ("baked_img", Schema::url()),
        ("name", Schema::non_empty_string()),
        ("short_description", Schema::string().nullable()),
    ]
}

/// Equipment such as a bat or glove.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Equipment {
    pub uuid: String,
    pub img: String,
    pub baked_img: String,
    pub name: String,
    pub short_description: Option<String>,
    pub rarity: String,
    pub brand: String,
    pub brand_logo_name: String,
    /// The equipment slot, e.g. "Bat".
    pub slot: String,
    /// Names of the attributes the equipment boosts. Parallel to `attribute_values`.
    pub attribute_names: Vec<String>,
    pub attribute_values: Vec<String>,
    pub description: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sellable: Option<bool>,
}

impl Shape for Equipment {
    fn schema() -> Schema {
        Schema::Object(item_fields("equipment")).with_fields([
            ("rarity", Schema::string()),
            ("brand", Schema::string()),
            ("brand_logo_name", Schema::string()),
            ("slot", Schema::string()),
            ("attribute_names", Schema::array(Schema::string())),
            ("attribute_values", Schema::array(Schema::string())),
            ("description", Schema::string()),
            ("is_sellable", Schema::boolean().optional()),
        ])
    }
}

/// A player card as it appears in the marketplace catalog.
///
/// This is a narrower record than [`InventoryItem`](super::InventoryItem), which also carries
/// ratings and pitches.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CatalogCard {
    pub uuid: String,
    pub img: String,
    pub baked_img: String,
    pub sc_baked_img: Option<String>,
    pub name: String,
    pub short_description: Option<String>,
    pub rarity: CardRarity,
    pub team: String,
    pub team_short_name: String,
    /// Overall rating.
    pub ovr: u32,
    pub series: String,
    pub series_texture_name: String,
    pub series_year: u32,
    pub display_position: String,
    pub has_augment: bool,
    pub augment_text: Option<String>,
    /// When the augment expires, as an ISO 8601 date-time.
    pub augment_end_date: Option<String>,
    pub has_matchup: bool,
    pub stars: Option<f64>,
    pub trend: Option<f64>,
    pub new_rank: u32,
    pub has_rank_change: bool,
    pub event: bool,
    pub set_name: String,
    pub is_live_set: bool,
    pub ui_anim_index: u32,
}

impl CatalogCard {
    /// Parses the augment end date.
    pub fn augment_ends_at(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        self.augment_end_date.as_deref()
            .and_then(|date| chrono::DateTime::parse_from_rfc3339(date).ok())
    }
}

impl Shape for CatalogCard {
    fn schema() -> Schema {
        Schema::Object(item_fields("mlb_card")).with_fields([
            ("sc_baked_img", Schema::url().nullable()),
            ("rarity", Schema::one_of(CardRarity::VARIANTS)),
            ("team", Schema::non_empty_string()),
            ("team_short_name", Schema::non_empty_string()),
            ("ovr", Schema::non_negative_integer()),
            ("series", Schema::non_empty_string()),
            ("series_texture_name", Schema::string()),
            ("series_year", Schema::integer_at_least(1900)),
            ("display_position", Schema::non_empty_string()),
            ("has_augment", Schema::boolean()),
            ("augment_text", Schema::string().nullable()),
            ("augment_end_date", Schema::date_time().nullable()),
            ("has_matchup", Schema::boolean()),
            ("stars", Schema::number().nullable()),
            ("trend", Schema::number().nullable()),
            ("new_rank", Schema::non_negative_integer()),
            ("has_rank_change", Schema::boolean()),
            ("event", Schema::boolean()),
            ("set_name", Schema::non_empty_string()),
            ("is_live_set", Schema::boolean()),
            ("ui_anim_index", Schema::non_negative_integer()),
        ])
    }
}

/// An unlockable such as a stadium or uniform.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Unlockable {
    pub uuid: String,
    pub img: String,
    pub baked_img: String,
    pub name: String,
    pub short_description: Option<String>,
    pub rarity: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sellable: Option<bool>,
}

impl Shape for Unlockable {
    fn schema() -> Schema {
        Schema::Object(item_fields("unlockable")).with_fields([
            ("rarity", Schema::string()),
            ("is_sellable", Schema::boolean().optional()),
        ])
    }
}

/// A sponsorship.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Sponsorship {
    pub uuid: String,
    pub img: String,
    pub baked_img: String,
    pub name: String,
    pub short_description: Option<String>,
    pub rarity: String,
    pub bonus: String,
    pub brand: String,
    pub brand_logo_name: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sellable: Option<bool>,
}

impl Shape for Sponsorship {
    fn schema() -> Schema {
        Schema::Object(item_fields("sponsorship")).with_fields([
            ("rarity", Schema::string()),
            ("bonus", Schema::string()),
            ("brand", Schema::string()),
            ("brand_logo_name", Schema::string()),
            ("is_sellable", Schema::boolean().optional()),
        ])
    }
}

/// A marketplace listing.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Listing {
    pub listing_name: String,
    /// The best price the item can be sold for, in stubs.
    pub best_sell_price: u64,
    /// The best price the item can be bought for, in stubs.
    pub best_buy_price: u64,
    pub item: ListingItem,
}

impl Shape for Listing {
    fn schema() -> Schema {
        Schema::object([
            ("listing_name", Schema::non_empty_string()),
            ("best_sell_price", Schema::non_negative_integer()),
            ("best_buy_price", Schema::non_negative_integer()),
            ("item", ListingItem::schema()),
        ])
    }
}

/// A page of marketplace listings.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ListingsPage {
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
    pub listings: Vec<Listing>,
}

impl ListingsPage {
    /// Whether there are more pages after this one.
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

impl Shape for ListingsPage {
    fn schema() -> Schema {
        Schema::object([
            ("page", Schema::integer_at_least(1)),
            ("per_page", Schema::integer_at_least(1)),
            ("total_pages", Schema::non_negative_integer()),
            ("listings", Schema::array(Listing::schema())),
        ])
    }
}

/// An open buy or sell order for a listing.
///
/// Prices and quantities are numeric strings on the wire and are kept as strings.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct MarketOrder {
    pub price: String,
    /// The price formatted for display, e.g. "1,200".
    pub display_price: String,
    pub quantity: String,
    pub display_quantity: String,
}

impl MarketOrder {
    /// The price as a number.
    pub fn price_amount(&self) -> Option<u64> {
        self.price.parse().ok()
    }

    /// The quantity as a number.
    pub fn quantity_amount(&self) -> Option<u64> {
        self.quantity.parse().ok()
    }
}

impl Shape for MarketOrder {
    fn schema() -> Schema {
        Schema::object([
            ("price", Schema::numeric_string()),
            ("display_price", Schema::non_empty_string()),
            ("quantity", Schema::numeric_string()),
            ("display_quantity", Schema::non_empty_string()),
        ])
    }
}

/// The account's standing for a listing.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ListingInfo {
    /// Sales tax as a percentage string, e.g. "10%".
    pub sales_tax: String,
    pub owned: String,
    pub sellable: String,
}

impl ListingInfo {
    /// The sales tax percentage as a number.
    pub fn sales_tax_percent(&self) -> Option<u32> {
        self.sales_tax.strip_suffix('%')?.parse().ok()
    }

    /// How many of the item the account owns.
    pub fn owned_count(&self) -> Option<u64> {
        self.owned.parse().ok()
    }

    /// How many of the owned items can be sold.
    pub fn sellable_count(&self) -> Option<u64> {
        self.sellable.parse().ok()
    }
}

impl Shape for ListingInfo {
    fn schema() -> Schema {
        Schema::object([
            ("sales_tax", Schema::pattern(lazy_regex::regex!(r"^\d+%$"), "percentage string")),
            ("owned", Schema::numeric_string()),
            ("sellable", Schema::numeric_string()),
        ])
    }
}

/// The order book for a single listing.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ListingDetail {
    pub info: ListingInfo,
    pub items_to_sell: Vec<MarketOrder>,
    pub items_to_buy: Vec<MarketOrder>,
}

impl ListingDetail {
    /// The lowest price someone is selling for.
    pub fn lowest_sell_price(&self) -> Option<u64> {
        self.items_to_sell.iter()
            .filter_map(MarketOrder::price_amount)
            .min()
    }

    /// The highest price someone is buying for.
    pub fn highest_buy_price(&self) -> Option<u64> {
        self.items_to_buy.iter()
            .filter_map(MarketOrder::price_amount)
            .max()
    }
}

impl Shape for ListingDetail {
    fn schema() -> Schema {
        Schema::object([
            ("info", ListingInfo::schema()),
            ("items_to_sell", Schema::array(MarketOrder::schema())),
            ("items_to_buy", Schema::array(MarketOrder::schema())),
        ])
    }
}
