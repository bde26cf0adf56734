use crate::schema::{Schema, Shape};
use serde::{Serialize, Deserialize};

macro_rules! ratings {
    ($($field:ident),+ $(,)?) => {
        /// Attribute ratings of a card.
        #[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
        pub struct Ratings {
            $(pub $field: u32,)+
        }

        impl Ratings {
            /// The wire names of every rating.
            pub const NAMES: &'static [&'static str] = &[$(stringify!($field)),+];
        }
    };
}

ratings!(
    stamina,
    pitching_clutch,
    hits_per_bf,
    k_per_bf,
    bb_per_bf,
    hr_per_bf,
    pitch_velocity,
    pitch_control,
    pitch_movement,
    contact_left,
    contact_right,
    power_left,
    power_right,
    plate_vision,
    plate_discipline,
    batting_clutch,
    bunting_ability,
    drag_bunting_ability,
    hitting_durability,
    fielding_durability,
    fielding_ability,
    arm_strength,
    arm_accuracy,
    reaction_time,
    blocking,
    speed,
    baserunning_ability,
    baserunning_aggression,
);

/// A pitch in a pitcher's arsenal.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Pitch {
    /// The name of the pitch, e.g. "4-Seam Fastball".
    pub name: String,
    pub speed: u32,
    pub control: u32,
    pub movement: u32,
}

impl Shape for Pitch {
    fn schema() -> Schema {
        Schema::object([
            ("name", Schema::string()),
            ("speed", Schema::non_negative_integer()),
            ("control", Schema::non_negative_integer()),
            ("movement", Schema::non_negative_integer()),
        ])
    }
}

/// A quirk of a player.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Quirk {
    pub name: String,
    pub description: String,
    /// URL of the quirk's icon.
    pub img: String,
}

impl Shape for Quirk {
    fn schema() -> Schema {
        Schema::object([
            ("name", Schema::string()),
            ("description", Schema::string()),
            ("img", Schema::string()),
        ])
    }
}

/// A player card owned by the account, with full ratings.
///
/// Returned by inventory lookups, collection details and pack openings.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct InventoryItem {
    pub uuid: String,
    /// The type of item, e.g. "mlb_card".
    #[serde(rename = "type")]
    pub item_type: String,
    pub img: String,
    pub baked_img: String,
    pub sc_baked_img: Option<String>,
    pub name: String,
    pub short_description: Option<String>,
    /// The rarity, e.g. "Diamond".
    pub rarity: String,
    pub team: String,
    pub team_short_name: String,
    /// Overall rating.
    pub ovr: u32,
    pub series: String,
    pub series_texture_name: String,
    pub series_year: u32,
    pub display_position: String,
    /// Comma-separated secondary positions. Empty if there are none.
    pub display_secondary_positions: String,
    pub jersey_number: String,
    pub age: u32,
    pub bat_hand: String,
    pub throw_hand: String,
    pub weight: String,
    pub height: String,
    pub born: String,
    pub is_hitter: bool,
    #[serde(flatten)]
    pub ratings: Ratings,
    pub hit_rank_image: String,
    pub fielding_rank_image: String,
    pub pitches: Vec<Pitch>,
    pub quirks: Vec<Quirk>,
    pub is_sellable: bool,
    pub has_augment: bool,
    pub augment_text: Option<String>,
    pub augment_end_date: Option<String>,
    pub has_matchup: bool,
    pub stars: Option<f64>,
    /// Price trend. This is a string in inventory records, unlike catalog records.
    pub trend: Option<String>,
    pub new_rank: u32,
    pub has_rank_change: bool,
    pub event: bool,
    pub set_name: String,
    pub is_live_set: bool,
    pub ui_anim_index: u32,
    /// Where copies of the card are held.
    pub locations: Vec<String>,
    /// The inventory ID of this copy.
    pub id: u64,
}

impl InventoryItem {
    /// Secondary positions as a list.
    pub fn secondary_positions(&self) -> impl Iterator<Item = &str> {
        self.display_secondary_positions
            .split(',')
            .map(str::trim)
            .filter(|position| !position.is_empty())
    }
}

impl Shape for InventoryItem {
    fn schema() -> Schema {
        let identity = [
            ("uuid", Schema::string()),
            ("type", Schema::string()),
            ("img", Schema::string()),
            ("baked_img", Schema::string()),
            ("sc_baked_img", Schema::string().nullable()),
            ("name", Schema::string()),
            ("short_description", Schema::string().nullable()),
            ("rarity", Schema::string()),
            ("team", Schema::string()),
            ("team_short_name", Schema::string()),
            ("ovr", Schema::non_negative_integer()),
            ("series", Schema::string()),
            ("series_texture_name", Schema::string()),
            ("series_year", Schema::non_negative_integer()),
            ("display_position", Schema::string()),
            ("display_secondary_positions", Schema::string()),
            ("jersey_number", Schema::string()),
            ("age", Schema::non_negative_integer()),
            ("bat_hand", Schema::string()),
            ("throw_hand", Schema::string()),
            ("weight", Schema::string()),
            ("height", Schema::string()),
            ("born", Schema::string()),
            ("is_hitter", Schema::boolean()),
        ];
        let ratings = Ratings::NAMES.iter()
            .map(|name| (*name, Schema::non_negative_integer()));
        let rest = [
            ("hit_rank_image", Schema::string()),
            ("fielding_rank_image", Schema::string()),
            ("pitches", Schema::array(Pitch::schema())),
            ("quirks", Schema::array(Quirk::schema())),
            ("is_sellable", Schema::boolean()),
            ("has_augment", Schema::boolean()),
            ("augment_text", Schema::string().nullable()),
            ("augment_end_date", Schema::string().nullable()),
            ("has_matchup", Schema::boolean()),
            ("stars", Schema::number().nullable()),
            ("trend", Schema::string().nullable()),
            ("new_rank", Schema::non_negative_integer()),
            ("has_rank_change", Schema::boolean()),
            ("event", Schema::boolean()),
            ("set_name", Schema::string()),
            ("is_live_set", Schema::boolean()),
            ("ui_anim_index", Schema::non_negative_integer()),
            ("locations", Schema::array(Schema::string())),
            ("id", Schema::non_negative_integer()),
        ];

        Schema::object(identity.into_iter().chain(ratings).chain(rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{parse, IssueKind};
    use serde_json::Value;

    fn item_fixture() -> Value {
        serde_json::from_str(include_str!("fixtures/inventory_item.json")).unwrap()
    }

    #[test]
    fn parses_inventory_item() {
        let item = parse::<InventoryItem>(&item_fixture()).unwrap();

        assert_eq!(item.item_type, "mlb_card");
        assert_eq!(item.ratings.stamina, 65);
        assert_eq!(item.ratings.baserunning_aggression, 71);
        assert_eq!(item.pitches.len(), 2);
        assert_eq!(item.trend.as_deref(), Some("+250"));
        assert_eq!(item.secondary_positions().collect::<Vec<_>>(), vec!["1B", "LF"]);
    }

    #[test]
    fn has_every_rating() {
        assert_eq!(Ratings::NAMES.len(), 28);
    }

    #[test]
    fn reports_every_missing_rating() {
        let mut value = item_fixture();
        let object = value.as_object_mut().unwrap();

        object.remove("stamina");
        object.remove("blocking");

        let report = parse::<InventoryItem>(&value).unwrap_err();

        assert_eq!(report.paths().collect::<Vec<_>>(), vec!["stamina", "blocking"]);
        assert!(report.issues().iter().all(|issue| issue.kind == IssueKind::Missing));
    }

    #[test]
    fn rejects_numeric_trend() {
        let mut value = item_fixture();

        value["trend"] = Value::from(250);

        let report = parse::<InventoryItem>(&value).unwrap_err();

        assert_eq!(report.find("trend").map(|issue| issue.kind), Some(IssueKind::WrongKind));
    }
}
