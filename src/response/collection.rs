use super::InventoryItem;
use crate::schema::{Schema, Shape};
use serde::{Serialize, Deserialize};

/// A group of collections, e.g. "Live Series".
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct CollectionGroup {
    pub id: String,
    pub name: String,
    pub texture_name: String,
    pub texture_url: String,
}

impl Shape for CollectionGroup {
    fn schema() -> Schema {
        Schema::object([
            ("id", Schema::string()),
            ("name", Schema::string()),
            ("texture_name", Schema::string()),
            ("texture_url", Schema::string()),
        ])
    }
}

/// Completion counters. All three are strings on the wire.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Progress {
    /// Starts with "1" when complete, e.g. "0" or "1A".
    pub is_complete: String,
    pub progress_current: String,
    pub progress_max: String,
}

impl Progress {
    fn fields() -> [(&'static str, Schema); 3] {
        [
            ("is_complete", Schema::string()),
            ("progress_current", Schema::numeric_string()),
            ("progress_max", Schema::numeric_string()),
        ]
    }

    /// Whether the collection is complete.
    pub fn is_completed(&self) -> bool {
        self.is_complete.starts_with('1')
    }

    /// The current progress as a number.
    pub fn current(&self) -> Option<u64> {
        self.progress_current.parse().ok()
    }

    /// The required progress as a number.
    pub fn max(&self) -> Option<u64> {
        self.progress_max.parse().ok()
    }

    /// How far along the collection is, from 0.0 to 1.0.
    pub fn ratio(&self) -> Option<f64> {
        match (self.current()?, self.max()?) {
            (_, 0) => None,
            (current, max) => Some((current as f64 / max as f64).min(1.0)),
        }
    }
}

impl Shape for Progress {
    fn schema() -> Schema {
        Schema::object(Self::fields())
    }
}

/// A collection within a group.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub texture_name: String,
    #[serde(flatten)]
    pub progress: Progress,
    pub texture_url: String,
}

impl Shape for Collection {
    fn schema() -> Schema {
        Schema::object([
            ("id", Schema::string()),
            ("name", Schema::string()),
            ("texture_name", Schema::string()),
        ])
            .with_fields(Progress::fields())
            .with_fields([("texture_url", Schema::string())])
    }
}

/// A reward for completing a collection.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Reward {
    pub name: String,
    pub img: String,
    /// How many are rewarded. A numeric string.
    pub qty: String,
}

impl Shape for Reward {
    fn schema() -> Schema {
        Schema::object([
            ("name", Schema::string()),
            ("img", Schema::string()),
            ("qty", Schema::numeric_string()),
        ])
    }
}

/// A collection with its rewards.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct CollectionDetail {
    #[serde(flatten)]
    pub collection: Collection,
    pub rewards: Vec<Reward>,
}

impl Shape for CollectionDetail {
    fn schema() -> Schema {
        Collection::schema().with_fields([("rewards", Schema::array(Reward::schema()))])
    }
}

/// A collection and the inventory items that count towards it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CollectionView {
    pub collection: CollectionDetail,
    pub inventory_items: Vec<InventoryItem>,
}

impl Shape for CollectionView {
    fn schema() -> Schema {
        Schema::object([
            ("collection", CollectionDetail::schema()),
            ("inventory_items", Schema::array(InventoryItem::schema())),
        ])
    }
}

/// Completion status after collecting cards into a collection.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct CollectionStatus {
    #[serde(flatten)]
    pub progress: Progress,
    /// Status of the group the collection belongs to.
    pub group_status: Progress,
}

/// The result of collecting cards into a collection.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct CollectionAdvance {
    pub collection_status: CollectionStatus,
}

impl Shape for CollectionAdvance {
    fn schema() -> Schema {
        let status = Schema::object(Progress::fields())
            .with_fields([("group_status", Progress::schema())]);

        Schema::object([("collection_status", status)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{parse, IssueKind};
    use serde_json::{json, Value};

    #[test]
    fn parses_collection_view() {
        let value: Value = serde_json::from_str(include_str!("fixtures/collection_view.json")).unwrap();
        let view = parse::<CollectionView>(&value).unwrap();
        let progress = &view.collection.collection.progress;

        assert_eq!(view.collection.collection.name, "Los Angeles Dodgers");
        assert_eq!(progress.current(), Some(12));
        assert_eq!(progress.max(), Some(40));
        assert_eq!(progress.ratio(), Some(0.3));
        assert!(!progress.is_completed());
        assert_eq!(view.collection.rewards[0].qty, "1");
        assert_eq!(view.inventory_items.len(), 1);
    }

    #[test]
    fn progress_is_not_coerced_from_numbers() {
        let report = parse::<Collection>(&json!({
            "id": "9",
            "name": "Mets",
            "texture_name": "nym",
            "is_complete": "0",
            "progress_current": 3,
            "progress_max": "40",
            "texture_url": "https://cdn.theshow.com/nym.png",
        })).unwrap_err();

        assert_eq!(report.find("progress_current").map(|issue| issue.kind), Some(IssueKind::WrongKind));
    }

    #[test]
    fn parses_collection_advance() {
        let advance = parse::<CollectionAdvance>(&json!({
            "collection_status": {
                "is_complete": "1A",
                "progress_current": "40",
                "progress_max": "40",
                "group_status": {
                    "is_complete": "0",
                    "progress_current": "3",
                    "progress_max": "30",
                },
            },
        })).unwrap();

        assert!(advance.collection_status.progress.is_completed());
        assert_eq!(advance.collection_status.group_status.current(), Some(3));
    }

    #[test]
    fn names_missing_group_status_field() {
        let report = parse::<CollectionAdvance>(&json!({
            "collection_status": {
                "is_complete": "0",
                "progress_current": "1",
                "progress_max": "40",
                "group_status": { "is_complete": "0", "progress_current": "3" },
            },
        })).unwrap_err();

        assert_eq!(report.paths().collect::<Vec<_>>(), vec!["collection_status.group_status.progress_max"]);
    }
}
