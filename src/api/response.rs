//! Payloads of account-scoped endpoints whose useful content is a single field.

use crate::response::{Collection, CollectionGroup, InventoryItem, ListingDetail};
use crate::schema::{Schema, Shape};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct GetCollectionGroupsResponse {
    pub collection_groups: Vec<CollectionGroup>,
}

impl Shape for GetCollectionGroupsResponse {
    fn schema() -> Schema {
        Schema::object([("collection_groups", Schema::array(CollectionGroup::schema()))])
    }
}

#[derive(Deserialize, Debug)]
pub struct GetCollectionsInGroupResponse {
    pub collections: Vec<Collection>,
}

impl Shape for GetCollectionsInGroupResponse {
    fn schema() -> Schema {
        Schema::object([("collections", Schema::array(Collection::schema()))])
    }
}

#[derive(Deserialize, Debug)]
pub struct GetInventoryItemsResponse {
    pub inventory_items: Vec<InventoryItem>,
}

impl Shape for GetInventoryItemsResponse {
    fn schema() -> Schema {
        Schema::object([("inventory_items", Schema::array(InventoryItem::schema()))])
    }
}

#[derive(Deserialize, Debug)]
pub struct GetStubsResponse {
    pub data: u64,
}

impl Shape for GetStubsResponse {
    fn schema() -> Schema {
        Schema::object([("data", Schema::non_negative_integer())])
    }
}

#[derive(Deserialize, Debug)]
pub struct GetListingResponse {
    pub data: ListingDetail,
}

impl Shape for GetListingResponse {
    fn schema() -> Schema {
        Schema::object([("data", ListingDetail::schema())])
    }
}
