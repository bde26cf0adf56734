//! Typed client for the game's web API.
//!
//! Account-scoped endpoints are POSTed a JSON body carrying the account credentials and answer
//! with a success/failure [`Envelope`]. Public endpoints are plain GETs. Every response is
//! validated before it is returned and every operation makes exactly one request.

mod builder;
mod response;

pub use builder::GameAPIBuilder;

use response::{
    GetCollectionGroupsResponse,
    GetCollectionsInGroupResponse,
    GetInventoryItemsResponse,
    GetListingResponse,
    GetStubsResponse,
};
use crate::error::{Error, ParameterError, Result};
use crate::helpers::{get_client, join_url, parses_response};
use crate::request::{Credentials, GetListingsOptions};
use crate::response::{
    Collection,
    CollectionAdvance,
    CollectionGroup,
    CollectionView,
    Envelope,
    InventoryItem,
    ListingDetail,
    ListingItem,
    ListingsPage,
    MyPacks,
    OpenedPack,
};
use crate::schema::Shape;
use crate::serialize;
use crate::types::{AccountId, HttpClient};
use serde::Serialize;
use url::Url;

/// Default base URL for account-scoped endpoints.
pub const DEFAULT_GAME_API_BASE: &str = "https://mlb25.theshow.com/apis/app";
/// Default base URL for public endpoints.
pub const DEFAULT_PUBLIC_API_BASE: &str = "https://mlb25.theshow.com/apis";

#[derive(Serialize)]
struct AccountRequest<'a, P> {
    #[serde(with = "serialize::string")]
    account_id: AccountId,
    account_token: &'a str,
    #[serde(flatten)]
    params: P,
}

#[derive(Serialize)]
struct NoParams {}

/// The API for game and marketplace requests.
#[derive(Debug, Clone)]
pub struct GameAPI {
    /// The client for making requests.
    client: HttpClient,
    /// Base URL for account-scoped endpoints, without a trailing slash.
    game_api_base: String,
    /// Base URL for public endpoints, without a trailing slash.
    public_api_base: String,
}

impl Default for GameAPI {
    fn default() -> Self {
        GameAPIBuilder::new().build()
    }
}

impl GameAPI {
    /// Builder for constructing a [`GameAPI`].
    pub fn builder() -> GameAPIBuilder {
        GameAPIBuilder::new()
    }

    /// Gets the collection groups.
    pub async fn get_collection_groups(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<CollectionGroup>> {
        let response: GetCollectionGroupsResponse = self.request_envelope(
            "collection_view_groups.json",
            credentials,
            NoParams {},
            "get_collection_groups",
            || "Request to get collection groups failed".into(),
        ).await?;

        Ok(response.collection_groups)
    }

    /// Gets the collections in a group.
    pub async fn get_collections_in_group(
        &self,
        credentials: &Credentials,
        group_id: &str,
    ) -> Result<Vec<Collection>> {
        #[derive(Serialize)]
        struct Params<'a> {
            group_id: &'a str,
        }

        let response: GetCollectionsInGroupResponse = self.request_envelope(
            "collection_view_collections.json",
            credentials,
            Params {
                group_id,
            },
            "get_collections_in_group",
            || format!("Request to get collections in group {group_id} failed"),
        ).await?;

        Ok(response.collections)
    }

    /// Gets a collection with its rewards and the inventory items that count towards it.
    pub async fn get_collection(
        &self,
        credentials: &Credentials,
        collection_id: &str,
    ) -> Result<CollectionView> {
        #[derive(Serialize)]
        struct Params<'a> {
            collection_id: &'a str,
        }

        self.request_envelope(
            "collection_view.json",
            credentials,
            Params {
                collection_id,
            },
            "get_collection",
            || format!("Request to get collection with id {collection_id} failed"),
        ).await
    }

    /// Collects cards into a collection.
    pub async fn collect_cards(
        &self,
        credentials: &Credentials,
        collection_id: &str,
        item_ids: &[String],
    ) -> Result<CollectionAdvance> {
        #[derive(Serialize)]
        struct Params<'a> {
            collection_id: &'a str,
            #[serde(serialize_with = "serialize::comma_separated")]
            item_ids: &'a [String],
        }

        self.request_envelope(
            "collection_advance.json",
            credentials,
            Params {
                collection_id,
                item_ids,
            },
            "collect_cards",
            || format!("Request to collect cards for collection id {collection_id} failed"),
        ).await
    }

    /// Gets inventory items by their IDs.
    pub async fn get_inventory_items(
        &self,
        credentials: &Credentials,
        item_ids: &[String],
    ) -> Result<Vec<InventoryItem>> {
        #[derive(Serialize)]
        struct Params<'a> {
            item_ids: &'a [String],
        }

        let response: GetInventoryItemsResponse = self.request_envelope(
            "inventory_items.json",
            credentials,
            Params {
                item_ids,
            },
            "get_inventory_items",
            || format!("Request to get inventory items with ids {} failed", item_ids.join(",")),
        ).await?;

        Ok(response.inventory_items)
    }

    /// Gets the number of stubs in the account's wallet.
    pub async fn get_stubs(
        &self,
        credentials: &Credentials,
    ) -> Result<u64> {
        let response: GetStubsResponse = self.request_envelope(
            "view_my_wallet.json",
            credentials,
            NoParams {},
            "get_stubs",
            || "Request to get stubs failed".into(),
        ).await?;

        Ok(response.data)
    }

    /// Gets the account's unopened packs.
    pub async fn get_my_packs(
        &self,
        credentials: &Credentials,
    ) -> Result<MyPacks> {
        let account_id = credentials.account_id;

        self.request_envelope(
            "view_my_packs.json",
            credentials,
            NoParams {},
            "get_my_packs",
            || format!("Failed to get packs for account with id {account_id}"),
        ).await
    }

    /// Opens a pack.
    pub async fn open_pack(
        &self,
        credentials: &Credentials,
        pack_id: &str,
    ) -> Result<OpenedPack> {
        #[derive(Serialize)]
        struct Params<'a> {
            id: &'a str,
        }

        self.request_envelope(
            "open_pack.json",
            credentials,
            Params {
                id: pack_id,
            },
            "open_pack",
            || format!("Failed to open pack with id {pack_id}"),
        ).await
    }

    /// Gets the order book and the account's standing for a listing.
    pub async fn get_listing(
        &self,
        credentials: &Credentials,
        uuid: &str,
    ) -> Result<ListingDetail> {
        #[derive(Serialize)]
        struct Params<'a> {
            uuid: &'a str,
        }

        let response: GetListingResponse = self.request_envelope(
            "view_listing.json",
            credentials,
            Params {
                uuid,
            },
            "get_listing",
            || format!("Failed to get listing for item with uuid {uuid}"),
        ).await?;

        Ok(response.data)
    }

    /// Browses marketplace listings. No credentials are needed.
    pub async fn get_listings(
        &self,
        options: &GetListingsOptions,
    ) -> Result<ListingsPage> {
        let url = self.listings_url(options)?;

        self.request_public(
            url,
            "get_listings",
            || "Failed to get listings".into(),
        ).await
    }

    /// Gets a single item from the catalog. No credentials are needed.
    pub async fn get_item(
        &self,
        uuid: &str,
    ) -> Result<ListingItem> {
        let mut url = self.get_public_url("item.json")?;

        url.query_pairs_mut().append_pair("uuid", uuid);

        self.request_public(
            url,
            "get_item",
            || format!("Request to get item with uuid {uuid} failed"),
        ).await
    }

    /// The URL for browsing listings. Unset options are left out and no options produce a URL
    /// without a query string.
    pub fn listings_url(
        &self,
        options: &GetListingsOptions,
    ) -> Result<Url> {
        let mut url = self.get_public_url("listings.json")?;
        let pairs = options.query_pairs();

        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }

    async fn request_envelope<P, T>(
        &self,
        pathname: &str,
        credentials: &Credentials,
        params: P,
        operation: &'static str,
        context: impl Fn() -> String,
    ) -> Result<T>
    where
        P: Serialize,
        T: Shape,
    {
        let url = join_url(&self.game_api_base, pathname);
        let body = AccountRequest {
            account_id: credentials.account_id,
            account_token: &credentials.account_token,
            params,
        };

        log::debug!("POST {url}");

        let response = self.client.post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|source| Error::Transport {
                context: context(),
                source,
            })?;
        let envelope: Envelope<T> = parses_response(response, operation, context).await?;

        envelope.into_result()
    }

    async fn request_public<T>(
        &self,
        url: Url,
        operation: &'static str,
        context: impl Fn() -> String,
    ) -> Result<T>
    where
        T: Shape,
    {
        log::debug!("GET {url}");

        let response = self.client.get(url)
            .send()
            .await
            .map_err(|source| Error::Transport {
                context: context(),
                source,
            })?;

        parses_response(response, operation, context).await
    }

    fn get_public_url(
        &self,
        pathname: &str,
    ) -> Result<Url> {
        let url = join_url(&self.public_api_base, pathname)
            .parse::<Url>()
            .map_err(ParameterError::from)?;

        Ok(url)
    }
}

impl From<GameAPIBuilder> for GameAPI {
    fn from(builder: GameAPIBuilder) -> Self {
        let client = builder.client
            .unwrap_or_else(|| get_client(builder.user_agent));

        Self {
            client,
            game_api_base: builder.game_api_base.trim_end_matches('/').into(),
            public_api_base: builder.public_api_base.trim_end_matches('/').into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{ListingType, SortOrder};
    use crate::testing::MockTransport;
    use reqwest::Method;
    use serde_json::{json, Value};

    fn credentials() -> Credentials {
        Credentials::new(42, "abc")
    }

    fn api(transport: &MockTransport) -> GameAPI {
        GameAPI::builder()
            .client(transport.client())
            .build()
    }

    fn fixture(contents: &str) -> Value {
        serde_json::from_str(contents).unwrap()
    }

    #[tokio::test]
    async fn gets_empty_collections_in_group() {
        let transport = MockTransport::json(json!({ "success": true, "message": "ok", "collections": [] }));
        let collections = api(&transport).get_collections_in_group(&credentials(), "g1").await.unwrap();
        let request = transport.single_request();

        assert!(collections.is_empty());
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.as_str(), "https://mlb25.theshow.com/apis/app/collection_view_collections.json");
        assert_eq!(request.body, Some(json!({
            "account_id": "42",
            "account_token": "abc",
            "group_id": "g1",
        })));
    }

    #[tokio::test]
    async fn gets_stubs_as_number() {
        let transport = MockTransport::json(json!({ "success": true, "message": "ok", "data": 1500 }));
        let stubs = api(&transport).get_stubs(&credentials()).await.unwrap();

        assert_eq!(stubs, 1500);
        assert_eq!(transport.single_request().body, Some(json!({
            "account_id": "42",
            "account_token": "abc",
        })));
    }

    #[tokio::test]
    async fn rejects_stubs_sent_as_string() {
        let transport = MockTransport::json(json!({ "success": true, "message": "ok", "data": "1500" }));
        let error = api(&transport).get_stubs(&credentials()).await.unwrap_err();

        assert_eq!(error.to_string(), "Validation failed for get_stubs");
        assert!(error.validation_report().unwrap().find("data").is_some());
    }

    #[tokio::test]
    async fn failure_envelope_is_api_error() {
        let transport = MockTransport::json(json!({ "success": false, "message": "Session expired" }));
        let error = api(&transport).get_collection_groups(&credentials()).await.unwrap_err();

        assert!(error.is_api_failure());
        assert_eq!(error.to_string(), "Session expired");
    }

    #[tokio::test]
    async fn non_success_status_is_http_error() {
        let transport = MockTransport::text("Service Unavailable").status(503);
        let error = api(&transport).open_pack(&credentials(), "8812").await.unwrap_err();

        assert!(matches!(error, Error::Http { status, .. } if status.as_u16() == 503));
        assert!(error.to_string().starts_with("Failed to open pack with id 8812"));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn non_json_body_is_unknown_error() {
        let transport = MockTransport::text("<html>Maintenance</html>");
        let error = api(&transport).get_my_packs(&credentials()).await.unwrap_err();

        assert!(matches!(error, Error::Unknown { operation: "get_my_packs", .. }));
    }

    #[tokio::test]
    async fn validation_error_names_operation() {
        let transport = MockTransport::json(json!({
            "success": true,
            "message": "",
            "collection_groups": [{ "id": 1, "name": "Live", "texture_name": "live", "texture_url": "" }],
        }));
        let error = api(&transport).get_collection_groups(&credentials()).await.unwrap_err();
        let report = error.validation_report().unwrap();

        assert_eq!(error.to_string(), "Validation failed for get_collection_groups");
        assert_eq!(report.paths().collect::<Vec<_>>(), vec!["collection_groups[0].id"]);
    }

    #[tokio::test]
    async fn collects_cards_with_joined_ids() {
        let transport = MockTransport::json(json!({
            "success": true,
            "message": "",
            "collection_status": {
                "is_complete": "0",
                "progress_current": "14",
                "progress_max": "40",
                "group_status": { "is_complete": "0", "progress_current": "2", "progress_max": "30" },
            },
        }));
        let item_ids = vec!["130881".to_string(), "130882".to_string()];
        let advance = api(&transport).collect_cards(&credentials(), "174", &item_ids).await.unwrap();

        assert_eq!(advance.collection_status.progress.current(), Some(14));
        assert_eq!(transport.single_request().body, Some(json!({
            "account_id": "42",
            "account_token": "abc",
            "collection_id": "174",
            "item_ids": "130881,130882",
        })));
    }

    #[tokio::test]
    async fn gets_inventory_items_with_id_list() {
        let item = fixture(include_str!("../response/fixtures/inventory_item.json"));
        let transport = MockTransport::json(json!({ "success": true, "message": "", "inventory_items": [item] }));
        let item_ids = vec!["130881".to_string()];
        let items = api(&transport).get_inventory_items(&credentials(), &item_ids).await.unwrap();

        assert_eq!(items[0].id, 130881);
        assert_eq!(transport.single_request().body.unwrap()["item_ids"], json!(["130881"]));
    }

    #[tokio::test]
    async fn gets_collection() {
        let transport = MockTransport::json(fixture(include_str!("../response/fixtures/collection_view.json")));
        let view = api(&transport).get_collection(&credentials(), "174").await.unwrap();

        assert_eq!(view.collection.collection.id, "174");
        assert_eq!(transport.single_request().body.unwrap()["collection_id"], "174");
    }

    #[tokio::test]
    async fn opens_pack() {
        let transport = MockTransport::json(fixture(include_str!("../response/fixtures/open_pack.json")));
        let opened = api(&transport).open_pack(&credentials(), "8812").await.unwrap();

        assert_eq!(opened.cards.len(), 1);
        assert_eq!(transport.single_request().body.unwrap()["id"], "8812");
    }

    #[tokio::test]
    async fn gets_listing() {
        let transport = MockTransport::json(json!({
            "success": true,
            "message": "",
            "data": {
                "info": { "sales_tax": "10%", "owned": "0", "sellable": "0" },
                "items_to_sell": [{ "price": "1500", "display_price": "1,500", "quantity": "2", "display_quantity": "2" }],
                "items_to_buy": [],
            },
        }));
        let detail = api(&transport).get_listing(&credentials(), "a91e").await.unwrap();

        assert_eq!(detail.lowest_sell_price(), Some(1500));
        assert_eq!(transport.single_request().url.path(), "/apis/app/view_listing.json");
    }

    #[tokio::test]
    async fn browses_listings_without_query_string() {
        let transport = MockTransport::json(fixture(include_str!("../response/fixtures/listings.json")));
        let page = api(&transport).get_listings(&GetListingsOptions::default()).await.unwrap();
        let request = transport.single_request();

        assert_eq!(page.listings.len(), 4);
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url.as_str(), "https://mlb25.theshow.com/apis/listings.json");
        assert_eq!(request.url.query(), None);
    }

    #[test]
    fn listings_url_includes_only_set_options() {
        let options = GetListingsOptions::builder()
            .listing_type(ListingType::MlbCard)
            .page(2)
            .order(SortOrder::Desc)
            .name("Pete Alonso")
            .build()
            .unwrap();
        let url = GameAPI::default().listings_url(&options).unwrap();

        assert_eq!(url.as_str(), "https://mlb25.theshow.com/apis/listings.json?type=mlb_card&page=2&order=desc&name=Pete+Alonso");
    }

    #[tokio::test]
    async fn gets_item_from_catalog() {
        let listings = fixture(include_str!("../response/fixtures/listings.json"));
        let transport = MockTransport::json(listings["listings"][0]["item"].clone());
        let item = api(&transport).get_item("c4d0b7e2a31f4b8e9e2b1a7f0d3c5e61").await.unwrap();

        assert_eq!(item.listing_type(), ListingType::MlbCard);
        assert_eq!(transport.single_request().url.query(), Some("uuid=c4d0b7e2a31f4b8e9e2b1a7f0d3c5e61"));
    }

    #[test]
    fn trims_trailing_slash_from_bases() {
        let api = GameAPI::builder()
            .public_api_base("http://localhost:8080/apis/")
            .build();
        let url = api.listings_url(&GetListingsOptions::default()).unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/apis/listings.json");
    }
}
