//! Typed responses. Every type here implements [`Shape`](crate::schema::Shape) and is only
//! built from values that passed validation.

mod auth;
mod collection;
mod envelope;
mod inventory;
mod listing;
mod pack;

pub use auth::AuthResponse;
pub use collection::{
    Collection,
    CollectionAdvance,
    CollectionDetail,
    CollectionGroup,
    CollectionStatus,
    CollectionView,
    Progress,
    Reward,
};
pub use envelope::Envelope;
pub use inventory::{InventoryItem, Pitch, Quirk, Ratings};
pub use listing::{
    CatalogCard,
    Equipment,
    Listing,
    ListingDetail,
    ListingInfo,
    ListingItem,
    ListingsPage,
    MarketOrder,
    Sponsorship,
    Unlockable,
};
pub use pack::{MyPack, MyPacks, OpenedPack, PackCard};
