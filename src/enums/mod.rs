//! Enumerated types.

mod card_rarity;
mod listing_sort;
mod listing_type;
mod rarity_filter;
mod sort_order;

pub use card_rarity::CardRarity;
pub use listing_sort::ListingSort;
pub use listing_type::ListingType;
pub use rarity_filter::RarityFilter;
pub use sort_order::SortOrder;
