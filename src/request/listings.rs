use crate::enums::{ListingSort, ListingType, RarityFilter, SortOrder};
use crate::error::ParameterError;

/// Filters for browsing marketplace listings. Unset filters are left out of the request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GetListingsOptions {
    listing_type: Option<ListingType>,
    page: Option<u32>,
    sort: Option<ListingSort>,
    rarity: Option<RarityFilter>,
    order: Option<SortOrder>,
    name: Option<String>,
    min_best_sell_price: Option<u64>,
    max_best_sell_price: Option<u64>,
    min_best_buy_price: Option<u64>,
    max_best_buy_price: Option<u64>,
    min_rank: Option<u32>,
    max_rank: Option<u32>,
}

impl GetListingsOptions {
    /// Builder for constructing [`GetListingsOptions`].
    pub fn builder() -> GetListingsOptionsBuilder {
        GetListingsOptionsBuilder::new()
    }

    /// The page to get. Pages start at 1.
    pub fn page(&self) -> Option<u32> {
        self.page
    }

    /// The name filter, trimmed.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether no filters are set.
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// The set filters as query string pairs.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        fn push<T: ToString>(
            pairs: &mut Vec<(&'static str, String)>,
            key: &'static str,
            value: &Option<T>,
        ) {
            if let Some(value) = value {
                pairs.push((key, value.to_string()));
            }
        }

        push(&mut pairs, "type", &self.listing_type);
        push(&mut pairs, "page", &self.page);
        push(&mut pairs, "sort", &self.sort);
        push(&mut pairs, "rarity", &self.rarity);
        push(&mut pairs, "order", &self.order);
        push(&mut pairs, "name", &self.name);
        push(&mut pairs, "min_best_sell_price", &self.min_best_sell_price);
        push(&mut pairs, "max_best_sell_price", &self.max_best_sell_price);
        push(&mut pairs, "min_best_buy_price", &self.min_best_buy_price);
        push(&mut pairs, "max_best_buy_price", &self.max_best_buy_price);
        push(&mut pairs, "min_rank", &self.min_rank);
        push(&mut pairs, "max_rank", &self.max_rank);

        pairs
    }

    /// Options for the next page.
    pub fn next_page(&self) -> Self {
        Self {
            page: Some(self.page.unwrap_or(1).saturating_add(1)),
            ..self.clone()
        }
    }
}

/// Builder for constructing [`GetListingsOptions`].
#[derive(Debug, Default, Clone)]
pub struct GetListingsOptionsBuilder {
    options: GetListingsOptions,
    name: Option<String>,
}

impl GetListingsOptionsBuilder {
    /// Creates a new [`GetListingsOptionsBuilder`] with no filters set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The kind of item.
    pub fn listing_type(mut self, listing_type: ListingType) -> Self {
        self.options.listing_type = Some(listing_type);
        self
    }

    /// The page to get. Pages start at 1.
    pub fn page(mut self, page: u32) -> Self {
        self.options.page = Some(page);
        self
    }

    /// The field to sort by.
    pub fn sort(mut self, sort: ListingSort) -> Self {
        self.options.sort = Some(sort);
        self
    }

    /// The rarity filter.
    pub fn rarity<T>(mut self, rarity: T) -> Self
    where
        T: Into<RarityFilter>,
    {
        self.options.rarity = Some(rarity.into());
        self
    }

    /// The sort direction.
    pub fn order(mut self, order: SortOrder) -> Self {
        self.options.order = Some(order);
        self
    }

    /// Filters by name. Surrounding whitespace is trimmed.
    pub fn name<T>(mut self, name: T) -> Self
    where
        T: Into<String>,
    {
        self.name = Some(name.into());
        self
    }

    /// The minimum best sell price in stubs.
    pub fn min_best_sell_price(mut self, price: u64) -> Self {
        self.options.min_best_sell_price = Some(price);
        self
    }

    /// The maximum best sell price in stubs.
    pub fn max_best_sell_price(mut self, price: u64) -> Self {
        self.options.max_best_sell_price = Some(price);
        self
    }

    /// The minimum best buy price in stubs.
    pub fn min_best_buy_price(mut self, price: u64) -> Self {
        self.options.min_best_buy_price = Some(price);
        self
    }

    /// The maximum best buy price in stubs.
    pub fn max_best_buy_price(mut self, price: u64) -> Self {
        self.options.max_best_buy_price = Some(price);
        self
    }

    /// The minimum rank.
    pub fn min_rank(mut self, rank: u32) -> Self {
        self.options.min_rank = Some(rank);
        self
    }

    /// The maximum rank.
    pub fn max_rank(mut self, rank: u32) -> Self {
        self.options.max_rank = Some(rank);
        self
    }

    /// Builds the [`GetListingsOptions`]. Fails if the page is 0 or the name is blank.
    pub fn build(self) -> Result<GetListingsOptions, ParameterError> {
        let mut options = self.options;

        if options.page == Some(0) {
            return Err(ParameterError::PageOutOfRange);
        }

        if let Some(name) = self.name {
            let name = name.trim();

            if name.is_empty() {
                return Err(ParameterError::EmptyName);
            }

            options.name = Some(name.to_owned());
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::CardRarity;

    #[test]
    fn empty_options_have_no_pairs() {
        let options = GetListingsOptions::builder().build().unwrap();

        assert!(options.is_empty());
    }

    #[test]
    fn only_set_options_are_sent() {
        let options = GetListingsOptions::builder()
            .listing_type(ListingType::MlbCard)
            .rarity(CardRarity::Diamond)
            .order(SortOrder::Asc)
            .name("  Ohtani ")
            .max_rank(99)
            .build()
            .unwrap();

        assert_eq!(options.query_pairs(), vec![
            ("type", "mlb_card".to_string()),
            ("rarity", "diamond".to_string()),
            ("order", "asc".to_string()),
            ("name", "Ohtani".to_string()),
            ("max_rank", "99".to_string()),
        ]);
    }

    #[test]
    fn rejects_page_zero() {
        let error = GetListingsOptions::builder().page(0).build().unwrap_err();

        assert_eq!(error, ParameterError::PageOutOfRange);
    }

    #[test]
    fn rejects_blank_name() {
        let error = GetListingsOptions::builder().name("   ").build().unwrap_err();

        assert_eq!(error, ParameterError::EmptyName);
    }

    #[test]
    fn next_page_keeps_filters() {
        let options = GetListingsOptions::builder()
            .sort(ListingSort::BestSellPrice)
            .build()
            .unwrap()
            .next_page();

        assert_eq!(options.page(), Some(2));
        assert_eq!(options.query_pairs()[0], ("page", "2".to_string()));
    }
}
