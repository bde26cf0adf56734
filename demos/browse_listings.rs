use theshow_companion::enums::{ListingSort, ListingType, RarityFilter, SortOrder};
use theshow_companion::{GameAPI, GetListingsOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api = GameAPI::builder().build();
    let options = GetListingsOptions::builder()
        .listing_type(ListingType::MlbCard)
        .rarity(RarityFilter::Diamond)
        .sort(ListingSort::BestSellPrice)
        .order(SortOrder::Desc)
        .build()?;
    let page = api.get_listings(&options).await?;

    println!("Page {} of {}", page.page, page.total_pages);

    for listing in &page.listings {
        println!(
            "{:<32} sell {:>8} buy {:>8}",
            listing.listing_name,
            listing.best_sell_price,
            listing.best_buy_price,
        );
    }

    Ok(())
}
