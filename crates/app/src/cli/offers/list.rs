use std::sync::Arc;

use clap::Args;
use platter::offers::RestaurantId;
use platter_app::{
    database::{self, Db},
    domain::offers::{OffersService, OffersServiceError, PgOfferStore, StoreOffersService},
};

#[derive(Debug, Args)]
pub(crate) struct ListOffersArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Restaurant whose offers should be listed
    #[arg(long)]
    restaurant_id: i64,
}

pub(crate) async fn run(args: ListOffersArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = StoreOffersService::new(Arc::new(PgOfferStore::new(Db::new(pool))));
    let restaurant = RestaurantId::new(args.restaurant_id);

    let offers = match service.list_offers(restaurant).await {
        Ok(offers) => offers,
        Err(OffersServiceError::NotFound) => {
            println!("no offers found for restaurant {restaurant}");
            return Ok(());
        }
        Err(error) => return Err(format!("failed to list offers: {error}")),
    };

    for record in offers {
        println!("offer_uuid: {}", record.uuid);
        println!(
            "offer: {} {}",
            record.offer.discount.offer_type(),
            record.offer.discount.value()
        );
        println!("segments: {}", record.offer.segments.sorted_labels().join(","));
        println!("created_at: {}", record.created_at);
        println!();
    }

    Ok(())
}
