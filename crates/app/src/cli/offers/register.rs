use std::{error::Error, sync::Arc};

use clap::Args;
use platter::offers::RestaurantId;
use platter_app::{
    database::{self, Db},
    domain::offers::{
        OffersService, PgOfferStore, StoreOffersService, data::NewOffer, records::OfferUuid,
    },
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct RegisterOfferArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Owning restaurant
    #[arg(long)]
    restaurant_id: i64,

    /// `FLATX` or `FLAT%`
    #[arg(long)]
    offer_type: String,

    /// Amount in currency units, or a percentage for `FLAT%`
    #[arg(long, allow_negative_numbers = true)]
    offer_value: i64,

    /// Customer segment the offer targets; repeat for several
    #[arg(long = "segment", required = true)]
    segments: Vec<String>,

    /// Optional offer UUID; generated when omitted
    #[arg(long)]
    uuid: Option<Uuid>,
}

pub(crate) async fn run(args: RegisterOfferArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = StoreOffersService::new(Arc::new(PgOfferStore::new(Db::new(pool))));

    let record = service
        .register_offer(NewOffer {
            uuid: args.uuid.map_or_else(OfferUuid::new, OfferUuid::from_uuid),
            restaurant: RestaurantId::new(args.restaurant_id),
            offer_type: args.offer_type,
            offer_value: args.offer_value,
            segments: args.segments.into_iter().collect(),
        })
        .await
        .map_err(|error| match error.source() {
            Some(detail) => format!("failed to register offer: {error}: {detail}"),
            None => format!("failed to register offer: {error}"),
        })?;

    println!("offer_uuid: {}", record.uuid);
    println!("restaurant_id: {}", record.offer.restaurant);
    println!("offer: {} {}", record.offer.discount.offer_type(), record.offer.discount.value());
    println!("segments: {}", record.offer.segments.sorted_labels().join(","));

    Ok(())
}
