//! Offers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use platter::{
    offers::{Discount, Offer, OfferType, RestaurantId},
    segments::{Segment, SegmentSet},
};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::offers::records::{OfferRecord, OfferUuid};

const CREATE_OFFER_SQL: &str = include_str!("sql/create_offer.sql");
const CANDIDATE_OFFERS_SQL: &str = include_str!("sql/candidate_offers.sql");
const LIST_OFFERS_SQL: &str = include_str!("sql/list_offers.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOffersRepository;

impl PgOffersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    #[tracing::instrument(
        name = "offers.repository.create_offer",
        skip(self, tx, offer),
        fields(restaurant_id = %offer.restaurant),
        err
    )]
    pub(crate) async fn create_offer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: OfferUuid,
        offer: &Offer,
    ) -> Result<OfferRecord, sqlx::Error> {
        let offer_value = i64::try_from(offer.discount.value()).map_err(|e| {
            sqlx::Error::ColumnDecode {
                index: "offer_value".to_string(),
                source: Box::new(e),
            }
        })?;

        let segments = offer.segments.sorted_labels();

        query_as::<Postgres, OfferRecord>(CREATE_OFFER_SQL)
            .bind(uuid.into_uuid())
            .bind(offer.restaurant.get())
            .bind(offer.discount.offer_type().to_str())
            .bind(offer_value)
            .bind(&segments)
            .fetch_one(&mut **tx)
            .await
    }

    #[tracing::instrument(
        name = "offers.repository.candidate_offers",
        skip(self, tx),
        fields(restaurant_id = %restaurant, segment = %segment),
        err
    )]
    pub(crate) async fn candidate_offers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: RestaurantId,
        segment: &Segment,
    ) -> Result<Vec<OfferRecord>, sqlx::Error> {
        query_as::<Postgres, OfferRecord>(CANDIDATE_OFFERS_SQL)
            .bind(restaurant.get())
            .bind(segment.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    #[tracing::instrument(
        name = "offers.repository.list_offers",
        skip(self, tx),
        fields(restaurant_id = %restaurant),
        err
    )]
    pub(crate) async fn list_offers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        restaurant: RestaurantId,
    ) -> Result<Vec<OfferRecord>, sqlx::Error> {
        query_as::<Postgres, OfferRecord>(LIST_OFFERS_SQL)
            .bind(restaurant.get())
            .fetch_all(&mut **tx)
            .await
    }
}

fn decode_error(index: &str, message: String) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: message.into(),
    }
}

impl<'r> FromRow<'r, PgRow> for OfferRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let id: i64 = row.try_get("id")?;

        let sequence = u64::try_from(id).map_err(|e| sqlx::Error::ColumnDecode {
            index: "id".to_string(),
            source: Box::new(e),
        })?;

        let kind: String = row.try_get("offer_kind")?;

        let offer_type = OfferType::from_storage(&kind)
            .ok_or_else(|| decode_error("offer_kind", format!("unknown offer kind `{kind}`")))?;

        let discount = Discount::try_new(offer_type, row.try_get("offer_value")?)
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "offer_value".to_string(),
                source: Box::new(e),
            })?;

        let segments: Vec<String> = row.try_get("customer_segments")?;

        Ok(Self {
            uuid: OfferUuid::from_uuid(row.try_get("uuid")?),
            offer: Offer::new(
                RestaurantId::new(row.try_get("restaurant_id")?),
                discount,
                segments.into_iter().collect::<SegmentSet>(),
            ),
            sequence,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
