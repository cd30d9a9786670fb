//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use platter::offers::{Offer, RestaurantId};
use platter_app::{
    context::AppContext,
    domain::{
        carts::MockCartOffersService,
        offers::{
            MockOffersService,
            records::{OfferRecord, OfferUuid},
        },
    },
};
use salvo::{affix_state::inject, prelude::*};

use crate::state::State;

fn strict_offers_mock() -> MockOffersService {
    let mut offers = MockOffersService::new();

    offers.expect_register_offer().never();
    offers.expect_list_offers().never();

    offers
}

fn strict_carts_mock() -> MockCartOffersService {
    let mut carts = MockCartOffersService::new();

    carts.expect_apply_offer().never();

    carts
}

fn service_with(
    offers: MockOffersService,
    carts: MockCartOffersService,
    route: Router,
) -> Service {
    let state = State::from_app_context(AppContext {
        offers: Arc::new(offers),
        carts: Arc::new(carts),
    });

    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn offers_service(offers: MockOffersService, route: Router) -> Service {
    service_with(offers, strict_carts_mock(), route)
}

pub(crate) fn carts_service(carts: MockCartOffersService, route: Router) -> Service {
    service_with(strict_offers_mock(), carts, route)
}

pub(crate) fn make_offer_record(
    restaurant: i64,
    offer_type: &str,
    value: i64,
    segments: &[&str],
) -> OfferRecord {
    let offer = Offer::parse(
        RestaurantId::new(restaurant),
        offer_type,
        value,
        segments.iter().copied(),
    );

    OfferRecord {
        uuid: OfferUuid::new(),
        offer: offer.expect("test offer should be valid"),
        sequence: 1,
        created_at: Timestamp::UNIX_EPOCH,
    }
}
