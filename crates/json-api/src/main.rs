//! Platter JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use platter_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod carts;
mod config;
mod extensions;
mod healthcheck;
mod observability;
mod offers;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Platter JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    let app = match AppContext::from_config(config.app_config()).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(router::app_router());

    let doc = OpenApi::new("Platter API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use platter_app::domain::{
        carts::{StoreCartOffersService, models::SegmentFailurePolicy},
        offers::{InMemoryOfferStore, OfferStore, StoreOffersService},
        segments::MockSegmentResolver,
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use super::*;

    /// Full router over real services, with only the segment service mocked.
    fn service_with_segment(segment: Option<&'static str>) -> Service {
        let mut resolver = MockSegmentResolver::new();

        resolver
            .expect_resolve()
            .returning(move |_| Ok(segment.map(Into::into)));

        let store: Arc<dyn OfferStore> = Arc::new(InMemoryOfferStore::new());

        let app = AppContext {
            offers: Arc::new(StoreOffersService::new(Arc::clone(&store))),
            carts: Arc::new(StoreCartOffersService::new(
                Arc::new(resolver),
                store,
                SegmentFailurePolicy::Propagate,
            )),
        };

        Service::new(
            Router::new()
                .hoop(inject(State::from_app_context(app)))
                .push(router::app_router()),
        )
    }

    async fn register(service: &Service, offer: Value) -> TestResult<StatusCode> {
        let res = TestClient::post("http://example.com/api/v1/offer")
            .json(&offer)
            .send(service)
            .await;

        Ok(res.status_code.unwrap_or(StatusCode::OK))
    }

    async fn apply(service: &Service, cart_value: i64, restaurant_id: i64) -> TestResult<Value> {
        let value = TestClient::post("http://example.com/api/v1/cart/apply_offer")
            .json(&json!({ "cart_value": cart_value, "user_id": 1, "restaurant_id": restaurant_id }))
            .send(service)
            .await
            .take_json::<Value>()
            .await?;

        Ok(value)
    }

    #[tokio::test]
    async fn registered_offer_discounts_cart() -> TestResult {
        let service = service_with_segment(Some("p1"));

        let status = register(
            &service,
            json!({ "restaurant_id": 101, "offer_type": "FLATX", "offer_value": 10, "customer_segment": ["p1"] }),
        )
        .await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(apply(&service, 200, 101).await?, json!({ "cart_value": 190 }));

        Ok(())
    }

    #[tokio::test]
    async fn best_of_several_offers_wins() -> TestResult {
        let service = service_with_segment(Some("p1"));

        for offer in [
            json!({ "restaurant_id": 105, "offer_type": "FLATX", "offer_value": 30, "customer_segment": ["p1"] }),
            json!({ "restaurant_id": 105, "offer_type": "FLAT%", "offer_value": 25, "customer_segment": ["p1"] }),
        ] {
            assert_eq!(register(&service, offer).await?, StatusCode::OK);
        }

        assert_eq!(apply(&service, 200, 105).await?, json!({ "cart_value": 150 }));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_user_keeps_cart_value() -> TestResult {
        let service = service_with_segment(None);

        register(
            &service,
            json!({ "restaurant_id": 103, "offer_type": "FLATX", "offer_value": 10, "customer_segment": ["p1"] }),
        )
        .await?;

        assert_eq!(apply(&service, 500, 103).await?, json!({ "cart_value": 500 }));

        Ok(())
    }

    #[tokio::test]
    async fn invalid_offer_type_is_rejected_and_not_stored() -> TestResult {
        let service = service_with_segment(Some("pX"));

        let status = register(
            &service,
            json!({ "restaurant_id": 107, "offer_type": "INVALID_TYPE", "offer_value": 10, "customer_segment": ["pX"] }),
        )
        .await?;

        let listing = TestClient::get("http://example.com/api/v1/offer/107")
            .send(&service)
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(listing.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
