//! App Router

use salvo::Router;

use crate::{carts, healthcheck, offers};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("api/v1")
                .push(
                    Router::with_path("offer")
                        .post(offers::create::handler)
                        .push(Router::with_path("{restaurant_id}").get(offers::index::handler)),
                )
                .push(Router::with_path("cart/apply_offer").post(carts::apply_offer::handler)),
        )
}
