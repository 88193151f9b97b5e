use axum::routing::get;
use hp_core::server::routes::PingerApi;

use crate::server::greeting::controller::greeting;

pub fn routes() -> axum::Router {
    axum::Router::new().route(PingerApi::Greeting.path().as_str(), get(greeting))
}
