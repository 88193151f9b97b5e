use crate::{config::PingerConfig, error::Result, server::greeting};
use http::StatusCode;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, error, info};

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

pub fn router() -> axum::Router {
    axum::Router::new()
        .merge(greeting::route::routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .fallback(fallback)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal. {}", err);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

/// Serves the greeting route so an external monitor can see the pinger is up.
pub async fn http_server_pinger(config: &PingerConfig) -> Result<()> {
    let address = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => {
            info!("server is running on {}://{}", config.protocol, address);
            listener
        }
        Err(err) => {
            error!("Failed to bind to {}. {}", address, err);
            return Err(err.into());
        }
    };
    axum::serve(listener, router().into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
