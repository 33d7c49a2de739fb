//! HTTP server for the static site
//!
//! A single fallback route sends every method and path through
//! [`StaticResponder`]; there is no other routing.

use std::future::Future;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::responder::{Reply, StaticResponder};
use crate::utils::NOT_FOUND_BODY;

/// Failures that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the server and run until Ctrl-C
pub async fn serve(config: SiteConfig) -> Result<(), ServerError> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let responder = StaticResponder::new(config.root_dir());
    serve_on(listener, responder, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves
pub async fn serve_on<F>(
    listener: TcpListener,
    responder: StaticResponder,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let port = listener.local_addr()?.port();
    tracing::info!(root = %responder.root().display(), "Serving site");
    tracing::info!("Server running at http://localhost:{port}/");
    tracing::info!("Clean URLs enabled - .html extension will be removed");

    let app = create_router(responder);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Create the router: one fallback handler plus request tracing
pub fn create_router(responder: StaticResponder) -> Router {
    Router::new()
        .fallback(static_handler)
        .with_state(Arc::new(responder))
        .layer(TraceLayer::new_for_http())
}

async fn static_handler(State(responder): State<Arc<StaticResponder>>, uri: Uri) -> Response {
    responder.respond(uri.path()).await.into_response()
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::File { content_type, body } => {
                ([(header::CONTENT_TYPE, content_type)], Body::from(body)).into_response()
            }
            Reply::Redirect { location } => {
                (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
            }
            Reply::NotFound => (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "text/html")],
                Body::from(NOT_FOUND_BODY),
            )
                .into_response(),
            Reply::ServerError { code } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Body::from(format!("Server Error: {code}")),
            )
                .into_response(),
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
