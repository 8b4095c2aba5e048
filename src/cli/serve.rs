//! Serve mode
//!
//! The page is rendered once before the server starts; every `GET /`
//! returns that same string. The server runs until the process is killed.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;

use super::output::Output;
use crate::storage::ServeConfig;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Failed to bind {address}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server stopped: {0}")]
    Stopped(#[source] std::io::Error),
}

/// Builds the single-route router for a rendered page
pub fn build_router(page: String) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .with_state(Arc::<str>::from(page))
}

async fn page_handler(State(page): State<Arc<str>>) -> Html<String> {
    Html(page.to_string())
}

/// Serves the page on an already bound listener
pub async fn serve_page(listener: TcpListener, page: String) -> Result<(), ServeError> {
    axum::serve(listener, build_router(page))
        .await
        .map_err(ServeError::Stopped)
}

/// Binds the configured address and blocks serving the page
pub fn run(output: &Output, config: &ServeConfig, page: String) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async {
        let address = config.address();
        output.verbose_ctx("serve", &format!("Binding {}", address));

        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| ServeError::Bind {
                address: address.clone(),
                source,
            })?;

        output.success(&format!("Starting server at {}", config.url()));
        serve_page(listener, page).await?;
        Ok::<(), anyhow::Error>(())
    })
}
