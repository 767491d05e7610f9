//! Single-page web front-end.

mod render;

pub use render::{escape_html, render_page};

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Form, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::connector::api::QuoteController;
use crate::domain::ExplanationModel;

#[derive(Debug, Deserialize)]
pub struct DiscoverForm {
    #[serde(default)]
    model: Option<String>,
}

/// Build the router with all routes.
pub fn build_router(controller: Arc<QuoteController>) -> axum::Router {
    axum::Router::new()
        .route("/", get(index))
        .route("/discover", post(discover))
        .route("/health", get(health_check))
        .with_state(controller)
        .layer(TraceLayer::new_for_http())
}

pub struct WebServer {
    addr: SocketAddr,
    controller: Arc<QuoteController>,
}

impl WebServer {
    pub fn new(addr: SocketAddr, controller: Arc<QuoteController>) -> Self {
        Self { addr, controller }
    }

    pub async fn start(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .with_context(|| format!("failed to bind {}", self.addr))?;

        info!("Serving Elegant Quote Insights on http://{}", self.addr);

        axum::serve(listener, build_router(self.controller))
            .await
            .context("web server error")?;

        Ok(())
    }
}

/// GET / - render the current session
async fn index(State(controller): State<Arc<QuoteController>>) -> Html<String> {
    Html(controller.render().await)
}

/// POST /discover - run the discover action, then redirect back to the page
async fn discover(
    State(controller): State<Arc<QuoteController>>,
    Form(form): Form<DiscoverForm>,
) -> Redirect {
    let model = match form.model.as_deref() {
        None => Ok(controller.session().await.model()),
        Some(raw) => raw.parse::<ExplanationModel>(),
    };

    match model {
        Ok(model) => controller.discover(model).await,
        Err(e) => {
            warn!("Rejected discover request: {}", e);
            controller.reject(e.to_string()).await;
        }
    }

    Redirect::to("/")
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
