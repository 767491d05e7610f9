use tokio::sync::Mutex;
use tracing::warn;

use crate::application::DiscoverQuoteUseCase;
use crate::connector::web::render_page;
use crate::domain::{ExplanationModel, Session};

use super::super::Container;

/// Owns the web session and is its only writer.
///
/// The discover action holds the session lock until both network calls have
/// finished, so actions run one at a time and a render never observes a
/// half-updated session.
pub struct QuoteController {
    discover: DiscoverQuoteUseCase,
    session: Mutex<Session>,
}

impl QuoteController {
    pub fn new(container: &Container, model: ExplanationModel) -> Self {
        Self {
            discover: container.discover_use_case(),
            session: Mutex::new(Session::new(model)),
        }
    }

    /// Fetch a new quote (and its explanation) with the selected model.
    pub async fn discover(&self, model: ExplanationModel) {
        let mut session = self.session.lock().await;
        session.select_model(model);

        match self.discover.execute(model).await {
            Ok(discovery) => session.record_discovery(discovery),
            Err(e) => {
                warn!("Discover action failed: {}", e);
                session.record_error(format!("Could not fetch a new quote: {}", e));
            }
        }
    }

    pub async fn reject(&self, message: impl Into<String>) {
        self.session.lock().await.record_error(message);
    }

    pub async fn session(&self) -> Session {
        self.session.lock().await.clone()
    }

    pub async fn render(&self) -> String {
        render_page(&*self.session.lock().await)
    }
}
