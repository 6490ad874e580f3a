use std::sync::Arc;

use shared::error::CatalogError;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, warn};

pub mod config;
pub mod derive;
pub mod gateway;
pub mod present;
pub mod state;

pub use derive::{
    category_counts, featured_for_display, featured_products, filtered_products,
    resolve_display_image, CategoryCount, Selection, FEATURED_DISPLAY_LIMIT, NO_IMAGE_PLACEHOLDER,
};
pub use gateway::{CatalogGateway, HttpCatalogGateway};
pub use state::{CatalogState, LoadStatus, ResourceErrors};

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub enum CatalogEvent {
    LoadStarted { request: u64 },
    StateChanged(CatalogState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Ready,
    Failed(CatalogError),
    Superseded,
}

struct StoreInner {
    state: CatalogState,
    latest_request: u64,
}

/// Single writer of [`CatalogState`]. Readers take snapshots or subscribe to
/// [`CatalogEvent`]s.
pub struct CatalogStore {
    gateway: Arc<dyn CatalogGateway>,
    inner: RwLock<StoreInner>,
    events: broadcast::Sender<CatalogEvent>,
}

impl CatalogStore {
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Arc::new(Self {
            gateway,
            inner: RwLock::new(StoreInner {
                state: CatalogState::default(),
                latest_request: 0,
            }),
            events,
        })
    }

    /// Fetches products, categories and contact info concurrently and
    /// installs them once all three have settled. Gateway failures end up in
    /// the state, never as an `Err`.
    pub async fn load(&self) -> LoadOutcome {
        let request = {
            let mut guard = self.inner.write().await;
            guard.latest_request += 1;
            guard.state.status = LoadStatus::Loading;
            guard.latest_request
        };
        debug!(request, "catalog: load started");
        let _ = self.events.send(CatalogEvent::LoadStarted { request });

        let (products, categories, contact) = futures::join!(
            self.gateway.fetch_products(),
            self.gateway.fetch_categories(),
            self.gateway.fetch_contact_info(),
        );

        let (error, snapshot) = {
            let mut guard = self.inner.write().await;
            if guard.latest_request != request {
                debug!(
                    request,
                    latest = guard.latest_request,
                    "catalog: discarding stale load results"
                );
                return LoadOutcome::Superseded;
            }
            let error = guard.state.settle(products, categories, contact);
            (error, guard.state.clone())
        };

        let outcome = match error {
            None => {
                info!(
                    request,
                    products = snapshot.products.len(),
                    categories = snapshot.categories.len(),
                    "catalog: load ready"
                );
                LoadOutcome::Ready
            }
            Some(err) => {
                warn!(request, "catalog: load failed: {err}");
                LoadOutcome::Failed(err)
            }
        };

        let _ = self.events.send(CatalogEvent::StateChanged(snapshot));
        outcome
    }

    pub async fn snapshot(&self) -> CatalogState {
        self.inner.read().await.state.clone()
    }

    pub async fn status(&self) -> LoadStatus {
        self.inner.read().await.state.status
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
