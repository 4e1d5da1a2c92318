use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use super::provider::{fetch_both, WeatherProvider};
use super::state::{LookupData, LookupState, WidgetState};
use crate::weather::WeatherError;

/// The widget's state plus the lookups that drive it
///
/// Every lookup is stamped with a ticket when it starts. Only the result of
/// the most recent ticket is applied; a slower, older lookup that resolves
/// afterwards is dropped instead of overwriting newer data.
pub struct LookupSession {
    provider: Arc<dyn WeatherProvider>,
    state: RwLock<WidgetState>,
    sequence: AtomicU64,
}

impl LookupSession {
    pub fn new(provider: Arc<dyn WeatherProvider>, default_city: &str) -> Self {
        Self {
            provider,
            state: RwLock::new(WidgetState {
                city: default_city.to_string(),
                lookup: LookupState::Idle,
            }),
            sequence: AtomicU64::new(0),
        }
    }

    pub async fn snapshot(&self) -> WidgetState {
        self.state.read().await.clone()
    }

    /// Look up a city and apply the result, returning the state afterwards
    pub async fn lookup(&self, city: &str) -> WidgetState {
        let ticket = self.begin(city).await;
        let result = fetch_both(self.provider.as_ref(), city).await;
        self.complete(ticket, result).await
    }

    /// Move to `Loading` for `city` and hand out the ticket for this lookup
    pub async fn begin(&self, city: &str) -> u64 {
        let mut state = self.state.write().await;
        // Incremented under the write lock so ticket order matches state order
        let ticket = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;

        state.city = city.to_string();
        state.lookup = state.lookup.loading(city);

        tracing::debug!(city = %city, ticket, "Lookup started");
        ticket
    }

    /// Apply a lookup result if `ticket` is still the latest one
    pub async fn complete(
        &self,
        ticket: u64,
        result: Result<LookupData, WeatherError>,
    ) -> WidgetState {
        let mut state = self.state.write().await;

        let latest = self.sequence.load(Ordering::SeqCst);
        if ticket != latest {
            tracing::debug!(ticket, latest, "Discarding stale lookup result");
            return state.clone();
        }

        state.lookup = match result {
            Ok(data) => {
                tracing::info!(
                    city = %data.current.city,
                    ticket,
                    background = %data.background(),
                    "Lookup succeeded"
                );
                LookupState::loaded(data)
            }
            Err(e) => {
                tracing::warn!(city = %state.city, ticket, error = %e, "Lookup failed");
                state.lookup.failed()
            }
        };

        state.clone()
    }
}
