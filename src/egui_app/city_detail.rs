//! City Detail Component
//!
//! Fetches one city and holds the view state for it. The view calls
//! [`CityDetail::sync`] every frame with the route id and the session; a
//! fetch is only issued when that pair changes. Each fetch is tagged with a
//! generation so a slow response for an old id can't overwrite a newer one.

use std::sync::mpsc::{channel, Receiver, Sender};

use tokio::runtime::Handle;

use crate::egui_app::api::ApiClient;
use crate::egui_app::debug::{DebugCategory, DebugLogger};
use crate::egui_app::session::AuthContext;
use crate::shared::{ApiError, City, CityId};

/// What the detail view shows
#[derive(Debug, Clone, PartialEq)]
pub enum CityViewState {
    Loading,
    Loaded(City),
    NotFound,
}

impl CityViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, CityViewState::Loading)
    }

    pub fn city(&self) -> Option<&City> {
        match self {
            CityViewState::Loaded(city) => Some(city),
            _ => None,
        }
    }
}

/// Inputs a fetch depends on; a change in either triggers a re-fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FetchKey {
    id: CityId,
    token: Option<String>,
}

type FetchResult = (u64, CityId, Result<City, ApiError>);

pub struct CityDetail {
    api: ApiClient,
    runtime: Handle,
    logger: DebugLogger,
    state: CityViewState,
    key: Option<FetchKey>,
    generation: u64,
    tx: Sender<FetchResult>,
    rx: Receiver<FetchResult>,
}

impl CityDetail {
    pub fn new(api: ApiClient, runtime: Handle, logger: DebugLogger) -> Self {
        let (tx, rx) = channel();
        Self {
            api,
            runtime,
            logger,
            state: CityViewState::Loading,
            key: None,
            generation: 0,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &CityViewState {
        &self.state
    }

    /// Id of the city currently displayed or being fetched.
    pub fn city_id(&self) -> Option<CityId> {
        self.key.as_ref().map(|k| k.id)
    }

    /// Start a fetch if `id` or the session token changed since the last call.
    /// Returns `true` when a request was issued.
    pub fn sync(&mut self, id: CityId, auth: &AuthContext) -> bool {
        let key = FetchKey {
            id,
            token: auth.token().map(str::to_string),
        };
        if self.key.as_ref() == Some(&key) {
            return false;
        }

        self.generation += 1;
        self.state = CityViewState::Loading;

        let generation = self.generation;
        let bearer = auth.bearer();
        self.key = Some(key);

        if bearer.is_none() {
            self.logger
                .warn(DebugCategory::Auth, format!("Fetching city {} without a session token", id));
        }
        self.logger
            .debug_ctx(DebugCategory::Network, format!("GET /cities/{}", id), format!("gen {}", generation));

        let api = self.api.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = api.fetch_city(id, bearer.as_deref()).await;
            // Receiver gone means the component was dropped.
            let _ = tx.send((generation, id, result));
        });

        true
    }

    /// Apply any finished fetches. Call once per frame.
    pub fn poll(&mut self) {
        while let Ok((generation, id, result)) = self.rx.try_recv() {
            if generation != self.generation {
                self.logger.debug_ctx(
                    DebugCategory::State,
                    format!("Discarding stale response for city {}", id),
                    format!("gen {} < {}", generation, self.generation),
                );
                continue;
            }

            self.state = match result {
                Ok(city) => {
                    self.logger
                        .debug(DebugCategory::Network, format!("Loaded city {} ({})", id, city.name));
                    CityViewState::Loaded(city)
                }
                Err(e) => {
                    self.logger
                        .error_ctx(DebugCategory::Network, format!("Error fetching city {}", id), e.to_string());
                    CityViewState::NotFound
                }
            };
        }
    }

    /// Unmount: forget the current record and ignore anything still in flight.
    pub fn reset(&mut self) {
        if self.key.is_some() {
            self.generation += 1;
            self.key = None;
            self.state = CityViewState::Loading;
        }
    }
}
