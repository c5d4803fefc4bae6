//! In-app routing
//!
//! Routes mirror the URL paths the rest of the system uses, so a route can
//! be logged or typed in as `/cities/12`.

use std::fmt;

use crate::shared::CityId;

/// A screen of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Registration form (initial route)
    Register,
    /// Landing page after a successful registration
    CityActions,
    /// Detail view for one city
    City(CityId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Register => "/register".to_string(),
            Route::CityActions => "/city-actions".to_string(),
            Route::City(id) => format!("/cities/{}", id),
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "/register" => Some(Route::Register),
            "/city-actions" => Some(Route::CityActions),
            _ => trimmed
                .strip_prefix("/cities/")
                .and_then(|id| id.parse::<CityId>().ok())
                .map(Route::City),
        }
    }

    /// Path parameter of the detail route.
    pub fn city_id(&self) -> Option<CityId> {
        match self {
            Route::City(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Current route plus the stack of programmatic navigations.
#[derive(Debug, Clone)]
pub struct Router {
    initial: Route,
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Register)
    }
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self {
            initial,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.history.last().copied().unwrap_or(self.initial)
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!("navigate {} -> {}", self.current(), route);
        self.history.push(route);
    }

    /// Go back one step. Returns `false` when already at the initial route.
    pub fn back(&mut self) -> bool {
        self.history.pop().is_some()
    }

    /// Every route pushed with [`navigate`](Self::navigate), oldest first.
    pub fn navigations(&self) -> &[Route] {
        &self.history
    }
}
