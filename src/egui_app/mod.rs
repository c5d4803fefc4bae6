//! egui Native Desktop App Module
//!
//! This module provides a native desktop client using egui/eframe that
//! talks to the city registry backend.
//!
//! # Architecture
//!
//! - **`config`** - Configuration loading (server URL)
//! - **`session`** - Scoped authentication context (bearer token)
//! - **`router`** - Routes and programmatic navigation
//! - **`api`** - Async HTTP client for the two backend endpoints
//! - **`city_detail`** - City detail component state
//! - **`registration`** - Registration form component state
//! - **`debug`** - Diagnostics log shown in the debug console
//! - **`state`** - `AppState` tying the above together
//! - **`views`** - egui rendering
//! - **`main`** - Binary entry point
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin citydesk
//! ```

pub mod config;
pub mod session;
pub mod router;
pub mod api;
pub mod city_detail;
pub mod registration;
pub mod state;
pub mod views;
pub mod debug;
pub mod theme;

// Re-export commonly used types
pub use api::ApiClient;
pub use city_detail::{CityDetail, CityViewState};
pub use config::Config;
pub use debug::{DebugCategory, DebugLevel, DebugLogger};
pub use registration::{RegistrationForm, RegistrationOutcome, SubmitOutcome};
pub use router::{Route, Router};
pub use session::AuthContext;
pub use state::AppState;
