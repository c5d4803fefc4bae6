//! Citydesk - Main Library
//!
//! Citydesk is a native desktop client for the city registry backend. It lets
//! an operator register an account and browse individual city records.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types and errors that do not depend on the UI
//!   - City record, registration request/response
//!   - `ApiError` and configuration types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Session context, router and HTTP client
//!   - City detail and registration components
//!   - Diagnostics console
//!
//! # Usage
//!
//! ```rust,no_run
//! use citydesk::egui_app::{AppState, Config};
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let state = AppState::new(Config::load(), runtime.handle().clone());
//! ```
//!
//! # Threading
//!
//! The UI is single-threaded. HTTP calls run on a tokio runtime and hand
//! their results back over channels that the UI polls once per frame.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod egui_app;
