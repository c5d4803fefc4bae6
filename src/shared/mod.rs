//! Shared Module
//!
//! Types exchanged with the city registry backend, plus the error and
//! configuration types used across the client. Nothing in here touches egui.

/// City record as served by `GET /cities/{id}`
pub mod city;

/// Registration request and authentication response
pub mod auth;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

pub use auth::{AuthenticationSucceeded, RegisterRequest};
pub use city::{City, CityId, Coordinates, Governor, TextOrNumber};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::ApiError;
