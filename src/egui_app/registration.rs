//! Registration Form Component
//!
//! Controlled username/password form. Submitting posts the credentials to
//! the backend; on success the issued token goes into the [`AuthContext`]
//! and the router moves on to the city actions page.

use std::sync::mpsc::{channel, Receiver, Sender};

use tokio::runtime::Handle;

use crate::egui_app::api::ApiClient;
use crate::egui_app::debug::{DebugCategory, DebugLogger};
use crate::egui_app::router::{Route, Router};
use crate::egui_app::session::AuthContext;
use crate::shared::{ApiError, AuthenticationSucceeded, RegisterRequest};

pub const REGISTRATION_FAILED: &str = "Registration failed.";
pub const NO_TOKEN_RECEIVED: &str = "Registration failed: no token received.";

/// Result of pressing the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Request issued
    Sent,
    /// A required field is empty
    MissingFields,
    /// A previous submission has not resolved yet
    AlreadyInFlight,
}

/// How a submission resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered,
    /// The server answered but issued no token.
    MissingToken(ApiError),
    Failed(ApiError),
}

pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    error: Option<String>,
    in_flight: bool,
    api: ApiClient,
    runtime: Handle,
    logger: DebugLogger,
    tx: Sender<Result<AuthenticationSucceeded, ApiError>>,
    rx: Receiver<Result<AuthenticationSucceeded, ApiError>>,
}

impl RegistrationForm {
    pub fn new(api: ApiClient, runtime: Handle, logger: DebugLogger) -> Self {
        let (tx, rx) = channel();
        Self {
            username: String::new(),
            password: String::new(),
            error: None,
            in_flight: false,
            api,
            runtime,
            logger,
            tx,
            rx,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Both fields are required.
    pub fn can_submit(&self) -> bool {
        !self.in_flight && !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.in_flight {
            self.logger
                .debug(DebugCategory::Auth, "Ignoring submit while registration is in flight");
            return SubmitOutcome::AlreadyInFlight;
        }
        if self.username.is_empty() || self.password.is_empty() {
            return SubmitOutcome::MissingFields;
        }

        self.error = None;
        self.in_flight = true;

        let request = RegisterRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        };
        self.logger
            .debug_ctx(DebugCategory::Auth, "Submitting registration", format!("username={}", request.username));

        let api = self.api.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = api.register(&request).await;
            let _ = tx.send(result);
        });

        SubmitOutcome::Sent
    }

    /// Apply a finished submission, if any. Call once per frame.
    pub fn poll(&mut self, auth: &mut AuthContext, router: &mut Router) -> Option<RegistrationOutcome> {
        let result = self.rx.try_recv().ok()?;
        self.in_flight = false;

        let outcome = match result {
            Ok(body) => match body.usable_token() {
                Some(token) => {
                    auth.set_session(token, body.expires_in);
                    self.logger
                        .debug(DebugCategory::Auth, format!("Registered as {}", self.username));
                    self.username.clear();
                    self.password.clear();
                    router.navigate(Route::CityActions);
                    RegistrationOutcome::Registered
                }
                None => {
                    let e = ApiError::missing_field("token");
                    self.logger
                        .error_ctx(DebugCategory::Auth, "No token received", e.payload());
                    self.error = Some(NO_TOKEN_RECEIVED.to_string());
                    RegistrationOutcome::MissingToken(e)
                }
            },
            Err(e) => {
                self.logger
                    .error_ctx(DebugCategory::Auth, "Registration error", e.payload());
                self.error = Some(REGISTRATION_FAILED.to_string());
                RegistrationOutcome::Failed(e)
            }
        };

        Some(outcome)
    }
}
