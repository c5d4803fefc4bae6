//! City Registry API Client
//!
//! Async wrappers around the two endpoints the client uses. Callers run
//! them on the app's tokio runtime and ship the result back to the UI.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::egui_app::config::Config;
use crate::shared::{ApiError, AuthenticationSucceeded, City, CityId, RegisterRequest};

pub const REGISTER_PATH: &str = "/api/users/register";

pub fn city_path(id: CityId) -> String {
    format!("/cities/{}", id)
}

/// HTTP client bound to one backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    client: Client,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// `GET /cities/{id}`. `bearer` is the full `Authorization` value from
    /// [`AuthContext::bearer`](crate::egui_app::session::AuthContext::bearer).
    pub async fn fetch_city(&self, id: CityId, bearer: Option<&str>) -> Result<City, ApiError> {
        let url = self.config.api_url(&city_path(id));

        let mut request = self.client.get(&url);
        if let Some(bearer) = bearer {
            request = request.header(reqwest::header::AUTHORIZATION, bearer);
        }

        let response = request.send().await?;
        decode(response).await
    }

    /// `POST /api/users/register`. Unauthenticated.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthenticationSucceeded, ApiError> {
        let url = self.config.api_url(REGISTER_PATH);

        let response = self.client.post(&url).json(request).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_else(|_| status.to_string());
        return Err(ApiError::status(status.as_u16(), body));
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
