use gloo::net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::{Shift, ShiftAssignment, Staff};
use thiserror::Error;

use crate::services::session::SessionStore;

/// Why a fetch did not produce data. Each variant is user-displayable via
/// `Display` so the calendar can render the reason instead of silently
/// ending its loading state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Read-only client for the admin API, authenticated with a bearer token
/// from the injected session store.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    /// Client against the default backend address.
    pub fn new(session: SessionStore) -> Self {
        Self::with_base_url("http://127.0.0.1:8000".to_string(), session)
    }

    pub fn with_base_url(base_url: String, session: SessionStore) -> Self {
        Self { base_url, session }
    }

    fn authorized(&self, path: &str) -> RequestBuilder {
        let request = Request::get(&format!("{}{}", self.base_url, path));
        match self.session.auth_token() {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorized(path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status: response.status(), body });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Fetch the staff list.
    pub async fn get_staff(&self) -> Result<Vec<Staff>, ApiError> {
        self.get_json("/api/admin/getStaff").await
    }

    /// Fetch all shift definitions.
    pub async fn get_shifts(&self) -> Result<Vec<Shift>, ApiError> {
        self.get_json("/api/shifts").await
    }

    /// Fetch all staff-shift assignments.
    pub async fn get_staff_shifts(&self) -> Result<Vec<ShiftAssignment>, ApiError> {
        self.get_json("/api/staff-shifts").await
    }
}
