use gloo::storage::{LocalStorage, Storage};

const AUTH_TOKEN_KEY: &str = "auth_token";

/// Credential provider backed by browser local storage.
///
/// The token is written by the login flow elsewhere in the admin panel;
/// this component only reads it. The store is passed explicitly into
/// [`crate::services::api::ApiClient`] so nothing here reaches for
/// ambient storage at request time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore;

impl SessionStore {
    pub fn new() -> Self {
        Self
    }

    /// The current bearer token, if a session exists.
    pub fn auth_token(&self) -> Option<String> {
        LocalStorage::get(AUTH_TOKEN_KEY).ok()
    }
}
