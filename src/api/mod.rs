//! REST API Wrappers
//!
//! Frontend bindings to the Travana backend, organized by domain. Every
//! wrapper runs through a thunk from `travana_core::thunks`, so views only
//! see `Result<T, String>`.

mod activities;
mod auth;
mod destinations;
mod trips;

use gloo_storage::{LocalStorage, Storage};
use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use travana_core::auth::{bearer_header, handle_unauthorized, Navigator, TokenStore};
use travana_core::config::TOKEN_STORAGE_KEY;
use travana_core::endpoints;
use travana_core::ApiError;

use crate::store::Dispatch;

// Re-export all public items
pub use activities::*;
pub use auth::*;
pub use destinations::*;
pub use trips::*;

// ========================
// Browser bindings
// ========================

/// Bearer token in local storage, stored as the raw string
#[derive(Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) {
        if LocalStorage::raw().set_item(TOKEN_STORAGE_KEY, token).is_err() {
            log::error!("[API] could not persist token");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_STORAGE_KEY);
    }
}

/// Full page loads through `window.location`
#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn hard_redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("[API] no window to redirect to {}", path);
            return;
        };
        if window.location().set_href(path).is_err() {
            log::error!("[API] redirect to {} failed", path);
        }
    }
}

// ========================
// HTTP client
// ========================

/// Body shape of API error responses
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Clone, Copy)]
pub struct ApiClient {
    base_url: &'static str,
    dispatch: Dispatch,
}

impl ApiClient {
    pub fn new(base_url: &'static str, dispatch: Dispatch) -> Self {
        Self { base_url, dispatch }
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    pub fn tokens(&self) -> BrowserTokenStore {
        BrowserTokenStore
    }

    fn http(&self) -> reqwest::Client {
        reqwest::Client::new()
    }

    fn url(&self, path: &str) -> String {
        endpoints::url(self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http().get(self.url(path))).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.http().post(self.url(path)).json(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.http().put(self.url(path)).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = match self.tokens().get() {
            Some(token) => request.header(AUTHORIZATION, bearer_header(&token)),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()));
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);

        if status == StatusCode::UNAUTHORIZED {
            handle_unauthorized(&self.tokens(), &self.dispatch, &BrowserNavigator);
            return Err(ApiError::Unauthorized { message });
        }

        log::warn!("[API] {} {}", status.as_u16(), message.as_deref().unwrap_or(""));
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}
