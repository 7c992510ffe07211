//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::store::{AppStore, Dispatch};

/// Which auth form the modal shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: AppConfig,
    pub store: AppStore,
    /// Open auth modal, if any - read
    pub auth_modal: ReadSignal<Option<AuthMode>>,
    /// Open auth modal, if any - write
    set_auth_modal: WriteSignal<Option<AuthMode>>,
}

impl AppContext {
    pub fn new(config: AppConfig, store: AppStore) -> Self {
        let (auth_modal, set_auth_modal) = signal(None);
        Self {
            config,
            store,
            auth_modal,
            set_auth_modal,
        }
    }

    pub fn dispatch(&self) -> Dispatch {
        Dispatch::new(self.store)
    }

    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config.api_base_url, self.dispatch())
    }

    pub fn open_auth(&self, mode: AuthMode) {
        self.set_auth_modal.set(Some(mode));
    }

    pub fn close_auth(&self) {
        self.set_auth_modal.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
