//! Global Application State Store
//!
//! The core [`AppState`] wrapped in a `reactive_stores` store for
//! field-level reactivity. All changes go through [`Dispatch`].

use leptos::prelude::*;
use reactive_stores::Store;
use travana_core::{Action, AppState, Dispatcher};

pub use travana_core::slices::AppStateStoreFields;

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Routes actions into the store's reducer
#[derive(Clone, Copy)]
pub struct Dispatch(AppStore);

impl Dispatch {
    pub fn new(store: AppStore) -> Self {
        Self(store)
    }

    pub fn store(&self) -> AppStore {
        self.0
    }
}

impl Dispatcher for Dispatch {
    fn dispatch(&self, action: Action) {
        log::trace!("[STORE] {:?}", action);
        self.0.update(|state| state.apply(action));
    }
}
