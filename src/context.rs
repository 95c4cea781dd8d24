//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::RestClient;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Client for the carousel collection. Kept in local storage: its
    /// futures only ever run on the browser thread.
    api: StoredValue<RestClient, LocalStorage>,
}

impl AppContext {
    pub fn new(api: RestClient) -> Self {
        Self {
            api: StoredValue::new_local(api),
        }
    }

    /// Cloned client handle, ready to move into a `spawn_local` task.
    pub fn api(&self) -> RestClient {
        self.api.get_value()
    }
}

/// Get the app context; panics outside `<App>`.
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
