//! Carousel Admin App
//!
//! Root component: provides the API client and mounts the registration list.

use carousel_list::ListViewConfig;
use leptos::prelude::*;

use crate::api::RestClient;
use crate::components::CarouselListView;
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(AppContext::new(RestClient::new(config.api_base_url)));

    view! {
        <main class="app-layout">
            <CarouselListView config=ListViewConfig::registration() />
        </main>
    }
}
