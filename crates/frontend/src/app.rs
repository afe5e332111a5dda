use crate::shared::api_utils::api_base;
use crate::shared::config::AppConfig;
use crate::shared::theme::ThemeProvider;
use crate::usecases::u501_create_workspace::CreateWorkspacePage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Runtime config for everything below
    log::debug!("API base: {}", api_base());
    provide_context(AppConfig::default());

    view! {
        <ThemeProvider>
            <CreateWorkspacePage />
        </ThemeProvider>
    }
}
