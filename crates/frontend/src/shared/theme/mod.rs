//! Theme management module for the application.
//!
//! A theme is a [`ThemeConfig`] value aggregating every token group of the
//! design system. The active theme is exposed to CSS as custom properties on
//! the document element, and the preference is persisted in localStorage.

pub mod dark;
pub mod light;
pub mod roles;
pub mod tokens;

pub use tokens::ThemeConfig;

use crate::shared::components::ui::Select;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the theme name as a string (used for `data-theme` and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// Parse theme from string; unknown names fall back to the default.
    pub fn parse(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Dark, Theme::Light]
    }

    pub fn config(&self) -> ThemeConfig {
        match self {
            Theme::Dark => dark::theme(),
            Theme::Light => light::theme(),
        }
    }
}

const THEME_STORAGE_KEY: &str = "app-theme";

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::parse(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Write the theme tokens as CSS custom properties on `<html>`.
fn apply_theme(theme: Theme) {
    let root = match window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    {
        Some(root) => root,
        None => return,
    };

    let style = root.style();
    for (name, value) in theme.config().css_variables() {
        if let Err(e) = style.set_property(&name, &value) {
            log::warn!("failed to set {}: {:?}", name, e);
        }
    }
    let _ = root.set_attribute("data-theme", theme.as_str());
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }

    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }

    /// Token configuration of the current theme (reactive).
    pub fn config(&self) -> ThemeConfig {
        self.theme.get().config()
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    let theme = RwSignal::new(initial_theme);
    apply_theme(initial_theme);
    log::debug!("theme: {}", initial_theme.as_str());

    provide_context(ThemeContext { theme });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Theme selector dropdown component.
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let ctx = use_theme();
    let options: Vec<(String, String)> = Theme::all()
        .into_iter()
        .map(|t| (t.as_str().to_string(), t.display_name().to_string()))
        .collect();

    view! {
        <Select
            id="theme-select"
            class="theme-selector"
            value=Signal::derive(move || ctx.theme.get().as_str().to_string())
            options=options
            on_change=Callback::new(move |value: String| ctx.set_theme(Theme::parse(&value)))
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for theme in Theme::all() {
            assert_eq!(Theme::parse(theme.as_str()), theme);
        }
        assert_eq!(Theme::parse("forest"), Theme::Dark);
    }

    #[test]
    fn test_config_matches_theme() {
        assert_eq!(Theme::Light.config(), light::theme());
        assert_eq!(Theme::Dark.config(), dark::theme());
    }
}
