//! Root wrapper for every page.
//!
//! The root element always carries `id="{entity}--{category}"` and
//! `data-page-category` (one of the PAGE_CAT_* constants),
//! and centers the content with the requested width ("medium" or "large").

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Content width: "medium" (default) or "large".
    #[prop(optional)]
    size: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };
    let margins = match size {
        "large" => "margins margins--large",
        _ => "margins margins--medium",
    };

    view! {
        <div
            id=page_id
            class=format!("{base_class} {margins}")
            data-page-category=category
        >
            {children()}
        </div>
    }
}
