use leptos::prelude::*;

/// Badge (pill) component
#[component]
pub fn Badge(
    /// Badge variant: "notice", "success", "warning", "error", "preview", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "notice" => "badge--notice",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        "preview" => "badge--preview",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}
