use contracts::shared::api_error::ApiError;
use leptos::prelude::*;

/// Banner with a severity: "error", "warning", "info" (default), "success"
#[component]
pub fn Alert(
    #[prop(optional, into)]
    severity: MaybeProp<String>,
    /// Shows a close button that hides the banner
    #[prop(optional)]
    dismissible: bool,
    /// `data-testid` attribute
    #[prop(optional, into)]
    test_id: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let open = RwSignal::new(true);
    let severity_class = move || match severity.get().as_deref().unwrap_or("info") {
        "error" => "alert alert--error",
        "warning" => "alert alert--warning",
        "success" => "alert alert--success",
        _ => "alert alert--info",
    };

    view! {
        <div
            class=severity_class
            role="alert"
            data-testid=move || test_id.get().unwrap_or_default()
            style:display=move || if open.get() { "" } else { "none" }
        >
            <div class="alert__content">{children()}</div>
            {dismissible.then(|| view! {
                <button class="alert__close" aria-label="Dismiss" on:click=move |_| open.set(false)>
                    "×"
                </button>
            })}
        </div>
    }
}

/// Error banner for an [`ApiError`]: message plus optional detail
#[component]
pub fn ErrorAlert(error: ApiError) -> impl IntoView {
    let ApiError {
        message, detail, ..
    } = error;

    view! {
        <Alert severity="error">
            <div class="alert__title">{message}</div>
            {detail.map(|d| view! { <div class="alert__detail">{d}</div> })}
        </Alert>
    }
}
