use leptos::prelude::*;

/// Text under a form control: the error when there is one, the hint otherwise.
#[component]
pub fn HelperText(
    /// Validation error (takes precedence)
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Hint shown when there is no error
    #[prop(optional, into)]
    helper: MaybeProp<String>,
) -> impl IntoView {
    move || match (error.get(), helper.get()) {
        (Some(e), _) => Some(view! { <p class="form__helper form__helper--error" role="alert">{e}</p> }.into_any()),
        (None, Some(h)) if !h.is_empty() => Some(view! { <p class="form__helper">{h}</p> }.into_any()),
        _ => None,
    }
}
