use super::HelperText;
use leptos::prelude::*;

/// Input component with label, helper text and validation error
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Fired when the input loses focus (marks the field touched)
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Read-only: value shown but not editable
    #[prop(optional, into)]
    readonly: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Name attribute
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// Validation error shown under the input
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Hint shown under the input when there is no error
    #[prop(optional, into)]
    helper: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();
    let invalid = move || error.get().is_some();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                name=move || name.get().unwrap_or_default()
                class=move || {
                    if invalid() {
                        format!("form__input form__input--invalid {}", additional_class())
                    } else {
                        format!("form__input {}", additional_class())
                    }
                }
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                readonly=move || readonly.get().unwrap_or(false)
                required=required
                aria-invalid=move || invalid().to_string()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
                on:blur=move |_| {
                    if let Some(handler) = on_blur {
                        handler.run(());
                    }
                }
            />
            <HelperText error=error helper=helper />
        </div>
    }
}
