use leptos::prelude::*;

/// Horizontal form section: title and description on the left, fields on the right
#[component]
pub fn FormSection(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    description: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="form-section">
            <div class="form-section__info">
                <h2 class="form-section__title">{title}</h2>
                {move || description.get().map(|d| view! {
                    <p class="form-section__description">{d}</p>
                })}
            </div>
            <div class="form-section__body">{children()}</div>
        </section>
    }
}

#[component]
pub fn FormFields(
    /// Extra spacing between fields (px)
    #[prop(optional)]
    gap: Option<u32>,
    children: Children,
) -> impl IntoView {
    let style = gap.map(|g| format!("gap: {}px;", g)).unwrap_or_default();

    view! {
        <div class="form-fields" style=style>{children()}</div>
    }
}

/// Cancel + submit footer
#[component]
pub fn FormFooter(
    on_cancel: Callback<()>,
    #[prop(into)]
    is_loading: Signal<bool>,
    #[prop(optional, into)]
    submit_disabled: MaybeProp<bool>,
    #[prop(into)]
    submit_label: String,
) -> impl IntoView {
    use super::ui::Button;

    view! {
        <div class="form-footer">
            <Button
                variant="secondary"
                disabled=Signal::derive(move || is_loading.get())
                on_click=Callback::new(move |_| on_cancel.run(()))
            >
                "Cancel"
            </Button>
            <Button
                button_type="submit"
                loading=is_loading
                disabled=Signal::derive(move || submit_disabled.get().unwrap_or(false))
            >
                {submit_label}
            </Button>
        </div>
    }
}
