use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;
use contracts::domain::a002_external_auth::TemplateVersionExternalAuth;
use leptos::prelude::*;

const AUTH_POPUP_FEATURES: &str = "width=900,height=600";

/// Login button of one external auth provider.
///
/// Opens the provider's authenticate URL in a popup and asks the page to
/// start polling. The retry button only appears once polling was abandoned.
#[component]
pub fn ExternalAuthButton(
    auth: TemplateVersionExternalAuth,
    #[prop(into)]
    is_polling: Signal<bool>,
    #[prop(into)]
    is_abandoned: Signal<bool>,
    on_start_polling: Callback<()>,
) -> impl IntoView {
    let authenticated = auth.authenticated;
    let optional = auth.optional;
    let label = if authenticated {
        format!("Authenticated with {}", auth.label())
    } else {
        format!("Login with {}", auth.label())
    };
    let url = auth.authenticate_url.clone();
    let icon_src = auth.display_icon.clone();

    let login = Callback::new(move |_| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target_and_features(&url, "_blank", AUTH_POPUP_FEATURES) {
                log::error!("Failed to open external auth window: {:?}", e);
            }
        }
        on_start_polling.run(());
    });

    view! {
        <div class="external-auth" data-testid=format!("external-auth-{}", auth.id)>
            <Button
                variant="secondary"
                class="external-auth__login"
                disabled=authenticated
                loading=Signal::derive(move || !authenticated && is_polling.get())
                on_click=login
            >
                {(!icon_src.is_empty()).then(|| view! {
                    <img class="external-auth__icon" src=icon_src.clone() alt="" />
                })}
                {if authenticated { icon("check") } else { icon("external-link") }}
                <span>{label}</span>
            </Button>

            {optional.then(|| view! { <Badge variant="neutral">"Optional"</Badge> })}

            <Show when=move || !authenticated && is_abandoned.get()>
                <Button
                    variant="ghost"
                    size="sm"
                    class="external-auth__retry"
                    on_click=Callback::new(move |_| on_start_polling.run(()))
                >
                    {icon("refresh")}
                    "Retry"
                </Button>
            </Show>
        </div>
    }
}
