//! Route-level container of the create-workspace form.
//!
//! Loads everything the view needs, owns external-auth polling and performs
//! the create call. In `auto` mode a complete initial form is submitted
//! without showing it.

use super::form::{CreateWorkspaceForm, FormInit, SubmitOutcome};
use super::model;
use super::query::CreateWorkspaceQuery;
use super::view::CreateWorkspacePageView;
use crate::shared::components::ErrorAlert;
use crate::shared::config::use_app_config;
use contracts::domain::a001_template::{Template, TemplateVersionId, TemplateVersionParameter};
use contracts::domain::a002_external_auth::{
    has_all_required_external_auth, ExternalAuthPollingState, TemplateVersionExternalAuth,
};
use contracts::domain::a003_workspace::CreateWorkspaceRequest;
use contracts::shared::api_error::ApiError;
use contracts::system::experiments::Experiments;
use contracts::system::users::User;
use contracts::usecases::u501_create_workspace::{CreateWorkspaceMode, CreateWorkspacePermissions};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

/// Everything loaded once before the form is shown
#[derive(Debug, Clone)]
struct PageData {
    template: Template,
    version_id: TemplateVersionId,
    me: User,
    permissions: CreateWorkspacePermissions,
    experiments: Experiments,
}

async fn load_page_data(
    query: &CreateWorkspaceQuery,
) -> Result<(PageData, Vec<TemplateVersionParameter>, Vec<TemplateVersionExternalAuth>), ApiError> {
    let template_id = query
        .template_id
        .ok_or_else(|| ApiError::new("No template selected"))?;

    let template = model::fetch_template(template_id).await?;
    let version_id = template.effective_version(query.version_id);
    let parameters = model::fetch_rich_parameters(version_id).await?;
    let external_auth = model::fetch_external_auth(version_id).await?;
    let me = model::fetch_current_user().await?;
    let permissions = model::fetch_permissions(template.organization_id).await?;
    // Experiments only toggle optional sections
    let experiments = model::fetch_experiments().await.unwrap_or_else(|e| {
        log::warn!("Failed to load experiments: {}", e);
        Experiments::default()
    });

    Ok((
        PageData {
            template,
            version_id,
            me,
            permissions,
            experiments,
        },
        parameters,
        external_auth,
    ))
}

fn navigate_to(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            log::error!("Navigation to {} failed: {:?}", url, e);
        }
    }
}

fn go_back() {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}

#[component]
pub fn CreateWorkspacePage() -> impl IntoView {
    let config = use_app_config();
    let query = CreateWorkspaceQuery::from_location();
    let mode = query.mode;

    let data = RwSignal::new(Option::<PageData>::None);
    let load_error = RwSignal::new(Option::<ApiError>::None);
    let parameters = RwSignal::new(Vec::<TemplateVersionParameter>::new());
    let autofill = RwSignal::new(query.autofill.clone());
    let external_auth = RwSignal::new(Vec::<TemplateVersionExternalAuth>::new());
    let polling = RwSignal::new(ExternalAuthPollingState::Idle);
    let create_error = RwSignal::new(Option::<ApiError>::None);
    let creating = RwSignal::new(false);
    // Keeps the form hidden while an automatic submit is in flight
    let auto_creating = RwSignal::new(false);

    let has_all_auth = Signal::derive(move || external_auth.with(|a| has_all_required_external_auth(a)));

    let submit = Callback::new(move |(request, owner): (CreateWorkspaceRequest, User)| {
        if creating.get_untracked() {
            return;
        }
        creating.set(true);
        create_error.set(None);
        spawn_local(async move {
            match model::create_workspace(owner.id, &request).await {
                Ok(workspace) => {
                    log::info!("Workspace {} created", workspace.name);
                    navigate_to(&format!("/@{}/{}", owner.username, workspace.name));
                }
                Err(e) => {
                    log::error!("Failed to create workspace {}: {}", request.name, e);
                    let _ = creating.try_set(false);
                    let _ = auto_creating.try_set(false);
                    let _ = create_error.try_set(Some(e));
                }
            }
        });
    });

    let start_polling = Callback::new(move |_: ()| {
        let Some(version_id) = data.with_untracked(|d| d.as_ref().map(|d| d.version_id)) else {
            return;
        };
        if polling.get_untracked().is_polling() {
            return;
        }
        polling.set(ExternalAuthPollingState::Polling);
        log::debug!("External auth polling started");

        let interval = config.external_auth_poll_interval_ms;
        let attempts = config.max_poll_attempts();
        spawn_local(async move {
            for _ in 0..attempts {
                TimeoutFuture::new(interval).await;
                // Page left or polling reset
                if polling.try_get_untracked() != Some(ExternalAuthPollingState::Polling) {
                    return;
                }
                match model::fetch_external_auth(version_id).await {
                    Ok(list) => {
                        let done = has_all_required_external_auth(&list);
                        let _ = external_auth.try_set(list);
                        if done {
                            log::debug!("External auth complete, polling stopped");
                            let _ = polling.try_set(ExternalAuthPollingState::Idle);
                            return;
                        }
                    }
                    Err(e) => log::warn!("External auth refresh failed: {}", e),
                }
            }
            log::debug!("External auth polling abandoned");
            let _ = polling.try_set(ExternalAuthPollingState::Abandoned);
        });
    });

    {
        let query = query.clone();
        spawn_local(async move {
            match load_page_data(&query).await {
                Ok((page, params, auths)) => {
                    log::debug!(
                        "Loaded template {} ({}): {} parameters, {} external auth",
                        page.template.name,
                        page.template.to_string_id(),
                        params.len(),
                        auths.len()
                    );

                    if mode == CreateWorkspaceMode::Auto {
                        let mut form = CreateWorkspaceForm::new(FormInit {
                            default_name: query.default_name.clone(),
                            template_id: page.template.id,
                            template_version_id: query.version_id,
                            parameters: params.clone(),
                            autofill: query.autofill.clone(),
                        });
                        let outcome = form.submit(has_all_required_external_auth(&auths));
                        if let SubmitOutcome::Ready(request) = outcome {
                            log::info!("Auto mode: submitting without interaction");
                            auto_creating.set(true);
                            submit.run((request, page.me.clone()));
                        } else {
                            log::info!("Auto mode: initial values incomplete, showing the form");
                        }
                    }

                    parameters.set(params);
                    external_auth.set(auths);
                    data.set(Some(page));
                }
                Err(e) => {
                    log::error!("Failed to load create workspace page: {}", e);
                    load_error.set(Some(e));
                }
            }
        });
    }

    let disabled_params = query.disabled_params.clone();
    let default_name = query.default_name.clone();
    let pinned_version = query.version_id;

    view! {
        {move || {
            if let Some(e) = load_error.get() {
                return view! {
                    <div class="page page--error">
                        <ErrorAlert error=e />
                    </div>
                }
                .into_any();
            }
            let Some(page) = data.get() else {
                return view! {
                    <div class="page page--loading">
                        <Spinner />
                        <span>"Loading..."</span>
                    </div>
                }
                .into_any();
            };
            if auto_creating.get() {
                return view! {
                    <div class="page page--loading">
                        <Spinner />
                        <span>"Creating workspace..."</span>
                    </div>
                }
                .into_any();
            }
            view! {
                <CreateWorkspacePageView
                    mode=mode
                    default_name=default_name.clone()
                    disabled_params=disabled_params.clone()
                    error=create_error
                    reset_mutation=Callback::new(move |_| create_error.set(None))
                    default_owner=page.me
                    template=page.template
                    version_id=pinned_version
                    external_auth=external_auth
                    external_auth_polling_state=polling
                    start_polling_external_auth=start_polling
                    has_all_required_external_auth=has_all_auth
                    parameters=parameters
                    autofill_parameters=autofill
                    permissions=page.permissions
                    experiments=page.experiments
                    creating=creating
                    on_cancel=Callback::new(move |_| go_back())
                    on_submit=submit
                />
            }
            .into_any()
        }}
    }
}
