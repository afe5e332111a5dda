use super::external_auth_button::ExternalAuthButton;
use super::form::{is_parameter_disabled, FormInit};
use super::rich_parameter_input::RichParameterInput;
use super::view_model::CreateWorkspaceViewModel;
use crate::shared::components::ui::{Badge, Button, Checkbox, Input};
use crate::shared::components::{
    Alert, Avatar, ErrorAlert, FormFields, FormFooter, FormSection, PageHeader, UserAutocomplete,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use crate::shared::theme::{use_theme, ThemeSelector};
use contracts::domain::a001_template::{Template, TemplateVersionId, TemplateVersionParameter};
use contracts::domain::a002_external_auth::{
    missing_required_external_auth, ExternalAuthPollingState, TemplateVersionExternalAuth,
};
use contracts::domain::a003_workspace::{AutofillBuildParameter, CreateWorkspaceRequest};
use contracts::shared::api_error::ApiError;
use contracts::system::experiments::{Experiment, Experiments};
use contracts::system::users::User;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_create_workspace::{
    CreateWorkspace, CreateWorkspaceMode, CreateWorkspacePermissions,
};
use leptos::prelude::*;
use std::sync::Arc;

const DUPLICATE_NOTICE: &str =
    "Duplicating a workspace only copies its parameters. No state from the old workspace is copied over.";
const EXTERNAL_AUTH_REQUIRED: &str = "To create a workspace using this template, please connect to all required external authentication providers listed below.";
const PARAMETERS_DESCRIPTION: &str = "These are the settings used by your template. Please note that immutable parameters cannot be modified once the workspace is created.";

/// Providers listed in the "connect all required providers" banner, or `None`
/// when the banner is hidden. It only shows after a failed submit.
fn required_auth_banner(
    has_error: bool,
    has_all_required: bool,
    auths: &[TemplateVersionExternalAuth],
) -> Option<Vec<String>> {
    if !has_error || has_all_required {
        return None;
    }
    Some(
        missing_required_external_auth(auths)
            .into_iter()
            .map(|a| a.label().to_string())
            .collect(),
    )
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Create-workspace form.
///
/// Data loading, polling and the network call belong to the caller; the
/// view owns only the form state and reports a valid request through
/// `on_submit`.
#[component]
pub fn CreateWorkspacePageView(
    mode: CreateWorkspaceMode,
    #[prop(optional_no_strip)]
    default_name: Option<String>,
    /// Normalized names of parameters that cannot be edited
    #[prop(optional)]
    disabled_params: Vec<String>,
    #[prop(into)]
    error: Signal<Option<ApiError>>,
    /// Clears `error`; called on every name change
    reset_mutation: Callback<()>,
    default_owner: User,
    template: Template,
    /// Pinned template version, `None` for the active one
    #[prop(optional_no_strip)]
    version_id: Option<TemplateVersionId>,
    #[prop(into)]
    external_auth: Signal<Vec<TemplateVersionExternalAuth>>,
    #[prop(into)]
    external_auth_polling_state: Signal<ExternalAuthPollingState>,
    start_polling_external_auth: Callback<()>,
    #[prop(into)]
    has_all_required_external_auth: Signal<bool>,
    #[prop(into)]
    parameters: Signal<Vec<TemplateVersionParameter>>,
    #[prop(into)]
    autofill_parameters: Signal<Vec<AutofillBuildParameter>>,
    permissions: CreateWorkspacePermissions,
    experiments: Experiments,
    #[prop(into)]
    creating: Signal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<(CreateWorkspaceRequest, User)>,
) -> impl IntoView {
    let theme = use_theme();
    let vm = CreateWorkspaceViewModel::new(
        FormInit {
            default_name,
            template_id: template.id,
            template_version_id: version_id,
            parameters: parameters.get_untracked(),
            autofill: autofill_parameters.get_untracked(),
        },
        default_owner,
    );
    let disabled_params = StoredValue::new(disabled_params);

    // Rebuild the form only when the descriptors themselves change
    Effect::new(move |_| {
        let params = parameters.get();
        let autofill = autofill_parameters.get();
        vm.sync_descriptors(&params, &autofill);
    });

    Effect::new(move |_| {
        if error.with(Option::is_some) {
            scroll_to_top();
        }
    });

    let show_prebuild = experiments.is_enabled(Experiment::WorkspacePrebuilds);
    let show_version = template.is_pinned_to_other_version(version_id);
    let version_label = version_id.map(|v| v.to_string()).unwrap_or_default();
    let show_owner = permissions.create_workspace_for_user;

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(has_all_required_external_auth.get_untracked(), on_submit);
    };

    // Header
    let avatar_src = template.has_icon().then(|| template.icon.clone());
    let avatar_letter = template.avatar_letter();
    let leading: ChildrenFn = Arc::new(move || {
        let src = avatar_src.clone().unwrap_or_default();
        view! {
            <Avatar
                src=avatar_src.clone()
                fallback=avatar_letter.clone()
                size="xl"
                square=true
                image_style=Signal::derive(move || theme.config().external_images.style_for(&src))
            />
        }
        .into_any()
    });
    let deprecated = template.deprecated;
    let badges: ChildrenFn = Arc::new(move || {
        deprecated
            .then(|| view! { <Badge variant="warning">"Deprecated"</Badge> })
            .into_any()
    });

    view! {
        <PageFrame
            page_id=page_id(&CreateWorkspace::full_name(), PAGE_CAT_USECASE)
            category=PAGE_CAT_USECASE
            size="medium"
        >
            <PageHeader title=template.title().to_string() subtitle="New workspace" leading=leading badges=badges>
                <ThemeSelector />
            </PageHeader>

            <form class="create-workspace-form" novalidate=true on:submit=on_form_submit>
                {move || error.get().map(|e| view! { <ErrorAlert error=e /> })}

                {mode.is_duplicate().then(|| view! {
                    <Alert severity="info" dismissible=true test_id="duplicate-warning">
                        {DUPLICATE_NOTICE}
                    </Alert>
                })}

                <FormSection title="General" description=permissions.general_section_description()>
                    <FormFields>
                        <Input
                            id="name"
                            name="name"
                            label="Workspace Name"
                            value=Signal::derive(move || vm.form.with(|f| f.name().to_string()))
                            on_input=Callback::new(move |v: String| vm.set_name(v, reset_mutation))
                            on_blur=Callback::new(move |_| vm.touch_name())
                            disabled=creating
                            error=Signal::derive(move || error.with(|e| vm.name_error(e.as_ref())))
                        />
                        <div class="name-suggestion">
                            <span class="name-suggestion__label">"Need a suggestion?"</span>
                            <Button
                                variant="text"
                                size="sm"
                                button_type="button"
                                disabled=creating
                                on_click=Callback::new(move |_| vm.accept_suggestion(reset_mutation))
                            >
                                {move || vm.suggestion.with(|s| s.current().to_string())}
                            </Button>
                        </div>

                        {show_version.then(|| view! {
                            <Input
                                id="version_id"
                                label="Version ID"
                                value=version_label.clone()
                                readonly=true
                                helper="This parameter has been preset, and cannot be modified."
                            />
                        })}

                        {show_owner.then(|| view! {
                            <UserAutocomplete
                                label="Owner"
                                value=vm.owner
                                on_change=Callback::new(move |user: Option<User>| vm.change_owner(user))
                                disabled=creating
                            />
                        })}
                    </FormFields>
                </FormSection>

                <Show when=move || external_auth.with(|a| !a.is_empty())>
                    <FormSection
                        title="External Authentication"
                        description="This template uses external services for authentication."
                    >
                        <FormFields>
                            {move || {
                                let labels = external_auth.with(|auths| {
                                    required_auth_banner(
                                        error.with(Option::is_some),
                                        has_all_required_external_auth.get(),
                                        auths,
                                    )
                                });
                                labels.map(|labels| view! {
                                    <Alert severity="error" test_id="external-auth-required">
                                        {EXTERNAL_AUTH_REQUIRED}
                                        <ul class="alert__list">
                                            {labels.into_iter().map(|l| view! { <li>{l}</li> }).collect_view()}
                                        </ul>
                                    </Alert>
                                })
                            }}
                            <For
                                each=move || external_auth.get()
                                key=|auth| (auth.id.clone(), auth.authenticated)
                                let:auth
                            >
                                <ExternalAuthButton
                                    auth=auth
                                    is_polling=Signal::derive(move || external_auth_polling_state.get().is_polling())
                                    is_abandoned=Signal::derive(move || external_auth_polling_state.get().is_abandoned())
                                    on_start_polling=start_polling_external_auth
                                />
                            </For>
                        </FormFields>
                    </FormSection>
                </Show>

                {show_prebuild.then(|| view! {
                    <FormSection title="Prebuilds" description="Prebuilds speed up workspace creation time">
                        <FormFields>
                            <Checkbox
                                id="use_prebuild"
                                label="Use prebuild".to_string()
                                checked=Signal::derive(move || vm.form.with(|f| f.use_prebuild()))
                                on_change=Callback::new(move |checked: bool| vm.set_use_prebuild(checked))
                                disabled=creating
                            />
                        </FormFields>
                    </FormSection>
                })}

                <Show when=move || vm.form.with(|f| !f.parameters().is_empty())>
                    <FormSection title="Parameters" description=PARAMETERS_DESCRIPTION>
                        <FormFields gap=36>
                            <For
                                each=move || vm.form.with(|f| {
                                    let revision = f.revision();
                                    f.parameters()
                                        .iter()
                                        .cloned()
                                        .map(|p| (revision, p))
                                        .collect::<Vec<_>>()
                                })
                                key=|(revision, p)| (*revision, p.name.clone())
                                children=move |(_, parameter)| {
                                    let name = StoredValue::new(parameter.name.clone());
                                    let autofilled = autofill_parameters.with_untracked(|a| {
                                        a.iter().any(|p| p.name == parameter.name && p.prefills())
                                    });
                                    let disabled = {
                                        let parameter = parameter.clone();
                                        Signal::derive(move || {
                                            disabled_params.with_value(|d| {
                                                is_parameter_disabled(&parameter, d, creating.get())
                                            })
                                        })
                                    };
                                    view! {
                                        <RichParameterInput
                                            parameter=parameter
                                            value=Signal::derive(move || {
                                                vm.form.with(|f| {
                                                    name.with_value(|n| f.parameter_value(n).unwrap_or_default().to_string())
                                                })
                                            })
                                            on_change=Callback::new(move |v: String| name.with_value(|n| vm.set_parameter(n, v)))
                                            on_blur=Callback::new(move |_| name.with_value(|n| vm.touch_parameter(n)))
                                            disabled=disabled
                                            error=Signal::derive(move || {
                                                error.with(|e| name.with_value(|n| vm.parameter_error(n, e.as_ref())))
                                            })
                                            autofilled=autofilled
                                        />
                                    }
                                }
                            />
                        </FormFields>
                    </FormSection>
                </Show>

                <FormFooter
                    on_cancel=on_cancel
                    is_loading=creating
                    submit_disabled=Signal::derive(move || !has_all_required_external_auth.get())
                    submit_label="Create Workspace"
                />
            </form>
        </PageFrame>
    }
}
