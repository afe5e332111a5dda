use super::form::{CreateWorkspaceForm, FormInit, SubmitOutcome};
use crate::shared::name_generator::NameSuggestion;
use contracts::domain::a001_template::TemplateVersionParameter;
use contracts::domain::a003_workspace::{AutofillBuildParameter, CreateWorkspaceRequest};
use contracts::shared::api_error::ApiError;
use contracts::system::users::User;
use leptos::prelude::*;

/// ViewModel of the create-workspace form
#[derive(Clone, Copy)]
pub struct CreateWorkspaceViewModel {
    pub form: RwSignal<CreateWorkspaceForm>,
    pub owner: RwSignal<User>,
    pub suggestion: RwSignal<NameSuggestion>,
    default_owner: StoredValue<User>,
}

impl CreateWorkspaceViewModel {
    pub fn new(init: FormInit, default_owner: User) -> Self {
        Self {
            form: RwSignal::new(CreateWorkspaceForm::new(init)),
            owner: RwSignal::new(default_owner.clone()),
            suggestion: RwSignal::new(NameSuggestion::new()),
            default_owner: StoredValue::new(default_owner),
        }
    }

    /// Only notifies subscribers when the form was actually rebuilt.
    pub fn sync_descriptors(
        &self,
        parameters: &[TemplateVersionParameter],
        autofill: &[AutofillBuildParameter],
    ) {
        self.form.maybe_update(|form| {
            let rebuilt = form.sync_descriptors(parameters, autofill);
            if rebuilt {
                log::debug!(
                    "Parameters changed, form reinitialized ({} fields)",
                    parameters.len()
                );
            }
            rebuilt
        });
    }

    pub fn set_name(&self, value: String, on_reset: Callback<()>) {
        self.form.update(|form| form.set_name(&value));
        on_reset.run(());
    }

    pub fn touch_name(&self) {
        self.form.update(|form| form.touch_name());
    }

    pub fn accept_suggestion(&self, on_reset: Callback<()>) {
        let mut name = String::new();
        self.suggestion.update(|s| name = s.accept());
        self.set_name(name, on_reset);
    }

    pub fn set_parameter(&self, name: &str, value: String) {
        self.form.update(|form| {
            if !form.set_parameter_value(name, value) {
                log::warn!("Ignoring value for unknown parameter {}", name);
            }
        });
    }

    pub fn touch_parameter(&self, name: &str) {
        self.form.update(|form| form.touch_parameter(name));
    }

    pub fn set_use_prebuild(&self, value: bool) {
        self.form.update(|form| form.set_use_prebuild(value));
    }

    /// `None` (cleared picker) falls back to the default owner.
    pub fn change_owner(&self, user: Option<User>) {
        let owner = user.unwrap_or_else(|| self.default_owner.get_value());
        self.owner.set(owner);
    }

    pub fn name_error(&self, server: Option<&ApiError>) -> Option<String> {
        self.form.with(|form| form.name_error(server))
    }

    pub fn parameter_error(&self, name: &str, server: Option<&ApiError>) -> Option<String> {
        self.form.with(|form| form.parameter_error(name, server))
    }

    /// Validate and hand the request to `on_submit` at most once per call.
    pub fn submit_command(
        &self,
        has_all_required_external_auth: bool,
        on_submit: Callback<(CreateWorkspaceRequest, User)>,
    ) {
        let mut outcome = None;
        self.form
            .update(|form| outcome = Some(form.submit(has_all_required_external_auth)));

        match outcome {
            Some(SubmitOutcome::Ready(request)) => {
                let owner = self.owner.get_untracked();
                log::info!(
                    "Submitting workspace {} for {}",
                    request.name,
                    owner.username
                );
                on_submit.run((request, owner));
            }
            Some(SubmitOutcome::Invalid(errors)) => {
                log::debug!(
                    "Submit rejected: {} parameter error(s), name error: {:?}",
                    errors.parameters.len(),
                    errors.name
                );
            }
            Some(SubmitOutcome::Blocked) => {
                log::debug!("Submit blocked until required external auth is connected");
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_template::TemplateId;
    use contracts::system::users::UserId;
    use leptos::reactive::owner::Owner;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn owner_user() -> User {
        User {
            id: UserId::new_v4(),
            username: "alice".into(),
            name: String::new(),
            email: String::new(),
            avatar_url: String::new(),
        }
    }

    fn view_model(default_name: &str) -> CreateWorkspaceViewModel {
        let init = FormInit {
            default_name: Some(default_name.into()),
            template_id: TemplateId::new_v4(),
            template_version_id: None,
            parameters: vec![TemplateVersionParameter {
                required: true,
                ..TemplateVersionParameter::new("region")
            }],
            autofill: vec![],
        };
        let vm = CreateWorkspaceViewModel::new(init, owner_user());
        vm.set_parameter("region", "eu".into());
        vm
    }

    fn counting_callback() -> (Callback<(CreateWorkspaceRequest, User)>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let callback = Callback::new(move |(request, owner): (CreateWorkspaceRequest, User)| {
            assert_eq!(request.name, "dev");
            assert_eq!(owner.username, "alice");
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (callback, calls)
    }

    #[test]
    fn test_submit_runs_callback_once_when_ready() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = view_model("dev");
            let (on_submit, calls) = counting_callback();
            vm.submit_command(true, on_submit);
            assert_eq!(calls.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn test_submit_skips_callback_when_blocked_or_invalid() {
        let owner = Owner::new();
        owner.with(|| {
            let (on_submit, calls) = counting_callback();

            let blocked = view_model("dev");
            blocked.submit_command(false, on_submit);

            let invalid = view_model("not valid!");
            invalid.submit_command(true, on_submit);

            assert_eq!(calls.load(Ordering::SeqCst), 0);
            assert!(invalid.name_error(None).is_some());
        });
    }
}
