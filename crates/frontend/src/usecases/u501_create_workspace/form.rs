//! State of the create-workspace form, independent of the UI toolkit.
//!
//! Field state is keyed by parameter name. The form is rebuilt from scratch
//! whenever the parameter descriptors or autofill values it was built from
//! change; edits made before that are discarded.

use std::collections::{BTreeMap, HashMap};

use contracts::domain::a001_template::{TemplateId, TemplateVersionId, TemplateVersionParameter};
use contracts::domain::a003_workspace::{
    AutofillBuildParameter, CreateWorkspaceRequest, WorkspaceBuildParameter,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::validation::{
    initial_rich_parameter_values, validate_workspace_name, RichParameterRules,
};

/// Server-side validation field of the workspace name
pub const NAME_FIELD: &str = "name";

/// Everything the form is initialized from
#[derive(Debug, Clone, PartialEq)]
pub struct FormInit {
    pub default_name: Option<String>,
    pub template_id: TemplateId,
    pub template_version_id: Option<TemplateVersionId>,
    pub parameters: Vec<TemplateVersionParameter>,
    pub autofill: Vec<AutofillBuildParameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
}

impl FieldState {
    fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            touched: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    /// Keyed by parameter name
    pub parameters: BTreeMap<String, String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.parameters.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Valid and allowed: hand the request to the caller
    Ready(CreateWorkspaceRequest),
    /// Client-side validation failed; errors are now visible
    Invalid(FormErrors),
    /// Valid, but a required external auth provider is not connected
    Blocked,
}

#[derive(Debug, Clone)]
pub struct CreateWorkspaceForm {
    init: FormInit,
    rules: RichParameterRules,
    name: FieldState,
    fields: HashMap<String, FieldState>,
    use_prebuild: bool,
    submit_attempted: bool,
    revision: u64,
}

impl CreateWorkspaceForm {
    pub fn new(init: FormInit) -> Self {
        Self::build(init, true, 0)
    }

    fn build(init: FormInit, use_prebuild: bool, revision: u64) -> Self {
        let rules = RichParameterRules::compile(&init.parameters);
        let fields = initial_rich_parameter_values(&init.parameters, &init.autofill)
            .into_iter()
            .map(|p| (p.name, FieldState::new(p.value)))
            .collect();
        let name = FieldState::new(init.default_name.clone().unwrap_or_default());

        Self {
            init,
            rules,
            name,
            fields,
            use_prebuild,
            submit_attempted: false,
            revision,
        }
    }

    /// Rebuild every field from `init`. The prebuild choice is kept.
    pub fn reinitialize(&mut self, init: FormInit) {
        *self = Self::build(init, self.use_prebuild, self.revision + 1);
    }

    /// Bumped on every reinitialization; rendered fields are keyed by it.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Reinitialize when the descriptors or autofill values differ from the
    /// ones the form was built from. Returns whether it did.
    pub fn sync_descriptors(
        &mut self,
        parameters: &[TemplateVersionParameter],
        autofill: &[AutofillBuildParameter],
    ) -> bool {
        if self.init.parameters == parameters && self.init.autofill == autofill {
            return false;
        }
        let init = FormInit {
            parameters: parameters.to_vec(),
            autofill: autofill.to_vec(),
            ..self.init.clone()
        };
        self.reinitialize(init);
        true
    }

    pub fn parameters(&self) -> &[TemplateVersionParameter] {
        &self.init.parameters
    }

    pub fn template_id(&self) -> TemplateId {
        self.init.template_id
    }

    // ------------------------------------------------------------------
    // Field access
    // ------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name.value
    }

    /// Stores the name with surrounding whitespace removed.
    pub fn set_name(&mut self, value: &str) {
        self.name.value = value.trim().to_string();
    }

    pub fn touch_name(&mut self) {
        self.name.touched = true;
    }

    pub fn parameter_value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|f| f.value.as_str())
    }

    /// Returns false when `name` is not a parameter of the current template.
    pub fn set_parameter_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.get_mut(name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn touch_parameter(&mut self, name: &str) {
        if let Some(field) = self.fields.get_mut(name) {
            field.touched = true;
        }
    }

    pub fn use_prebuild(&self) -> bool {
        self.use_prebuild
    }

    pub fn set_use_prebuild(&mut self, value: bool) {
        self.use_prebuild = value;
    }

    /// Values in template order.
    pub fn rich_parameter_values(&self) -> Vec<WorkspaceBuildParameter> {
        self.init
            .parameters
            .iter()
            .map(|p| {
                let value = self
                    .fields
                    .get(&p.name)
                    .map(|f| f.value.clone())
                    .unwrap_or_default();
                WorkspaceBuildParameter::new(&p.name, value)
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    pub fn validate(&self) -> FormErrors {
        FormErrors {
            name: validate_workspace_name(&self.name.value).err(),
            parameters: self.rules.validate_all(&self.rich_parameter_values()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Error to show under the name field. Client errors win over server
    /// validations; nothing is shown before the field is touched.
    pub fn name_error(&self, server: Option<&ApiError>) -> Option<String> {
        if !(self.name.touched || self.submit_attempted) {
            return None;
        }
        validate_workspace_name(&self.name.value)
            .err()
            .or_else(|| server_error(server, NAME_FIELD))
    }

    pub fn parameter_error(&self, name: &str, server: Option<&ApiError>) -> Option<String> {
        let field = self.fields.get(name)?;
        if !(field.touched || self.submit_attempted) {
            return None;
        }
        self.rules
            .validate(name, &field.value)
            .err()
            .or_else(|| server_error(server, name))
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    pub fn request(&self) -> CreateWorkspaceRequest {
        CreateWorkspaceRequest {
            name: self.name.value.clone(),
            template_id: self.init.template_id,
            template_version_id: self.init.template_version_id,
            rich_parameter_values: self.rich_parameter_values(),
            use_prebuild: self.use_prebuild,
        }
    }

    pub fn submit(&mut self, has_all_required_external_auth: bool) -> SubmitOutcome {
        self.submit_attempted = true;

        let errors = self.validate();
        if !errors.is_empty() {
            return SubmitOutcome::Invalid(errors);
        }
        if !has_all_required_external_auth {
            return SubmitOutcome::Blocked;
        }
        SubmitOutcome::Ready(self.request())
    }
}

fn server_error(server: Option<&ApiError>, field: &str) -> Option<String> {
    server.and_then(|e| e.field_error(field)).map(str::to_string)
}

/// Read-only when listed in `disabled_params` (by normalized name) or while
/// the workspace is being created.
pub fn is_parameter_disabled(
    parameter: &TemplateVersionParameter,
    disabled_params: &[String],
    creating_workspace: bool,
) -> bool {
    creating_workspace || disabled_params.contains(&parameter.normalized_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_workspace::AutofillSource;

    fn required(name: &str) -> TemplateVersionParameter {
        TemplateVersionParameter {
            required: true,
            ..TemplateVersionParameter::new(name)
        }
    }

    fn with_default(name: &str, default: &str) -> TemplateVersionParameter {
        TemplateVersionParameter {
            default_value: default.into(),
            ..TemplateVersionParameter::new(name)
        }
    }

    fn init(parameters: Vec<TemplateVersionParameter>, autofill: Vec<AutofillBuildParameter>) -> FormInit {
        FormInit {
            default_name: Some("dev".into()),
            template_id: TemplateId::new_v4(),
            template_version_id: None,
            parameters,
            autofill,
        }
    }

    fn expect_ready(outcome: SubmitOutcome) -> CreateWorkspaceRequest {
        match outcome {
            SubmitOutcome::Ready(request) => request,
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_autofilled_required_parameter_is_submitted() {
        let mut form = CreateWorkspaceForm::new(init(
            vec![required("region")],
            vec![AutofillBuildParameter::new("region", "us-east", AutofillSource::Url)],
        ));
        assert_eq!(
            form.rich_parameter_values(),
            vec![WorkspaceBuildParameter::new("region", "us-east")]
        );

        let request = expect_ready(form.submit(true));
        assert_eq!(request.parameter_value("region"), Some("us-east"));
        assert_eq!(
            request.rich_parameter_values,
            vec![WorkspaceBuildParameter::new("region", "us-east")]
        );
        assert_eq!(request.name, "dev");
        assert!(request.use_prebuild);
    }

    #[test]
    fn test_blocked_without_external_auth() {
        let mut form = CreateWorkspaceForm::new(init(vec![with_default("region", "eu")], vec![]));
        assert!(form.is_valid());
        assert_eq!(form.submit(false), SubmitOutcome::Blocked);
        assert!(matches!(form.submit(true), SubmitOutcome::Ready(_)));
    }

    #[test]
    fn test_invalid_form_never_reaches_auth_gate() {
        let mut form = CreateWorkspaceForm::new(init(vec![required("region")], vec![]));
        match form.submit(false) {
            SubmitOutcome::Invalid(errors) => {
                assert_eq!(errors.parameters.get("region").map(String::as_str), Some("Field is required."));
                assert!(errors.name.is_none());
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_name_validation_blocks_submission() {
        let mut form = CreateWorkspaceForm::new(init(vec![], vec![]));
        form.set_name("");
        assert!(matches!(form.submit(true), SubmitOutcome::Invalid(_)));
        form.set_name("bad name!");
        assert!(matches!(form.submit(true), SubmitOutcome::Invalid(_)));
        form.set_name("good-name");
        assert_eq!(expect_ready(form.submit(true)).name, "good-name");
    }

    #[test]
    fn test_accepting_suggestion_fills_name() {
        use crate::shared::name_generator::NameSuggestion;
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        let mut suggestion = NameSuggestion::new();
        let shown = suggestion.current().to_string();

        let mut form = CreateWorkspaceForm::new(init(vec![], vec![]));
        form.set_name(&suggestion.accept_with(&mut rng));

        assert_eq!(form.name(), shown);
        assert_ne!(suggestion.current(), shown);
        assert_eq!(expect_ready(form.submit(true)).name, shown);
    }

    #[test]
    fn test_name_is_trimmed() {
        let mut form = CreateWorkspaceForm::new(init(vec![], vec![]));
        form.set_name("  my-box \t");
        assert_eq!(form.name(), "my-box");
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = CreateWorkspaceForm::new(init(vec![required("region")], vec![]));
        form.set_name("");
        assert_eq!(form.name_error(None), None);
        assert_eq!(form.parameter_error("region", None), None);

        form.touch_name();
        assert_eq!(form.name_error(None), Some("Please enter a workspace name.".into()));
        assert_eq!(form.parameter_error("region", None), None);

        let _ = form.submit(true);
        assert_eq!(form.parameter_error("region", None), Some("Field is required.".into()));
    }

    #[test]
    fn test_server_validation_shown_when_client_passes() {
        let mut form = CreateWorkspaceForm::new(init(vec![], vec![]));
        form.touch_name();
        let server = ApiError::new("Validation failed.").with_validation("name", "Workspace already exists.");
        assert_eq!(form.name_error(Some(&server)), Some("Workspace already exists.".into()));

        form.set_name("");
        assert_eq!(form.name_error(Some(&server)), Some("Please enter a workspace name.".into()));
    }

    #[test]
    fn test_edits_survive_when_descriptors_unchanged() {
        let params = vec![with_default("region", "eu")];
        let mut form = CreateWorkspaceForm::new(init(params.clone(), vec![]));
        assert!(form.set_parameter_value("region", "us"));
        assert!(!form.sync_descriptors(&params, &[]));
        assert_eq!(form.parameter_value("region"), Some("us"));
        assert_eq!(form.revision(), 0);
    }

    #[test]
    fn test_changed_descriptors_reinitialize_everything() {
        let mut form = CreateWorkspaceForm::new(init(
            vec![with_default("region", "eu"), with_default("zone", "a")],
            vec![],
        ));
        form.set_name("edited");
        form.set_parameter_value("region", "us");
        form.set_use_prebuild(false);

        let changed = vec![with_default("region", "ap"), with_default("cpu", "4")];
        assert!(form.sync_descriptors(&changed, &[]));
        assert_eq!(form.revision(), 1);

        assert_eq!(form.name(), "dev");
        assert_eq!(form.parameter_value("region"), Some("ap"));
        assert_eq!(form.parameter_value("cpu"), Some("4"));
        assert_eq!(form.parameter_value("zone"), None);
        assert!(!form.use_prebuild());
        assert!(!form.set_parameter_value("zone", "b"));
    }

    #[test]
    fn test_values_follow_template_order() {
        let form = CreateWorkspaceForm::new(init(
            vec![with_default("b", "2"), with_default("a", "1"), with_default("c", "3")],
            vec![],
        ));
        let names: Vec<String> = form.rich_parameter_values().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_prebuild_choice_is_submitted() {
        let mut form = CreateWorkspaceForm::new(init(vec![], vec![]));
        form.set_use_prebuild(false);
        assert!(!expect_ready(form.submit(true)).use_prebuild);
    }

    #[test]
    fn test_disabled_parameter_by_normalized_name() {
        let parameter = TemplateVersionParameter::new("Instance Type");
        let disabled = vec!["instance_type".to_string()];
        assert!(is_parameter_disabled(&parameter, &disabled, false));
        assert!(!is_parameter_disabled(&parameter, &["Instance Type".to_string()], false));
        assert!(!is_parameter_disabled(&TemplateVersionParameter::new("region"), &disabled, false));
        assert!(is_parameter_disabled(&TemplateVersionParameter::new("region"), &disabled, true));
    }

    #[test]
    fn test_pinned_version_is_carried() {
        let version = TemplateVersionId::new_v4();
        let mut form = CreateWorkspaceForm::new(FormInit {
            template_version_id: Some(version),
            ..init(vec![], vec![])
        });
        assert_eq!(expect_ready(form.submit(true)).template_version_id, Some(version));
    }
}
