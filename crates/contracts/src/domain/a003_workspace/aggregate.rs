use serde::{Deserialize, Serialize};

use crate::domain::a001_template::{TemplateId, TemplateVersionId};

/// One `(parameter name, value)` pair of a workspace build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceBuildParameter {
    pub name: String,
    pub value: String,
}

impl WorkspaceBuildParameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Where an autofill value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutofillSource {
    /// `param.<name>=<value>` in the page URL
    Url,
    /// Copied from the workspace being duplicated
    ActiveBuild,
    /// Previously used by the user; offered as a hint, never prefilled
    UserHistory,
}

/// Pre-populated parameter value supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutofillBuildParameter {
    pub name: String,
    pub value: String,
    pub source: AutofillSource,
}

impl AutofillBuildParameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>, source: AutofillSource) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            source,
        }
    }

    pub fn prefills(&self) -> bool {
        self.source != AutofillSource::UserHistory
    }
}

/// Body of `POST /api/v2/users/{user}/workspaces`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWorkspaceRequest {
    pub name: String,
    pub template_id: TemplateId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_version_id: Option<TemplateVersionId>,
    pub rich_parameter_values: Vec<WorkspaceBuildParameter>,
    pub use_prebuild: bool,
}

impl CreateWorkspaceRequest {
    pub fn parameter_value(&self, name: &str) -> Option<&str> {
        self.rich_parameter_values
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

/// Workspace returned after a successful creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: uuid::Uuid,
    pub name: String,
    pub owner_name: String,
    pub template_id: TemplateId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = CreateWorkspaceRequest {
            name: "dev".into(),
            template_id: TemplateId::new_v4(),
            template_version_id: None,
            rich_parameter_values: vec![WorkspaceBuildParameter::new("region", "us-east")],
            use_prebuild: true,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("template_version_id").is_none());
        assert_eq!(json["rich_parameter_values"][0]["value"], "us-east");
        assert_eq!(json["use_prebuild"], true);
        assert_eq!(request.parameter_value("region"), Some("us-east"));
        assert_eq!(request.parameter_value("zone"), None);
    }

    #[test]
    fn test_user_history_does_not_prefill() {
        assert!(AutofillBuildParameter::new("a", "b", AutofillSource::Url).prefills());
        assert!(!AutofillBuildParameter::new("a", "b", AutofillSource::UserHistory).prefills());
    }
}
