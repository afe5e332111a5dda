use serde::{Deserialize, Serialize};

/// External authentication provider required by a template version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVersionExternalAuth {
    pub id: String,
    #[serde(rename = "type")]
    pub provider_type: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub display_icon: String,
    pub authenticate_url: String,
    pub authenticated: bool,
    #[serde(default)]
    pub optional: bool,
}

impl TemplateVersionExternalAuth {
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.id
        } else {
            &self.display_name
        }
    }

    /// Authenticated, or not needed to create the workspace.
    pub fn is_satisfied(&self) -> bool {
        self.authenticated || self.optional
    }
}

/// State of the caller-owned polling loop that refreshes external auth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalAuthPollingState {
    #[default]
    Idle,
    Polling,
    Abandoned,
}

impl ExternalAuthPollingState {
    pub fn is_polling(&self) -> bool {
        matches!(self, Self::Polling)
    }

    pub fn is_abandoned(&self) -> bool {
        matches!(self, Self::Abandoned)
    }
}

pub fn has_all_required_external_auth(auths: &[TemplateVersionExternalAuth]) -> bool {
    auths.iter().all(TemplateVersionExternalAuth::is_satisfied)
}

pub fn missing_required_external_auth(
    auths: &[TemplateVersionExternalAuth],
) -> Vec<&TemplateVersionExternalAuth> {
    auths.iter().filter(|a| !a.is_satisfied()).collect()
}
