use serde::{Deserialize, Serialize};

/// How the create page was opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreateWorkspaceMode {
    /// Regular form
    #[default]
    Form,
    /// Submit without interaction when the initial values are complete
    Auto,
    /// Parameters copied from an existing workspace
    Duplicate,
}

impl CreateWorkspaceMode {
    /// Parse the `mode` query value; unknown values fall back to `Form`.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("auto") => Self::Auto,
            Some("duplicate") => Self::Duplicate,
            _ => Self::Form,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query() {
        assert_eq!(CreateWorkspaceMode::from_query(None), CreateWorkspaceMode::Form);
        assert_eq!(CreateWorkspaceMode::from_query(Some("auto")), CreateWorkspaceMode::Auto);
        assert_eq!(
            CreateWorkspaceMode::from_query(Some("duplicate")),
            CreateWorkspaceMode::Duplicate
        );
        assert_eq!(CreateWorkspaceMode::from_query(Some("bogus")), CreateWorkspaceMode::Form);
    }
}
