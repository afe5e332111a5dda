use serde::{Deserialize, Serialize};

/// Permission checks the create page asks the server about
/// (`POST /api/v2/authcheck`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateWorkspacePermissions {
    #[serde(rename = "createWorkspaceForUser", default)]
    pub create_workspace_for_user: bool,
}

impl CreateWorkspacePermissions {
    /// Description of the "General" form section.
    pub fn general_section_description(&self) -> &'static str {
        if self.create_workspace_for_user {
            "The name of the workspace and its owner. Only admins can create workspace for other users."
        } else {
            "The name of your new workspace."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_authcheck_response() {
        let p: CreateWorkspacePermissions =
            serde_json::from_str(r#"{"createWorkspaceForUser": true}"#).unwrap();
        assert!(p.create_workspace_for_user);
        assert!(!CreateWorkspacePermissions::default().create_workspace_for_user);
    }
}
