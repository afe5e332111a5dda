pub mod mode;
pub mod permissions;

pub use mode::CreateWorkspaceMode;
pub use permissions::CreateWorkspacePermissions;

use crate::usecases::common::UseCaseMetadata;

pub struct CreateWorkspace;

impl UseCaseMetadata for CreateWorkspace {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "create_workspace"
    }

    fn display_name() -> &'static str {
        "New workspace"
    }

    fn description() -> &'static str {
        "Create a workspace from a template"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(CreateWorkspace::full_name(), "u501_create_workspace");
    }
}
