pub mod aggregate;

pub use aggregate::{
    AutofillBuildParameter, AutofillSource, CreateWorkspaceRequest, Workspace,
    WorkspaceBuildParameter,
};
