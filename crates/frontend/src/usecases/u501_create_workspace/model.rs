use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a001_template::{Template, TemplateId, TemplateVersionId, TemplateVersionParameter};
use contracts::domain::a002_external_auth::TemplateVersionExternalAuth;
use contracts::domain::a003_workspace::{CreateWorkspaceRequest, Workspace};
use contracts::shared::api_error::ApiError;
use contracts::system::experiments::Experiments;
use contracts::system::users::{User, UserId};
use contracts::usecases::u501_create_workspace::CreateWorkspacePermissions;
use serde_json::json;

pub async fn fetch_template(id: TemplateId) -> Result<Template, ApiError> {
    get_json(&format!("/api/v2/templates/{}", id)).await
}

pub async fn fetch_rich_parameters(
    version_id: TemplateVersionId,
) -> Result<Vec<TemplateVersionParameter>, ApiError> {
    get_json(&format!("/api/v2/templateversions/{}/rich-parameters", version_id)).await
}

pub async fn fetch_external_auth(
    version_id: TemplateVersionId,
) -> Result<Vec<TemplateVersionExternalAuth>, ApiError> {
    get_json(&format!("/api/v2/templateversions/{}/external-auth", version_id)).await
}

pub async fn fetch_experiments() -> Result<Experiments, ApiError> {
    get_json("/api/v2/experiments").await
}

pub async fn fetch_current_user() -> Result<User, ApiError> {
    get_json("/api/v2/users/me").await
}

/// Asks whether the current user may create workspaces owned by others in
/// the template's organization.
pub async fn fetch_permissions(organization_id: uuid::Uuid) -> Result<CreateWorkspacePermissions, ApiError> {
    let body = json!({
        "checks": {
            "createWorkspaceForUser": {
                "object": {
                    "resource_type": "workspace",
                    "organization_id": organization_id,
                    "owner_id": "*"
                },
                "action": "create"
            }
        }
    });
    post_json("/api/v2/authcheck", &body).await
}

pub async fn create_workspace(
    owner_id: UserId,
    request: &CreateWorkspaceRequest,
) -> Result<Workspace, ApiError> {
    post_json(&format!("/api/v2/users/{}/workspaces", owner_id), request).await
}
