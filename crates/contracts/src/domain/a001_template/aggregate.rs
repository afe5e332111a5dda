use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateId;
use crate::uuid_id;

// ============================================================================
// ID Types
// ============================================================================

uuid_id!(
    /// Unique template identifier
    TemplateId
);

uuid_id!(
    /// Unique template version identifier
    TemplateVersionId
);

// ============================================================================
// Aggregate
// ============================================================================

/// Workspace template as returned by `GET /api/v2/templates/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub deprecated: bool,
    pub active_version_id: TemplateVersionId,
    pub organization_id: uuid::Uuid,
}

impl Template {
    /// Title shown in the page header: display name, falling back to the name.
    pub fn title(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }

    /// Single upper-case letter used when the template has no icon.
    pub fn avatar_letter(&self) -> String {
        self.title()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    pub fn has_icon(&self) -> bool {
        !self.icon.is_empty()
    }

    /// True when a pinned version was requested and it is not the active one.
    pub fn is_pinned_to_other_version(&self, version_id: Option<TemplateVersionId>) -> bool {
        version_id.is_some_and(|v| v != self.active_version_id)
    }

    /// Version whose parameters and external auth apply to the new workspace.
    pub fn effective_version(&self, version_id: Option<TemplateVersionId>) -> TemplateVersionId {
        version_id.unwrap_or(self.active_version_id)
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(display_name: &str) -> Template {
        Template {
            id: TemplateId::new_v4(),
            name: "docker".into(),
            display_name: display_name.into(),
            description: String::new(),
            icon: String::new(),
            deprecated: false,
            active_version_id: TemplateVersionId::new_v4(),
            organization_id: uuid::Uuid::new_v4(),
        }
    }

    #[test]
    fn test_title_falls_back_to_name() {
        assert_eq!(template("").title(), "docker");
        assert_eq!(template("Docker Containers").title(), "Docker Containers");
        assert_eq!(template("").avatar_letter(), "D");
    }

    #[test]
    fn test_pinned_version() {
        let t = template("");
        assert!(!t.is_pinned_to_other_version(None));
        assert!(!t.is_pinned_to_other_version(Some(t.active_version_id)));
        let other = TemplateVersionId::new_v4();
        assert!(t.is_pinned_to_other_version(Some(other)));
        assert_eq!(t.effective_version(Some(other)), other);
        assert_eq!(t.effective_version(None), t.active_version_id);
    }

    #[test]
    fn test_deserialize_minimal() {
        let json = serde_json::json!({
            "id": "8c4f2a4e-5b0a-4d8e-9a55-3f1f0f6f0b11",
            "name": "kubernetes",
            "active_version_id": "0b0f5c1c-3a3b-4a8e-8e1e-7d5b9b6b1c22",
            "organization_id": "f3b0a1c2-2d4e-4f6a-8b9c-0d1e2f3a4b5c"
        });
        let t: Template = serde_json::from_value(json).unwrap();
        assert_eq!(t.title(), "kubernetes");
        assert!(!t.deprecated);
        assert!(!t.has_icon());
    }
}
