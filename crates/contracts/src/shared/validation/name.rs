use once_cell::sync::Lazy;
use regex::Regex;

/// Longest accepted workspace name
pub const MAX_NAME_LENGTH: usize = 32;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+(?:-[a-zA-Z0-9]+)*$").expect("name regex is valid"));

/// Validate a workspace name as typed (already trimmed).
pub fn validate_workspace_name(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Please enter a workspace name.".to_string());
    }

    if !NAME_REGEX.is_match(value) {
        return Err(
            "Workspace Name must start with a-Z or 0-9 and can contain a-Z, 0-9 or -".to_string(),
        );
    }

    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "Workspace Name cannot be longer than {} characters",
            MAX_NAME_LENGTH
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_names() {
        assert!(validate_workspace_name("dev").is_ok());
        assert!(validate_workspace_name("my-workspace-2").is_ok());
        assert!(validate_workspace_name("A1").is_ok());
        assert!(validate_workspace_name(&"a".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            validate_workspace_name(""),
            Err("Please enter a workspace name.".to_string())
        );
    }

    #[test]
    fn test_rejects_invalid_characters() {
        for name in ["-dev", "dev-", "dev--box", "dev box", "dev_box", "dév"] {
            assert_eq!(
                validate_workspace_name(name),
                Err("Workspace Name must start with a-Z or 0-9 and can contain a-Z, 0-9 or -"
                    .to_string()),
                "{name}"
            );
        }
    }

    #[test]
    fn test_rejects_too_long() {
        assert_eq!(
            validate_workspace_name(&"a".repeat(MAX_NAME_LENGTH + 1)),
            Err("Workspace Name cannot be longer than 32 characters".to_string())
        );
    }
}
