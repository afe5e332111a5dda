use serde::{Deserialize, Serialize};

/// Value type of a rich parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParameterType {
    #[default]
    #[serde(rename = "string")]
    String,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "list(string)")]
    ListString,
}

/// Input widget requested by the template author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterFormType {
    #[default]
    #[serde(alias = "")]
    Default,
    Input,
    Textarea,
    Radio,
    Dropdown,
    Checkbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMonotonic {
    Increasing,
    Decreasing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterOption {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub value: String,
    #[serde(default)]
    pub icon: String,
}

/// Rich parameter descriptor of a template version.
///
/// Owned by the template; the form only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateVersionParameter {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub parameter_type: ParameterType,
    #[serde(default)]
    pub form_type: ParameterFormType,
    #[serde(default)]
    pub mutable: bool,
    #[serde(default)]
    pub default_value: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub options: Vec<ParameterOption>,
    #[serde(default)]
    pub validation_error: String,
    #[serde(default)]
    pub validation_regex: Option<String>,
    #[serde(default)]
    pub validation_min: Option<i64>,
    #[serde(default)]
    pub validation_max: Option<i64>,
    #[serde(default)]
    pub validation_monotonic: Option<ValidationMonotonic>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub ephemeral: bool,
}

impl TemplateVersionParameter {
    /// Minimal mutable string parameter; the remaining fields take their defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: String::new(),
            description: String::new(),
            parameter_type: ParameterType::String,
            form_type: ParameterFormType::Default,
            mutable: true,
            default_value: String::new(),
            icon: String::new(),
            options: Vec::new(),
            validation_error: String::new(),
            validation_regex: None,
            validation_min: None,
            validation_max: None,
            validation_monotonic: None,
            required: false,
            ephemeral: false,
        }
    }

    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }

    /// Identifier used by the `disable_params` list.
    pub fn normalized_name(&self) -> String {
        normalize_parameter_name(&self.name)
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn option_pairs(&self) -> Vec<(String, String)> {
        self.options
            .iter()
            .map(|o| (o.value.clone(), o.name.clone()))
            .collect()
    }
}

/// Lower-cases the name and replaces every space with `_`.
///
/// Callers building a disabled-parameter list must use this exact function,
/// otherwise a parameter meant to be locked stays editable.
pub fn normalize_parameter_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_parameter_name() {
        assert_eq!(normalize_parameter_name("Instance Type"), "instance_type");
        assert_eq!(normalize_parameter_name("region"), "region");
        assert_eq!(normalize_parameter_name("Disk  Size"), "disk__size");
        // only spaces are replaced
        assert_eq!(normalize_parameter_name("CPU-Count"), "cpu-count");
    }

    #[test]
    fn test_deserialize_descriptor() {
        let json = serde_json::json!({
            "name": "instance_type",
            "display_name": "Instance Type",
            "type": "string",
            "mutable": false,
            "default_value": "t3.micro",
            "options": [
                {"name": "Micro", "value": "t3.micro"},
                {"name": "Large", "value": "t3.large"}
            ],
            "required": true,
            "form_type": "radio"
        });
        let p: TemplateVersionParameter = serde_json::from_value(json).unwrap();
        assert_eq!(p.label(), "Instance Type");
        assert_eq!(p.form_type, ParameterFormType::Radio);
        assert!(p.has_option("t3.large"));
        assert!(!p.has_option("t3.huge"));
        assert_eq!(p.validation_min, None);
    }

    #[test]
    fn test_list_type_name() {
        let p: ParameterType = serde_json::from_str("\"list(string)\"").unwrap();
        assert_eq!(p, ParameterType::ListString);
    }
}
