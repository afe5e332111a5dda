//! Autofill merge and per-parameter validation for rich parameters.

use regex::Regex;
use std::collections::{BTreeMap, HashMap};

use crate::domain::a001_template::{ParameterType, TemplateVersionParameter};
use crate::domain::a003_workspace::{AutofillBuildParameter, WorkspaceBuildParameter};

/// True when `value` may be used for `parameter` without user review.
pub fn is_valid_value(parameter: &TemplateVersionParameter, value: &str) -> bool {
    if parameter.has_options() {
        return parameter.has_option(value);
    }
    true
}

/// Initial form values, in template order.
///
/// Ephemeral parameters always start from the declared default. Otherwise the
/// autofill entry with the same name wins when it is allowed to prefill and
/// its value is acceptable; the declared default is used as a fallback.
pub fn initial_rich_parameter_values(
    parameters: &[TemplateVersionParameter],
    autofill: &[AutofillBuildParameter],
) -> Vec<WorkspaceBuildParameter> {
    parameters
        .iter()
        .map(|parameter| {
            if parameter.ephemeral {
                return WorkspaceBuildParameter::new(&parameter.name, &parameter.default_value);
            }

            let value = autofill
                .iter()
                .find(|a| a.name == parameter.name)
                .filter(|a| a.prefills() && is_valid_value(parameter, &a.value))
                .map(|a| a.value.clone())
                .unwrap_or_else(|| parameter.default_value.clone());

            WorkspaceBuildParameter::new(&parameter.name, value)
        })
        .collect()
}

#[derive(Debug, Clone)]
enum Constraint {
    Free,
    Options(Vec<String>),
    Number {
        min: Option<i64>,
        max: Option<i64>,
        error: String,
    },
    Pattern {
        regex: Regex,
        pattern: String,
        error: String,
    },
    Bool,
    List,
}

#[derive(Debug, Clone)]
struct ParameterRule {
    required: bool,
    constraint: Constraint,
}

impl ParameterRule {
    fn compile(parameter: &TemplateVersionParameter) -> Self {
        let constraint = if parameter.has_options() {
            Constraint::Options(parameter.options.iter().map(|o| o.value.clone()).collect())
        } else {
            match parameter.parameter_type {
                ParameterType::Number => Constraint::Number {
                    min: parameter.validation_min,
                    max: parameter.validation_max,
                    error: parameter.validation_error.clone(),
                },
                ParameterType::Bool => Constraint::Bool,
                ParameterType::ListString => Constraint::List,
                ParameterType::String => match parameter.validation_regex.as_deref() {
                    // A template with a broken regex must not lock the user out.
                    Some(pattern) if !pattern.is_empty() => match Regex::new(pattern) {
                        Ok(regex) => Constraint::Pattern {
                            regex,
                            pattern: pattern.to_string(),
                            error: parameter.validation_error.clone(),
                        },
                        Err(_) => Constraint::Free,
                    },
                    _ => Constraint::Free,
                },
            }
        };

        Self {
            required: parameter.required,
            constraint,
        }
    }

    fn check(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            if self.required {
                return Err("Field is required.".to_string());
            }
            return Ok(());
        }

        match &self.constraint {
            Constraint::Free => Ok(()),
            Constraint::Options(values) => {
                if values.iter().any(|v| v == value) {
                    Ok(())
                } else {
                    Err("Value must be one of the options.".to_string())
                }
            }
            Constraint::Number { min, max, error } => check_number(value, *min, *max, error),
            Constraint::Pattern {
                regex,
                pattern,
                error,
            } => {
                if regex.is_match(value) {
                    Ok(())
                } else if error.is_empty() {
                    Err(format!("Value must match {}.", pattern))
                } else {
                    Err(error.replace("{regex}", pattern))
                }
            }
            Constraint::Bool => match value {
                "true" | "false" => Ok(()),
                _ => Err("Value must be true or false.".to_string()),
            },
            Constraint::List => serde_json::from_str::<Vec<String>>(value)
                .map(|_| ())
                .map_err(|_| "Value must be a JSON array of strings.".to_string()),
        }
    }
}

fn check_number(value: &str, min: Option<i64>, max: Option<i64>, error: &str) -> Result<(), String> {
    let number = value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| "Value must be a number.".to_string())?;

    let below = min.is_some_and(|m| number < m as f64);
    let above = max.is_some_and(|m| number > m as f64);
    if !below && !above {
        return Ok(());
    }

    if !error.is_empty() {
        let fill = |v: Option<i64>| v.map(|v| v.to_string()).unwrap_or_default();
        return Err(error
            .replace("{min}", &fill(min))
            .replace("{max}", &fill(max))
            .replace("{value}", value));
    }

    Err(match (min, max) {
        (Some(min), Some(max)) => format!("Value must be between {} and {}.", min, max),
        (Some(min), None) => format!("Value must be greater than {}.", min),
        (None, Some(max)) => format!("Value must be less than {}.", max),
        (None, None) => unreachable!("out of range requires a bound"),
    })
}

/// Validation rules compiled once from a parameter descriptor list.
#[derive(Debug, Clone, Default)]
pub struct RichParameterRules {
    rules: HashMap<String, ParameterRule>,
}

impl RichParameterRules {
    pub fn compile(parameters: &[TemplateVersionParameter]) -> Self {
        Self {
            rules: parameters
                .iter()
                .map(|p| (p.name.clone(), ParameterRule::compile(p)))
                .collect(),
        }
    }

    /// Validate one value. Names without a rule are accepted.
    pub fn validate(&self, name: &str, value: &str) -> Result<(), String> {
        match self.rules.get(name) {
            Some(rule) => rule.check(value),
            None => Ok(()),
        }
    }

    /// Errors keyed by parameter name; empty when every value passes.
    pub fn validate_all(&self, values: &[WorkspaceBuildParameter]) -> BTreeMap<String, String> {
        values
            .iter()
            .filter_map(|p| {
                self.validate(&p.name, &p.value)
                    .err()
                    .map(|e| (p.name.clone(), e))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_template::ParameterOption;
    use crate::domain::a003_workspace::AutofillSource;

    fn option(value: &str) -> ParameterOption {
        ParameterOption {
            name: value.to_uppercase(),
            description: String::new(),
            value: value.into(),
            icon: String::new(),
        }
    }

    fn required(name: &str) -> TemplateVersionParameter {
        TemplateVersionParameter {
            required: true,
            ..TemplateVersionParameter::new(name)
        }
    }

    #[test]
    fn test_autofill_fills_required_parameter() {
        let params = vec![required("region")];
        let autofill = vec![AutofillBuildParameter::new(
            "region",
            "us-east",
            AutofillSource::Url,
        )];
        assert_eq!(
            initial_rich_parameter_values(&params, &autofill),
            vec![WorkspaceBuildParameter::new("region", "us-east")]
        );
    }

    #[test]
    fn test_defaults_without_autofill() {
        let params = vec![TemplateVersionParameter {
            default_value: "2".into(),
            ..TemplateVersionParameter::new("cpu")
        }];
        assert_eq!(
            initial_rich_parameter_values(&params, &[]),
            vec![WorkspaceBuildParameter::new("cpu", "2")]
        );
    }

    #[test]
    fn test_user_history_is_not_prefilled() {
        let params = vec![TemplateVersionParameter {
            default_value: "eu".into(),
            ..TemplateVersionParameter::new("region")
        }];
        let autofill = vec![AutofillBuildParameter::new(
            "region",
            "us-east",
            AutofillSource::UserHistory,
        )];
        assert_eq!(initial_rich_parameter_values(&params, &autofill)[0].value, "eu");
    }

    #[test]
    fn test_invalid_option_autofill_falls_back_to_default() {
        let params = vec![TemplateVersionParameter {
            default_value: "small".into(),
            options: vec![option("small"), option("large")],
            ..TemplateVersionParameter::new("size")
        }];
        let bad = vec![AutofillBuildParameter::new("size", "huge", AutofillSource::ActiveBuild)];
        let good = vec![AutofillBuildParameter::new("size", "large", AutofillSource::ActiveBuild)];
        assert_eq!(initial_rich_parameter_values(&params, &bad)[0].value, "small");
        assert_eq!(initial_rich_parameter_values(&params, &good)[0].value, "large");
    }

    #[test]
    fn test_ephemeral_ignores_autofill() {
        let params = vec![TemplateVersionParameter {
            ephemeral: true,
            default_value: "false".into(),
            ..TemplateVersionParameter::new("reset_home")
        }];
        let autofill = vec![AutofillBuildParameter::new(
            "reset_home",
            "true",
            AutofillSource::ActiveBuild,
        )];
        assert_eq!(initial_rich_parameter_values(&params, &autofill)[0].value, "false");
    }

    #[test]
    fn test_required_presence() {
        let rules = RichParameterRules::compile(&[required("region"), TemplateVersionParameter::new("note")]);
        assert_eq!(rules.validate("region", ""), Err("Field is required.".to_string()));
        assert_eq!(rules.validate("region", "  "), Err("Field is required.".to_string()));
        assert!(rules.validate("region", "us-east").is_ok());
        assert!(rules.validate("note", "").is_ok());
        assert!(rules.validate("unknown", "").is_ok());
    }

    #[test]
    fn test_number_range() {
        let params = vec![TemplateVersionParameter {
            parameter_type: ParameterType::Number,
            validation_min: Some(1),
            validation_max: Some(8),
            ..TemplateVersionParameter::new("cpu")
        }];
        let rules = RichParameterRules::compile(&params);
        assert!(rules.validate("cpu", "1").is_ok());
        assert!(rules.validate("cpu", "8").is_ok());
        assert_eq!(
            rules.validate("cpu", "9"),
            Err("Value must be between 1 and 8.".to_string())
        );
        assert_eq!(rules.validate("cpu", "four"), Err("Value must be a number.".to_string()));
    }

    #[test]
    fn test_number_rejects_non_finite() {
        let params = vec![TemplateVersionParameter {
            parameter_type: ParameterType::Number,
            validation_min: Some(1),
            validation_max: Some(8),
            ..TemplateVersionParameter::new("cpu")
        }];
        let rules = RichParameterRules::compile(&params);
        for value in ["NaN", "nan", "inf", "-infinity"] {
            assert_eq!(
                rules.validate("cpu", value),
                Err("Value must be a number.".to_string()),
                "{value}"
            );
        }
        assert!(rules.validate("cpu", "2.5").is_ok());
    }

    #[test]
    fn test_number_custom_error() {
        let params = vec![TemplateVersionParameter {
            parameter_type: ParameterType::Number,
            validation_min: Some(10),
            validation_error: "{value} is below {min} GB".into(),
            ..TemplateVersionParameter::new("disk")
        }];
        let rules = RichParameterRules::compile(&params);
        assert_eq!(rules.validate("disk", "5"), Err("5 is below 10 GB".to_string()));
    }

    #[test]
    fn test_regex_with_error_template() {
        let params = vec![TemplateVersionParameter {
            validation_regex: Some("^[a-z]+$".into()),
            validation_error: "Must match {regex}".into(),
            ..TemplateVersionParameter::new("dotfiles")
        }];
        let rules = RichParameterRules::compile(&params);
        assert!(rules.validate("dotfiles", "abc").is_ok());
        assert_eq!(
            rules.validate("dotfiles", "ABC"),
            Err("Must match ^[a-z]+$".to_string())
        );
    }

    #[test]
    fn test_broken_regex_is_ignored() {
        let params = vec![TemplateVersionParameter {
            validation_regex: Some("([".into()),
            ..TemplateVersionParameter::new("repo")
        }];
        assert!(RichParameterRules::compile(&params).validate("repo", "x").is_ok());
    }

    #[test]
    fn test_option_membership() {
        let params = vec![TemplateVersionParameter {
            options: vec![option("small"), option("large")],
            ..TemplateVersionParameter::new("size")
        }];
        let rules = RichParameterRules::compile(&params);
        assert!(rules.validate("size", "large").is_ok());
        assert_eq!(
            rules.validate("size", "medium"),
            Err("Value must be one of the options.".to_string())
        );
    }

    #[test]
    fn test_bool_and_list() {
        let params = vec![
            TemplateVersionParameter {
                parameter_type: ParameterType::Bool,
                ..TemplateVersionParameter::new("gpu")
            },
            TemplateVersionParameter {
                parameter_type: ParameterType::ListString,
                ..TemplateVersionParameter::new("ports")
            },
        ];
        let rules = RichParameterRules::compile(&params);
        assert!(rules.validate("gpu", "true").is_ok());
        assert!(rules.validate("gpu", "yes").is_err());
        assert!(rules.validate("ports", r#"["80","443"]"#).is_ok());
        assert!(rules.validate("ports", "80,443").is_err());
    }

    #[test]
    fn test_validate_all_collects_by_name() {
        let rules = RichParameterRules::compile(&[required("region"), required("zone")]);
        let errors = rules.validate_all(&[
            WorkspaceBuildParameter::new("region", ""),
            WorkspaceBuildParameter::new("zone", "a"),
        ]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("region").map(String::as_str), Some("Field is required."));
    }
}
