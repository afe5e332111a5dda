//! Validation rules for the create-workspace form

pub mod name;
pub mod rich_parameters;

pub use name::{validate_workspace_name, MAX_NAME_LENGTH};
pub use rich_parameters::{initial_rich_parameter_values, is_valid_value, RichParameterRules};
