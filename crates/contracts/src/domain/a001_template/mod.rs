pub mod aggregate;
pub mod parameter;

pub use aggregate::{Template, TemplateId, TemplateVersionId};
pub use parameter::{
    normalize_parameter_name, ParameterFormType, ParameterOption, ParameterType,
    TemplateVersionParameter, ValidationMonotonic,
};
