pub mod aggregate;

pub use aggregate::{
    has_all_required_external_auth, missing_required_external_auth, ExternalAuthPollingState,
    TemplateVersionExternalAuth,
};
