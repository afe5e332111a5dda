pub mod a001_template;
pub mod a002_external_auth;
pub mod a003_workspace;
pub mod common;
