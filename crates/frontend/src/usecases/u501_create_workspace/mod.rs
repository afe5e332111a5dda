//! u501: create a workspace from a template
//!
//! MVVM split:
//! - form.rs: form state and validation, no UI dependencies
//! - model.rs: API functions
//! - view_model.rs: signals and commands over the form
//! - view.rs: the form component
//! - page.rs: container that loads data and performs the create call

mod external_auth_button;
pub mod form;
mod model;
pub mod query;
mod rich_parameter_input;
mod page;
mod view;
mod view_model;

pub use page::CreateWorkspacePage;
pub use view::CreateWorkspacePageView;
pub use view_model::CreateWorkspaceViewModel;
