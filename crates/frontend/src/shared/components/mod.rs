pub mod alert;
pub mod avatar;
pub mod form_section;
pub mod page_header;
pub mod ui;
pub mod user_autocomplete;

pub use alert::{Alert, ErrorAlert};
pub use avatar::Avatar;
pub use form_section::{FormFields, FormFooter, FormSection};
pub use page_header::PageHeader;
pub use user_autocomplete::UserAutocomplete;
