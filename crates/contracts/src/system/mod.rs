pub mod experiments;
pub mod users;
