pub mod common;
pub mod u501_create_workspace;
