pub mod u501_create_workspace;
