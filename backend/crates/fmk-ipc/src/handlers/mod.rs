pub mod context;
pub mod dispatcher;
pub mod projects;
pub mod reports;
pub mod response_builder;
pub mod transfer;
