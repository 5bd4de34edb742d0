pub mod app;
pub mod cli;
pub mod error;
pub mod logger;
pub mod stdio;


pub use app::run;
pub use cli::{Cli, Command};
pub use error::{Result, ServerError};
