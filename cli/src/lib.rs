pub mod commands;
pub mod context;
pub mod error;
pub mod host;
pub mod logging;
pub mod repl;
pub mod script;

pub use context::CliContext;
pub use error::ReplayError;
pub use repl::readline;
