#[cfg(feature = "cli")]
pub mod cli_runner;
pub mod session;

pub use session::Session;
