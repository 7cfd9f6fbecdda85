//! fb-cli library
//!
//! Exports the HTTP client, the session credential and the logger for the
//! `fb` binary, tests and other crates.

pub(crate) mod client;
pub mod error;
pub mod logger;
pub(crate) mod session;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
pub use error::{CliError, CliResult};
pub use session::Session;
