//! RoleDoc - upload a document and chat with it from your terminal.
//!
//! The crate is a thin client around an external question-answering backend:
//! [`core`] holds the backend client, chat session state machine, persona
//! decoration, and document sniffing; [`tui`] holds the ratatui application
//! built on top of them; [`config`] loads the TOML + environment config.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

/// Application version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
