//! Photo event clustering CLI library.
//!
//! This crate provides the CLI interface over `moments-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
