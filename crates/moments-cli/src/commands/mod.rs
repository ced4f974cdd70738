//! CLI subcommand implementations.

pub mod cluster;
pub mod edit;
pub mod render;
pub mod suggest;
pub mod util;
