//! CLI subcommands.

pub mod categories;
pub mod config;
pub mod parse;
pub mod scan;
