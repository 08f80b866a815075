//! CLI module for mcp-inspect - command-line interface and subcommands.

pub mod commands;

pub use commands::Cli;
