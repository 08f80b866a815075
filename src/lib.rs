//! mcp-inspect - a thin facade over the Reloaderoo inspector
//!
//! Lists, describes and calls the tools an MCP server exposes by running the
//! inspector as a subprocess and reshaping its JSON output.

pub mod catalog;
pub mod categorize;
pub mod commands;
pub mod error;
pub mod inspector;
pub mod params;
pub mod render;
pub mod transport;

pub use error::{InspectError, Result};
