//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - call: invoke a tool with key=value parameters
//! - schema: show a tool's parameter schema
//! - list: list available tools

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mcp_inspect::commands::{CallArgs, ListArgs, OutputFormat, SchemaArgs};

/// mcp-inspect - query, list and call MCP server tools through Reloaderoo
#[derive(Parser, Debug)]
#[command(name = "mcp-inspect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Call a tool with parameters
    #[command(after_help = CALL_EXAMPLES)]
    Call {
        /// Name of the tool to call
        tool: String,

        /// Parameter in format key=value (repeatable)
        #[arg(short, long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Only validate that the tool exists, don't execute it
        #[arg(long)]
        validate_only: bool,

        /// Output the raw JSON response
        #[arg(long)]
        raw: bool,

        /// Skip the tool-exists check and let the server reject unknown tools
        #[arg(long, conflicts_with = "validate_only")]
        no_validate: bool,
    },

    /// Show the parameter schema for a tool
    Schema {
        /// Name of the tool
        tool: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Show constraints, defaults and allowed values
        #[arg(short, long)]
        verbose: bool,
    },

    /// List available tools
    List {
        /// Filter tools by name keyword (e.g. sim, device, macos, swift)
        #[arg(long)]
        category: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// List all tools alphabetically instead of by workflow
        #[arg(long)]
        no_categorize: bool,
    },
}

const CALL_EXAMPLES: &str = "\
Examples:
  mcp-inspect call list_sims
  mcp-inspect call boot_sim --param simulatorId=ABC123
  mcp-inspect call build_sim -p scheme=MyScheme -p simulatorName=\"iPhone 16\"
  mcp-inspect call tap -p simulatorUuid=UUID -p x=100 -p y=200

Parameter types:
  Booleans: key=true or key=false
  Numbers:  key=42 or key=3.14
  Strings:  anything else";

/// Handler options for one parsed subcommand
#[derive(Debug, Clone)]
pub enum Request {
    Call(CallArgs),
    Schema(SchemaArgs),
    List(ListArgs),
}

impl Commands {
    /// Convert the parsed subcommand into its handler options
    pub fn request(&self) -> Request {
        match self {
            Commands::Call {
                tool,
                params,
                validate_only,
                raw,
                no_validate,
            } => Request::Call(CallArgs {
                tool: tool.clone(),
                params: params.clone(),
                validate_only: *validate_only,
                raw: *raw,
                no_validate: *no_validate,
            }),
            Commands::Schema {
                tool,
                format,
                verbose,
            } => Request::Schema(SchemaArgs {
                tool: tool.clone(),
                format: *format,
                verbose: *verbose,
            }),
            Commands::List {
                category,
                format,
                no_categorize,
            } => Request::List(ListArgs {
                category: category.clone(),
                format: *format,
                no_categorize: *no_categorize,
            }),
        }
    }
}
