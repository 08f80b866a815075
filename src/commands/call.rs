//! call - invoke a tool with `key=value` parameters

use std::io::Write;

use colored::*;
use log::info;

use crate::error::Result;
use crate::inspector::Inspector;
use crate::params;
use crate::render;
use crate::transport::InspectorTransport;

/// Options for the call command
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    pub tool: String,
    /// Raw `key=value` tokens
    pub params: Vec<String>,
    pub validate_only: bool,
    pub raw: bool,
    /// Skip the catalog pre-check and let the server reject unknown tools
    pub no_validate: bool,
}

/// Handle `call`: check the tool exists, parse params, invoke it, print the result.
///
/// A tool-level failure (`success: false`) is printed like any other result.
pub async fn handle_call<T, W, E>(
    inspector: &Inspector<T>,
    args: &CallArgs,
    out: &mut W,
    err: &mut E,
) -> Result<()>
where
    T: InspectorTransport,
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    if args.validate_only {
        writeln!(err, "Validating tool...")?;
        inspector.validate_tool(&args.tool).await?;
        writeln!(err, "{} Tool '{}' exists.", "✓".green(), args.tool)?;
        return Ok(());
    }

    let params = params::parse_params(&args.params)?;

    if !args.no_validate {
        writeln!(err, "Validating tool...")?;
        inspector.validate_tool(&args.tool).await?;
    }

    writeln!(err, "Calling tool: {}", args.tool)?;
    writeln!(err, "Parameters: {}", params::to_json(&params)?)?;
    writeln!(err)?;

    let result = inspector.call_tool(&args.tool, &params).await?;
    if !result.success {
        info!("Tool {} reported failure: {}", args.tool, result.error_message());
    }
    writeln!(out, "{}", render::call_result(&result, args.raw)?)?;

    Ok(())
}
