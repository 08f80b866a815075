//! Inspector transport - runs the inspector process and decodes its JSON
//!
//! Everything that touches a real process lives behind [`InspectorTransport`],
//! so the command handlers can be driven by [`MockTransport`] in tests.

use std::collections::VecDeque;
use std::process::Stdio;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use tokio::process::Command;

use crate::error::{InspectError, Result};

/// Run one inspector directive and return its decoded stdout
#[async_trait]
pub trait InspectorTransport: Send + Sync {
    async fn run(&self, directive: &[String]) -> Result<Value>;
}

/// How to launch the inspector and the server behind it
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorCommand {
    /// Executable to spawn (e.g. "npx")
    pub program: String,
    /// Arguments placed before the directive (e.g. ["reloaderoo@latest", "inspect"])
    pub args: Vec<String>,
    /// Append `-q` after the directive
    pub quiet: bool,
    /// Server launch command placed after `--`
    pub server: Vec<String>,
    /// Kill the inspector after this many milliseconds
    pub timeout_ms: Option<u64>,
}

impl Default for InspectorCommand {
    fn default() -> Self {
        Self {
            program: "npx".to_string(),
            args: vec!["reloaderoo@latest".to_string(), "inspect".to_string()],
            quiet: true,
            server: vec!["npx".to_string(), "xcodebuildmcp@latest".to_string()],
            timeout_ms: None,
        }
    }
}

impl InspectorCommand {
    /// Full argument vector for a directive:
    /// `<args> <directive> [-q] -- <server>`
    pub fn build_args(&self, directive: &[String]) -> Vec<String> {
        let mut argv = self.args.clone();
        argv.extend(directive.iter().cloned());
        if self.quiet {
            argv.push("-q".to_string());
        }
        argv.push("--".to_string());
        argv.extend(self.server.iter().cloned());
        argv
    }
}

/// Decode inspector stdout as a single JSON document
pub fn decode_output(stdout: &str) -> Result<Value> {
    serde_json::from_str(stdout).map_err(|source| InspectError::Decode {
        source,
        raw: stdout.to_string(),
    })
}

/// Transport that spawns the Reloaderoo inspector
#[derive(Debug, Clone, Default)]
pub struct ReloaderooTransport {
    command: InspectorCommand,
}

impl ReloaderooTransport {
    pub fn new(command: InspectorCommand) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &InspectorCommand {
        &self.command
    }

    async fn output(&self, argv: &[String]) -> Result<std::process::Output> {
        let child = Command::new(&self.command.program)
            .args(argv)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| InspectError::Spawn {
                program: self.command.program.clone(),
                source,
            })?;

        match self.command.timeout_ms {
            Some(ms) => tokio::time::timeout(Duration::from_millis(ms), child.wait_with_output())
                .await
                .map_err(|_| InspectError::Timeout(ms))?
                .map_err(InspectError::from),
            None => child.wait_with_output().await.map_err(InspectError::from),
        }
    }
}

#[async_trait]
impl InspectorTransport for ReloaderooTransport {
    async fn run(&self, directive: &[String]) -> Result<Value> {
        let argv = self.command.build_args(directive);
        debug!("Running {} {}", self.command.program, argv.join(" "));

        let output = self.output(&argv).await?;
        if !output.status.success() {
            return Err(InspectError::Transport {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        decode_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Transport returning canned responses in order, recording each directive
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<Value>>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful JSON response
    pub fn with_response(self, value: Value) -> Self {
        self.push(Ok(value));
        self
    }

    /// Queue a failure
    pub fn with_error(self, error: InspectError) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, response: Result<Value>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }

    /// Directives received so far
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl InspectorTransport for MockTransport {
    async fn run(&self, directive: &[String]) -> Result<Value> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(directive.to_vec());
        }
        self.responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front())
            .unwrap_or_else(|| Err(InspectError::Malformed("no canned response left".to_string())))
    }
}
