//! Boundary towards web clients: a selection of cities and routes is transcoded into the
//! line-oriented instance format, solved as an isolated batch run, and the output lines are
//! handed back verbatim.

use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
};

use anyhow::Context;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{engine::Engine, solver::Strategy};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    #[serde(default)]
    pub selected_cities: Vec<String>,
    #[serde(default)]
    pub selected_routes: Vec<(String, String)>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub result: Vec<String>,
}

/// Transcodes a request into the instance format
pub fn generate_input_str(request: &RouteRequest) -> String {
    let mut input = format!(
        "{} {}\n",
        request.selected_cities.len(),
        request.selected_routes.len()
    );

    input += &request.selected_cities.join("\n");
    input.push('\n');

    input += &request
        .selected_routes
        .iter()
        .map(|(from, to)| format!("{from} {to}"))
        .collect::<Vec<_>>()
        .join("\n");
    input.push('\n');

    input
}

/// Runs one batch invocation on an instance and captures its output lines
pub trait BatchRunner {
    fn run_with_input(&self, input: &str) -> anyhow::Result<Vec<String>>;
}

/// Runs the engine inside the current process; each call uses fresh state
#[derive(Clone, Copy, Debug, Default)]
pub struct InProcessRunner {
    engine: Engine,
}

impl InProcessRunner {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            engine: Engine::new(strategy),
        }
    }
}

impl BatchRunner for InProcessRunner {
    fn run_with_input(&self, input: &str) -> anyhow::Result<Vec<String>> {
        Ok(self.engine.run_text(input))
    }
}

/// Runs a solver executable (e.g. `twin_route`) as a child process, feeding the instance on
/// stdin and reading the result from stdout
#[derive(Clone, Debug)]
pub struct SubprocessRunner {
    program: PathBuf,
    args: Vec<String>,
}

impl SubprocessRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl BatchRunner for SubprocessRunner {
    /// A child that fails after reporting on stdout (e.g. `twin_route` on malformed input)
    /// yields those lines; a child that fails silently is an error carrying its stderr.
    fn run_with_input(&self, input: &str) -> anyhow::Result<Vec<String>> {
        debug!("Spawn {} {:?}", self.program.display(), self.args);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Cannot start {}", self.program.display()))?;

        child
            .stdin
            .take()
            .context("Child has no stdin")?
            .write_all(input.as_bytes())?;

        let output = child.wait_with_output()?;
        let lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        if !output.status.success() {
            let message = format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            anyhow::ensure!(!lines.is_empty(), message);
            warn!("{message}");
        }

        Ok(lines)
    }
}

pub fn process_request(
    runner: &impl BatchRunner,
    request: &RouteRequest,
) -> anyhow::Result<RouteResponse> {
    let input = generate_input_str(request);
    let result = runner.run_with_input(&input)?;
    Ok(RouteResponse { result })
}
