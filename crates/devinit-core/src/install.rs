//! External command execution
//!
//! `CommandRunner` is the seam between the orchestration logic and real
//! child processes, so every caller (environment probe, feature
//! installers) can be exercised in tests with a scripted runner.

use crate::environment::PackageManager;
use crate::error::{Error, Result};
use colored::Colorize;
use std::future::Future;
use std::process::Output;
use tokio::process::Command;

/// Output captured from a completed external command.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Seam for executing a single external command.
///
/// Implementations never retry; a non-zero exit (or spawn failure)
/// surfaces as [`Error::Install`] and the caller decides whether that
/// is fatal to its feature or merely logged.
pub trait CommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
    ) -> impl Future<Output = Result<CapturedOutput>> + Send;
}

/// Production runner backed by tokio child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
    ) -> impl Future<Output = Result<CapturedOutput>> + Send {
        let program = program.to_string();
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        async move {
            let output = Command::new(&program)
                .args(&args)
                .output()
                .await
                .map_err(|e| Error::Install {
                    program: program.clone(),
                    code: -1,
                    stderr: e.to_string(),
                })?;
            capture(&program, output)
        }
    }
}

fn capture(program: &str, output: Output) -> Result<CapturedOutput> {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CapturedOutput { stdout, stderr })
    } else {
        Err(Error::Install {
            program: program.to_string(),
            code: output.status.code().unwrap_or(-1),
            stderr: stderr.trim().to_string(),
        })
    }
}

/// Add packages through the detected package manager.
///
/// Builds `<pm> <add-verb> <packages..> [-D]`, runs it once, and echoes
/// the captured stdout so the operator sees what the tool reported.
/// `dev` is the install step's dev-dependency flag; every current
/// feature installs tooling, so callers pass `true` today.
pub async fn add_packages<R: CommandRunner>(
    runner: &R,
    pm: PackageManager,
    packages: &[&str],
    dev: bool,
) -> Result<CapturedOutput> {
    let mut args = vec![pm.add_verb()];
    args.extend_from_slice(packages);
    if dev {
        args.push("-D");
    }

    let output = runner.run(pm.program(), &args).await?;
    surface_stdout(&output);
    Ok(output)
}

/// Echo captured stdout to the operator, indented and dimmed.
pub(crate) fn surface_stdout(output: &CapturedOutput) {
    for line in output.stdout.lines().filter(|l| !l.trim().is_empty()) {
        println!("  {}", line.dimmed());
    }
}
