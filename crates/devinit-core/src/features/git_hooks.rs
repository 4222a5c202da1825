//! Git-hooks feature: husky scaffold, commitlint, deterministic hooks

use super::report_step_error;
use crate::environment::PackageManager;
use crate::error::{Error, Result};
use crate::install::{self, CommandRunner};
use crate::manifest::Patch;
use colored::Colorize;
use serde_json::json;
use std::io;
use std::path::Path;
use tokio::fs;

const HOOK_DIR: &str = ".husky";

/// The three managed hooks and the command each one runs.
const HOOKS: [(&str, &str); 3] = [
    ("pre-commit", "npx lint-staged"),
    ("commit-msg", "npx --no-install commitlint --edit \"$1\""),
    ("pre-push", "npm test"),
];

const COMMITLINT_FILE: &str = "commitlint.config.js";
const COMMITLINT_CONFIG: &str =
    "module.exports = { extends: ['@commitlint/config-conventional'] }\n";

/// Commit tooling added as development dependencies.
const HOOK_PACKAGES: [&str; 4] = [
    "@commitlint/config-conventional",
    "@commitlint/cli",
    "commitizen",
    "cz-conventional-changelog",
];

const COMMITIZEN_ADAPTER: &str = "./node_modules/cz-conventional-changelog";

/// Set up git hooks: scaffold husky, install the commit tooling, write
/// the commitlint config, and replace the three managed hook scripts.
///
/// The scaffold step may leave stub hooks behind; the fixed hook paths
/// are cleared before writing so the final content never depends on
/// what the scaffold produced.
pub async fn install_git_hooks<R: CommandRunner>(
    runner: &R,
    pm: PackageManager,
    root: &Path,
) -> Vec<Patch> {
    // Scaffold failure falls back to re-initializing the local
    // repository so the hook directory still has a home.
    if let Err(e) = runner.run(pm.exec_program(), &["husky-init", "-D"]).await {
        report_step_error("bootstrapping husky", &e);
        if let Err(e) = runner.run("git", &["init"]).await {
            report_step_error("re-initializing git repository", &e);
        }
    }

    // Pick up the scaffold's own manifest edits before adding more.
    if let Err(e) = runner.run(pm.program(), &[pm.install_verb()]).await {
        report_step_error("installing scaffolded dependencies", &e);
    }

    let mut all_installed = true;
    for package in HOOK_PACKAGES {
        if let Err(e) = install::add_packages(runner, pm, &[package], true).await {
            report_step_error(&format!("installing {package}"), &e);
            all_installed = false;
        }
    }

    if let Err(e) = write_commitlint_config(root).await {
        report_step_error("writing commitlint config", &e);
    }

    for (hook, command) in HOOKS {
        if let Err(e) = replace_hook(root, hook, command).await {
            report_step_error(&format!("writing {hook} hook"), &e);
        }
    }

    if all_installed {
        println!(
            "{}",
            "\n\"husky\" and \"commitlint\" packages have been installed\n".green()
        );
    }

    vec![
        Patch::overwrite("scripts.commit", json!("cz")),
        Patch::shallow_merge("config", json!({ "commitizen": { "path": COMMITIZEN_ADAPTER } })),
    ]
}

async fn write_commitlint_config(root: &Path) -> Result<()> {
    let path = root.join(COMMITLINT_FILE);
    fs::write(&path, COMMITLINT_CONFIG)
        .await
        .map_err(|e| Error::fs(&path, e))
}

/// Remove whatever is at the hook path, then write the managed script.
async fn replace_hook(root: &Path, hook: &str, command: &str) -> Result<()> {
    let dir = root.join(HOOK_DIR);
    fs::create_dir_all(&dir)
        .await
        .map_err(|e| Error::fs(&dir, e))?;

    let path = dir.join(hook);
    match fs::remove_file(&path).await {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::fs(&path, e)),
    }

    fs::write(&path, hook_script(command))
        .await
        .map_err(|e| Error::fs(&path, e))?;
    make_executable(&path).await.map_err(|e| Error::fs(&path, e))
}

fn hook_script(command: &str) -> String {
    format!(
        "#!/usr/bin/env sh\n. \"$(dirname -- \"$0\")/_/husky.sh\"\n\n{command}\n"
    )
}

#[cfg(unix)]
async fn make_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path).await?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).await
}

#[cfg(not(unix))]
async fn make_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
