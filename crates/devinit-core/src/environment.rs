//! Package manager and repository state detection

use crate::install::CommandRunner;
use std::fmt;
use std::path::Path;

/// Name of the package manifest at the target root.
pub const MANIFEST_FILE: &str = "package.json";

/// Version-control metadata directory at the target root.
const VCS_DIR: &str = ".git";

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Yarn,
    Pnpm,
    Npm,
}

impl PackageManager {
    /// Detection candidates, in fixed preference order.
    pub const CANDIDATES: [PackageManager; 3] =
        [PackageManager::Yarn, PackageManager::Pnpm, PackageManager::Npm];

    /// Binary invoked for install/add commands.
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Npm => "npm",
        }
    }

    /// Verb that adds a dependency to the manifest.
    pub fn add_verb(&self) -> &'static str {
        match self {
            PackageManager::Yarn | PackageManager::Pnpm => "add",
            PackageManager::Npm => "i",
        }
    }

    /// Verb that installs everything already listed in the manifest.
    pub fn install_verb(&self) -> &'static str {
        "install"
    }

    /// Binary for one-shot package execution (`npx`-style).
    pub fn exec_program(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpx",
            PackageManager::Yarn | PackageManager::Npm => "npx",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

/// Snapshot of the host environment, computed once per run and
/// read-only afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Environment {
    pub package_manager: PackageManager,
    pub has_manifest: bool,
    pub has_version_control: bool,
}

/// Probe the target root and pick a usable package manager.
pub async fn probe<R: CommandRunner>(runner: &R, root: &Path) -> Environment {
    Environment {
        package_manager: detect_package_manager(runner).await,
        has_manifest: has_manifest(root),
        has_version_control: has_version_control(root),
    }
}

/// Try each candidate's version check in preference order; the first
/// that exits successfully with a non-empty version string wins.
/// Falls back to npm when nothing answers; never errors.
pub async fn detect_package_manager<R: CommandRunner>(runner: &R) -> PackageManager {
    for pm in PackageManager::CANDIDATES {
        match runner.run(pm.program(), &["-v"]).await {
            Ok(out) if !out.stdout.trim().is_empty() => return pm,
            _ => {}
        }
    }
    PackageManager::Npm
}

/// Whether a package manifest exists at the root. Filesystem errors
/// count as "absent".
pub fn has_manifest(root: &Path) -> bool {
    root.join(MANIFEST_FILE).is_file()
}

/// Whether version-control metadata exists at the root. Filesystem
/// errors count as "absent".
pub fn has_version_control(root: &Path) -> bool {
    root.join(VCS_DIR).is_dir()
}
