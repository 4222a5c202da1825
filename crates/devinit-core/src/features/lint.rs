//! Lint feature: eslint + prettier install, config templates, scripts

use super::report_step_error;
use crate::environment::{PackageManager, MANIFEST_FILE};
use crate::install::{self, CommandRunner};
use crate::manifest::{self, Patch};
use crate::templates::{self, TemplateSet, TemplateStore};
use colored::Colorize;
use serde_json::{json, Value};
use std::path::Path;

/// Development dependencies added by this feature, installed one at a
/// time as the upstream tool reports per-package progress that way.
const LINT_PACKAGES: [&str; 2] = ["eslint", "prettier"];

const LINT_SCRIPT: &str = "eslint --fix .";
const TEST_PLACEHOLDER: &str = "echo \"Error: no test specified\"";

/// Staged-file pipelines, lint first then format.
fn lint_staged_value() -> Value {
    json!({
        "*.js": ["npm run lint", "prettier --write", "git add"],
        "*.ts?(x)": ["npm run lint", "prettier --parser=typescript --write", "git add"],
    })
}

/// Set up linting: install the packages, materialize the config
/// templates, and return the manifest patches to apply at finalization.
///
/// Later steps proceed even when an earlier one fails; a partially
/// configured tree is acceptable because a re-run converges.
pub async fn install_lint<R: CommandRunner, S: TemplateStore>(
    runner: &R,
    store: &S,
    pm: PackageManager,
    root: &Path,
) -> Vec<Patch> {
    let mut all_installed = true;
    for package in LINT_PACKAGES {
        if let Err(e) = install::add_packages(runner, pm, &[package], true).await {
            report_step_error(&format!("installing {package}"), &e);
            all_installed = false;
        }
    }

    if let Err(e) = templates::materialize(store, TemplateSet::Lint, root).await {
        report_step_error("copying lint templates", &e);
    }

    let mut patches = vec![Patch::overwrite("scripts.lint", json!(LINT_SCRIPT))];
    if !has_test_script(root) {
        patches.push(Patch::overwrite("scripts.test", json!(TEST_PLACEHOLDER)));
    }
    patches.push(Patch::shallow_merge("lint-staged", lint_staged_value()));

    if all_installed {
        println!(
            "{}",
            "\n\"eslint\" and \"prettier\" packages have been installed\n".green()
        );
    }

    patches
}

/// Whether the manifest already carries a `test` script. The manifest
/// is not rewritten between this check and finalization; only the
/// single merge point writes it.
fn has_test_script(root: &Path) -> bool {
    manifest::read_manifest(&root.join(MANIFEST_FILE))
        .ok()
        .and_then(|doc| doc.get("scripts")?.get("test").cloned())
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install::testing::ScriptedRunner;
    use crate::manifest::MergeStrategy;
    use crate::templates::EmbeddedTemplates;
    use tempfile::TempDir;

    fn project(manifest: &str) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), manifest).unwrap();
        dir
    }

    fn patch_for<'a>(patches: &'a [Patch], key_path: &str) -> Option<&'a Patch> {
        patches.iter().find(|p| p.key_path == key_path)
    }

    #[tokio::test]
    async fn installs_packages_and_copies_templates() {
        let dir = project(r#"{"name":"x"}"#);
        let runner = ScriptedRunner::new();

        let patches =
            install_lint(&runner, &EmbeddedTemplates, PackageManager::Yarn, dir.path()).await;

        assert_eq!(
            runner.calls(),
            vec!["yarn add eslint -D".to_string(), "yarn add prettier -D".to_string()]
        );
        assert!(dir.path().join(".prettierrc").is_file());
        assert!(dir.path().join(".eslintrc.json").is_file());

        let lint = patch_for(&patches, "scripts.lint").unwrap();
        assert_eq!(lint.value, json!(LINT_SCRIPT));
        assert!(patch_for(&patches, "scripts.test").is_some());

        let staged = patch_for(&patches, "lint-staged").unwrap();
        assert_eq!(staged.strategy, MergeStrategy::ShallowMergeObject);
        assert_eq!(
            staged.value["*.js"],
            json!(["npm run lint", "prettier --write", "git add"])
        );
    }

    #[tokio::test]
    async fn existing_test_script_is_left_alone() {
        let dir = project(r#"{"scripts":{"test":"vitest"}}"#);
        let runner = ScriptedRunner::new();

        let patches =
            install_lint(&runner, &EmbeddedTemplates, PackageManager::Npm, dir.path()).await;

        assert!(patch_for(&patches, "scripts.test").is_none());
    }

    #[tokio::test]
    async fn failed_installs_still_configure_everything_else() {
        let dir = project(r#"{"name":"x"}"#);
        let runner = ScriptedRunner::new().fail_on("yarn add");

        let patches =
            install_lint(&runner, &EmbeddedTemplates, PackageManager::Yarn, dir.path()).await;

        // Templates and patches survive the install failure.
        assert!(dir.path().join(".prettierrc").is_file());
        assert!(patch_for(&patches, "scripts.lint").is_some());
        assert!(patch_for(&patches, "lint-staged").is_some());
    }

    #[tokio::test]
    async fn rerun_produces_identical_templates_and_patches() {
        let dir = project(r#"{"name":"x"}"#);
        let runner = ScriptedRunner::new();

        install_lint(&runner, &EmbeddedTemplates, PackageManager::Yarn, dir.path()).await;
        let first = std::fs::read(dir.path().join(".eslintrc.json")).unwrap();

        let patches =
            install_lint(&runner, &EmbeddedTemplates, PackageManager::Yarn, dir.path()).await;
        let second = std::fs::read(dir.path().join(".eslintrc.json")).unwrap();

        assert_eq!(first, second);
        let staged = patch_for(&patches, "lint-staged").unwrap();
        // Pipelines are fixed values, not appended lists.
        assert_eq!(staged.value["*.js"].as_array().unwrap().len(), 3);
    }
}
