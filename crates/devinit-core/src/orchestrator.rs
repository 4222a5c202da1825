//! Top-level bootstrap state machine
//!
//! START → PRECONDITIONS_CHECKED → SELECTION_COLLECTED → per-feature
//! installation → FINALIZED → (DONE | ABORTED). Preconditions and
//! prompt cancellation abort before any mutation; feature failures are
//! contained at the feature boundary; the single manifest write at
//! finalization is the only always-fatal step.

use crate::environment::{self, Environment, MANIFEST_FILE};
use crate::error::{Error, Result};
use crate::features;
use crate::install::CommandRunner;
use crate::manifest::{self, Patch};
use crate::prompt::{FeatureSelection, PromptService, YesNoQuestion};
use crate::templates::TemplateStore;
use colored::Colorize;
use std::path::PathBuf;

/// The two feature questions, in fixed order.
const QUESTIONS: [YesNoQuestion; 2] = [
    YesNoQuestion {
        key: "lint",
        message: "Do you use lint?",
        initial: true,
    },
    YesNoQuestion {
        key: "gitHooks",
        message: "Do you use git hooks?",
        initial: true,
    },
];

/// Terminal outcome of a run. Both variants map to a clean exit; an
/// abort carries the message already shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Aborted(String),
}

/// Bootstrap orchestrator, generic over its three collaborators so
/// every transition is testable without real processes or a terminal.
pub struct Bootstrap<R, P, S> {
    runner: R,
    prompts: P,
    templates: S,
    root: PathBuf,
}

impl<R, P, S> Bootstrap<R, P, S>
where
    R: CommandRunner,
    P: PromptService,
    S: TemplateStore,
{
    pub fn new(runner: R, prompts: P, templates: S, root: PathBuf) -> Self {
        Self {
            runner,
            prompts,
            templates,
            root,
        }
    }

    /// Drive one full bootstrap run.
    pub async fn run(&self) -> Result<Outcome> {
        // Snapshot the environment once; immutable for the whole run.
        let env = environment::probe(&self.runner, &self.root).await;

        if let Some(abort) = self.check_preconditions(&env) {
            return Ok(abort);
        }

        let selection = match self.collect_selection() {
            Ok(selection) => selection,
            Err(Error::Cancelled) => {
                let message = format!("{} Operation cancelled", "✖".bright_red());
                println!("{message}");
                return Ok(Outcome::Aborted(message));
            }
            Err(e) => return Err(e),
        };

        if selection == FeatureSelection::default() {
            // Nothing selected: the manifest stays untouched.
            return Ok(Outcome::Done);
        }

        println!("{}", "Installing dependencies...".bright_green());

        // Fixed order: lint before git hooks. A feature's failure is
        // already contained inside its installer; the sibling runs
        // regardless.
        let mut patches: Vec<Patch> = Vec::new();
        if selection.lint {
            patches.extend(
                features::lint::install_lint(
                    &self.runner,
                    &self.templates,
                    env.package_manager,
                    &self.root,
                )
                .await,
            );
        }
        if selection.git_hooks {
            patches.extend(
                features::git_hooks::install_git_hooks(
                    &self.runner,
                    env.package_manager,
                    &self.root,
                )
                .await,
            );
        }

        // The single manifest write of the whole run.
        manifest::apply_patches(&self.root.join(MANIFEST_FILE), &patches)?;

        Ok(Outcome::Done)
    }

    /// Gate on the manifest and version-control preconditions; both
    /// must hold before anything is prompted or mutated.
    fn check_preconditions(&self, env: &Environment) -> Option<Outcome> {
        if !env.has_manifest {
            let remedy = format!("{} init -y", env.package_manager.program());
            println!(
                "\n{} {}\n",
                "Please create a new npm repository".bright_red(),
                format!("(use \"{remedy}\")").green()
            );
            let error = Error::Precondition {
                what: "package.json",
                remedy,
            };
            return Some(Outcome::Aborted(error.to_string()));
        }

        if !env.has_version_control {
            println!(
                "\n{} {}\n",
                "Please create a new git repository".bright_red(),
                "(use \"git init\")".green()
            );
            let error = Error::Precondition {
                what: ".git",
                remedy: "git init".to_string(),
            };
            return Some(Outcome::Aborted(error.to_string()));
        }

        None
    }

    /// Ask the two feature questions, in order.
    fn collect_selection(&self) -> Result<FeatureSelection> {
        let answers = self.prompts.ask(&QUESTIONS)?;
        Ok(FeatureSelection {
            lint: answers.first().copied().unwrap_or(false),
            git_hooks: answers.get(1).copied().unwrap_or(false),
        })
    }
}
