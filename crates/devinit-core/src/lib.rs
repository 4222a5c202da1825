//! devinit core - bootstrap orchestration for package repositories
//!
//! This library wires optional developer tooling (lint, git hooks) into
//! an existing package repository: it detects the usable package
//! manager, collects the operator's feature selection, drives the
//! external tool invocations and template copies per feature, and
//! merges the accumulated manifest patches in a single write.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - environment probing, manifest patch
//!   application, template materialization, command execution
//! - **Layer 2: Feature Installers** - lint and git-hooks setup
//!   routines composed from the layer-1 operations
//! - **Layer 3: Orchestration** - the [`Bootstrap`] state machine,
//!   generic over the [`CommandRunner`], [`PromptService`] and
//!   [`TemplateStore`] seams so a binary supplies the real terminal and
//!   child processes while tests script all three.

pub mod environment;
pub mod error;
pub mod features;
pub mod install;
pub mod manifest;
pub mod orchestrator;
pub mod prompt;
pub mod templates;

// Re-export main types for convenience
pub use environment::{detect_package_manager, Environment, PackageManager, MANIFEST_FILE};
pub use error::{Error, Result};
pub use install::{add_packages, CapturedOutput, CommandRunner, ProcessRunner};
pub use manifest::{apply_patches, read_manifest, MergeStrategy, Patch};
pub use orchestrator::{Bootstrap, Outcome};
pub use prompt::{FeatureSelection, PromptService, YesNoQuestion};
pub use templates::{materialize, EmbeddedTemplates, TemplateDescriptor, TemplateSet, TemplateStore};
