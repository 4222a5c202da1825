//! Template set enumeration and content access
//!
//! Templates ship compiled into the binary from the repo-root
//! `templates/` tree. Dot-files are stored with a `_` sentinel prefix
//! (npm strips literal dot-files from published packages) and renamed
//! at materialization time.

use crate::error::{Error, Result};
use std::io;

/// Filenames starting with this sentinel materialize as dot-files.
const DOT_SENTINEL: char = '_';

/// Reserved entry that is never materialized directly; manifest changes
/// go through patches only.
const RESERVED_MANIFEST: &str = "package.json";

/// Named bundles of static files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSet {
    Lint,
}

/// One entry of a template set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub source_name: String,
    pub dest_name: String,
    pub is_dir: bool,
}

impl TemplateDescriptor {
    pub fn file(source_name: &str) -> Self {
        Self {
            source_name: source_name.to_string(),
            dest_name: dest_name_for(source_name),
            is_dir: false,
        }
    }

    pub fn directory(source_name: &str) -> Self {
        Self {
            source_name: source_name.to_string(),
            dest_name: dest_name_for(source_name),
            is_dir: true,
        }
    }

    /// Whether this entry must be skipped during materialization.
    pub fn reserved(&self) -> bool {
        self.dest_name == RESERVED_MANIFEST
    }
}

/// Apply the sentinel-to-dot rename to every path segment:
/// `_prettierrc` becomes `.prettierrc`, `_vscode/settings.json`
/// becomes `.vscode/settings.json`.
fn dest_name_for(source_name: &str) -> String {
    source_name
        .split('/')
        .map(|segment| match segment.strip_prefix(DOT_SENTINEL) {
            Some(rest) => format!(".{rest}"),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Source of template entries and their raw bytes.
pub trait TemplateStore {
    /// Enumerate the entries of a set, in stable order.
    fn entries(&self, set: TemplateSet) -> Vec<TemplateDescriptor>;

    /// Read the bytes behind a file descriptor.
    fn read(&self, set: TemplateSet, descriptor: &TemplateDescriptor) -> Result<Vec<u8>>;
}

const LINT_TEMPLATES: &[(&str, &[u8])] = &[
    (
        "_editorconfig",
        include_bytes!("../../../../templates/lint/_editorconfig"),
    ),
    (
        "_eslintignore",
        include_bytes!("../../../../templates/lint/_eslintignore"),
    ),
    (
        "_eslintrc.json",
        include_bytes!("../../../../templates/lint/_eslintrc.json"),
    ),
    (
        "_prettierignore",
        include_bytes!("../../../../templates/lint/_prettierignore"),
    ),
    (
        "_prettierrc",
        include_bytes!("../../../../templates/lint/_prettierrc"),
    ),
    (
        "package.json",
        include_bytes!("../../../../templates/lint/package.json"),
    ),
];

/// Template files compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    fn table(set: TemplateSet) -> &'static [(&'static str, &'static [u8])] {
        match set {
            TemplateSet::Lint => LINT_TEMPLATES,
        }
    }
}

impl TemplateStore for EmbeddedTemplates {
    fn entries(&self, set: TemplateSet) -> Vec<TemplateDescriptor> {
        Self::table(set)
            .iter()
            .map(|(name, _)| TemplateDescriptor::file(name))
            .collect()
    }

    fn read(&self, set: TemplateSet, descriptor: &TemplateDescriptor) -> Result<Vec<u8>> {
        Self::table(set)
            .iter()
            .find(|(name, _)| *name == descriptor.source_name)
            .map(|(_, bytes)| bytes.to_vec())
            .ok_or_else(|| {
                Error::fs(
                    &descriptor.source_name,
                    io::Error::new(io::ErrorKind::NotFound, "unknown template entry"),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_prefix_becomes_leading_dot() {
        assert_eq!(TemplateDescriptor::file("_editorconfig").dest_name, ".editorconfig");
        assert_eq!(TemplateDescriptor::file("_prettierrc").dest_name, ".prettierrc");
    }

    #[test]
    fn rename_applies_per_path_segment() {
        assert_eq!(
            TemplateDescriptor::file("_vscode/settings.json").dest_name,
            ".vscode/settings.json"
        );
        assert_eq!(TemplateDescriptor::file("docs/readme.md").dest_name, "docs/readme.md");
    }

    #[test]
    fn manifest_entry_is_reserved() {
        assert!(TemplateDescriptor::file("package.json").reserved());
        assert!(!TemplateDescriptor::file("_prettierrc").reserved());
    }

    #[test]
    fn lint_set_lists_configs_and_reserved_manifest() {
        let entries = EmbeddedTemplates.entries(TemplateSet::Lint);
        let dests: Vec<_> = entries.iter().map(|e| e.dest_name.as_str()).collect();

        assert!(dests.contains(&".editorconfig"));
        assert!(dests.contains(&".eslintignore"));
        assert!(dests.contains(&".eslintrc.json"));
        assert!(dests.contains(&".prettierignore"));
        assert!(dests.contains(&".prettierrc"));
        assert!(dests.contains(&"package.json"));
    }

    #[test]
    fn read_returns_bytes_for_known_entries() {
        let entries = EmbeddedTemplates.entries(TemplateSet::Lint);
        for entry in entries.iter().filter(|e| !e.is_dir) {
            let bytes = EmbeddedTemplates.read(TemplateSet::Lint, entry).unwrap();
            assert!(!bytes.is_empty(), "{} is empty", entry.source_name);
        }
    }

    #[test]
    fn read_unknown_entry_is_a_filesystem_error() {
        let ghost = TemplateDescriptor::file("_nope");
        let err = EmbeddedTemplates.read(TemplateSet::Lint, &ghost).unwrap_err();
        assert!(matches!(err, Error::Filesystem { .. }));
    }
}
