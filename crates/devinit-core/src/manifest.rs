//! Manifest reading and declarative patch application
//!
//! The manifest is the only shared mutable resource of a run, and it is
//! rewritten exactly once, here. Feature installers never touch it
//! directly; they accumulate [`Patch`] values that are applied in
//! submission order at finalization.

use crate::error::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// How a patch combines with the value already present at its key path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Replace the value entirely.
    Overwrite,
    /// Merge one level of object keys; patch-supplied keys win.
    ShallowMergeObject,
}

/// One declarative manifest edit. `key_path` is dot-separated, e.g.
/// `scripts.lint`; intermediate objects are created as needed.
#[derive(Debug, Clone)]
pub struct Patch {
    pub key_path: &'static str,
    pub value: Value,
    pub strategy: MergeStrategy,
}

impl Patch {
    pub fn overwrite(key_path: &'static str, value: Value) -> Self {
        Self {
            key_path,
            value,
            strategy: MergeStrategy::Overwrite,
        }
    }

    pub fn shallow_merge(key_path: &'static str, value: Value) -> Self {
        Self {
            key_path,
            value,
            strategy: MergeStrategy::ShallowMergeObject,
        }
    }
}

/// Read and parse the manifest. A malformed document is a fatal
/// [`Error::Parse`]; a merge against it could not proceed safely.
pub fn read_manifest(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::fs(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

/// Apply `patches` in submission order and rewrite the manifest in
/// place. Keys not named by any patch survive untouched, and
/// `preserve_order` keeps existing key order stable across rewrites.
pub fn apply_patches(path: &Path, patches: &[Patch]) -> Result<()> {
    let mut doc = read_manifest(path)?;

    for patch in patches {
        apply(&mut doc, patch);
    }

    let mut text = serde_json::to_string_pretty(&doc)?;
    text.push('\n');
    std::fs::write(path, text).map_err(|e| Error::fs(path, e))
}

fn apply(doc: &mut Value, patch: &Patch) {
    let slot = slot_at(doc, patch.key_path);
    match patch.strategy {
        MergeStrategy::Overwrite => *slot = patch.value.clone(),
        MergeStrategy::ShallowMergeObject => shallow_merge(slot, &patch.value),
    }
}

/// Walk to the value at a dot-separated key path, inserting empty
/// objects for missing segments. A non-object intermediate is replaced
/// with an object; the patch owns that path.
fn slot_at<'a>(doc: &'a mut Value, key_path: &str) -> &'a mut Value {
    let mut current = doc;
    for segment in key_path.split('.') {
        if !current.is_object() {
            *current = Value::Object(serde_json::Map::new());
        }
        current = current
            .as_object_mut()
            .expect("just ensured object")
            .entry(segment.to_string())
            .or_insert(Value::Null);
    }
    current
}

fn shallow_merge(slot: &mut Value, incoming: &Value) {
    match (slot.as_object_mut(), incoming.as_object()) {
        (Some(existing), Some(additions)) => {
            for (key, value) in additions {
                existing.insert(key.clone(), value.clone());
            }
        }
        // Either side is not an object: nothing to merge key-wise.
        _ => *slot = incoming.clone(),
    }
}
