//! Template sets and their materialization into the target tree

mod materialize;
mod store;

pub use materialize::materialize;
pub use store::{EmbeddedTemplates, TemplateDescriptor, TemplateSet, TemplateStore};
