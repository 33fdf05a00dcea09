//! Human-readable node rendering
//!
//! ```text
//! [000]: a
//! [002]: [[000]: a, [001]: b]
//! ```
//!
//! With a [`TypeNames`] table the numeric tag is replaced by its name:
//! `[Pair]: [[A]: a, [B]: b]`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::tree::NodeRef;

/// Names for node type tags, indexed by tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeNames(Vec<String>);

impl TypeNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn name(&self, kind: u32) -> Option<&str> {
        self.0.get(kind as usize).map(String::as_str)
    }
}

/// A node rendered with type names.
#[derive(Debug, Clone, Copy)]
pub struct Named<'t> {
    node: NodeRef<'t>,
    names: &'t TypeNames,
}

impl<'t> NodeRef<'t> {
    pub fn with_names(self, names: &'t TypeNames) -> Named<'t> {
        Named { node: self, names }
    }
}

fn render(node: NodeRef<'_>, names: Option<&TypeNames>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match names.and_then(|names| names.name(node.kind())) {
        Some(name) => write!(f, "[{name}]: ")?,
        None => write!(f, "[{:03}]: ", node.kind())?,
    }

    match node.value() {
        Some(Value::String(text)) if !node.is_parent() => f.write_str(text),
        Some(value) if !node.is_parent() => write!(f, "{value}"),
        _ => {
            f.write_str("[")?;
            for (index, child) in node.children().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                render(child, names, f)?;
            }
            f.write_str("]")
        }
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(*self, None, f)
    }
}

impl fmt::Display for Named<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self.node, Some(self.names), f)
    }
}
