//! Structural JSON serialization of node trees
//!
//! The wire shape is nested two-element arrays:
//!
//! ```text
//! leaf     [type, value]             [0,"a"]
//! parent   [type, [child, ...]]      [2,[[0,"a"],[1,"b"]]]
//! forest   [node, ...]               [[0,"a"],[1,"\n"]]
//! ```
//!
//! String values are JSON strings, so backslash, double quote and the control
//! characters come out escaped (`\b`, `\f`, `\n`, `\r`, `\t`). Converted values
//! keep their JSON type. A node with neither value nor children renders as an
//! empty child list.

use serde::ser::{Serialize, SerializeTuple, Serializer};

use super::tree::NodeRef;
use super::Ast;

impl Serialize for NodeRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.kind())?;
        match self.value() {
            Some(value) if !self.is_parent() => pair.serialize_element(value)?,
            _ => pair.serialize_element(&ChildList(*self))?,
        }
        pair.end()
    }
}

struct ChildList<'t>(NodeRef<'t>);

impl Serialize for ChildList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.children())
    }
}

impl Serialize for Ast {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.roots())
    }
}

impl NodeRef<'_> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Ast {
    /// Render every root as a JSON array of nodes.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
