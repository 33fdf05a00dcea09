//! Abstract syntax trees built from captures
//!
//! Grammars mark the fragments they want to keep with [`Capture`]. Matching
//! then grows a [`Tree`] of typed nodes inside the parser; the nodes captured
//! at the top level become the roots of the resulting [`Ast`].
//!
//! ```text
//! And((min_one(Capture::new(0, 'a')), Capture::new(1, '\n')))
//!     over "aa\n"
//!         -> [[0,"a"],[0,"a"],[1,"\n"]]
//! ```

pub mod capture;
pub mod display;
pub mod json;
pub mod tree;

pub use capture::{Capture, Convert};
pub use display::{Named, TypeNames};
pub use tree::{Node, NodeId, NodeRef, Siblings, Tree};

use crate::parser::{Matcher, ParseError, Parser};

/// A finished tree and its top-level nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ast {
    tree: Tree,
    roots: Vec<NodeId>,
}

impl Ast {
    pub fn new(tree: Tree, roots: Vec<NodeId>) -> Self {
        Self { tree, roots }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.roots.iter().map(|id| self.tree.get(*id))
    }

    /// The root, when the grammar captured exactly one.
    pub fn root(&self) -> Option<NodeRef<'_>> {
        match self.roots.as_slice() {
            [id] => Some(self.tree.get(*id)),
            _ => None,
        }
    }
}

/// Run a capturing grammar over `input` and collect what it captured.
///
/// The grammar does not have to consume the whole input; end it with
/// [`End`](crate::parser::End) to require that.
pub fn parse<M: Matcher>(input: &[u8], grammar: M) -> Result<Ast, ParseError> {
    let mut parser = Parser::new(input)?;
    parser.expect(grammar)?;
    Ok(parser.into_ast())
}
