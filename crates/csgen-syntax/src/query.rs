//! Tree queries used to locate the target node of a generation request.

use crate::node::{NodeIndex, SyntaxTree};
use crate::node_access::NodeAccess;

/// Preorder iterator over a subtree, the start node included.
pub struct Descendants<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeIndex>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        let current = self.stack.pop()?;
        // Push in reverse so the first child is visited first.
        self.stack
            .extend(self.tree.get_children(current).iter().rev().copied());
        Some(current)
    }
}

impl SyntaxTree {
    pub fn descendants(&self, index: NodeIndex) -> Descendants<'_> {
        let stack = if self.exists(index) {
            vec![index]
        } else {
            Vec::new()
        };
        Descendants { tree: self, stack }
    }

    /// All partial-capable type declarations in source order.
    pub fn type_declarations(&self) -> Vec<NodeIndex> {
        self.descendants(self.root())
            .filter(|&index| self.type_declaration(index).is_some())
            .collect()
    }

    /// Find a type declaration by its nested-type path.
    ///
    /// `path` is either the chain of type names (`Outer.Inner`) or that chain
    /// prefixed by the enclosing namespace names (`Company.App.Outer.Inner`).
    /// Type parameters are not part of the path. The first match in source
    /// order wins.
    pub fn find_type_declaration(&self, path: &str) -> Option<NodeIndex> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }

        self.type_declarations().into_iter().find(|&index| {
            let (namespaces, types) = self.declaration_path(index);
            let type_path = types.join(".");
            if type_path == path {
                return true;
            }
            !namespaces.is_empty() && format!("{}.{}", namespaces.join("."), type_path) == path
        })
    }

    /// Innermost node whose source span contains `offset`.
    pub fn node_at_offset(&self, offset: u32) -> Option<NodeIndex> {
        let root = self.root();
        if !self.get(root)?.contains(offset) {
            return None;
        }

        let mut current = root;
        'descend: loop {
            for &child in self.get_children(current) {
                if self.get(child).is_some_and(|node| node.contains(offset)) {
                    current = child;
                    continue 'descend;
                }
            }
            return Some(current);
        }
    }

    /// Enclosing namespace names and type names of a node, outermost first,
    /// the node itself included.
    fn declaration_path(&self, index: NodeIndex) -> (Vec<&str>, Vec<&str>) {
        let mut namespaces = Vec::new();
        let mut types = Vec::new();
        for ancestor in self.ancestors_and_self(index) {
            if let Some(data) = self.type_declaration(ancestor) {
                types.push(data.name.as_str());
            } else if let Some(name) = self.namespace_name(ancestor) {
                namespaces.push(name);
            }
        }
        namespaces.reverse();
        types.reverse();
        (namespaces, types)
    }
}
