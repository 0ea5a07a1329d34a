//! SyntaxTree access methods and the NodeAccess trait.

use crate::node::{Node, NodeIndex, OtherData, SyntaxTree, TypeDeclarationData};
use crate::SyntaxKind;

impl SyntaxTree {
    /// Get a node by index.
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    /// The compilation unit, or `NONE` for an empty arena.
    #[inline]
    pub fn root(&self) -> NodeIndex {
        match self.nodes.first() {
            Some(node) if node.kind == SyntaxKind::CompilationUnit => NodeIndex(0),
            _ => NodeIndex::NONE,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get data for a node that is not structurally modelled.
    pub fn get_other(&self, index: NodeIndex) -> Option<&OtherData> {
        let node = self.get(index)?;
        if node.has_data()
            && matches!(node.kind, SyntaxKind::Other | SyntaxKind::EnumDeclaration)
        {
            self.others.get(node.data_index as usize)
        } else {
            None
        }
    }

    /// Declared name of a node: the namespace name, the type name, or the
    /// `name` of an unmodelled declaration.
    pub fn node_name(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        match node.kind {
            kind if kind.is_namespace() => self.namespace_name(index),
            kind if kind.is_type_declaration() => {
                self.type_declaration(index).map(|data| data.name.as_str())
            }
            SyntaxKind::Other | SyntaxKind::EnumDeclaration => {
                self.get_other(index).and_then(|data| data.name.as_deref())
            }
            _ => None,
        }
    }
}

/// Read-only view of a syntax tree used by the declaration builder.
pub trait NodeAccess {
    /// Get the structural kind of a node
    fn kind(&self, index: NodeIndex) -> Option<SyntaxKind>;

    /// Get the parent of a node, `NONE` for the root or an unknown index
    fn parent(&self, index: NodeIndex) -> NodeIndex;

    /// Get the direct children of a node in source order
    fn get_children(&self, index: NodeIndex) -> &[NodeIndex];

    /// Get the dotted name of a namespace declaration
    fn namespace_name(&self, index: NodeIndex) -> Option<&str>;

    /// Get the text of a using directive
    fn using_text(&self, index: NodeIndex) -> Option<&str>;

    /// Get the header data of a class, struct, interface or record declaration
    fn type_declaration(&self, index: NodeIndex) -> Option<&TypeDeclarationData>;

    /// Check if a node exists
    fn exists(&self, index: NodeIndex) -> bool {
        !index.is_none() && self.kind(index).is_some()
    }

    /// Iterate the node itself and then each ancestor up to the root.
    fn ancestors_and_self(&self, index: NodeIndex) -> AncestorsAndSelf<'_, Self> {
        let next = if self.exists(index) {
            index
        } else {
            NodeIndex::NONE
        };
        AncestorsAndSelf { access: self, next }
    }
}

impl NodeAccess for SyntaxTree {
    fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|node| node.kind)
    }

    fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |node| node.parent)
    }

    fn get_children(&self, index: NodeIndex) -> &[NodeIndex] {
        if index.is_none() {
            return &[];
        }
        self.children
            .get(index.0 as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn namespace_name(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        if node.has_data() && node.kind.is_namespace() {
            self.namespaces
                .get(node.data_index as usize)
                .map(|data| data.name.as_str())
        } else {
            None
        }
    }

    fn using_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        if node.has_data() && node.kind == SyntaxKind::UsingDirective {
            self.usings
                .get(node.data_index as usize)
                .map(|data| data.text.as_str())
        } else {
            None
        }
    }

    fn type_declaration(&self, index: NodeIndex) -> Option<&TypeDeclarationData> {
        let node = self.get(index)?;
        if node.has_data() && node.kind.is_type_declaration() {
            self.types.get(node.data_index as usize)
        } else {
            None
        }
    }
}

/// Iterator over a node and its ancestors, innermost first.
pub struct AncestorsAndSelf<'a, A: NodeAccess + ?Sized> {
    access: &'a A,
    next: NodeIndex,
}

impl<A: NodeAccess + ?Sized> Iterator for AncestorsAndSelf<'_, A> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        if self.next.is_none() {
            return None;
        }
        let current = self.next;
        self.next = self.access.parent(current);
        Some(current)
    }
}
