//! SyntaxTree creation methods (add_* methods).
//!
//! The front end lowers concrete syntax into the arena through these methods,
//! and tests use them to build synthetic trees directly.

use csgen_common::limits::{DEFAULT_NODE_CAPACITY, MAX_NODE_PREALLOC};

use crate::node::{
    NamespaceData, Node, NodeIndex, OtherData, SyntaxTree, TypeDeclarationData, UsingData,
};
use crate::SyntaxKind;

impl SyntaxTree {
    pub fn new(file_name: impl Into<String>) -> SyntaxTree {
        SyntaxTree::with_capacity(file_name, DEFAULT_NODE_CAPACITY)
    }

    /// Create an arena with pre-allocated node capacity.
    pub fn with_capacity(file_name: impl Into<String>, capacity: usize) -> SyntaxTree {
        let capacity = capacity.min(MAX_NODE_PREALLOC);
        SyntaxTree {
            file_name: file_name.into(),
            nodes: Vec::with_capacity(capacity),
            children: Vec::with_capacity(capacity),
            ..SyntaxTree::default()
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Add the compilation unit. A tree has exactly one; calling this again
    /// returns the existing root.
    pub fn add_compilation_unit(&mut self) -> NodeIndex {
        if let Some(root) = self.nodes.first()
            && root.kind == SyntaxKind::CompilationUnit
        {
            return NodeIndex(0);
        }
        self.push_node(SyntaxKind::CompilationUnit, NodeIndex::NONE, Node::NO_DATA)
    }

    /// Add a namespace declaration under `parent`.
    pub fn add_namespace(
        &mut self,
        parent: NodeIndex,
        name: impl Into<String>,
        file_scoped: bool,
    ) -> NodeIndex {
        let kind = if file_scoped {
            SyntaxKind::FileScopedNamespaceDeclaration
        } else {
            SyntaxKind::NamespaceDeclaration
        };
        let data_index = self.namespaces.len() as u32;
        self.namespaces.push(NamespaceData { name: name.into() });
        self.push_node(kind, parent, data_index)
    }

    /// Add a using directive under `parent`.
    pub fn add_using(&mut self, parent: NodeIndex, text: impl Into<String>) -> NodeIndex {
        let data_index = self.usings.len() as u32;
        self.usings.push(UsingData { text: text.into() });
        self.push_node(SyntaxKind::UsingDirective, parent, data_index)
    }

    /// Add a class, struct, interface or record declaration under `parent`.
    /// The node kind follows the declaration keyword.
    pub fn add_type_declaration(&mut self, parent: NodeIndex, data: TypeDeclarationData) -> NodeIndex {
        let kind = data.keyword.syntax_kind();
        let data_index = self.types.len() as u32;
        self.types.push(data);
        self.push_node(kind, parent, data_index)
    }

    /// Add a node that is not structurally modelled (members, statements,
    /// attributes, enums, ...).
    pub fn add_other(
        &mut self,
        parent: NodeIndex,
        kind: SyntaxKind,
        raw_kind: impl Into<String>,
        name: Option<String>,
    ) -> NodeIndex {
        let data_index = self.others.len() as u32;
        self.others.push(OtherData {
            raw_kind: raw_kind.into(),
            name,
        });
        self.push_node(kind, parent, data_index)
    }

    /// Record the source byte range of a node.
    pub fn set_span(&mut self, index: NodeIndex, pos: u32, end: u32) {
        if let Some(node) = self.get_mut(index) {
            node.pos = pos;
            node.end = end.max(pos);
        }
    }

    fn push_node(&mut self, kind: SyntaxKind, parent: NodeIndex, data_index: u32) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        // A parent must already exist; anything else is detached.
        let parent = if (parent.0 as usize) < self.nodes.len() {
            parent
        } else {
            NodeIndex::NONE
        };

        self.nodes.push(Node {
            kind,
            parent,
            pos: 0,
            end: 0,
            data_index,
        });
        self.children.push(Vec::new());
        if parent.is_some() {
            self.children[parent.0 as usize].push(index);
        }
        index
    }
}
