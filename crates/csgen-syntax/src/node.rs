//! Node arena types.

use crate::SyntaxKind;

/// Index of a node in a `SyntaxTree`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// Thin node header. Kind specific data lives in the arena pools and is
/// reached through `data_index`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: SyntaxKind,
    pub parent: NodeIndex,
    /// Start byte offset in the source text.
    pub pos: u32,
    /// End byte offset (exclusive).
    pub end: u32,
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, offset: u32) -> bool {
        self.pos <= offset && offset < self.end
    }
}

/// Data for block-scoped and file-scoped namespace declarations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceData {
    /// Dotted name as written (`A.B.C`).
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsingData {
    /// Directive source text as written, from `using` through the trailing
    /// semicolon. Inner line breaks and comments are kept.
    pub text: String,
}

/// Keyword introducing a type declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKeyword {
    Class,
    Struct,
    Interface,
    Record,
    RecordStruct,
    RecordClass,
}

impl TypeKeyword {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Record => "record",
            Self::RecordStruct => "record struct",
            Self::RecordClass => "record class",
        }
    }

    /// Arena kind used for declarations introduced by this keyword.
    #[must_use]
    pub const fn syntax_kind(self) -> SyntaxKind {
        match self {
            Self::Class => SyntaxKind::ClassDeclaration,
            Self::Struct => SyntaxKind::StructDeclaration,
            Self::Interface => SyntaxKind::InterfaceDeclaration,
            Self::Record | Self::RecordStruct | Self::RecordClass => SyntaxKind::RecordDeclaration,
        }
    }
}

/// Header of a class, struct, interface or record declaration.
///
/// Attributes, base lists, primary constructor parameters and bodies are not
/// recorded: a partial re-declaration never repeats them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDeclarationData {
    pub keyword: TypeKeyword,
    /// Modifier keywords in source order (`public`, `static`, `partial`, ...).
    pub modifiers: Vec<String>,
    pub name: String,
    /// Type parameter list including angle brackets (`<TKey, out TValue>`).
    pub type_parameters: Option<String>,
    /// Constraint clauses (`where T : class`), one entry per clause.
    pub constraint_clauses: Vec<String>,
}

impl TypeDeclarationData {
    #[must_use]
    pub fn new(keyword: TypeKeyword, name: impl Into<String>) -> Self {
        Self {
            keyword,
            modifiers: Vec::new(),
            name: name.into(),
            type_parameters: None,
            constraint_clauses: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_modifiers<I, S>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers = modifiers.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_type_parameters(mut self, type_parameters: impl Into<String>) -> Self {
        self.type_parameters = Some(type_parameters.into());
        self
    }

    #[must_use]
    pub fn with_constraint_clause(mut self, clause: impl Into<String>) -> Self {
        self.constraint_clauses.push(clause.into());
        self
    }

    #[must_use]
    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }
}

/// Data for every node the front end does not model structurally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtherData {
    /// Kind name reported by the concrete syntax tree (`method_declaration`).
    pub raw_kind: String,
    /// Declared name, when the concrete node has one.
    pub name: Option<String>,
}

/// Flat syntax tree arena.
///
/// Index 0 is the compilation unit once it has been added. A node's parent is
/// always added before the node itself, so every ancestor chain is finite.
#[derive(Clone, Debug, Default)]
pub struct SyntaxTree {
    pub(crate) file_name: String,
    pub(crate) nodes: Vec<Node>,
    pub(crate) children: Vec<Vec<NodeIndex>>,
    pub(crate) namespaces: Vec<NamespaceData>,
    pub(crate) usings: Vec<UsingData>,
    pub(crate) types: Vec<TypeDeclarationData>,
    pub(crate) others: Vec<OtherData>,
}
