/// Structural kind of a node in the syntax arena.
///
/// This is a closed set: the front end maps every concrete node it does not
/// care about to `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    CompilationUnit,
    NamespaceDeclaration,
    FileScopedNamespaceDeclaration,
    UsingDirective,
    ClassDeclaration,
    StructDeclaration,
    InterfaceDeclaration,
    RecordDeclaration,
    EnumDeclaration,
    Other,
}

impl SyntaxKind {
    /// Namespace forms, including file-scoped namespaces.
    #[inline]
    #[must_use]
    pub const fn is_namespace(self) -> bool {
        matches!(
            self,
            Self::NamespaceDeclaration | Self::FileScopedNamespaceDeclaration
        )
    }

    /// Type declarations that can be re-declared as `partial`.
    ///
    /// Enums are declarations too, but C# does not allow partial enums.
    #[inline]
    #[must_use]
    pub const fn is_type_declaration(self) -> bool {
        matches!(
            self,
            Self::ClassDeclaration
                | Self::StructDeclaration
                | Self::InterfaceDeclaration
                | Self::RecordDeclaration
        )
    }
}
