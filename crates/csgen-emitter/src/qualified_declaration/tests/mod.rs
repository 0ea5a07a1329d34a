use csgen_syntax::{NodeIndex, SyntaxKind, SyntaxTree, TypeDeclarationData, TypeKeyword};

mod render_tests;

/// ```csharp
/// using System;
/// namespace A.B
/// {
///     using System.Text;
///     public partial class Outer
///     {
///         private partial class Inner
///         {
///             void Run() { }
///         }
///     }
/// }
/// ```
pub(super) struct Fixture {
    pub tree: SyntaxTree,
    pub outer: NodeIndex,
    pub inner: NodeIndex,
    pub method: NodeIndex,
}

pub(super) fn nested_fixture() -> Fixture {
    let mut tree = SyntaxTree::new("fixture.cs");
    let root = tree.add_compilation_unit();
    tree.add_using(root, "using System;");
    let ns = tree.add_namespace(root, "A.B", false);
    tree.add_using(ns, "using System.Text;");
    let outer = tree.add_type_declaration(
        ns,
        TypeDeclarationData::new(TypeKeyword::Class, "Outer").with_modifiers(["public", "partial"]),
    );
    let inner = tree.add_type_declaration(
        outer,
        TypeDeclarationData::new(TypeKeyword::Class, "Inner").with_modifiers(["private", "partial"]),
    );
    let method = tree.add_other(
        inner,
        SyntaxKind::Other,
        "method_declaration",
        Some("Run".to_string()),
    );
    Fixture {
        tree,
        outer,
        inner,
        method,
    }
}

pub(super) fn count(text: &str, ch: char) -> usize {
    text.chars().filter(|&c| c == ch).count()
}
