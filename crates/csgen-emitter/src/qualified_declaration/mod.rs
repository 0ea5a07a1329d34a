//! Declaration chain of a syntax node.
//!
//! `QualifiedDeclarationInfo::from_syntax` walks a node and its ancestors,
//! innermost first, and records every enclosing namespace (with the using
//! directives declared at exactly that level) and every enclosing partial
//! capable type (as a rendered header). Both sequences are reversed once at
//! the end, so index 0 is always the outermost level.
//!
//! ```text
//! compilation unit        -> namespaces[0] (no name, root usings)
//!   namespace A.B { ... } -> namespaces[1]
//!     class Outer         -> types[0]
//!       class Inner       -> types[1]
//!         <target node>
//! ```

use csgen_common::RenderOptions;
use csgen_syntax::{NodeAccess, NodeIndex, SyntaxKind};

use crate::type_declaration::render_type_declaration;

mod render;
pub use render::DeclarationRenderer;

/// How a namespace level is opened and closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamespaceForm {
    /// The compilation unit. Has no name and renders no braces.
    CompilationUnit,
    /// `namespace A.B { ... }`
    Block,
    /// `namespace A.B;`
    FileScoped,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceDeclarationInfo {
    pub form: NamespaceForm,
    /// Dotted namespace name, `None` for the compilation unit.
    pub declaration: Option<String>,
    /// Using directives that are direct children of this level, verbatim.
    pub usings: Vec<String>,
}

impl NamespaceDeclarationInfo {
    pub fn compilation_unit(usings: Vec<String>) -> Self {
        Self {
            form: NamespaceForm::CompilationUnit,
            declaration: None,
            usings,
        }
    }

    pub fn block(name: impl Into<String>, usings: Vec<String>) -> Self {
        Self {
            form: NamespaceForm::Block,
            declaration: Some(name.into()),
            usings,
        }
    }

    pub fn file_scoped(name: impl Into<String>, usings: Vec<String>) -> Self {
        Self {
            form: NamespaceForm::FileScoped,
            declaration: Some(name.into()),
            usings,
        }
    }

    /// Whether this level contributes a `{` / `}` pair.
    #[inline]
    pub fn opens_block(&self) -> bool {
        self.form == NamespaceForm::Block && self.declaration.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDeclarationInfo {
    /// Rendered partial header (`public static partial class Host<T>`).
    pub declaration: String,
}

impl TypeDeclarationInfo {
    pub fn new(declaration: impl Into<String>) -> Self {
        Self {
            declaration: declaration.into(),
        }
    }
}

/// Immutable namespace and type chain enclosing one syntax node, outermost
/// level first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QualifiedDeclarationInfo {
    namespaces: Box<[NamespaceDeclarationInfo]>,
    types: Box<[TypeDeclarationInfo]>,
}

impl QualifiedDeclarationInfo {
    /// Assemble a chain from levels already ordered outermost first.
    pub fn new(namespaces: Vec<NamespaceDeclarationInfo>, types: Vec<TypeDeclarationInfo>) -> Self {
        Self {
            namespaces: namespaces.into_boxed_slice(),
            types: types.into_boxed_slice(),
        }
    }

    /// Collect the declaration chain of `target` with default options.
    pub fn from_syntax<A: NodeAccess + ?Sized>(access: &A, target: NodeIndex) -> Self {
        Self::from_syntax_with_options(access, target, &RenderOptions::default())
    }

    /// Collect the declaration chain of `target`.
    ///
    /// Only `ensure_partial` is read from `options` here; the remaining
    /// options apply when rendering.
    #[tracing::instrument(level = "trace", skip(access, options))]
    pub fn from_syntax_with_options<A: NodeAccess + ?Sized>(
        access: &A,
        target: NodeIndex,
        options: &RenderOptions,
    ) -> Self {
        let mut namespaces = Vec::new();
        let mut types = Vec::new();

        for node in access.ancestors_and_self(target) {
            match access.kind(node) {
                Some(SyntaxKind::NamespaceDeclaration) => {
                    namespaces.push(NamespaceDeclarationInfo::block(
                        namespace_name(access, node),
                        child_using_statements(access, node),
                    ));
                }
                Some(SyntaxKind::FileScopedNamespaceDeclaration) => {
                    namespaces.push(NamespaceDeclarationInfo::file_scoped(
                        namespace_name(access, node),
                        child_using_statements(access, node),
                    ));
                }
                Some(SyntaxKind::CompilationUnit) => {
                    namespaces.push(NamespaceDeclarationInfo::compilation_unit(
                        child_using_statements(access, node),
                    ));
                }
                _ => {
                    if let Some(data) = access.type_declaration(node) {
                        types.push(TypeDeclarationInfo::new(render_type_declaration(
                            data,
                            options.ensure_partial,
                        )));
                    }
                }
            }
        }

        // Collected innermost first; braces open from the outside in.
        namespaces.reverse();
        types.reverse();

        tracing::debug!(
            target_node = target.0,
            namespaces = namespaces.len(),
            types = types.len(),
            "collected declaration chain"
        );

        Self::new(namespaces, types)
    }

    pub fn namespaces(&self) -> &[NamespaceDeclarationInfo] {
        &self.namespaces
    }

    pub fn types(&self) -> &[TypeDeclarationInfo] {
        &self.types
    }

    /// Render with the given options.
    pub fn render<'a>(&'a self, options: &'a RenderOptions) -> DeclarationRenderer<'a> {
        DeclarationRenderer::new(self, options)
    }
}

fn namespace_name<A: NodeAccess + ?Sized>(access: &A, node: NodeIndex) -> String {
    access.namespace_name(node).unwrap_or_default().to_string()
}

/// Using directives that are direct children of `node`. Usings of nested or
/// enclosing scopes belong to their own level.
fn child_using_statements<A: NodeAccess + ?Sized>(access: &A, node: NodeIndex) -> Vec<String> {
    access
        .get_children(node)
        .iter()
        .filter_map(|&child| access.using_text(child))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
