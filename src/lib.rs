//! csgen: partial declaration scaffolding for C# source generators.
//!
//! Re-exports the workspace crates and adds a one-call convenience for the
//! common case of wrapping generated members in the declaration chain of an
//! existing type:
//!
//! ```no_run
//! use csgen::{RenderOptions, render_partial};
//!
//! let source = "namespace App { public partial class Host { } }";
//! let text = render_partial(
//!     "Host.cs",
//!     source,
//!     "Host",
//!     "public int Generated => 42;",
//!     &RenderOptions::default(),
//! )?;
//! assert!(text.contains("public partial class Host"));
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result};

pub use csgen_common as common;
pub use csgen_emitter as emitter;
pub use csgen_parser as parser;
pub use csgen_syntax as syntax;

pub use csgen_common::{NewLineKind, RenderOptions};
pub use csgen_emitter::{
    DeclarationRenderer, NamespaceDeclarationInfo, NamespaceForm, QualifiedDeclarationInfo,
    TypeDeclarationInfo,
};
pub use csgen_parser::{CSharpParser, parse_source};
pub use csgen_syntax::{NodeAccess, NodeIndex, SyntaxKind, SyntaxTree};

// Render options files
pub mod config;

// Tracing subscriber setup
pub mod tracing_config;

/// Parse `source`, locate the type named by `type_path`, and wrap `body` in
/// that type's full declaration chain.
///
/// `type_path` is either the dotted type path (`Outer.Inner`) or the
/// namespace-qualified one (`App.Outer.Inner`).
#[tracing::instrument(level = "debug", skip(source, body, options))]
pub fn render_partial(
    file_name: &str,
    source: &str,
    type_path: &str,
    body: &str,
    options: &RenderOptions,
) -> Result<String> {
    let tree = parse_source(file_name, source)
        .with_context(|| format!("failed to parse {file_name}"))?;
    let target = tree
        .find_type_declaration(type_path)
        .with_context(|| format!("type `{type_path}` not found in {file_name}"))?;

    let info = QualifiedDeclarationInfo::from_syntax_with_options(&tree, target, options);
    Ok(info.render(options).with_body(body))
}
