//! C# front end for csgen.
//!
//! Parses C# source with `tree-sitter-c-sharp` and lowers the concrete syntax
//! tree into a `csgen_syntax::SyntaxTree`. The lowering normalizes the two
//! places where the concrete grammar differs from the declaration model:
//!
//! - Members of a namespace or type body (`declaration_list`) become direct
//!   children of the namespace or type, so using directives declared inside a
//!   block namespace are its direct children.
//! - A file-scoped namespace owns everything that follows it in the file.

use anyhow::{Result, anyhow, bail};
use csgen_syntax::SyntaxTree;
use tree_sitter::Parser;

mod node_kinds;

pub mod lower;
pub use lower::lower_tree;

/// Reusable C# parser.
pub struct CSharpParser {
    parser: Parser,
}

impl CSharpParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_c_sharp::LANGUAGE.into())
            .map_err(|err| anyhow!("failed to load the tree-sitter C# grammar: {err}"))?;
        Ok(Self { parser })
    }

    /// Parse `source` and lower it into a syntax arena.
    ///
    /// Sources with syntax errors are still lowered from tree-sitter's
    /// recovered tree.
    #[tracing::instrument(level = "debug", skip(self, source), fields(len = source.len()))]
    pub fn parse(&mut self, file_name: &str, source: &str) -> Result<SyntaxTree> {
        let Some(tree) = self.parser.parse(source, None) else {
            bail!("tree-sitter produced no syntax tree for {file_name}");
        };

        if tree.root_node().has_error() {
            tracing::warn!(
                file = file_name,
                "source contains syntax errors, lowering the recovered tree"
            );
        }

        Ok(lower_tree(file_name, source, &tree))
    }
}

/// Parse a single source file with a fresh parser.
pub fn parse_source(file_name: &str, source: &str) -> Result<SyntaxTree> {
    CSharpParser::new()?.parse(file_name, source)
}
