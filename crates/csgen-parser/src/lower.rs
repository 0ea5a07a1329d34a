//! Lowering from the tree-sitter concrete syntax tree to the node arena.

use csgen_common::limits::MAX_LOWERING_DEPTH;
use csgen_syntax::{NodeIndex, SyntaxKind, SyntaxTree, TypeDeclarationData, TypeKeyword};
use tree_sitter::{Node as TsNode, Tree};

use crate::node_kinds::{
    CLASS_DECLARATION, CLASS_KEYWORD, COMMENT, COMPILATION_UNIT, DECLARATION_LIST,
    ENUM_DECLARATION, FIELD_NAME, FIELD_TYPE_PARAMETERS, FILE_SCOPED_NAMESPACE_DECLARATION,
    INTERFACE_DECLARATION, MODIFIER, NAMESPACE_DECLARATION, RECORD_DECLARATION,
    RECORD_STRUCT_DECLARATION, STRUCT_DECLARATION, STRUCT_KEYWORD,
    TYPE_PARAMETER_CONSTRAINTS_CLAUSE, TYPE_PARAMETER_LIST, USING_DIRECTIVE,
};

/// Lower a parsed tree into a fresh `SyntaxTree`.
pub fn lower_tree(file_name: &str, source: &str, tree: &Tree) -> SyntaxTree {
    let root = tree.root_node();
    // Roughly one arena node per named concrete node.
    let capacity = root.descendant_count() / 2;

    let mut lowerer = Lowerer {
        source,
        arena: SyntaxTree::with_capacity(file_name, capacity),
        truncated: 0,
    };
    lowerer.lower_compilation_unit(root);
    lowerer.finish()
}

struct Lowerer<'s> {
    source: &'s str,
    arena: SyntaxTree,
    /// Subtrees skipped because they exceeded `MAX_LOWERING_DEPTH`.
    truncated: usize,
}

impl<'s> Lowerer<'s> {
    fn finish(self) -> SyntaxTree {
        if self.truncated > 0 {
            tracing::warn!(
                file = self.arena.file_name(),
                truncated = self.truncated,
                max_depth = MAX_LOWERING_DEPTH,
                "syntax tree too deep, some subtrees were not lowered"
            );
        }
        tracing::debug!(
            file = self.arena.file_name(),
            nodes = self.arena.len(),
            "lowered syntax tree"
        );
        self.arena
    }

    fn lower_compilation_unit(&mut self, node: TsNode<'_>) {
        if node.kind() != COMPILATION_UNIT {
            tracing::debug!(kind = node.kind(), "unexpected root kind, lowering as compilation unit");
        }

        let root = self.arena.add_compilation_unit();
        self.set_span(root, node);

        // A file-scoped namespace applies to every item after it.
        let mut scope = root;
        for child in named_children(node) {
            if child.kind() == FILE_SCOPED_NAMESPACE_DECLARATION {
                scope = self.lower_namespace(child, root, true, 1);
                self.arena
                    .set_span(scope, byte_offset(child.start_byte()), byte_offset(node.end_byte()));
            } else {
                self.lower_node(child, scope, 1);
            }
        }
    }

    fn lower_node(&mut self, node: TsNode<'_>, parent: NodeIndex, depth: u32) {
        if depth > MAX_LOWERING_DEPTH {
            self.truncated += 1;
            return;
        }

        match node.kind() {
            USING_DIRECTIVE => {
                let index = self.arena.add_using(parent, self.text(node));
                self.set_span(index, node);
            }
            NAMESPACE_DECLARATION => {
                self.lower_namespace(node, parent, false, depth);
            }
            // Only valid at the top level; nested occurrences come from
            // error recovery and own just their own members.
            FILE_SCOPED_NAMESPACE_DECLARATION => {
                self.lower_namespace(node, parent, true, depth);
            }
            CLASS_DECLARATION
            | STRUCT_DECLARATION
            | INTERFACE_DECLARATION
            | RECORD_DECLARATION
            | RECORD_STRUCT_DECLARATION => {
                let data = self.type_declaration_data(node);
                tracing::trace!(name = %data.name, keyword = data.keyword.as_str(), "type declaration");
                let index = self.arena.add_type_declaration(parent, data);
                self.set_span(index, node);
                self.lower_members(node, index, depth);
            }
            kind => {
                let syntax_kind = if kind == ENUM_DECLARATION {
                    SyntaxKind::EnumDeclaration
                } else {
                    SyntaxKind::Other
                };
                let name = self.field_text(node, FIELD_NAME);
                let index = self.arena.add_other(parent, syntax_kind, kind, name);
                self.set_span(index, node);
                self.lower_members(node, index, depth);
            }
        }
    }

    fn lower_namespace(
        &mut self,
        node: TsNode<'_>,
        parent: NodeIndex,
        file_scoped: bool,
        depth: u32,
    ) -> NodeIndex {
        let name = self.field_text(node, FIELD_NAME).unwrap_or_default();
        tracing::trace!(%name, file_scoped, "namespace declaration");
        let index = self.arena.add_namespace(parent, name, file_scoped);
        self.set_span(index, node);
        self.lower_members(node, index, depth);
        index
    }

    /// Lower the named children of `node` under `index`, flattening body
    /// declaration lists. The declaration name itself is not lowered.
    fn lower_members(&mut self, node: TsNode<'_>, index: NodeIndex, depth: u32) {
        let name_id = node.child_by_field_name(FIELD_NAME).map(|name| name.id());

        for child in named_children(node) {
            if Some(child.id()) == name_id {
                continue;
            }
            if child.kind() == DECLARATION_LIST {
                for member in named_children(child) {
                    self.lower_node(member, index, depth + 1);
                }
            } else {
                self.lower_node(child, index, depth + 1);
            }
        }
    }

    fn type_declaration_data(&self, node: TsNode<'_>) -> TypeDeclarationData {
        let keyword = match node.kind() {
            CLASS_DECLARATION => TypeKeyword::Class,
            STRUCT_DECLARATION => TypeKeyword::Struct,
            INTERFACE_DECLARATION => TypeKeyword::Interface,
            RECORD_STRUCT_DECLARATION => TypeKeyword::RecordStruct,
            _ => record_keyword(node),
        };

        let name = self.field_text(node, FIELD_NAME).unwrap_or_default();
        let mut data = TypeDeclarationData::new(keyword, name);

        for child in named_children(node) {
            match child.kind() {
                MODIFIER => data.modifiers.push(self.text(child).trim().to_string()),
                TYPE_PARAMETER_LIST if data.type_parameters.is_none() => {
                    data.type_parameters = Some(self.header_text(child));
                }
                TYPE_PARAMETER_CONSTRAINTS_CLAUSE => {
                    data.constraint_clauses
                        .push(self.header_text(child));
                }
                _ => {}
            }
        }

        if data.type_parameters.is_none()
            && let Some(type_parameters) = node.child_by_field_name(FIELD_TYPE_PARAMETERS)
        {
            data.type_parameters = Some(self.header_text(type_parameters));
        }

        data
    }

    fn text(&self, node: TsNode<'_>) -> &'s str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    /// Text of a header part on one line: comments are dropped before
    /// whitespace runs collapse, so a `//` never swallows the code after it.
    fn header_text(&self, node: TsNode<'_>) -> String {
        let range = node.byte_range();
        let mut text = String::with_capacity(range.len());
        let mut cursor = range.start;
        for comment in comments_within(node) {
            let comment_range = comment.byte_range();
            if comment_range.start < cursor {
                continue;
            }
            text.push_str(self.source.get(cursor..comment_range.start).unwrap_or_default());
            text.push(' ');
            cursor = comment_range.end;
        }
        text.push_str(self.source.get(cursor..range.end).unwrap_or_default());
        normalize_whitespace(&text)
    }

    fn field_text(&self, node: TsNode<'_>, field: &str) -> Option<String> {
        node.child_by_field_name(field)
            .map(|child| self.header_text(child))
            .filter(|text| !text.is_empty())
    }

    fn set_span(&mut self, index: NodeIndex, node: TsNode<'_>) {
        self.arena.set_span(
            index,
            byte_offset(node.start_byte()),
            byte_offset(node.end_byte()),
        );
    }
}

/// `record`, `record struct` or `record class`, from the anonymous keyword
/// tokens of a `record_declaration`.
fn record_keyword(node: TsNode<'_>) -> TypeKeyword {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.is_named() {
            continue;
        }
        match child.kind() {
            STRUCT_KEYWORD => return TypeKeyword::RecordStruct,
            CLASS_KEYWORD => return TypeKeyword::RecordClass,
            _ => {}
        }
    }
    TypeKeyword::Record
}

/// Comment nodes anywhere under `node`, in source order.
fn comments_within<'t>(node: TsNode<'t>) -> Vec<TsNode<'t>> {
    let mut comments = Vec::new();
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if current.kind() == COMMENT {
            comments.push(current);
            continue;
        }
        let mut cursor = current.walk();
        stack.extend(current.children(&mut cursor));
    }
    comments.sort_by_key(TsNode::start_byte);
    comments
}

fn named_children<'t>(node: TsNode<'t>) -> Vec<TsNode<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// Collapse runs of whitespace (including newlines) to single spaces.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn byte_offset(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}
