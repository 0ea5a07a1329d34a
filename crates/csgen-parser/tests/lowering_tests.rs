//! Lowering tests for the tree-sitter C# front end.

use csgen_parser::{CSharpParser, parse_source};
use csgen_syntax::{NodeAccess, NodeIndex, SyntaxKind, SyntaxTree, TypeKeyword};

fn parse(source: &str) -> SyntaxTree {
    parse_source("test.cs", source).expect("C# grammar should load")
}

fn find(tree: &SyntaxTree, path: &str) -> NodeIndex {
    tree.find_type_declaration(path)
        .unwrap_or_else(|| panic!("type {path} not found"))
}

fn using_children(tree: &SyntaxTree, index: NodeIndex) -> Vec<String> {
    tree.get_children(index)
        .iter()
        .filter_map(|&child| tree.using_text(child))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_block_namespace_owns_its_usings() {
    let source = r#"
using System;

namespace Company.Product
{
    using System.Text;

    public partial class Widget
    {
    }
}
"#;
    let tree = parse(source);
    let root = tree.root();
    assert_eq!(tree.kind(root), Some(SyntaxKind::CompilationUnit));
    assert_eq!(using_children(&tree, root), vec!["using System;"]);

    let widget = find(&tree, "Widget");
    let namespace = tree.parent(widget);
    assert_eq!(tree.kind(namespace), Some(SyntaxKind::NamespaceDeclaration));
    assert_eq!(tree.namespace_name(namespace), Some("Company.Product"));
    assert_eq!(using_children(&tree, namespace), vec!["using System.Text;"]);
    assert_eq!(tree.parent(namespace), root);
}

#[test]
fn test_file_scoped_namespace_owns_following_items() {
    let source = r#"
using System;

namespace Company.Product;

using System.Linq;

public partial class Widget
{
}

internal partial struct Gadget
{
}
"#;
    let tree = parse(source);
    let root = tree.root();
    assert_eq!(using_children(&tree, root), vec!["using System;"]);

    let widget = find(&tree, "Widget");
    let gadget = find(&tree, "Gadget");
    let namespace = tree.parent(widget);
    assert_eq!(
        tree.kind(namespace),
        Some(SyntaxKind::FileScopedNamespaceDeclaration)
    );
    assert_eq!(tree.namespace_name(namespace), Some("Company.Product"));
    assert_eq!(tree.parent(gadget), namespace);
    assert_eq!(using_children(&tree, namespace), vec!["using System.Linq;"]);
    assert_eq!(tree.parent(namespace), root);
}

#[test]
fn test_nested_namespaces_and_types() {
    let source = r#"
namespace Outer
{
    namespace Inner
    {
        public static partial class Host
        {
            private partial class Nested
            {
                void Run() { }
            }
        }
    }
}
"#;
    let tree = parse(source);
    let nested = find(&tree, "Host.Nested");
    assert_eq!(find(&tree, "Outer.Inner.Host.Nested"), nested);

    let chain: Vec<SyntaxKind> = tree
        .ancestors_and_self(nested)
        .filter_map(|index| tree.kind(index))
        .collect();
    assert_eq!(
        chain,
        vec![
            SyntaxKind::ClassDeclaration,
            SyntaxKind::ClassDeclaration,
            SyntaxKind::NamespaceDeclaration,
            SyntaxKind::NamespaceDeclaration,
            SyntaxKind::CompilationUnit,
        ]
    );

    let host = tree.type_declaration(find(&tree, "Host")).unwrap();
    assert_eq!(host.modifiers, vec!["public", "static", "partial"]);
    assert_eq!(host.keyword, TypeKeyword::Class);
}

#[test]
fn test_members_are_children_of_their_type() {
    let source = r#"
partial class Host
{
    public void Run() { }
}
"#;
    let tree = parse(source);
    let host = find(&tree, "Host");
    let method = tree
        .descendants(host)
        .find(|&index| tree.node_name(index) == Some("Run"))
        .expect("method should be lowered");

    assert_eq!(tree.kind(method), Some(SyntaxKind::Other));
    assert_eq!(tree.parent(method), host);
    assert_eq!(
        tree.get_other(method).map(|data| data.raw_kind.as_str()),
        Some("method_declaration")
    );
}

#[test]
fn test_generic_parameters_and_constraints() {
    let source = r#"
public partial class Repository<TKey, TValue>
    where TKey : notnull
    where TValue :
        class, new()
{
}
"#;
    let tree = parse(source);
    let data = tree.type_declaration(find(&tree, "Repository")).unwrap();
    assert_eq!(data.type_parameters.as_deref(), Some("<TKey, TValue>"));
    assert_eq!(
        data.constraint_clauses,
        vec!["where TKey : notnull", "where TValue : class, new()"]
    );
}

#[test]
fn test_using_text_is_verbatim() {
    let alias = "using Alias = // keep\n        System.Text;";
    let multi_line = "using static\n    System.Math;";
    let source = format!("namespace N\n{{\n    {alias}\n    {multi_line}\n}}\n");
    let tree = parse(&source);

    let namespace = tree.get_children(tree.root())[0];
    assert_eq!(using_children(&tree, namespace), vec![alias, multi_line]);
}

#[test]
fn test_comments_dropped_from_header_parts() {
    let source = r#"
namespace N
{
    partial class Host<TKey, // key type
        /* value type */ TValue>
        where TKey : // must not be null
            notnull
    {
    }
}
"#;
    let tree = parse(source);
    let data = tree.type_declaration(find(&tree, "Host")).unwrap();
    assert_eq!(data.type_parameters.as_deref(), Some("<TKey, TValue>"));
    assert_eq!(data.constraint_clauses, vec!["where TKey : notnull"]);
}

#[test]
fn test_type_keywords() {
    let source = r#"
partial struct S { }
partial interface I { }
partial record R(int X);
partial record struct RS(int X);
partial record class RC(int X);
"#;
    let tree = parse(source);
    let keyword = |path: &str| tree.type_declaration(find(&tree, path)).unwrap().keyword;
    assert_eq!(keyword("S"), TypeKeyword::Struct);
    assert_eq!(keyword("I"), TypeKeyword::Interface);
    assert_eq!(keyword("R"), TypeKeyword::Record);
    assert_eq!(keyword("RS"), TypeKeyword::RecordStruct);
    assert_eq!(keyword("RC"), TypeKeyword::RecordClass);
}

#[test]
fn test_enums_are_not_type_declarations() {
    let source = "namespace N { enum Color { Red, Green } }";
    let tree = parse(source);
    assert!(tree.find_type_declaration("Color").is_none());

    let color = tree
        .descendants(tree.root())
        .find(|&index| tree.node_name(index) == Some("Color"))
        .expect("enum should be lowered");
    assert_eq!(tree.kind(color), Some(SyntaxKind::EnumDeclaration));
}

#[test]
fn test_node_at_offset_finds_member() {
    let source = "namespace N { partial class C { void Run() { } } }";
    let tree = parse(source);
    let offset = source.find("Run").unwrap() as u32;
    let node = tree.node_at_offset(offset).unwrap();

    let enclosing_type = tree
        .ancestors_and_self(node)
        .find(|&index| tree.type_declaration(index).is_some());
    assert_eq!(enclosing_type, Some(find(&tree, "C")));
}

#[test]
fn test_parser_is_reusable() {
    let mut parser = CSharpParser::new().unwrap();
    let first = parser.parse("a.cs", "partial class A { }").unwrap();
    let second = parser.parse("b.cs", "partial class B { }").unwrap();
    assert_eq!(first.file_name(), "a.cs");
    assert!(first.find_type_declaration("A").is_some());
    assert!(second.find_type_declaration("A").is_none());
    assert!(second.find_type_declaration("B").is_some());
}

#[test]
fn test_syntax_errors_still_lower() {
    let tree = parse("namespace N { partial class C { void Run( } }");
    assert_eq!(tree.kind(tree.root()), Some(SyntaxKind::CompilationUnit));
    assert!(tree.len() > 1);
}
