use super::*;
use crate::qualified_declaration::{
    NamespaceDeclarationInfo, QualifiedDeclarationInfo, TypeDeclarationInfo,
};
use csgen_common::{NewLineKind, RenderOptions};

const BOILERPLATE: &str = "#pragma warning disable CS0105\n\n\n#pragma warning restore CS0105\n";

fn chain(namespaces: Vec<NamespaceDeclarationInfo>, types: &[&str]) -> QualifiedDeclarationInfo {
    QualifiedDeclarationInfo::new(
        namespaces,
        types.iter().map(|t| TypeDeclarationInfo::new(*t)).collect(),
    )
}

#[test]
fn test_empty_chain_renders_boilerplate_only() {
    let info = chain(vec![NamespaceDeclarationInfo::compilation_unit(Vec::new())], &[]);
    let text = info.to_string();
    assert_eq!(text, BOILERPLATE);
    assert_eq!(count(&text, '{'), count(&text, '}'));
}

#[test]
fn test_global_type_without_usings() {
    let mut tree = SyntaxTree::new("global.cs");
    let root = tree.add_compilation_unit();
    let method = tree.add_other(root, SyntaxKind::Other, "global_statement", None);

    let info = QualifiedDeclarationInfo::from_syntax(&tree, method);
    assert_eq!(info.to_string(), BOILERPLATE);
}

#[test]
fn test_full_text_with_body() {
    let fixture = nested_fixture();
    let info = QualifiedDeclarationInfo::from_syntax(&fixture.tree, fixture.method);
    let options = RenderOptions::default();

    let expected = "\
#pragma warning disable CS0105

using System;

namespace A.B
{
using System.Text;

public partial class Outer
{
private partial class Inner
{
int Generated;
}
}
}

#pragma warning restore CS0105
";
    assert_eq!(info.render(&options).with_body("int Generated;"), expected);
}

#[test]
fn test_with_usings_and_body_prefixes_usings() {
    let fixture = nested_fixture();
    let info = QualifiedDeclarationInfo::from_syntax(&fixture.tree, fixture.method);
    let options = RenderOptions::default();
    let renderer = info.render(&options);

    let text = renderer.with_usings_and_body("using Generated.Support;", "int Generated;");
    let expected = format!(
        "using Generated.Support;\n{}",
        renderer.with_body("int Generated;")
    );
    assert_eq!(text, expected);
}

#[test]
fn test_block_namespace_open_and_close() {
    let info = chain(
        vec![
            NamespaceDeclarationInfo::compilation_unit(Vec::new()),
            NamespaceDeclarationInfo::block("A.B", Vec::new()),
        ],
        &[],
    );
    let options = RenderOptions::default();
    let renderer = info.render(&options);

    let open = renderer.namespace_open();
    assert!(open.contains("namespace A.B\n{\n"), "unexpected open: {open}");
    let close = renderer.namespace_close();
    assert_eq!(count(&close, '}'), 1);
    assert_eq!(close, "}\n\n#pragma warning restore CS0105\n");
}

#[test]
fn test_file_scoped_namespace_renders_without_braces() {
    let info = chain(
        vec![
            NamespaceDeclarationInfo::compilation_unit(vec!["using System;".to_string()]),
            NamespaceDeclarationInfo::file_scoped("Company.App", vec!["using System.Linq;".to_string()]),
        ],
        &["partial class Host"],
    );
    let options = RenderOptions::default().with_suppressed_warnings(Vec::<String>::new());
    let renderer = info.render(&options);

    assert_eq!(
        renderer.namespace_open(),
        "using System;\n\nnamespace Company.App;\nusing System.Linq;\n\n"
    );
    assert_eq!(renderer.namespace_close(), "");
    assert_eq!(
        renderer.with_body("int X;"),
        "using System;\n\nnamespace Company.App;\nusing System.Linq;\n\npartial class Host\n{\nint X;\n}\n"
    );
}

#[test]
fn test_type_close_has_one_brace_less_than_levels() {
    let types = ["partial class A", "partial class B", "partial class C"];
    let info = chain(vec![NamespaceDeclarationInfo::compilation_unit(Vec::new())], &types);
    let options = RenderOptions::default();
    let renderer = info.render(&options);

    let open = renderer.type_open_no_namespace();
    let close = renderer.type_close_no_namespace();
    assert_eq!(open, "partial class A\n{\npartial class B\n{\npartial class C\n");
    assert_eq!(count(&close, '}'), types.len() - 1);

    let fragments = format!("{open}{close}");
    assert_eq!(count(&fragments, '}'), types.len() - 1);
    assert_eq!(count(&fragments, '{'), count(&fragments, '}'));
}

#[test]
fn test_single_type_has_no_type_braces() {
    let info = chain(vec![NamespaceDeclarationInfo::compilation_unit(Vec::new())], &["partial struct S"]);
    let options = RenderOptions::default();
    let renderer = info.render(&options);
    assert_eq!(renderer.type_open_no_namespace(), "partial struct S\n");
    assert_eq!(renderer.type_close_no_namespace(), "");
}

#[test]
fn test_combined_fragments() {
    let fixture = nested_fixture();
    let info = QualifiedDeclarationInfo::from_syntax(&fixture.tree, fixture.method);
    let options = RenderOptions::default();
    let renderer = info.render(&options);

    assert_eq!(
        renderer.type_open(),
        format!("{}{}", renderer.namespace_open(), renderer.type_open_no_namespace())
    );
    assert_eq!(
        renderer.type_close(),
        format!("{}{}", renderer.type_close_no_namespace(), renderer.namespace_close())
    );
    assert_eq!(
        renderer.to_text(),
        format!("{}{}", renderer.type_open(), renderer.type_close())
    );
    assert_eq!(info.to_string(), renderer.to_text());
}

#[test]
fn test_usings_rendered_only_at_their_level() {
    let info = chain(
        vec![
            NamespaceDeclarationInfo::compilation_unit(vec!["using Root.Only;".to_string()]),
            NamespaceDeclarationInfo::block("Outer", vec!["using Outer.Only;".to_string()]),
            NamespaceDeclarationInfo::block("Inner", vec!["using Root.Only;".to_string()]),
        ],
        &["partial class Host"],
    );
    let options = RenderOptions::default();
    let open = info.render(&options).namespace_open();

    assert_eq!(open.matches("using Outer.Only;").count(), 1);
    // Repeated at its own level only, once per level that declared it.
    assert_eq!(open.matches("using Root.Only;").count(), 2);

    let outer_at = open.find("namespace Outer").unwrap();
    let inner_at = open.find("namespace Inner").unwrap();
    let outer_using_at = open.find("using Outer.Only;").unwrap();
    assert!(outer_at < outer_using_at && outer_using_at < inner_at);
}

#[test]
fn test_crlf_new_lines() {
    let fixture = nested_fixture();
    let info = QualifiedDeclarationInfo::from_syntax(&fixture.tree, fixture.method);
    let options = RenderOptions::default().with_new_line(NewLineKind::CarriageReturnLineFeed);
    let text = info.render(&options).with_body("int X;");

    assert!(text.contains("namespace A.B\r\n{\r\n"));
    assert_eq!(text.matches('\n').count(), text.matches("\r\n").count());
}

#[test]
fn test_custom_suppressed_warnings() {
    let info = chain(vec![NamespaceDeclarationInfo::compilation_unit(Vec::new())], &[]);
    let options = RenderOptions::default().with_suppressed_warnings(["CS0105", "CS8019"]);
    let renderer = info.render(&options);

    assert_eq!(
        renderer.namespace_open(),
        "#pragma warning disable CS0105, CS8019\n\n"
    );
    assert_eq!(
        renderer.namespace_close(),
        "\n#pragma warning restore CS0105, CS8019\n"
    );
}

#[test]
fn test_body_form_balances_braces() {
    let fixture = nested_fixture();
    let info = QualifiedDeclarationInfo::from_syntax(&fixture.tree, fixture.method);
    let options = RenderOptions::default();
    let renderer = info.render(&options);

    let text = renderer.with_body("int X;");
    assert_eq!(count(&text, '{'), 3);
    assert_eq!(count(&text, '{'), count(&text, '}'));

    let text = renderer.to_text();
    assert_eq!(count(&text, '{'), count(&text, '}'));
}
