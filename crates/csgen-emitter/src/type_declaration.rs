//! Partial type header rendering.

use csgen_syntax::TypeDeclarationData;

const PARTIAL: &str = "partial";

/// Render the header of a partial re-declaration of `data`.
///
/// Modifiers keep their source order. `partial` is moved (or added, when
/// `ensure_partial` is set) directly in front of the keyword, where C#
/// requires it. Attributes, base lists and record parameter lists are never
/// part of the header.
///
/// `public static class Cache<TKey> where TKey : notnull` renders as
/// `public static partial class Cache<TKey> where TKey : notnull`.
pub fn render_type_declaration(data: &TypeDeclarationData, ensure_partial: bool) -> String {
    let mut parts: Vec<&str> = data
        .modifiers
        .iter()
        .map(String::as_str)
        .filter(|modifier| *modifier != PARTIAL)
        .collect();
    if ensure_partial || data.has_modifier(PARTIAL) {
        parts.push(PARTIAL);
    }
    parts.push(data.keyword.as_str());

    let mut header = parts.join(" ");
    header.push(' ');
    header.push_str(&data.name);
    if let Some(type_parameters) = &data.type_parameters {
        header.push_str(type_parameters);
    }
    for clause in &data.constraint_clauses {
        header.push(' ');
        header.push_str(clause);
    }
    header
}
