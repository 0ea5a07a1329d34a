//! Syntax tree model for csgen.
//!
//! The tree is stored in a flat arena (`SyntaxTree`) indexed by `NodeIndex`.
//! Each node carries a `SyntaxKind` and, for the kinds that matter to partial
//! re-declaration, an entry in a per-kind data pool (namespace names, using
//! text, type declaration headers).
//!
//! Consumers read the tree through the `NodeAccess` trait so that the
//! declaration builder does not depend on how the tree was produced.

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod node;
pub use node::{
    NamespaceData, Node, NodeIndex, OtherData, SyntaxTree, TypeDeclarationData, TypeKeyword,
    UsingData,
};

// Node creation (add_* methods)
pub mod node_arena;

// Node access (get_* methods, NodeAccess trait, ancestor iteration)
pub mod node_access;
pub use node_access::{AncestorsAndSelf, NodeAccess};

// Tree queries used to locate target nodes
pub mod query;
pub use query::Descendants;

#[cfg(test)]
#[path = "tests/node_arena_tests.rs"]
mod node_arena_tests;

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod query_tests;
