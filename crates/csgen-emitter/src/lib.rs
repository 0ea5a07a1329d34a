//! Qualified partial declaration emitter.
//!
//! Given a node deep within a C# syntax tree, this crate reconstructs the
//! chain of enclosing namespace and type declarations and renders it as
//! matching open/close text, so generated members can be re-emitted inside
//! partial declarations nested exactly like the source declaration:
//!
//! ```csharp
//! // input.cs
//! using System;
//! namespace Company.Product
//! {
//!     public static partial class Host
//!     {
//!         private partial class Nested { [Generate] void Run() { } }
//!     }
//! }
//! ```
//!
//! Rendering the chain of `Run` with a generated body yields:
//!
//! ```csharp
//! #pragma warning disable CS0105
//!
//! using System;
//!
//! namespace Company.Product
//! {
//! public static partial class Host
//! {
//! private partial class Nested
//! {
//! public static string Generated = "...";
//! }
//! }
//! }
//!
//! #pragma warning restore CS0105
//! ```

pub mod source_writer;
pub use source_writer::SourceWriter;

// Partial type header rendering
pub mod type_declaration;
pub use type_declaration::render_type_declaration;

// Declaration chain builder and renderer
pub mod qualified_declaration;
pub use qualified_declaration::{
    DeclarationRenderer, NamespaceDeclarationInfo, NamespaceForm, QualifiedDeclarationInfo,
    TypeDeclarationInfo,
};

#[cfg(test)]
#[path = "tests/type_declaration_tests.rs"]
mod type_declaration_tests;

#[cfg(test)]
#[path = "tests/source_writer_tests.rs"]
mod source_writer_tests;
