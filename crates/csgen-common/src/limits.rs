//! Centralized limits and thresholds.
//!
//! Recursion limits live here so the front end and any future tree walkers
//! agree on the same values.

/// Maximum depth for lowering a concrete syntax tree into the node arena.
///
/// Lowering is recursive over the concrete tree. Deeply nested expressions
/// (long chains of binary operators, nested lambdas) would otherwise grow the
/// call stack without bound. Subtrees below this depth are not lowered; they
/// can never contain namespace or type declarations that matter for partial
/// re-declaration in practice.
///
/// # C# example
///
/// ```csharp
/// var x = ((((((((((((((((((((1 + 2) + 3) + 4) /* ... hundreds of levels ... */))))));
/// ```
pub const MAX_LOWERING_DEPTH: u32 = 512;

/// Initial capacity for the node pool of a freshly created syntax arena.
pub const DEFAULT_NODE_CAPACITY: usize = 256;

/// Maximum pre-allocation for the node pool, to avoid capacity overflow on
/// huge inputs.
pub const MAX_NODE_PREALLOC: usize = 5_000_000;
