//! Arithmetic operation resolution for the lattice code generator.
//!
//! Given the type registry from `latgen_types`, this crate determines
//! every legal `(operator, lhs, rhs)` combination and the registered
//! result type for each, producing the [`OpTable`] the emission stage
//! renders operator overloads from.
//!
//! Resolution is a pure, bounded pass over the registry: one scan of
//! candidates per left-hand type, no I/O, no mutation of the registry.
//! Unsupported pairings are simply absent from the table; see
//! [`resolve_strict`] for a mode that also reports pairs dropped because
//! the registry lacks a result type for their shape.

mod op;
mod resolve;
mod scalars;
mod table;

pub use op::Op;
pub use resolve::{classify, resolve, resolve_strict, ResolveReport, SkippedPair, Wrap};
pub use scalars::extend_scalar_ops;
pub use table::{OpEntry, OpTable};
