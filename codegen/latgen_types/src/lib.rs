//! Type descriptors for the lattice code generator.
//!
//! The generator emits operator overloads and buffer accessors for a family
//! of nested numeric container types (matrices, arrays, lattice fields,
//! arbitrarily nested). This crate holds the metadata side of that job:
//!
//! - [`TypeDef`]: a tagged descriptor for one concrete type, owning its
//!   element chain down to a scalar leaf
//! - shape algebra: extents, strides, size expressions, and static/dynamic
//!   classification computed from the composition chain
//! - [`Registry`]: the ordered collection of every type the generator
//!   targets, with [`TypeId`] handles for cheap cross-referencing
//!
//! Everything here is immutable after construction. The registry is built
//! once per generation run from static declarations (see [`builtin`]) and
//! the arithmetic resolver in `latgen_arith` only ever reads from it.

pub mod builtin;
mod error;
mod registry;
mod shape;
mod typedef;

pub use error::RegistryError;
pub use registry::{Registry, TypeId};
pub use shape::{Extent, MatrixShape, SizeExpr};
pub use typedef::{ArrayDef, Kind, LatticeDef, MatrixDef, ScalarDef, TypeDef};
