//! Registry construction errors.
//!
//! Resolution itself never fails (unsupported pairings are simply absent
//! from the operation table); all configuration mistakes are caught when
//! the registry is built.

use thiserror::Error;

/// An invalid registry configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two entries share a logical name.
    #[error("duplicate type name `{0}` in registry")]
    DuplicateName(String),

    /// Two container entries would match the same result lookup
    /// (same matrix shape, same array/lattice classification), making
    /// result-type resolution ambiguous.
    #[error(
        "ambiguous registry: `{first}` and `{second}` share matrix shape \
         {shape:?} and the same array/lattice classification"
    )]
    AmbiguousResultType {
        first: String,
        second: String,
        shape: Vec<usize>,
    },
}
