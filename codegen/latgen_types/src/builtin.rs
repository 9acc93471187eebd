//! The concrete type set the generator ships with.
//!
//! Equivalent to a configuration file: every scalar, matrix, array, and
//! lattice type the surrounding lattice field-theory library wants code
//! for, in declaration order. New shapes are added purely by registering
//! them here; the resolver needs no changes.

use crate::registry::Registry;
use crate::typedef::TypeDef;
use crate::RegistryError;

/// Machine type used for real numbers in emitted code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precision {
    Single,
    Double,
}

impl Precision {
    pub fn native_name(self) -> &'static str {
        match self {
            Precision::Single => "float",
            Precision::Double => "double",
        }
    }
}

/// Scalar types every container can be scaled by: plain integer, the
/// configured real precision, and complex.
pub fn scalars(precision: Precision) -> Vec<TypeDef> {
    vec![
        TypeDef::scalar("int", "int", "", true, false),
        TypeDef::scalar("float", precision.native_name(), "", true, false),
        TypeDef::scalar("Complex", "Complex", "complex", false, false),
    ]
}

/// The full builtin registry: colour matrices and vectors (colour count 3),
/// their array and lattice-field wrappings, and the doubly wrapped gauge
/// and fermion field types.
pub fn registry(precision: Precision) -> Result<Registry, RegistryError> {
    let complex = TypeDef::scalar("Complex", "Complex", "complex", false, false);

    let colour_matrix = TypeDef::matrix("ColourMatrix", "ColourMatrix", "core", &[3, 3], complex.clone());
    let colour_vector = TypeDef::matrix("ColourVector", "ColourVector", "core", &[3], complex);

    let colour_matrix_array = TypeDef::array(
        "ColourMatrixArray",
        "ColourMatrixArray",
        "core",
        colour_matrix.clone(),
    );
    let fermion = TypeDef::array("Fermion", "Fermion", "core", colour_vector.clone());

    let lattice_colour_matrix = TypeDef::lattice(
        "LatticeColourMatrix",
        "LatticeColourMatrix",
        "core",
        colour_matrix.clone(),
    );
    let lattice_colour_vector = TypeDef::lattice(
        "LatticeColourVector",
        "LatticeColourVector",
        "core",
        colour_vector.clone(),
    );

    let gauge_field = TypeDef::lattice(
        "GaugeField",
        "GaugeField",
        "core",
        TypeDef::array("ColourMatrixArray", "ColourMatrixArray", "core", colour_matrix.clone()),
    );
    let fermion_field = TypeDef::lattice(
        "FermionField",
        "FermionField",
        "core",
        TypeDef::array("Fermion", "Fermion", "core", colour_vector.clone()),
    );

    let mut entries = scalars(precision);
    entries.extend([
        colour_matrix,
        colour_vector,
        colour_matrix_array,
        fermion,
        lattice_colour_matrix,
        lattice_colour_vector,
        gauge_field,
        fermion_field,
    ]);
    Registry::build(entries)
}

#[cfg(test)]
mod tests;
