//! End-to-end resolution over the builtin lattice type set.

use latgen_arith::{resolve, resolve_strict, Op, OpTable};
use latgen_types::builtin::{self, Precision};
use latgen_types::{Registry, TypeId};
use pretty_assertions::assert_eq;

fn id(registry: &Registry, name: &str) -> TypeId {
    registry.lookup(name).expect("registered")
}

fn result_of(table: &OpTable, op: Op, lhs: TypeId, rhs: TypeId) -> Option<TypeId> {
    let hits: Vec<TypeId> = table
        .entries(op)
        .iter()
        .filter(|entry| entry.lhs == lhs && entry.rhs == rhs)
        .map(|entry| entry.result)
        .collect();
    assert!(hits.len() <= 1, "duplicate entries for one pair");
    hits.first().copied()
}

#[test]
fn colour_algebra_resolves_as_expected() {
    let registry = builtin::registry(Precision::Double).expect("builtin registry");
    let table = resolve(&registry);

    let matrix = id(&registry, "ColourMatrix");
    let vector = id(&registry, "ColourVector");

    assert_eq!(result_of(&table, Op::Mul, matrix, matrix), Some(matrix));
    assert_eq!(result_of(&table, Op::Mul, matrix, vector), Some(vector));
    assert_eq!(result_of(&table, Op::Mul, vector, matrix), None);
    assert_eq!(result_of(&table, Op::Add, matrix, matrix), Some(matrix));
    assert_eq!(result_of(&table, Op::Add, vector, vector), Some(vector));
    assert_eq!(result_of(&table, Op::Add, matrix, vector), None);
}

#[test]
fn lattice_fields_mirror_site_level_algebra() {
    let registry = builtin::registry(Precision::Double).expect("builtin registry");
    let table = resolve(&registry);

    let lattice_matrix = id(&registry, "LatticeColourMatrix");
    let lattice_vector = id(&registry, "LatticeColourVector");

    assert_eq!(
        result_of(&table, Op::Mul, lattice_matrix, lattice_matrix),
        Some(lattice_matrix)
    );
    assert_eq!(
        result_of(&table, Op::Mul, lattice_matrix, lattice_vector),
        Some(lattice_vector)
    );
    assert_eq!(
        result_of(&table, Op::Add, lattice_vector, lattice_vector),
        Some(lattice_vector)
    );
}

#[test]
fn lattice_gate_blocks_site_field_mixing() {
    let registry = builtin::registry(Precision::Double).expect("builtin registry");
    let table = resolve(&registry);

    let matrix = id(&registry, "ColourMatrix");
    let lattice_matrix = id(&registry, "LatticeColourMatrix");
    for op in Op::ALL {
        assert_eq!(result_of(&table, op, matrix, lattice_matrix), None);
        assert_eq!(result_of(&table, op, lattice_matrix, matrix), None);
    }
}

#[test]
fn array_wrapping_absorbs_into_result() {
    let registry = builtin::registry(Precision::Double).expect("builtin registry");
    let table = resolve(&registry);

    let matrix = id(&registry, "ColourMatrix");
    let matrix_array = id(&registry, "ColourMatrixArray");
    let gauge_field = id(&registry, "GaugeField");
    let lattice_matrix = id(&registry, "LatticeColourMatrix");

    // Array-wrapped result on either operand order.
    assert_eq!(
        result_of(&table, Op::Mul, matrix, matrix_array),
        Some(matrix_array)
    );
    assert_eq!(
        result_of(&table, Op::Mul, matrix_array, matrix),
        Some(matrix_array)
    );

    // A gauge field against a plain lattice matrix stays a gauge field,
    // but mismatched array wrapping rules out add/sub.
    assert_eq!(
        result_of(&table, Op::Mul, gauge_field, lattice_matrix),
        Some(gauge_field)
    );
    assert_eq!(result_of(&table, Op::Add, gauge_field, lattice_matrix), None);
    assert_eq!(result_of(&table, Op::Sub, lattice_matrix, gauge_field), None);
}

#[test]
fn fermion_fields_transform_under_gauge_links() {
    let registry = builtin::registry(Precision::Double).expect("builtin registry");
    let table = resolve(&registry);

    let gauge_field = id(&registry, "GaugeField");
    let fermion_field = id(&registry, "FermionField");

    assert_eq!(
        result_of(&table, Op::Mul, gauge_field, fermion_field),
        Some(fermion_field)
    );
    assert_eq!(
        result_of(&table, Op::Add, fermion_field, fermion_field),
        Some(fermion_field)
    );
}

#[test]
fn every_container_scales_by_every_scalar() {
    let registry = builtin::registry(Precision::Double).expect("builtin registry");
    let table = resolve(&registry);

    let scalars: Vec<TypeId> = ["int", "float", "Complex"]
        .iter()
        .map(|name| id(&registry, name))
        .collect();
    let containers: Vec<TypeId> = registry
        .iter()
        .filter(|(_, def)| def.is_container())
        .map(|(container_id, _)| container_id)
        .collect();
    assert_eq!(containers.len(), 8);

    for &container in &containers {
        for &scalar in &scalars {
            assert_eq!(
                result_of(&table, Op::Mul, scalar, container),
                Some(container)
            );
            assert_eq!(
                result_of(&table, Op::Mul, container, scalar),
                Some(container)
            );
            assert_eq!(
                result_of(&table, Op::Div, container, scalar),
                Some(container)
            );
        }
    }
}

#[test]
fn builtin_registry_is_complete_under_strict_mode() {
    let registry = builtin::registry(Precision::Double).expect("builtin registry");
    let report = resolve_strict(&registry);
    assert!(report.skipped.is_empty());
    assert_eq!(report.table, resolve(&registry));
}
