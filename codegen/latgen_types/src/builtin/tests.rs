use super::*;
use crate::Kind;

#[test]
fn builtin_registry_is_valid() {
    let registry = registry(Precision::Double).expect("builtin set is unambiguous");
    assert_eq!(registry.len(), 11);

    // Scalars first, then containers, in declaration order.
    let first = registry.iter().next().map(|(_, def)| def.name().to_string());
    assert_eq!(first.as_deref(), Some("int"));
}

#[test]
fn precision_selects_real_native_type() {
    let single = registry(Precision::Single).expect("valid");
    let id = single.lookup("float").expect("registered");
    assert_eq!(single.get(id).map(TypeDef::native_name), Some("float"));

    let double = registry(Precision::Double).expect("valid");
    let id = double.lookup("float").expect("registered");
    assert_eq!(double.get(id).map(TypeDef::native_name), Some("double"));
}

#[test]
fn field_types_are_doubly_wrapped() {
    let registry = registry(Precision::Double).expect("valid");
    let id = registry.lookup("GaugeField").expect("registered");
    let def = registry.get(id).expect("valid handle");
    assert_eq!(def.structure(), vec![Kind::Lattice, Kind::Array, Kind::Matrix]);
    assert!(def.is_array_wrapped());
    assert!(def.is_lattice_wrapped());
    assert_eq!(def.matrix_shape().map(|s| s.to_vec()), Some(vec![3, 3]));
}

#[test]
fn scalar_set_covers_int_real_complex() {
    let set = scalars(Precision::Single);
    let names: Vec<&str> = set.iter().map(TypeDef::name).collect();
    assert_eq!(names, vec!["int", "float", "Complex"]);
    assert!(set.iter().all(TypeDef::is_scalar));
}
