//! Scalar operation extension.

use latgen_types::{Registry, TypeId};

use crate::op::Op;
use crate::table::{OpEntry, OpTable};

/// Add the scalar operations for one container type.
///
/// Every scalar in the registry scales every container, regardless of
/// shape or wrapping: `S * T -> T`, `T * S -> T`, and `T / S -> T`
/// (division is only sensible with the scalar as divisor).
pub fn extend_scalar_ops(registry: &Registry, container: TypeId, table: &mut OpTable) {
    for (scalar_id, def) in registry.iter() {
        if !def.is_scalar() {
            continue;
        }
        table.push(
            Op::Mul,
            OpEntry {
                result: container,
                lhs: scalar_id,
                rhs: container,
            },
        );
        table.push(
            Op::Mul,
            OpEntry {
                result: container,
                lhs: container,
                rhs: scalar_id,
            },
        );
        table.push(
            Op::Div,
            OpEntry {
                result: container,
                lhs: container,
                rhs: scalar_id,
            },
        );
    }
}
