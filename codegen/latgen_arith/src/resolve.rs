//! The operation resolver.
//!
//! For each left-hand type, every registry candidate is tested as a
//! right-hand side. The checks are deliberately layered so the registry
//! stays the single authority over which types exist:
//!
//! 1. lattice gate: field and non-field types never combine
//! 2. multiply result shape from the operands' matrix shapes
//! 3. result type looked up in the registry (never synthesized); no match
//!    drops the pair for every operator
//! 4. inner-dimension check for `*`, exact shape + array match for `+`/`-`
//!
//! New container shapes are supported purely by registering them.

use bitflags::bitflags;
use latgen_types::{MatrixShape, Registry, TypeDef, TypeId};
use smallvec::smallvec;

use crate::op::Op;
use crate::scalars::extend_scalar_ops;
use crate::table::{OpEntry, OpTable};

bitflags! {
    /// The two independent wrapping axes of a container chain.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Wrap: u8 {
        /// Some level of the chain is a runtime-length array.
        const ARRAY = 1 << 0;
        /// The outermost level is a lattice field.
        const LATTICE = 1 << 1;
    }
}

/// Classify a type along the array and lattice axes.
pub fn classify(def: &TypeDef) -> Wrap {
    let mut wrap = Wrap::empty();
    if def.is_array_wrapped() {
        wrap |= Wrap::ARRAY;
    }
    if def.is_lattice_wrapped() {
        wrap |= Wrap::LATTICE;
    }
    wrap
}

/// A pair dropped because the registry has no type for its result shape.
///
/// Indistinguishable from "legitimately unsupported" in the table itself;
/// strict mode surfaces these so an incomplete registry is observable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedPair {
    pub lhs: TypeId,
    pub rhs: TypeId,
    /// The multiply result shape no registered type matched.
    pub shape: MatrixShape,
    /// The classification the missing result type would need.
    pub wrap: Wrap,
}

/// Output of [`resolve_strict`]: the table plus the skip report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolveReport {
    pub table: OpTable,
    pub skipped: Vec<SkippedPair>,
}

/// Resolve the full operation table for a registry.
///
/// Deterministic and idempotent: the registry is read-only and entries are
/// emitted in registry iteration order.
#[tracing::instrument(level = "trace", skip_all, fields(types = registry.len()))]
pub fn resolve(registry: &Registry) -> OpTable {
    let mut table = OpTable::new();
    for (lhs_id, lhs) in registry.iter() {
        if !lhs.is_container() {
            continue;
        }
        matrix_ops(registry, lhs_id, lhs, &mut table, None);
        extend_scalar_ops(registry, lhs_id, &mut table);
    }
    table
}

/// Resolve, additionally reporting every pair skipped for want of a
/// registered result type. The table is identical to [`resolve`]'s.
#[tracing::instrument(level = "trace", skip_all, fields(types = registry.len()))]
pub fn resolve_strict(registry: &Registry) -> ResolveReport {
    let mut table = OpTable::new();
    let mut skipped = Vec::new();
    for (lhs_id, lhs) in registry.iter() {
        if !lhs.is_container() {
            continue;
        }
        matrix_ops(registry, lhs_id, lhs, &mut table, Some(&mut skipped));
        extend_scalar_ops(registry, lhs_id, &mut table);
    }
    ResolveReport { table, skipped }
}

/// Emit matrix arithmetic entries for one left-hand type against every
/// container candidate in the registry.
fn matrix_ops(
    registry: &Registry,
    lhs_id: TypeId,
    lhs: &TypeDef,
    table: &mut OpTable,
    mut skipped: Option<&mut Vec<SkippedPair>>,
) {
    let lhs_wrap = classify(lhs);
    // Chains that never reach a matrix have no matrix arithmetic; scalar
    // pairings are handled by the scalar extender.
    let Some(lhs_shape) = lhs.matrix_shape() else {
        return;
    };

    for (rhs_id, rhs) in registry.iter() {
        if !rhs.is_container() {
            continue;
        }
        let rhs_wrap = classify(rhs);
        if lhs_wrap.contains(Wrap::LATTICE) != rhs_wrap.contains(Wrap::LATTICE) {
            continue;
        }
        let Some(rhs_shape) = rhs.matrix_shape() else {
            continue;
        };

        let result_wrap = lhs_wrap | rhs_wrap;
        // Standard matrix product shape; a rank-1 rhs degenerates the
        // result to the surviving dimension.
        let result_shape: MatrixShape = if rhs_shape.len() >= 2 {
            smallvec![lhs_shape[0], rhs_shape[1]]
        } else {
            smallvec![lhs_shape[0]]
        };

        let result = registry.find_result(
            &result_shape,
            result_wrap.contains(Wrap::ARRAY),
            result_wrap.contains(Wrap::LATTICE),
        );
        let Some(result) = result else {
            tracing::debug!(
                lhs = lhs.name(),
                rhs = rhs.name(),
                shape = ?result_shape,
                "no registered result type, pair skipped"
            );
            if let Some(report) = skipped.as_mut() {
                report.push(SkippedPair {
                    lhs: lhs_id,
                    rhs: rhs_id,
                    shape: result_shape,
                    wrap: result_wrap,
                });
            }
            continue;
        };

        let can_multiply = lhs_shape.len() >= 2 && lhs_shape[1] == rhs_shape[0];
        let can_addsub = lhs_shape == rhs_shape
            && lhs_wrap.contains(Wrap::ARRAY) == rhs_wrap.contains(Wrap::ARRAY);

        let entry = OpEntry {
            result,
            lhs: lhs_id,
            rhs: rhs_id,
        };
        if can_multiply {
            table.push(Op::Mul, entry);
        }
        if can_addsub {
            table.push(Op::Add, entry);
            table.push(Op::Sub, entry);
        }
    }
}
