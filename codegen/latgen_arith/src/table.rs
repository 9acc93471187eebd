//! The resolved operation table.

use latgen_types::TypeId;

use crate::op::Op;

/// One legal operation: `lhs <op> rhs` evaluates to `result`.
///
/// All three are handles into the registry the table was resolved
/// against; the table owns no type definitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpEntry {
    pub result: TypeId,
    pub lhs: TypeId,
    pub rhs: TypeId,
}

/// Operator -> ordered list of legal operations.
///
/// Within one operator, entries appear in registry iteration order so
/// generated output is reproducible. Built once per generation run and
/// read-only afterward.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpTable {
    entries: [Vec<OpEntry>; 4],
}

impl OpTable {
    pub fn new() -> OpTable {
        OpTable::default()
    }

    pub(crate) fn push(&mut self, op: Op, entry: OpEntry) {
        self.entries[op.index()].push(entry);
    }

    /// The legal operations for one operator, in resolution order.
    pub fn entries(&self, op: Op) -> &[OpEntry] {
        &self.entries[op.index()]
    }

    /// Total number of entries across all operators.
    pub fn len(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Vec::is_empty)
    }

    /// Iterate every entry, operator by operator.
    pub fn iter(&self) -> impl Iterator<Item = (Op, &OpEntry)> {
        Op::ALL
            .into_iter()
            .flat_map(|op| self.entries(op).iter().map(move |entry| (op, entry)))
    }
}
