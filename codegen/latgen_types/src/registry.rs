//! Ordered type registry.
//!
//! The registry is the single source of truth for which types exist: the
//! arithmetic resolver looks result types up here and never synthesizes
//! one. Dual indexing keeps iteration deterministic (insertion order, which
//! fixes the order of generated output) while name lookup stays O(1).

use rustc_hash::FxHashMap;

use crate::error::RegistryError;
use crate::shape::MatrixShape;
use crate::typedef::TypeDef;

/// A 32-bit handle into the registry.
///
/// Operation tables reference types only through these handles; they hold
/// no ownership over the definitions themselves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// Create a handle from a raw index. The caller must ensure the index
    /// is valid in the registry it will be used against.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

// Compile-time size assertion: TypeId must stay a bare u32.
const _: () = assert!(std::mem::size_of::<TypeId>() == 4);

/// The ordered collection of every type the generator targets.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    /// Definitions in declaration order (fixes generated-output order).
    entries: Vec<TypeDef>,
    /// Logical name -> handle, for O(1) lookup.
    by_name: FxHashMap<String, TypeId>,
}

impl Registry {
    /// Build a registry from an ordered list of definitions.
    ///
    /// Rejects duplicate logical names, and container entries that would
    /// make result-type lookup ambiguous (two entries with the same matrix
    /// shape and the same array/lattice classification).
    pub fn build(entries: Vec<TypeDef>) -> Result<Registry, RegistryError> {
        let mut by_name = FxHashMap::default();
        let mut result_keys: FxHashMap<(MatrixShape, bool, bool), usize> = FxHashMap::default();

        for (index, def) in entries.iter().enumerate() {
            let id = TypeId(u32::try_from(index).unwrap_or(u32::MAX));
            if by_name.insert(def.name().to_string(), id).is_some() {
                return Err(RegistryError::DuplicateName(def.name().to_string()));
            }
            if !def.is_container() {
                continue;
            }
            if let Some(shape) = def.matrix_shape() {
                let key = (
                    shape.clone(),
                    def.is_array_wrapped(),
                    def.is_lattice_wrapped(),
                );
                if let Some(&previous) = result_keys.get(&key) {
                    return Err(RegistryError::AmbiguousResultType {
                        first: entries[previous].name().to_string(),
                        second: def.name().to_string(),
                        shape: shape.to_vec(),
                    });
                }
                result_keys.insert(key, index);
            }
        }

        tracing::debug!(types = entries.len(), "registry built");
        Ok(Registry { entries, by_name })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeDef> {
        self.entries.get(id.index())
    }

    /// Look a type up by its logical name.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    /// Iterate definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDef)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, def)| (TypeId(u32::try_from(index).unwrap_or(u32::MAX)), def))
    }

    /// The unique container whose matrix shape and array/lattice
    /// classification match. `None` means no such type is registered and
    /// the pairing that produced the shape is unsupported.
    ///
    /// Uniqueness is guaranteed by [`Registry::build`], so the first match
    /// is the only match.
    pub fn find_result(
        &self,
        shape: &MatrixShape,
        is_array: bool,
        is_lattice: bool,
    ) -> Option<TypeId> {
        self.iter().find_map(|(id, def)| {
            (def.is_container()
                && def.matrix_shape() == Some(shape)
                && def.is_array_wrapped() == is_array
                && def.is_lattice_wrapped() == is_lattice)
                .then_some(id)
        })
    }
}
