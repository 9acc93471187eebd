//! Shape, size, and stride algebra over composition chains.
//!
//! A container chain flattens to a single ordered tuple of dimension
//! extents, outermost level first. Static levels (matrices) contribute
//! concrete integers; arrays and lattices contribute runtime-evaluated
//! extents. Sizes and strides are expressions over the same split:
//! [`SizeExpr::Static`] when every contributing level is static,
//! [`SizeExpr::Dynamic`] otherwise. The classification is computed once at
//! construction, never probed by catching a failed evaluation.

use std::fmt;

use smallvec::SmallVec;

use crate::typedef::TypeDef;

/// Concrete shape of a matrix level. Rank 1 (vector) or rank 2 in practice.
pub type MatrixShape = SmallVec<[usize; 2]>;

/// One dimension extent contributed by a container level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extent {
    /// Compile-time constant extent (one matrix dimension).
    Fixed(usize),
    /// Runtime array length, evaluated against the instance.
    ArraySize,
    /// Flattened site axis of a lattice level. Expands to the layout's
    /// per-dimension extents at runtime.
    LatticeSites,
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Fixed(n) => write!(f, "{n}"),
            Extent::ArraySize => write!(f, "size()"),
            Extent::LatticeSites => write!(f, "lattice_shape()"),
        }
    }
}

/// A size, stride, or dimension-count expression.
///
/// `Static` values are known at generation time; `Dynamic` values render
/// to an expression the emitted code evaluates against a live instance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeExpr {
    Static(usize),
    Dynamic(String),
}

impl SizeExpr {
    pub fn is_static(&self) -> bool {
        matches!(self, SizeExpr::Static(_))
    }

    /// Product of two expressions. Stays `Static` when both factors are.
    pub fn times(&self, rhs: &SizeExpr) -> SizeExpr {
        match (self, rhs) {
            (SizeExpr::Static(a), SizeExpr::Static(b)) => SizeExpr::Static(a * b),
            (SizeExpr::Static(1), other) | (other, SizeExpr::Static(1)) => other.clone(),
            (a, b) => SizeExpr::Dynamic(format!("{a} * {b}")),
        }
    }

    /// Sum of two expressions. Stays `Static` when both terms are.
    pub fn plus(&self, rhs: &SizeExpr) -> SizeExpr {
        match (self, rhs) {
            (SizeExpr::Static(a), SizeExpr::Static(b)) => SizeExpr::Static(a + b),
            (SizeExpr::Static(0), other) | (other, SizeExpr::Static(0)) => other.clone(),
            (a, b) => SizeExpr::Dynamic(format!("{a} + {b}")),
        }
    }
}

impl fmt::Display for SizeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeExpr::Static(n) => write!(f, "{n}"),
            SizeExpr::Dynamic(expr) => write!(f, "{expr}"),
        }
    }
}

impl TypeDef {
    /// Dimension extents of the whole chain, outermost first.
    ///
    /// Every nesting arrangement flattens to one ordered sequence: a matrix
    /// level contributes one `Fixed` entry per rank, an array level one
    /// `ArraySize`, a lattice level one `LatticeSites`.
    pub fn extents(&self) -> Vec<Extent> {
        let mut out = Vec::new();
        for node in self.unpack() {
            match node {
                TypeDef::Scalar(_) => {}
                TypeDef::Matrix(m) => out.extend(m.shape.iter().map(|&d| Extent::Fixed(d))),
                TypeDef::Array(_) => out.push(Extent::ArraySize),
                TypeDef::Lattice(_) => out.push(Extent::LatticeSites),
            }
        }
        out
    }

    /// Number of buffer dimensions: the sum of each level's own rank.
    ///
    /// A lattice counts as one flattened site axis here; the runtime
    /// per-dimension count is [`TypeDef::ndims_expr`].
    pub fn buffer_ndims(&self) -> usize {
        self.unpack()
            .iter()
            .map(|node| match node {
                TypeDef::Scalar(_) => 0,
                TypeDef::Matrix(m) => m.shape.len(),
                TypeDef::Array(_) | TypeDef::Lattice(_) => 1,
            })
            .sum()
    }

    /// Runtime dimension count. `Static` unless a lattice level is present,
    /// in which case the layout's own dimension count is added at runtime.
    pub fn ndims_expr(&self) -> SizeExpr {
        let mut fixed = 0usize;
        let mut runtime: Vec<&str> = Vec::new();
        for node in self.unpack() {
            match node {
                TypeDef::Scalar(_) => {}
                TypeDef::Matrix(m) => fixed += m.shape.len(),
                TypeDef::Array(_) => fixed += 1,
                TypeDef::Lattice(_) => runtime.push("num_dims()"),
            }
        }
        if runtime.is_empty() {
            return SizeExpr::Static(fixed);
        }
        let mut expr = runtime.join(" + ");
        if fixed > 0 {
            expr = format!("{expr} + {fixed}");
        }
        SizeExpr::Dynamic(expr)
    }

    /// Total element count of the chain: the product of each level's own
    /// size, outermost first.
    pub fn size_expr(&self) -> SizeExpr {
        self.unpack()
            .iter()
            .map(|node| match node {
                TypeDef::Scalar(_) => SizeExpr::Static(1),
                TypeDef::Matrix(m) => SizeExpr::Static(m.size()),
                TypeDef::Array(_) => SizeExpr::Dynamic("size()".into()),
                TypeDef::Lattice(_) => SizeExpr::Dynamic("volume()".into()),
            })
            .fold(SizeExpr::Static(1), |acc, s| acc.times(&s))
    }

    /// Whether the total size is a compile-time constant.
    pub fn is_static(&self) -> bool {
        self.size_expr().is_static()
    }

    /// Element strides, one per buffer dimension, outermost first.
    ///
    /// Computed innermost-out: each dimension's stride is the cumulative
    /// size of everything nested within it, which is only known once the
    /// inner dimensions have been visited.
    pub fn strides(&self) -> Vec<SizeExpr> {
        let sizes = self.dim_sizes();
        let mut out = Vec::with_capacity(sizes.len());
        let mut unit = SizeExpr::Static(1);
        for size in sizes.iter().rev() {
            out.push(unit.clone());
            unit = unit.times(size);
        }
        out.reverse();
        out
    }

    /// Shape expression for the emission stage: per-level extent tuples
    /// concatenated outermost first, e.g.
    /// `tuple(lattice_shape()) + (size(),) + (3, 3)`.
    pub fn shape_expr(&self) -> String {
        let mut parts = Vec::new();
        for node in self.unpack() {
            match node {
                TypeDef::Scalar(_) => {}
                TypeDef::Matrix(m) => {
                    let dims: Vec<String> = m.shape.iter().map(ToString::to_string).collect();
                    if m.shape.len() == 1 {
                        parts.push(format!("({},)", dims[0]));
                    } else {
                        parts.push(format!("({})", dims.join(", ")));
                    }
                }
                TypeDef::Array(_) => parts.push("(size(),)".to_string()),
                TypeDef::Lattice(_) => parts.push("tuple(lattice_shape())".to_string()),
            }
        }
        parts.join(" + ")
    }

    /// Per-dimension sizes, outermost first. Matrix dims are static; array
    /// and lattice dims evaluate against the instance.
    fn dim_sizes(&self) -> Vec<SizeExpr> {
        self.extents()
            .iter()
            .map(|extent| match extent {
                Extent::Fixed(n) => SizeExpr::Static(*n),
                Extent::ArraySize => SizeExpr::Dynamic("size()".into()),
                Extent::LatticeSites => SizeExpr::Dynamic("volume()".into()),
            })
            .collect()
    }
}
