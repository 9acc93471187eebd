//! Type descriptors: a tagged variant per container kind, each owning
//! exactly one element type. Chains are finite and acyclic by
//! construction (ownership is strictly one-way, down to a scalar leaf).

use crate::shape::MatrixShape;

/// Kind tag for one level of a composition chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Scalar,
    Matrix,
    Array,
    Lattice,
}

/// An atomic (non-container) type: a numeric or complex scalar, or an
/// opaque built-in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarDef {
    /// Logical name used throughout the generator.
    pub name: String,
    /// Name of the type in emitted code.
    pub native_name: String,
    /// Originating namespace in emitted code. Empty for primitives.
    pub module: String,
    /// Primitives use direct-value access rather than wrapped-object access.
    pub is_builtin: bool,
    /// Whether values are reached through one level of indirection.
    pub ptr_wrapped: bool,
}

/// Fixed-rank tensor with a concrete shape. Rank 1 is a vector, rank 2 a
/// matrix. Always static.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixDef {
    pub name: String,
    pub native_name: String,
    pub module: String,
    pub shape: MatrixShape,
    pub element: Box<TypeDef>,
}

impl MatrixDef {
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Element count: the product of the shape.
    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn is_matrix(&self) -> bool {
        self.shape.len() == 2
    }

    pub fn is_square(&self) -> bool {
        self.is_matrix() && self.shape[0] == self.shape[1]
    }
}

/// Dynamically sized homogeneous sequence. Rank 1, never static.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayDef {
    pub name: String,
    pub native_name: String,
    pub module: String,
    pub element: Box<TypeDef>,
}

/// A field of element values indexed by a runtime spatial layout. Size is
/// the layout volume; extents come from the layout. Never static.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeDef {
    pub name: String,
    pub native_name: String,
    pub module: String,
    pub element: Box<TypeDef>,
}

/// One concrete type the generator targets: a scalar leaf or a container
/// level wrapping its element type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeDef {
    Scalar(ScalarDef),
    Matrix(MatrixDef),
    Array(ArrayDef),
    Lattice(LatticeDef),
}

impl TypeDef {
    pub fn scalar(
        name: &str,
        native_name: &str,
        module: &str,
        is_builtin: bool,
        ptr_wrapped: bool,
    ) -> TypeDef {
        TypeDef::Scalar(ScalarDef {
            name: name.to_string(),
            native_name: native_name.to_string(),
            module: module.to_string(),
            is_builtin,
            ptr_wrapped,
        })
    }

    pub fn matrix(
        name: &str,
        native_name: &str,
        module: &str,
        shape: &[usize],
        element: TypeDef,
    ) -> TypeDef {
        TypeDef::Matrix(MatrixDef {
            name: name.to_string(),
            native_name: native_name.to_string(),
            module: module.to_string(),
            shape: MatrixShape::from_slice(shape),
            element: Box::new(element),
        })
    }

    pub fn array(name: &str, native_name: &str, module: &str, element: TypeDef) -> TypeDef {
        TypeDef::Array(ArrayDef {
            name: name.to_string(),
            native_name: native_name.to_string(),
            module: module.to_string(),
            element: Box::new(element),
        })
    }

    pub fn lattice(name: &str, native_name: &str, module: &str, element: TypeDef) -> TypeDef {
        TypeDef::Lattice(LatticeDef {
            name: name.to_string(),
            native_name: native_name.to_string(),
            module: module.to_string(),
            element: Box::new(element),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            TypeDef::Scalar(s) => &s.name,
            TypeDef::Matrix(m) => &m.name,
            TypeDef::Array(a) => &a.name,
            TypeDef::Lattice(l) => &l.name,
        }
    }

    pub fn native_name(&self) -> &str {
        match self {
            TypeDef::Scalar(s) => &s.native_name,
            TypeDef::Matrix(m) => &m.native_name,
            TypeDef::Array(a) => &a.native_name,
            TypeDef::Lattice(l) => &l.native_name,
        }
    }

    pub fn module(&self) -> &str {
        match self {
            TypeDef::Scalar(s) => &s.module,
            TypeDef::Matrix(m) => &m.module,
            TypeDef::Array(a) => &a.module,
            TypeDef::Lattice(l) => &l.module,
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            TypeDef::Scalar(_) => Kind::Scalar,
            TypeDef::Matrix(_) => Kind::Matrix,
            TypeDef::Array(_) => Kind::Array,
            TypeDef::Lattice(_) => Kind::Lattice,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, TypeDef::Scalar(_))
    }

    pub fn is_container(&self) -> bool {
        !self.is_scalar()
    }

    /// Primitives use direct-value access in emitted code; containers are
    /// always object-wrapped.
    pub fn is_builtin(&self) -> bool {
        match self {
            TypeDef::Scalar(s) => s.is_builtin,
            _ => false,
        }
    }

    /// Containers are always reached through one level of indirection.
    pub fn ptr_wrapped(&self) -> bool {
        match self {
            TypeDef::Scalar(s) => s.ptr_wrapped,
            _ => true,
        }
    }

    pub fn element(&self) -> Option<&TypeDef> {
        match self {
            TypeDef::Scalar(_) => None,
            TypeDef::Matrix(m) => Some(&m.element),
            TypeDef::Array(a) => Some(&a.element),
            TypeDef::Lattice(l) => Some(&l.element),
        }
    }

    /// Container kind tags from this level down to the innermost container.
    /// The scalar leaf is not a level and does not appear.
    pub fn structure(&self) -> Vec<Kind> {
        let mut out = Vec::new();
        let mut node = self;
        while node.is_container() {
            out.push(node.kind());
            match node.element() {
                Some(element) => node = element,
                None => break,
            }
        }
        out
    }

    /// All nodes of the chain, root first, ending at the scalar leaf.
    pub fn unpack(&self) -> Vec<&TypeDef> {
        let mut out = vec![self];
        let mut node = self;
        while let Some(element) = node.element() {
            out.push(element);
            node = element;
        }
        out
    }

    /// Shape of the innermost matrix level, if the chain ever reaches one.
    pub fn matrix_shape(&self) -> Option<&MatrixShape> {
        match self {
            TypeDef::Scalar(_) => None,
            TypeDef::Matrix(m) => m.element.matrix_shape().or(Some(&m.shape)),
            TypeDef::Array(a) => a.element.matrix_shape(),
            TypeDef::Lattice(l) => l.element.matrix_shape(),
        }
    }

    /// Whether the outermost level distributes values over a lattice layout.
    pub fn is_lattice_wrapped(&self) -> bool {
        matches!(self, TypeDef::Lattice(_))
    }

    /// Whether any level of the chain is an array. Array-ness propagates
    /// through nesting: a lattice of arrays is array-wrapped.
    pub fn is_array_wrapped(&self) -> bool {
        self.structure().contains(&Kind::Array)
    }

    /// Constructor template for this level, with `{}` standing for the
    /// expression that builds the element value.
    pub fn alloc_template(&self) -> Option<String> {
        match self {
            TypeDef::Scalar(_) => None,
            TypeDef::Matrix(m) => Some(format!("{}.{}({{}})", m.module, m.native_name)),
            TypeDef::Array(a) => Some(format!("{}.{}(size, {{}})", a.module, a.native_name)),
            TypeDef::Lattice(l) => Some(format!("{}.{}(layout, {{}})", l.module, l.native_name)),
        }
    }

    /// Nested constructor expression for the whole chain, folded
    /// innermost-out from the given leaf expression.
    pub fn alloc_expr(&self, leaf: &str) -> String {
        let mut expr = leaf.to_string();
        for node in self.unpack().into_iter().rev() {
            if let Some(template) = node.alloc_template() {
                expr = template.replacen("{}", &expr, 1);
            }
        }
        expr
    }
}
