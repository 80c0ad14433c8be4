//! Type descriptor nodes and their member records.

use indexmap::IndexMap;
use kelp_core::NameHash;

use crate::{Const, TypeKind};

/// Handle to a node in the registry arena.
///
/// Carries the registry generation it was allocated in, so a handle that
/// outlives its block is detected rather than aliasing a newer node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TypeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl TypeId {
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }

    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// Lexical block a node was created in.
///
/// Ids grow with nesting depth: a block opened inside another always has a
/// greater id than every block still open around it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct BlockId(pub u32);

impl BlockId {
    /// The outermost (module) block.
    pub const MODULE: Self = Self(0);
}

/// Reference from a pointer or array node to its base type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BaseRef {
    /// The node owns what it points at (all arrays, ordinary pointers).
    Owning(TypeId),
    /// Non-owning back-reference, used to close cycles (`weak ^T`).
    Weak(TypeId),
}

impl BaseRef {
    #[inline]
    pub fn id(self) -> TypeId {
        match self {
            Self::Owning(id) | Self::Weak(id) => id,
        }
    }

    #[inline]
    pub fn is_weak(self) -> bool {
        matches!(self, Self::Weak(_))
    }
}

/// Struct field or interface method slot.
#[derive(Clone, PartialEq, Debug)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) hash: NameHash,
    pub(crate) ty: TypeId,
    /// Byte offset inside the enclosing struct, or inside the method table
    /// for interface methods.
    pub(crate) offset: usize,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hash(&self) -> NameHash {
        self.hash
    }

    pub fn ty(&self) -> TypeId {
        self.ty
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn matches(&self, name: &str, hash: NameHash) -> bool {
        self.hash == hash && self.name == name
    }
}

/// Function parameter.
#[derive(Clone, PartialEq, Debug)]
pub struct Param {
    pub(crate) name: String,
    pub(crate) hash: NameHash,
    pub(crate) ty: TypeId,
    pub(crate) default: Option<Const>,
}

impl Param {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hash(&self) -> NameHash {
        self.hash
    }

    pub fn ty(&self) -> TypeId {
        self.ty
    }

    pub fn default_value(&self) -> Option<Const> {
        self.default
    }

    pub(crate) fn matches(&self, name: &str, hash: NameHash) -> bool {
        self.hash == hash && self.name == name
    }
}

/// Function signature.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Signature {
    pub(crate) params: Vec<Param>,
    pub(crate) num_default_params: usize,
    pub(crate) results: Vec<TypeId>,
    /// Methods take their receiver as parameter 0.
    pub(crate) method: bool,
    /// Displacement of an interface method's slot, for dispatch. `None`
    /// until the signature is placed in an interface.
    pub(crate) offset_from_self: Option<usize>,
}

impl Signature {
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn num_default_params(&self) -> usize {
        self.num_default_params
    }

    pub fn results(&self) -> &[TypeId] {
        &self.results
    }

    pub fn is_method(&self) -> bool {
        self.method
    }

    pub fn offset_from_self(&self) -> Option<usize> {
        self.offset_from_self
    }

    /// Parameters that take part in equivalence: all but a method's receiver.
    pub(crate) fn compared_params(&self) -> &[Param] {
        if self.method && !self.params.is_empty() {
            &self.params[1..]
        } else {
            &self.params
        }
    }
}

/// Member tables of a struct or interface.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Members {
    pub(crate) fields: Vec<Field>,
    /// Methods declared with this struct as receiver, keyed by name.
    pub(crate) methods: IndexMap<String, TypeId>,
}

impl Members {
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn methods(&self) -> impl Iterator<Item = (&str, TypeId)> {
        self.methods.iter().map(|(name, &ty)| (name.as_str(), ty))
    }
}

/// Kind-discriminated payload of a node.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Payload {
    #[default]
    Scalar,
    Members(Members),
    Signature(Signature),
}

impl Payload {
    /// Empty payload matching `kind`.
    pub(crate) fn for_kind(kind: TypeKind) -> Self {
        match kind {
            TypeKind::Struct | TypeKind::Interface => Self::Members(Members::default()),
            TypeKind::Fn => Self::Signature(Signature::default()),
            _ => Self::Scalar,
        }
    }
}

/// A type descriptor.
///
/// Nodes live in the registry arena and refer to each other by `TypeId`,
/// which makes self-referential shapes plain data.
#[derive(Clone, PartialEq, Debug)]
pub struct Type {
    pub(crate) kind: TypeKind,
    pub(crate) block: BlockId,
    pub(crate) base: Option<BaseRef>,
    /// Length of a fixed array.
    pub(crate) len: usize,
    /// Identifier that named this type, if any.
    pub(crate) name: Option<String>,
    pub(crate) payload: Payload,
}

impl Type {
    pub(crate) fn new(kind: TypeKind, block: BlockId) -> Self {
        Self {
            kind,
            block,
            base: None,
            len: 0,
            name: None,
            payload: Payload::for_kind(kind),
        }
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn block(&self) -> BlockId {
        self.block
    }

    pub fn base(&self) -> Option<BaseRef> {
        self.base
    }

    /// Base type id, for pointers and arrays.
    pub fn base_id(&self) -> Option<TypeId> {
        self.base.map(BaseRef::id)
    }

    /// Whether this is a `weak` pointer.
    pub fn is_weak(&self) -> bool {
        self.base.is_some_and(BaseRef::is_weak)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Array length, or member count for structs and interfaces.
    pub fn num_items(&self) -> usize {
        match &self.payload {
            Payload::Members(members) => members.fields.len(),
            _ => self.len,
        }
    }

    pub fn fields(&self) -> &[Field] {
        match &self.payload {
            Payload::Members(members) => &members.fields,
            _ => &[],
        }
    }

    pub fn members(&self) -> Option<&Members> {
        match &self.payload {
            Payload::Members(members) => Some(members),
            _ => None,
        }
    }

    pub fn signature(&self) -> Option<&Signature> {
        match &self.payload {
            Payload::Signature(sig) => Some(sig),
            _ => None,
        }
    }
}
