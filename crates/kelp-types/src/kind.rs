//! Type kinds.
//!
//! The closed tag set every type descriptor carries. Predicates here are
//! purely kind-level; anything that must look through base or member types
//! lives on the registry.

/// Discriminant of a type descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum TypeKind {
    None,
    /// Placeholder for a type named before its definition.
    Forward,
    Void,
    /// Type of the `null` literal only.
    Null,
    Int8,
    Int16,
    Int32,
    Int,
    Uint8,
    Uint16,
    Uint32,
    Uint,
    Bool,
    Char,
    Real32,
    Real,
    Ptr,
    Array,
    DynArray,
    /// Pointer of a special kind: admits literal assignment, concatenation
    /// and comparison by content.
    Str,
    Struct,
    Interface,
    Fiber,
    Fn,
}

impl TypeKind {
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int
                | Self::Uint8
                | Self::Uint16
                | Self::Uint32
                | Self::Uint
        )
    }

    pub fn is_signed(self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int)
    }

    pub fn is_real(self) -> bool {
        matches!(self, Self::Real32 | Self::Real)
    }

    /// Integers and `char`.
    pub fn is_ordinal(self) -> bool {
        self.is_integer() || self == Self::Char
    }

    /// Kinds that explicit casts convert between.
    pub fn is_castable(self) -> bool {
        self.is_ordinal() || self == Self::Bool
    }

    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_real()
    }

    /// Kinds laid out as aggregates rather than single values.
    pub fn is_structured(self) -> bool {
        matches!(
            self,
            Self::Array | Self::DynArray | Self::Struct | Self::Interface | Self::Fiber
        )
    }

    /// Reference kinds: the ones that accept `null`.
    pub fn is_reference(self) -> bool {
        matches!(
            self,
            Self::Ptr | Self::Str | Self::DynArray | Self::Fn | Self::Interface
        )
    }

    /// Kinds whose descriptor carries a member table.
    pub fn has_members(self) -> bool {
        matches!(self, Self::Struct | Self::Interface)
    }

    /// Kinds whose descriptor points at a base (pointee or element) type.
    pub fn has_base(self) -> bool {
        matches!(self, Self::Ptr | Self::Array | Self::DynArray)
    }

    /// Whether values of this kind may hold heap references the collector traces.
    ///
    /// Purely kind-level: a struct qualifies whatever its fields are.
    pub fn is_garbage_collected(self) -> bool {
        matches!(
            self,
            Self::Ptr
                | Self::Str
                | Self::Array
                | Self::DynArray
                | Self::Struct
                | Self::Interface
                | Self::Fiber
        )
    }

    /// Keyword used when spelling the kind in diagnostics.
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Forward => "forward",
            Self::Void => "void",
            Self::Null => "null",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int => "int",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint => "uint",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Real32 => "real32",
            Self::Real => "real",
            Self::Ptr => "^",
            Self::Array => "[...]",
            Self::DynArray => "[]",
            Self::Str => "str",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Fiber => "fiber",
            Self::Fn => "fn",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.spelling())
    }
}
