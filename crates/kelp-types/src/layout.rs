//! Byte sizes, alignments and member offsets.
//!
//! The target is 64-bit: pointers, strings, fibers and function values are
//! one machine word; dynamic arrays and interfaces are fixed headers that
//! point at their contents.

use rowan::TextRange;

use crate::diagnostics::Diagnostics;
use crate::types::TypeId;
use crate::{TypeError, TypeKind, TypeRegistry};

pub const POINTER_SIZE: usize = 8;

/// Data pointer, length and item size.
pub const DYNARRAY_HEADER_SIZE: usize = 3 * POINTER_SIZE;

/// Self pointer and method table pointer.
pub const INTERFACE_HEADER_SIZE: usize = 2 * POINTER_SIZE;

/// Granularity of call-frame parameter storage.
pub const SLOT_SIZE: usize = 8;

/// Round `offset` up to a multiple of `align`, or `None` past `usize::MAX`.
#[inline]
pub fn align_up(offset: usize, align: usize) -> Option<usize> {
    debug_assert!(align > 0);
    offset.checked_next_multiple_of(align)
}

/// Size of kinds whose size does not depend on base or member types.
fn fixed_size(kind: TypeKind) -> Option<usize> {
    let size = match kind {
        TypeKind::None | TypeKind::Forward | TypeKind::Void | TypeKind::Null => 0,
        TypeKind::Int8 | TypeKind::Uint8 | TypeKind::Bool | TypeKind::Char => 1,
        TypeKind::Int16 | TypeKind::Uint16 => 2,
        TypeKind::Int32 | TypeKind::Uint32 | TypeKind::Real32 => 4,
        TypeKind::Int | TypeKind::Uint | TypeKind::Real => 8,
        TypeKind::Ptr | TypeKind::Str | TypeKind::Fiber | TypeKind::Fn => POINTER_SIZE,
        TypeKind::DynArray => DYNARRAY_HEADER_SIZE,
        TypeKind::Interface => INTERFACE_HEADER_SIZE,
        TypeKind::Array | TypeKind::Struct => return None,
    };
    Some(size)
}

impl TypeRegistry {
    /// Byte size of `id` without validity checks.
    ///
    /// Unsizeable kinds report 0; sizes that overflow saturate.
    pub fn size_no_check(&self, id: TypeId) -> usize {
        self.checked_size(id).unwrap_or(usize::MAX)
    }

    /// Byte size of `id`, or why it has none.
    pub fn try_size(&self, id: TypeId) -> Result<usize, TypeError> {
        self.check_sizeable(id)?;
        self.checked_size(id).ok_or_else(|| TypeError::TooLarge {
            ty: self.spelling(id),
        })
    }

    /// Byte size of `id`, reporting `UnsizeableType` on failure.
    pub fn size(&self, diag: &mut Diagnostics, range: TextRange, id: TypeId) -> Option<usize> {
        diag.report_result(range, self.try_size(id))
    }

    /// Natural alignment of `id` in bytes (at least 1).
    pub fn alignment(&self, id: TypeId) -> usize {
        let ty = self.ty(id);
        match ty.kind {
            TypeKind::Array => ty.base_id().map_or(1, |base| self.alignment(base)),
            TypeKind::Struct => ty
                .fields()
                .iter()
                .map(|field| self.alignment(field.ty))
                .max()
                .unwrap_or(1),
            kind => fixed_size(kind).unwrap_or(1).max(1),
        }
    }

    /// Offset the next field appended to struct `id` would get if its type
    /// has the given alignment.
    pub(crate) fn next_field_offset(&self, id: TypeId, align: usize) -> Option<usize> {
        let end = match self.ty(id).fields().last() {
            Some(last) => last.offset.checked_add(self.checked_size(last.ty)?)?,
            None => 0,
        };
        align_up(end, align)
    }

    fn checked_size(&self, id: TypeId) -> Option<usize> {
        let ty = self.ty(id);
        match ty.kind {
            TypeKind::Array => {
                let base = ty.base_id()?;
                ty.len.checked_mul(self.checked_size(base)?)
            }
            TypeKind::Struct => {
                let align = self.alignment(id);
                let end = self.next_field_offset(id, 1)?;
                end.checked_next_multiple_of(align)
            }
            kind => fixed_size(kind),
        }
    }

    fn check_sizeable(&self, id: TypeId) -> Result<(), TypeError> {
        let ty = self.ty(id);
        match ty.kind {
            TypeKind::None | TypeKind::Forward | TypeKind::Void | TypeKind::Null => {
                Err(TypeError::Unsizeable {
                    ty: self.spelling(id),
                })
            }
            TypeKind::Array => match ty.base_id() {
                Some(base) => self.check_sizeable(base),
                None => Err(TypeError::Unsizeable {
                    ty: self.spelling(id),
                }),
            },
            _ => Ok(()),
        }
    }
}
