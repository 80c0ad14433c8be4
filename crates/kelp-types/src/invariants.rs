//! Invariant checks excluded from coverage reports.
//!
//! Each helper panics on a broken caller contract: a handle used after its
//! block was closed, or a member operation on a kind without members.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::TypeRegistry;
use crate::types::{Members, Payload, Signature, Type, TypeId};

impl TypeRegistry {
    pub(crate) fn ensure_type(&self, id: TypeId) -> &Type {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "TypeRegistry: {id:?} is not live \
                 (handles must not outlive the block that created them)"
            )
        })
    }

    pub(crate) fn ensure_type_mut(&mut self, id: TypeId) -> &mut Type {
        self.slot_mut(id).unwrap_or_else(|| {
            panic!(
                "TypeRegistry: {id:?} is not live \
                 (handles must not outlive the block that created them)"
            )
        })
    }

    pub(crate) fn ensure_members(&self, id: TypeId) -> &Members {
        let ty = self.ensure_type(id);
        ty.members().unwrap_or_else(|| {
            panic!(
                "TypeRegistry: {id:?} is `{}`, expected struct or interface",
                ty.kind
            )
        })
    }

    pub(crate) fn ensure_members_mut(&mut self, id: TypeId) -> &mut Members {
        match self.payload_mut(id) {
            Payload::Members(members) => members,
            _ => panic!("TypeRegistry: {id:?} is not a struct or interface"),
        }
    }

    pub(crate) fn ensure_signature(&self, id: TypeId) -> &Signature {
        let ty = self.ensure_type(id);
        ty.signature().unwrap_or_else(|| {
            panic!("TypeRegistry: {id:?} is `{}`, expected fn", ty.kind)
        })
    }

    pub(crate) fn ensure_signature_mut(&mut self, id: TypeId) -> &mut Signature {
        match self.payload_mut(id) {
            Payload::Signature(sig) => sig,
            _ => panic!("TypeRegistry: {id:?} is not a function type"),
        }
    }
}

/// Arena index of the slot at `position`.
pub(crate) fn ensure_index(position: usize) -> u32 {
    u32::try_from(position).unwrap_or_else(|_| {
        panic!("TypeRegistry: arena position {position} exceeds the u32 handle range")
    })
}
