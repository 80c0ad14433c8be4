//! Field, method, parameter and result tables.
//!
//! Tables are append-only and ordered. Lookups scan linearly, rejecting
//! entries by name hash before comparing names.

use kelp_core::{NameHash, name_hash};
use rowan::TextRange;

use crate::diagnostics::Diagnostics;
use crate::error::MemberKind;
use crate::layout::{POINTER_SIZE, SLOT_SIZE, align_up};
use crate::types::{Field, Param, Signature, TypeId};
use crate::{Const, TypeError, TypeKind, TypeRegistry, overflow};

impl Signature {
    /// Find a parameter by name.
    pub fn find_param(&self, name: &str) -> Option<&Param> {
        let hash = name_hash(name);
        self.params.iter().find(|param| param.matches(name, hash))
    }
}

fn check_capacity(member: MemberKind, len: usize, limit: Option<usize>) -> Result<(), TypeError> {
    match limit {
        Some(limit) if len >= limit => Err(TypeError::CapacityExceeded { member, limit }),
        _ => Ok(()),
    }
}

impl TypeRegistry {
    /// Find a field (or interface method slot) of `owner` by name.
    pub fn find_field(&self, owner: TypeId, name: &str) -> Option<&Field> {
        let hash = name_hash(name);
        self.find_field_hashed(owner, name, hash)
    }

    fn find_field_hashed(&self, owner: TypeId, name: &str, hash: NameHash) -> Option<&Field> {
        self.ensure_members(owner)
            .fields
            .iter()
            .find(|field| field.matches(name, hash))
    }

    /// Find a field, reporting `UnknownMember` if there is none.
    pub fn assert_find_field(
        &self,
        diag: &mut Diagnostics,
        range: TextRange,
        owner: TypeId,
        name: &str,
    ) -> Option<&Field> {
        let field = self.find_field(owner, name);
        if field.is_none() {
            let member = match self.kind(owner) {
                TypeKind::Interface => MemberKind::Method,
                _ => MemberKind::Field,
            };
            diag.report_error(
                &TypeError::UnknownMember {
                    member,
                    name: name.to_string(),
                    owner: self.spelling(owner),
                },
                range,
            );
        }
        field
    }

    /// Append a field to a struct, or a method slot to an interface.
    ///
    /// Struct fields are placed at the next offset aligned for their type.
    /// Interface slots must be function types; each takes one pointer-sized
    /// entry of the method table, and its displacement is recorded in the
    /// method's signature.
    ///
    /// Returns the index of the new field.
    pub fn try_add_field(
        &mut self,
        owner: TypeId,
        field_ty: TypeId,
        name: &str,
    ) -> Result<usize, TypeError> {
        let hash = name_hash(name);
        let is_interface = self.kind(owner) == TypeKind::Interface;
        let member = if is_interface {
            MemberKind::Method
        } else {
            MemberKind::Field
        };

        if self.find_field_hashed(owner, name, hash).is_some() {
            return Err(TypeError::DuplicateMember {
                member,
                name: name.to_string(),
            });
        }

        let index = self.ensure_members(owner).fields.len();
        check_capacity(member, index, self.limits().fields())?;

        let (slot_ty, offset) = if is_interface {
            if self.kind(field_ty) != TypeKind::Fn {
                return Err(TypeError::Mismatch {
                    expected: TypeKind::Fn.spelling().to_string(),
                    found: self.spelling(field_ty),
                });
            }
            let offset = index * POINTER_SIZE;
            let slot_ty = self.slot_signature(owner, field_ty, offset);
            self.ensure_signature_mut(slot_ty).offset_from_self = Some(offset);
            (slot_ty, offset)
        } else {
            self.try_size(field_ty)?;
            let align = self.alignment(field_ty);
            let offset = self
                .next_field_offset(owner, align)
                .ok_or_else(|| self.too_large(owner))?;
            (field_ty, offset)
        };

        self.ensure_members_mut(owner).fields.push(Field {
            name: name.to_string(),
            hash,
            ty: slot_ty,
            offset,
        });
        Ok(index)
    }

    /// Function type to store in an interface slot at `offset`.
    ///
    /// A signature already dispatched from another displacement gets its own
    /// copy, allocated in the interface's block, so each slot keeps its
    /// offset.
    fn slot_signature(&mut self, owner: TypeId, fn_id: TypeId, offset: usize) -> TypeId {
        let placed = self.ensure_signature(fn_id).offset_from_self;
        match placed {
            Some(taken) if taken != offset => {
                let mut copy = self.deep_copy(fn_id);
                copy.block = copy.block.max(self.ty(owner).block);
                self.push(copy)
            }
            _ => fn_id,
        }
    }

    /// Append a field, reporting why it was rejected. The table is left
    /// unchanged on failure.
    pub fn add_field(
        &mut self,
        diag: &mut Diagnostics,
        range: TextRange,
        owner: TypeId,
        field_ty: TypeId,
        name: &str,
    ) -> Option<usize> {
        let result = self.try_add_field(owner, field_ty, name);
        diag.report_result(range, result)
    }

    /// Find a method declared with struct `owner` as receiver.
    pub fn find_method(&self, owner: TypeId, name: &str) -> Option<TypeId> {
        self.ensure_members(owner).methods.get(name).copied()
    }

    /// Attach method `name` of function type `method_ty` to struct `owner`.
    ///
    /// A method may not share its name with a field or another method.
    /// Nodes joined to `owner` by forward resolution get the method too.
    pub fn add_method(
        &mut self,
        diag: &mut Diagnostics,
        range: TextRange,
        owner: TypeId,
        method_ty: TypeId,
        name: &str,
    ) -> bool {
        self.ensure_signature(method_ty);
        let members = self.ensure_members(owner);

        let clash = if members.methods.contains_key(name) {
            Some(MemberKind::Method)
        } else if self.find_field(owner, name).is_some() {
            Some(MemberKind::Field)
        } else {
            None
        };
        if let Some(member) = clash {
            diag.report_error(
                &TypeError::DuplicateMember {
                    member,
                    name: name.to_string(),
                },
                range,
            );
            return false;
        }

        for id in self.resolution_group(owner) {
            self.ensure_members_mut(id)
                .methods
                .insert(name.to_string(), method_ty);
        }
        true
    }

    /// Find a parameter of function type `fn_id` by name.
    pub fn find_param(&self, fn_id: TypeId, name: &str) -> Option<&Param> {
        self.ensure_signature(fn_id).find_param(name)
    }

    /// Append a parameter to the signature of `fn_id`.
    ///
    /// A default value must fit the parameter's kind. Returns the index of
    /// the new parameter.
    pub fn try_add_param(
        &mut self,
        fn_id: TypeId,
        param_ty: TypeId,
        name: &str,
        default: Option<Const>,
    ) -> Result<usize, TypeError> {
        let hash = name_hash(name);
        let sig = self.ensure_signature(fn_id);

        if sig.params.iter().any(|param| param.matches(name, hash)) {
            return Err(TypeError::DuplicateMember {
                member: MemberKind::Param,
                name: name.to_string(),
            });
        }
        let index = sig.params.len();
        check_capacity(MemberKind::Param, index, self.limits().params())?;

        let kind = self.kind(param_ty);
        if let Some(value) = default
            && (kind.is_numeric() || kind == TypeKind::Char)
            && overflow(kind, value)
        {
            return Err(TypeError::Overflow { kind });
        }

        let sig = self.ensure_signature_mut(fn_id);
        sig.params.push(Param {
            name: name.to_string(),
            hash,
            ty: param_ty,
            default,
        });
        if default.is_some() {
            sig.num_default_params += 1;
        }
        Ok(index)
    }

    /// Append a parameter, reporting why it was rejected.
    pub fn add_param(
        &mut self,
        diag: &mut Diagnostics,
        range: TextRange,
        fn_id: TypeId,
        param_ty: TypeId,
        name: &str,
        default: Option<Const>,
    ) -> Option<usize> {
        let result = self.try_add_param(fn_id, param_ty, name, default);
        diag.report_result(range, result)
    }

    /// Append a result type to the signature of `fn_id`.
    pub fn add_result(
        &mut self,
        diag: &mut Diagnostics,
        range: TextRange,
        fn_id: TypeId,
        result_ty: TypeId,
    ) -> bool {
        let len = self.ensure_signature(fn_id).results.len();
        let checked = check_capacity(MemberKind::Result, len, self.limits().results());
        if diag.report_result(range, checked).is_none() {
            return false;
        }
        self.ensure_signature_mut(fn_id).results.push(result_ty);
        true
    }

    /// Frame bytes taken by parameters `0..=index`, laid out like struct
    /// fields.
    pub fn param_size_up_to(
        &self,
        diag: &mut Diagnostics,
        range: TextRange,
        sig: &Signature,
        index: usize,
    ) -> Option<usize> {
        diag.report_result(range, self.params_end(sig, index.saturating_add(1)))
    }

    /// Frame bytes taken by all parameters, rounded up to whole slots.
    pub fn param_size_total(
        &self,
        diag: &mut Diagnostics,
        range: TextRange,
        sig: &Signature,
    ) -> Option<usize> {
        let total = self.params_end(sig, sig.params.len()).and_then(|end| {
            align_up(end, SLOT_SIZE).ok_or_else(|| match sig.params.last() {
                Some(last) => self.too_large(last.ty),
                None => TypeError::TooLarge {
                    ty: TypeKind::Fn.spelling().to_string(),
                },
            })
        });
        diag.report_result(range, total)
    }

    fn params_end(&self, sig: &Signature, count: usize) -> Result<usize, TypeError> {
        let mut end = 0usize;
        for param in sig.params.iter().take(count) {
            let size = self.try_size(param.ty)?;
            end = align_up(end, self.alignment(param.ty))
                .and_then(|offset| offset.checked_add(size))
                .ok_or_else(|| self.too_large(param.ty))?;
        }
        Ok(end)
    }

    fn too_large(&self, id: TypeId) -> TypeError {
        TypeError::TooLarge {
            ty: self.spelling(id),
        }
    }
}
