//! Structural equivalence and assignment compatibility.
//!
//! Equivalence compares shapes, never names. Type graphs may be cyclic
//! through pointers, so the walk assumes a pair equivalent while it is being
//! compared and only a concrete difference refutes it.

use std::collections::HashSet;

use rowan::TextRange;

use crate::diagnostics::Diagnostics;
use crate::types::{Field, Signature, Type, TypeId};
use crate::{TypeError, TypeKind, TypeRegistry};

/// One equivalence query and the pairs it has already assumed equal.
struct Equivalence<'r> {
    registry: &'r TypeRegistry,
    assumed: HashSet<(TypeId, TypeId)>,
}

impl<'r> Equivalence<'r> {
    fn new(registry: &'r TypeRegistry) -> Self {
        Self {
            registry,
            assumed: HashSet::new(),
        }
    }

    fn ids(&mut self, left: TypeId, right: TypeId) -> bool {
        if left == right || !self.assumed.insert((left, right)) {
            return true;
        }
        let registry = self.registry;
        self.shapes(registry.ty(left), registry.ty(right))
    }

    fn bases(&mut self, left: Option<TypeId>, right: Option<TypeId>) -> bool {
        match (left, right) {
            (Some(left), Some(right)) => self.ids(left, right),
            (None, None) => true,
            _ => false,
        }
    }

    fn shapes(&mut self, left: &Type, right: &Type) -> bool {
        if left.kind != right.kind {
            return false;
        }

        match left.kind {
            TypeKind::Forward => left.name == right.name,
            TypeKind::Ptr => {
                left.is_weak() == right.is_weak() && self.bases(left.base_id(), right.base_id())
            }
            TypeKind::Array => left.len == right.len && self.bases(left.base_id(), right.base_id()),
            TypeKind::DynArray => self.bases(left.base_id(), right.base_id()),
            TypeKind::Struct | TypeKind::Interface => self.fields(left.fields(), right.fields()),
            TypeKind::Fn => match (left.signature(), right.signature()) {
                (Some(left), Some(right)) => {
                    left.method == right.method && self.signatures(left, right)
                }
                _ => false,
            },
            _ => true,
        }
    }

    fn fields(&mut self, left: &[Field], right: &[Field]) -> bool {
        left.len() == right.len()
            && left.iter().zip(right).all(|(l, r)| {
                l.hash == r.hash && l.name == r.name && self.ids(l.ty, r.ty)
            })
    }

    /// Parameter and result types, ignoring names, defaults and receivers.
    fn signatures(&mut self, left: &Signature, right: &Signature) -> bool {
        let (lp, rp) = (left.compared_params(), right.compared_params());
        lp.len() == rp.len()
            && left.results.len() == right.results.len()
            && lp.iter().zip(rp).all(|(l, r)| self.ids(l.ty, r.ty))
            && left
                .results
                .iter()
                .zip(&right.results)
                .all(|(&l, &r)| self.ids(l, r))
    }
}

impl TypeRegistry {
    /// Whether `left` and `right` denote the same type structurally.
    pub fn equivalent(&self, left: TypeId, right: TypeId) -> bool {
        Equivalence::new(self).ids(left, right)
    }

    /// Structural equivalence of two descriptors, registered or detached
    /// (e.g. produced by `deep_copy`).
    pub fn equivalent_shapes(&self, left: &Type, right: &Type) -> bool {
        Equivalence::new(self).shapes(left, right)
    }

    /// Check equivalence, reporting `TypeMismatch` on failure.
    pub fn assert_equivalent(
        &self,
        diag: &mut Diagnostics,
        range: TextRange,
        left: TypeId,
        right: TypeId,
    ) -> bool {
        let ok = self.equivalent(left, right);
        if !ok {
            diag.report_error(&self.mismatch(left, right), range);
        }
        ok
    }

    /// Whether a value of type `right` may be used where `left` is expected.
    ///
    /// When `symmetric`, either operand may be the accepting side, as for
    /// the operands of a binary operator.
    pub fn compatible(&self, left: TypeId, right: TypeId, symmetric: bool) -> bool {
        if self.equivalent(left, right) {
            return true;
        }

        let (lk, rk) = (self.kind(left), self.kind(right));
        if (lk.is_integer() && rk.is_integer()) || (lk.is_real() && rk.is_real()) {
            return true;
        }

        self.accepts(left, right) || (symmetric && self.accepts(right, left))
    }

    /// Check compatibility, reporting `TypeMismatch` on failure.
    pub fn assert_compatible(
        &self,
        diag: &mut Diagnostics,
        range: TextRange,
        left: TypeId,
        right: TypeId,
        symmetric: bool,
    ) -> bool {
        let ok = self.compatible(left, right, symmetric);
        if !ok {
            diag.report_error(&self.mismatch(left, right), range);
        }
        ok
    }

    /// Whether `id` is a pointer to a fixed array of `char`.
    pub fn is_char_array_ptr(&self, id: TypeId) -> bool {
        let ty = self.ty(id);
        ty.kind == TypeKind::Ptr && ty.base_id().is_some_and(|base| self.is_char_array(base))
    }

    fn is_char_array(&self, id: TypeId) -> bool {
        let ty = self.ty(id);
        ty.kind == TypeKind::Array
            && ty
                .base_id()
                .is_some_and(|base| self.kind(base) == TypeKind::Char)
    }

    /// Whether `value` provides every method of interface `interface`.
    ///
    /// Structs provide their declared methods (also through a pointer);
    /// interfaces provide their method slots. Method types are matched on
    /// parameters and results, receivers excluded.
    pub fn implements(&self, interface: TypeId, value: TypeId) -> bool {
        let required = self.ensure_members(interface).fields();
        let value_ty = self.ty(value);
        let provider = match value_ty.kind {
            TypeKind::Ptr => value_ty
                .base_id()
                .filter(|&base| self.kind(base) == TypeKind::Struct),
            TypeKind::Struct | TypeKind::Interface => Some(value),
            _ => None,
        };
        let Some(provider) = provider else {
            return false;
        };

        required.iter().all(|slot| {
            let found = match self.kind(provider) {
                TypeKind::Interface => self.find_field(provider, &slot.name).map(Field::ty),
                _ => self.find_method(provider, &slot.name),
            };
            found.is_some_and(|method| self.methods_match(slot.ty, method))
        })
    }

    fn methods_match(&self, left: TypeId, right: TypeId) -> bool {
        match (self.ty(left).signature(), self.ty(right).signature()) {
            (Some(left), Some(right)) => Equivalence::new(self).signatures(left, right),
            _ => false,
        }
    }

    /// One-directional acceptance beyond equivalence.
    fn accepts(&self, target: TypeId, value: TypeId) -> bool {
        let (tk, vk) = (self.kind(target), self.kind(value));

        if vk == TypeKind::Null {
            return tk.is_reference();
        }

        match tk {
            TypeKind::Ptr => {
                vk == TypeKind::Ptr
                    && self
                        .base(target)
                        .is_some_and(|base| self.kind(base) == TypeKind::Void)
            }
            TypeKind::Str => self.is_char_array(value) || self.is_char_array_ptr(value),
            TypeKind::Interface => self.implements(target, value),
            _ => false,
        }
    }

    fn mismatch(&self, expected: TypeId, found: TypeId) -> TypeError {
        TypeError::Mismatch {
            expected: self.spelling(expected),
            found: self.spelling(found),
        }
    }
}
