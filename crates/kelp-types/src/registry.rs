//! Block-scoped arena owning every type descriptor.
//!
//! Nodes are appended in creation order and tagged with the block that was
//! current at the time. Closing a block truncates the arena back to the last
//! node of an enclosing block, which is the only way nodes are released.

use crate::TypeKind;
use crate::config::Limits;
use crate::invariants::ensure_index;
use crate::types::{BaseRef, BlockId, Payload, Type, TypeId};

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    ty: Type,
}

/// Arena of type descriptors for one compilation.
///
/// Single-threaded by construction: the parser owns it and calls into it
/// synchronously while it walks declarations.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    slots: Vec<Slot>,
    /// Bumped on every teardown so handles into released slots go stale.
    generation: u32,
    limits: Limits,
    /// `(forward, concrete)` pairs joined by `resolve_forward`.
    resolutions: Vec<(TypeId, TypeId)>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub(crate) fn push(&mut self, ty: Type) -> TypeId {
        let id = TypeId {
            index: ensure_index(self.slots.len()),
            generation: self.generation,
        };
        tracing::trace!(index = id.index, kind = %ty.kind, block = ty.block.0, "add type");
        self.slots.push(Slot {
            generation: self.generation,
            ty,
        });
        id
    }

    /// Allocate a node of `kind` in `block`.
    ///
    /// Pointers and arrays need a base; build those with `add_ptr_to`,
    /// `add_weak_ptr_to`, `add_array` or `add_dynarray`.
    pub fn add(&mut self, block: BlockId, kind: TypeKind) -> TypeId {
        debug_assert!(
            !kind.has_base(),
            "TypeRegistry::add: `{kind}` needs a base type"
        );
        self.push(Type::new(kind, block))
    }

    /// Allocate a placeholder for a type named before its definition.
    pub fn add_forward(&mut self, block: BlockId, name: impl Into<String>) -> TypeId {
        let mut ty = Type::new(TypeKind::Forward, block);
        ty.name = Some(name.into());
        self.push(ty)
    }

    /// Allocate a new `^base`. Pointers are never deduplicated.
    pub fn add_ptr_to(&mut self, block: BlockId, base: TypeId) -> TypeId {
        self.add_with_base(block, TypeKind::Ptr, BaseRef::Owning(base), 0)
    }

    /// Allocate a new `weak ^base`.
    pub fn add_weak_ptr_to(&mut self, block: BlockId, base: TypeId) -> TypeId {
        self.add_with_base(block, TypeKind::Ptr, BaseRef::Weak(base), 0)
    }

    /// Allocate a fixed array `[len]base`.
    pub fn add_array(&mut self, block: BlockId, base: TypeId, len: usize) -> TypeId {
        self.add_with_base(block, TypeKind::Array, BaseRef::Owning(base), len)
    }

    /// Allocate a dynamic array `[]base`.
    pub fn add_dynarray(&mut self, block: BlockId, base: TypeId) -> TypeId {
        self.add_with_base(block, TypeKind::DynArray, BaseRef::Owning(base), 0)
    }

    fn add_with_base(&mut self, block: BlockId, kind: TypeKind, base: BaseRef, len: usize) -> TypeId {
        self.ensure_type(base.id());
        let mut ty = Type::new(kind, block);
        ty.base = Some(base);
        ty.len = len;
        self.push(ty)
    }

    /// Record the identifier that names `id`.
    pub fn set_name(&mut self, id: TypeId, name: impl Into<String>) {
        self.ensure_type_mut(id).name = Some(name.into());
    }

    /// Mark a function type as a method: parameter 0 becomes its receiver.
    pub fn mark_method(&mut self, fn_id: TypeId) {
        self.ensure_signature_mut(fn_id).method = true;
    }

    /// Look up a node. `None` for handles released by block teardown.
    pub fn get(&self, id: TypeId) -> Option<&Type> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation)
            .map(|slot| &slot.ty)
    }

    /// Look up a live node.
    ///
    /// # Panics
    /// Panics if the handle was released or belongs to another registry.
    pub fn ty(&self, id: TypeId) -> &Type {
        self.ensure_type(id)
    }

    pub fn kind(&self, id: TypeId) -> TypeKind {
        self.ty(id).kind
    }

    /// Base type of a pointer or array.
    pub fn base(&self, id: TypeId) -> Option<TypeId> {
        self.ty(id).base_id()
    }

    pub fn contains(&self, id: TypeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over live nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &Type)> {
        self.slots.iter().enumerate().map(|(i, slot)| {
            let id = TypeId {
                index: ensure_index(i),
                generation: slot.generation,
            };
            (id, &slot.ty)
        })
    }

    /// Duplicate the shape of `src` without registering the copy.
    ///
    /// Member records are copied; the types they refer to stay shared.
    pub fn deep_copy(&self, src: TypeId) -> Type {
        self.ty(src).clone()
    }

    /// Rewrite a forward placeholder in place with the shape of `concrete`.
    ///
    /// The placeholder keeps its block and name, so every handle taken while
    /// it was unresolved now sees the concrete shape.
    pub fn resolve_forward(&mut self, forward: TypeId, concrete: TypeId) {
        let placeholder = self.ensure_type(forward);
        assert_eq!(
            placeholder.kind,
            TypeKind::Forward,
            "TypeRegistry::resolve_forward: {forward:?} is not a forward type"
        );
        let block = placeholder.block;
        let name = placeholder.name.clone();

        let mut resolved = self.deep_copy(concrete);
        resolved.block = block;
        resolved.name = name.or(resolved.name);
        tracing::debug!(
            name = resolved.name.as_deref().unwrap_or_default(),
            kind = %resolved.kind,
            "resolved forward type"
        );
        *self.ensure_type_mut(forward) = resolved;
        self.resolutions.push((forward, concrete));
    }

    /// `id` and every node joined to it through forward resolution.
    ///
    /// Such nodes hold copies of one shape; tables that grow after
    /// resolution must grow on all of them.
    pub(crate) fn resolution_group(&self, id: TypeId) -> Vec<TypeId> {
        let mut group = vec![id];
        let mut grew = true;
        while grew {
            grew = false;
            for &(forward, concrete) in &self.resolutions {
                for (from, to) in [(forward, concrete), (concrete, forward)] {
                    if group.contains(&from) && !group.contains(&to) {
                        group.push(to);
                        grew = true;
                    }
                }
            }
        }
        group
    }

    /// Release every node created in `start` or any block nested in it.
    ///
    /// Blocks must be closed in LIFO order; the released nodes then form a
    /// suffix of the arena.
    pub fn free_from_block(&mut self, start: BlockId) {
        let keep = self
            .slots
            .iter()
            .rposition(|slot| slot.ty.block < start)
            .map_or(0, |last| last + 1);
        debug_assert!(
            self.slots[..keep].iter().all(|slot| slot.ty.block < start),
            "TypeRegistry::free_from_block: block {} closed out of order",
            start.0
        );
        self.truncate(keep);
        tracing::debug!(block = start.0, live = self.slots.len(), "closed block");
    }

    /// Release every node (end of compilation).
    pub fn free_all(&mut self) {
        self.truncate(0);
    }

    fn truncate(&mut self, len: usize) {
        if len < self.slots.len() {
            tracing::debug!(freed = self.slots.len() - len, "released types");
            self.slots.truncate(len);
            self.resolutions
                .retain(|(forward, concrete)| forward.index() < len && concrete.index() < len);
            self.generation = self.generation.wrapping_add(1);
        }
    }

    pub(crate) fn slot_mut(&mut self, id: TypeId) -> Option<&mut Type> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation)
            .map(|slot| &mut slot.ty)
    }

    pub(crate) fn payload_mut(&mut self, id: TypeId) -> &mut Payload {
        &mut self.ensure_type_mut(id).payload
    }
}
