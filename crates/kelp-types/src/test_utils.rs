//! Test utilities: a registry plus sink with shorthand constructors.

use rowan::TextRange;

use crate::{BlockId, Diagnostics, Limits, TypeId, TypeKind, TypeRegistry};

pub(crate) fn range() -> TextRange {
    TextRange::new(0.into(), 4.into())
}

pub(crate) struct Fixture {
    pub types: TypeRegistry,
    pub diag: Diagnostics,
    pub block: BlockId,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            types: TypeRegistry::with_limits(limits),
            diag: Diagnostics::new(),
            block: BlockId::MODULE,
        }
    }

    pub fn scalar(&mut self, kind: TypeKind) -> TypeId {
        self.types.add(self.block, kind)
    }

    pub fn named(&mut self, kind: TypeKind, name: &str) -> TypeId {
        let id = self.scalar(kind);
        self.types.set_name(id, name);
        id
    }

    pub fn ptr(&mut self, base: TypeId) -> TypeId {
        self.types.add_ptr_to(self.block, base)
    }

    pub fn weak_ptr(&mut self, base: TypeId) -> TypeId {
        self.types.add_weak_ptr_to(self.block, base)
    }

    pub fn array(&mut self, base: TypeId, len: usize) -> TypeId {
        self.types.add_array(self.block, base, len)
    }

    pub fn dynarray(&mut self, base: TypeId) -> TypeId {
        self.types.add_dynarray(self.block, base)
    }

    /// Struct or interface with the given members, all of which must be accepted.
    pub fn aggregate(&mut self, kind: TypeKind, fields: &[(&str, TypeId)]) -> TypeId {
        let id = self.scalar(kind);
        for &(name, ty) in fields {
            let added = self.types.add_field(&mut self.diag, range(), id, ty, name);
            assert!(added.is_some(), "field `{name}` rejected: {}", self.diag.render());
        }
        id
    }

    pub fn strukt(&mut self, fields: &[(&str, TypeId)]) -> TypeId {
        self.aggregate(TypeKind::Struct, fields)
    }

    pub fn interface(&mut self, methods: &[(&str, TypeId)]) -> TypeId {
        self.aggregate(TypeKind::Interface, methods)
    }

    pub fn func(&mut self, params: &[(&str, TypeId)], results: &[TypeId]) -> TypeId {
        let id = self.scalar(TypeKind::Fn);
        for &(name, ty) in params {
            let added = self
                .types
                .add_param(&mut self.diag, range(), id, ty, name, None);
            assert!(added.is_some(), "param `{name}` rejected: {}", self.diag.render());
        }
        for &ty in results {
            assert!(self.types.add_result(&mut self.diag, range(), id, ty));
        }
        id
    }

    /// Method type: `receiver` becomes parameter 0.
    pub fn method(
        &mut self,
        receiver: TypeId,
        params: &[(&str, TypeId)],
        results: &[TypeId],
    ) -> TypeId {
        let mut all = vec![("self", receiver)];
        all.extend_from_slice(params);
        let id = self.func(&all, results);
        self.types.mark_method(id);
        id
    }
}
