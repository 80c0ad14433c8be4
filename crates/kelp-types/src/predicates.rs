//! Classification queries for the code generator.

use crate::types::TypeId;
use crate::{TypeKind, TypeRegistry};

impl TypeRegistry {
    /// Whether values of `id` may hold references the collector must trace.
    ///
    /// Decided by top-level kind alone. The collector walks struct fields
    /// itself at trace time, so a weak self-reference is never followed here.
    pub fn garbage_collected(&self, id: TypeId) -> bool {
        self.kind(id).is_garbage_collected()
    }

    /// Whether `id` has the shape of a fiber entry point:
    /// `fn (parent: ^fiber, arg: ^T)` with `T` not void, and no result value.
    pub fn is_fiber_func(&self, id: TypeId) -> bool {
        let Some(sig) = self.ty(id).signature() else {
            return false;
        };
        if sig.method || sig.num_default_params != 0 || sig.params.len() != 2 {
            return false;
        }

        let points_to = |param: TypeId, pred: &dyn Fn(TypeKind) -> bool| {
            self.kind(param) == TypeKind::Ptr
                && self.base(param).is_some_and(|base| pred(self.kind(base)))
        };

        points_to(sig.params[0].ty, &|kind| kind == TypeKind::Fiber)
            && points_to(sig.params[1].ty, &|kind| kind != TypeKind::Void)
            && matches!(sig.results.as_slice(), [result] if self.kind(*result) == TypeKind::Void)
    }
}
