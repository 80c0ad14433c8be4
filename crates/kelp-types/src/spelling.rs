//! Human-readable type spellings for diagnostics.

use crate::types::{Payload, TypeId};
use crate::{TypeKind, TypeRegistry};

impl TypeRegistry {
    /// Spell `id` the way it would be written in source.
    ///
    /// Named types spell as their name. An unnamed struct or interface lists
    /// its members at the top level only; nested ones spell as their keyword,
    /// which keeps self-referential shapes finite.
    pub fn spelling(&self, id: TypeId) -> String {
        let mut out = String::new();
        self.spell(&mut out, id, 0);
        out
    }

    fn spell(&self, out: &mut String, id: TypeId, depth: usize) {
        let ty = self.ty(id);
        if let Some(name) = &ty.name {
            out.push_str(name);
            return;
        }

        match ty.kind {
            TypeKind::Ptr => {
                out.push_str(if ty.is_weak() { "weak ^" } else { "^" });
                self.spell_base(out, ty.base_id(), depth);
            }
            TypeKind::Array => {
                out.push('[');
                out.push_str(&ty.len.to_string());
                out.push(']');
                self.spell_base(out, ty.base_id(), depth);
            }
            TypeKind::DynArray => {
                out.push_str("[]");
                self.spell_base(out, ty.base_id(), depth);
            }
            TypeKind::Struct | TypeKind::Interface if depth == 0 => {
                out.push_str(ty.kind.spelling());
                out.push_str(" {");
                for (i, field) in ty.fields().iter().enumerate() {
                    if i > 0 {
                        out.push_str("; ");
                    }
                    out.push_str(&field.name);
                    out.push_str(": ");
                    self.spell(out, field.ty, depth + 1);
                }
                out.push('}');
            }
            TypeKind::Fn => {
                let Payload::Signature(sig) = &ty.payload else {
                    out.push_str("fn");
                    return;
                };
                out.push_str("fn (");
                for (i, param) in sig.params.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&param.name);
                    out.push_str(": ");
                    self.spell(out, param.ty, depth + 1);
                }
                out.push(')');
                let returns_value = sig
                    .results
                    .iter()
                    .any(|&result| self.kind(result) != TypeKind::Void);
                if returns_value {
                    out.push_str(": ");
                    for (i, &result) in sig.results.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        self.spell(out, result, depth + 1);
                    }
                }
            }
            kind => out.push_str(kind.spelling()),
        }
    }

    fn spell_base(&self, out: &mut String, base: Option<TypeId>, depth: usize) {
        match base {
            Some(base) => self.spell(out, base, depth + 1),
            None => out.push('?'),
        }
    }
}
