use rowan::TextRange;

use crate::diagnostics::Diagnostics;
use crate::types::BlockId;
use crate::{TypeError, TypeKind, TypeRegistry};

impl TypeRegistry {
    /// Report every forward placeholder created in `from` or a later block
    /// that was never resolved. Pass `BlockId::MODULE` to check the whole
    /// registry.
    ///
    /// Returns `true` when nothing is left unresolved.
    pub fn assert_forward_resolved(
        &self,
        diag: &mut Diagnostics,
        range: TextRange,
        from: BlockId,
    ) -> bool {
        let mut resolved = true;
        for (_, ty) in self.iter() {
            if ty.kind != TypeKind::Forward || ty.block < from {
                continue;
            }
            let name = ty.name().unwrap_or_default().to_string();
            tracing::debug!(%name, block = ty.block.0, "unresolved forward type");
            diag.report_error(&TypeError::UnresolvedForward { name }, range);
            resolved = false;
        }
        resolved
    }
}
