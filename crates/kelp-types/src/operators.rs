//! Operator legality per operand kind.

use kelp_core::TokenKind;
use rowan::TextRange;

use crate::diagnostics::Diagnostics;
use crate::types::TypeId;
use crate::{TypeError, TypeKind, TypeRegistry};

impl TypeKind {
    /// Whether operator `op` applies to operands of this kind.
    ///
    /// Compound assignments follow their binary operator. Plain assignment
    /// is not a value operator and is never valid here.
    pub fn accepts_operator(self, op: TokenKind) -> bool {
        let op = op.compound_base().unwrap_or(op);
        match op {
            TokenKind::Plus => self.is_numeric() || self == Self::Str,
            TokenKind::Minus | TokenKind::Mul | TokenKind::Div | TokenKind::Mod => {
                self.is_numeric()
            }
            TokenKind::And
            | TokenKind::Or
            | TokenKind::Xor
            | TokenKind::Shl
            | TokenKind::Shr
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus => self.is_integer(),
            TokenKind::AndAnd | TokenKind::OrOr | TokenKind::Not => self == Self::Bool,
            TokenKind::EqEq | TokenKind::NotEq => {
                self.is_ordinal()
                    || self.is_real()
                    || self == Self::Bool
                    || self.is_reference()
                    || self == Self::Struct
            }
            TokenKind::Less | TokenKind::LessEq | TokenKind::Greater | TokenKind::GreaterEq => {
                self.is_ordinal() || self.is_real() || self == Self::Str
            }
            _ => false,
        }
    }
}

impl TypeRegistry {
    /// Whether operator `op` applies to a value of type `id`.
    pub fn valid_operator(&self, id: TypeId, op: TokenKind) -> bool {
        self.kind(id).accepts_operator(op)
    }

    /// Check operator legality, reporting `InvalidOperator` on failure.
    pub fn assert_valid_operator(
        &self,
        diag: &mut Diagnostics,
        range: TextRange,
        id: TypeId,
        op: TokenKind,
    ) -> bool {
        let ok = self.valid_operator(id, op);
        if !ok {
            let error = TypeError::InvalidOperator {
                op,
                ty: self.spelling(id),
            };
            diag.report_error(&error, range);
        }
        ok
    }
}
