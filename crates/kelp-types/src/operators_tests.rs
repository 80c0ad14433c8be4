use kelp_core::TokenKind;

use crate::test_utils::{Fixture, range};
use crate::{DiagnosticKind, TypeKind};

#[test]
fn arithmetic() {
    for op in [TokenKind::Minus, TokenKind::Mul, TokenKind::Div, TokenKind::Mod] {
        assert!(TypeKind::Int.accepts_operator(op));
        assert!(TypeKind::Real32.accepts_operator(op));
        assert!(!TypeKind::Str.accepts_operator(op));
        assert!(!TypeKind::Bool.accepts_operator(op));
        assert!(!TypeKind::Char.accepts_operator(op));
    }
}

#[test]
fn plus_concatenates_strings() {
    assert!(TypeKind::Str.accepts_operator(TokenKind::Plus));
    assert!(TypeKind::Str.accepts_operator(TokenKind::PlusEq));
    assert!(!TypeKind::Str.accepts_operator(TokenKind::MinusEq));
    assert!(!TypeKind::Ptr.accepts_operator(TokenKind::Plus));
}

#[test]
fn bitwise_needs_integer() {
    for op in [
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Xor,
        TokenKind::Shl,
        TokenKind::ShrEq,
        TokenKind::PlusPlus,
        TokenKind::MinusMinus,
    ] {
        assert!(TypeKind::Uint8.accepts_operator(op), "{op}");
        assert!(!TypeKind::Real.accepts_operator(op), "{op}");
        assert!(!TypeKind::Char.accepts_operator(op), "{op}");
    }
}

#[test]
fn logical_needs_bool() {
    for op in [TokenKind::AndAnd, TokenKind::OrOr, TokenKind::Not] {
        assert!(TypeKind::Bool.accepts_operator(op));
        assert!(!TypeKind::Int.accepts_operator(op));
    }
}

#[test]
fn equality() {
    for kind in [
        TypeKind::Char,
        TypeKind::Int16,
        TypeKind::Real,
        TypeKind::Bool,
        TypeKind::Ptr,
        TypeKind::Str,
        TypeKind::DynArray,
        TypeKind::Fn,
        TypeKind::Interface,
        TypeKind::Struct,
    ] {
        assert!(kind.accepts_operator(TokenKind::EqEq), "{kind}");
        assert!(kind.accepts_operator(TokenKind::NotEq), "{kind}");
    }
    assert!(!TypeKind::Array.accepts_operator(TokenKind::EqEq));
    assert!(!TypeKind::Fiber.accepts_operator(TokenKind::EqEq));
    assert!(!TypeKind::Void.accepts_operator(TokenKind::EqEq));
}

#[test]
fn ordering() {
    for op in [
        TokenKind::Less,
        TokenKind::LessEq,
        TokenKind::Greater,
        TokenKind::GreaterEq,
    ] {
        assert!(TypeKind::Char.accepts_operator(op));
        assert!(TypeKind::Real.accepts_operator(op));
        assert!(TypeKind::Str.accepts_operator(op));
        assert!(!TypeKind::Bool.accepts_operator(op));
        assert!(!TypeKind::Ptr.accepts_operator(op));
    }
}

#[test]
fn plain_assignment_is_never_valid() {
    assert!(!TypeKind::Int.accepts_operator(TokenKind::Eq));
    assert!(!TypeKind::Str.accepts_operator(TokenKind::Eq));
}

#[test]
fn assert_valid_operator_reports() {
    let mut f = Fixture::new();
    let flag = f.scalar(TypeKind::Bool);

    assert!(f.types.valid_operator(flag, TokenKind::Not));
    assert!(!f.types.assert_valid_operator(&mut f.diag, range(), flag, TokenKind::Shl));
    assert_eq!(f.diag.kinds(), vec![DiagnosticKind::InvalidOperator]);
    insta::assert_snapshot!(
        f.diag.render(),
        @"error at 0..4: invalid operator: `<<` is not applicable to `bool`"
    );
}
