//! Operator tokens.
//!
//! Only the token kinds that reach type checking are listed here. Compound
//! assignments are typed as their underlying binary operator.

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TokenKind {
    // Arithmetic
    Plus,
    Minus,
    Mul,
    Div,
    Mod,

    // Bitwise
    And,
    Or,
    Xor,
    Shl,
    Shr,

    // Compound assignment
    PlusEq,
    MinusEq,
    MulEq,
    DivEq,
    ModEq,
    AndEq,
    OrEq,
    XorEq,
    ShlEq,
    ShrEq,

    // Logical
    AndAnd,
    OrOr,
    Not,

    // Increment/decrement
    PlusPlus,
    MinusMinus,

    // Equality
    EqEq,
    NotEq,

    // Ordering
    Less,
    LessEq,
    Greater,
    GreaterEq,

    /// Plain assignment, never an operator on values.
    Eq,
}

impl TokenKind {
    /// Source spelling of the token.
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "~",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::PlusEq => "+=",
            Self::MinusEq => "-=",
            Self::MulEq => "*=",
            Self::DivEq => "/=",
            Self::ModEq => "%=",
            Self::AndEq => "&=",
            Self::OrEq => "|=",
            Self::XorEq => "~=",
            Self::ShlEq => "<<=",
            Self::ShrEq => ">>=",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::Not => "!",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::EqEq => "==",
            Self::NotEq => "!=",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
            Self::Eq => "=",
        }
    }

    /// For a compound assignment, the binary operator it applies.
    pub const fn compound_base(self) -> Option<Self> {
        match self {
            Self::PlusEq => Some(Self::Plus),
            Self::MinusEq => Some(Self::Minus),
            Self::MulEq => Some(Self::Mul),
            Self::DivEq => Some(Self::Div),
            Self::ModEq => Some(Self::Mod),
            Self::AndEq => Some(Self::And),
            Self::OrEq => Some(Self::Or),
            Self::XorEq => Some(Self::Xor),
            Self::ShlEq => Some(Self::Shl),
            Self::ShrEq => Some(Self::Shr),
            _ => None,
        }
    }

    pub fn is_compound_assignment(self) -> bool {
        self.compound_base().is_some()
    }

    pub fn is_equality(self) -> bool {
        matches!(self, Self::EqEq | Self::NotEq)
    }

    pub fn is_ordering(self) -> bool {
        matches!(
            self,
            Self::Less | Self::LessEq | Self::Greater | Self::GreaterEq
        )
    }

    /// Whether this is a comparison (`==`, `!=`, `<`, `<=`, `>`, `>=`).
    ///
    /// Comparisons produce `bool` regardless of operand type.
    pub fn is_comparison(self) -> bool {
        self.is_equality() || self.is_ordering()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}
