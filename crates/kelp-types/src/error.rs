use kelp_core::TokenKind;

use crate::TypeKind;
use crate::diagnostics::DiagnosticKind;

/// Which member table an error refers to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MemberKind {
    Field,
    Method,
    Param,
    Result,
}

impl MemberKind {
    pub fn noun(self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::Method => "method",
            Self::Param => "parameter",
            Self::Result => "result",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Self::Field => "fields",
            Self::Method => "methods",
            Self::Param => "parameters",
            Self::Result => "results",
        }
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.noun())
    }
}

/// Structured failure of a type system check.
///
/// Type names are carried pre-spelled so the error outlives the nodes it
/// mentions (block teardown may release them before the error is rendered).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    #[error("`{name}` is declared but never defined")]
    UnresolvedForward { name: String },

    #[error("expected `{expected}`, found `{found}`")]
    Mismatch { expected: String, found: String },

    #[error("`{op}` is not applicable to `{ty}`")]
    InvalidOperator { op: TokenKind, ty: String },

    #[error("{member} `{name}` is already declared")]
    DuplicateMember { member: MemberKind, name: String },

    #[error("more than {limit} {}", .member.plural())]
    CapacityExceeded { member: MemberKind, limit: usize },

    #[error("{member} `{name}` does not exist in `{owner}`")]
    UnknownMember {
        member: MemberKind,
        name: String,
        owner: String,
    },

    #[error("`{ty}` has no size")]
    Unsizeable { ty: String },

    #[error("`{ty}` is too large")]
    TooLarge { ty: String },

    #[error("value does not fit in `{kind}`")]
    Overflow { kind: TypeKind },
}

impl TypeError {
    /// Diagnostic category this error is reported under.
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::UnresolvedForward { .. } => DiagnosticKind::UnresolvedForwardType,
            Self::Mismatch { .. } => DiagnosticKind::TypeMismatch,
            Self::InvalidOperator { .. } => DiagnosticKind::InvalidOperator,
            Self::DuplicateMember { .. } => DiagnosticKind::DuplicateMember,
            Self::CapacityExceeded { .. } => DiagnosticKind::CapacityExceeded,
            Self::UnknownMember { .. } => DiagnosticKind::UnknownMember,
            Self::Unsizeable { .. } | Self::TooLarge { .. } => DiagnosticKind::UnsizeableType,
            Self::Overflow { .. } => DiagnosticKind::ConstantOverflow,
        }
    }
}
