//! Compile-time constants and range checks.

use rowan::TextRange;

use crate::diagnostics::Diagnostics;
use crate::{TypeError, TypeKind};

/// A compile-time scalar value.
///
/// Used for default parameter values and for range checks against a target
/// integer or real kind.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Const {
    Int(i64),
    Uint(u64),
    /// Pointer stored as an integer (only `null` at compile time).
    Ptr(i64),
    Real(f64),
}

impl Const {
    /// Integral view of the constant, exact for every integer variant.
    ///
    /// Reals are truncated toward zero; `None` for NaN or infinities.
    fn as_i128(self) -> Option<i128> {
        match self {
            Self::Int(v) | Self::Ptr(v) => Some(i128::from(v)),
            Self::Uint(v) => Some(i128::from(v)),
            Self::Real(v) if v.is_finite() => Some(v.trunc() as i128),
            Self::Real(_) => None,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) | Self::Ptr(v) => v as f64,
            Self::Uint(v) => v as f64,
            Self::Real(v) => v,
        }
    }
}

/// Whether `value` falls outside the range representable by `kind`.
///
/// `void` never accepts a value. Kinds without a numeric range (pointers,
/// aggregates, `bool`) never overflow.
pub fn overflow(kind: TypeKind, value: Const) -> bool {
    let int_range = |min: i128, max: i128| match value.as_i128() {
        Some(v) => v < min || v > max,
        None => true,
    };

    match kind {
        TypeKind::Void => true,
        TypeKind::Int8 => int_range(i8::MIN.into(), i8::MAX.into()),
        TypeKind::Int16 => int_range(i16::MIN.into(), i16::MAX.into()),
        TypeKind::Int32 => int_range(i32::MIN.into(), i32::MAX.into()),
        TypeKind::Int => int_range(i64::MIN.into(), i64::MAX.into()),
        TypeKind::Uint8 | TypeKind::Char => int_range(0, u8::MAX.into()),
        TypeKind::Uint16 => int_range(0, u16::MAX.into()),
        TypeKind::Uint32 => int_range(0, u32::MAX.into()),
        TypeKind::Uint => int_range(0, u64::MAX.into()),
        TypeKind::Real32 => {
            let v = value.as_f64();
            v.is_finite() && v.abs() > f64::from(f32::MAX)
        }
        _ => false,
    }
}

/// Check that `value` fits `kind`, reporting `ConstantOverflow` otherwise.
pub fn assert_no_overflow(
    diag: &mut Diagnostics,
    range: TextRange,
    kind: TypeKind,
    value: Const,
) -> bool {
    let fits = !overflow(kind, value);
    if !fits {
        diag.report_error(&TypeError::Overflow { kind }, range);
    }
    fits
}
