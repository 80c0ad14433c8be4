//! Kelp type system: the registry of type descriptors and every rule the
//! compiler asks of it.
//!
//! - **Registry**: a block-scoped arena of [`Type`] nodes addressed by
//!   [`TypeId`], released in bulk when a block closes
//! - **Layout**: sizes, alignments, field offsets and call-frame sizes
//! - **Rules**: structural equivalence, compatibility, operator legality,
//!   constant overflow and forward resolution
//!
//! Every check that can fail comes in two flavours: a plain query returning
//! `bool`/`Option`, and an `assert_*` (or reporting) variant that records a
//! diagnostic in a caller-supplied [`Diagnostics`].
//!
//! ```
//! use kelp_types::{BlockId, Diagnostics, TypeKind, TypeRegistry};
//! use rowan::TextRange;
//!
//! let mut types = TypeRegistry::new();
//! let mut diag = Diagnostics::new();
//! let range = TextRange::default();
//!
//! let int8 = types.add(BlockId::MODULE, TypeKind::Int8);
//! let int32 = types.add(BlockId::MODULE, TypeKind::Int32);
//! let point = types.add(BlockId::MODULE, TypeKind::Struct);
//! types.add_field(&mut diag, range, point, int8, "a");
//! types.add_field(&mut diag, range, point, int32, "b");
//!
//! assert_eq!(types.size(&mut diag, range, point), Some(8));
//! assert!(diag.is_empty());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod constant;
pub mod diagnostics;
pub mod error;
pub mod kind;
pub mod layout;
pub mod types;

mod equivalence;
mod forward;
mod invariants;
mod members;
mod operators;
mod predicates;
mod registry;
mod spelling;

#[cfg(test)]
mod forward_tests;
#[cfg(test)]
mod operators_tests;
#[cfg(test)]
mod predicates_tests;
#[cfg(test)]
mod registry_tests;
#[cfg(test)]
mod test_utils;

pub use config::Limits;
pub use constant::{Const, assert_no_overflow, overflow};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use error::{MemberKind, TypeError};
pub use kind::TypeKind;
pub use layout::{DYNARRAY_HEADER_SIZE, INTERFACE_HEADER_SIZE, POINTER_SIZE, SLOT_SIZE};
pub use registry::TypeRegistry;
pub use types::{BaseRef, BlockId, Field, Members, Param, Payload, Signature, Type, TypeId};
