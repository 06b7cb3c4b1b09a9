//! Declarative call-type annotations.
//!
//! This crate provides:
//! - Runtime parameter values and element types (`Value`, `ElementType`,
//!   `EnumType`)
//! - The per-parameter annotation descriptor (`Anno`) with scalar/array
//!   cardinality and automatic coercion
//! - Ordered signature merging across base levels (`Signature`,
//!   `SignatureBuilder`)
//! - Call-time binding with defaults, coercion, and a canonical
//!   `TypeName(k=v, ...)` representation (`CallArgs`, `Bound`)
//! - Composition: re-exposing inner signatures, shared and possibly renamed,
//!   as an outer one (`Composition`)
//!
//! # Architecture
//!
//! Components declare a descriptor per constructor parameter, in the exact
//! order callers supply them positionally. The merge over base levels is an
//! explicit ordered fold, not language-level inheritance: first occurrence
//! of a name fixes its position, redeclaration replaces in place, additions
//! append. The result is computed once per type and never mutated, so it is
//! safe to read from any thread.
//!
//! # Declaring a call-typed component
//!
//! ```
//! use std::sync::OnceLock;
//!
//! use annot_core::{Anno, CallArgs, CallTyped, ElementType, Signature, SignatureBuilder};
//!
//! struct Simple;
//!
//! impl CallTyped for Simple {
//!     fn call_types() -> &'static Signature {
//!         static TYPES: OnceLock<Signature> = OnceLock::new();
//!         TYPES.get_or_init(|| {
//!             SignatureBuilder::new("Simple")
//!                 .declare(Anno::new(
//!                     "exposure",
//!                     ElementType::Float,
//!                     "The exposure to be active for",
//!                 ))
//!                 .declare(Anno::new("path", ElementType::Str, "The path to write to"))
//!                 .finish()
//!                 .unwrap_or_else(|err| panic!("Simple call types: {err}"))
//!         })
//!     }
//! }
//!
//! let bound = Simple::call_types()
//!     .bind(CallArgs::new().pos(0.1).pos("/tmp/fname.txt"))?;
//! assert_eq!(bound.to_string(), "Simple(exposure=0.1, path='/tmp/fname.txt')");
//! # Ok::<(), annot_core::AnnoError>(())
//! ```

mod anno;
mod bind;
mod compose;
mod errors;
mod signature;
mod value;

pub use anno::Anno;
pub use bind::{Bound, CallArgs};
pub use compose::Composition;
pub use errors::{AnnoError, AnnoResult};
pub use signature::{Signature, SignatureBuilder};
pub use value::{ElementType, EnumMember, EnumType, Value};

// Re-export error constructors for use by consuming crates
pub use errors::{
    coercion_mismatch, conflicting_declaration, duplicate_argument, empty_description,
    excess_positional, missing_argument, no_such_parameter, not_a_member, unknown_keyword,
};

/// The behavior a call-typed component type acquires.
///
/// Implementors compute their merged signature once, inside a `OnceLock`
/// initializer, and hand out the cached reference forever after. A
/// definition-time configuration error (conflicting declarations, empty
/// description) is a programming error; the conventional initializer panics
/// with the error message, which is the closest analogue of failing at type
/// definition.
pub trait CallTyped {
    /// The finalized, ordered call signature of this type.
    fn call_types() -> &'static Signature;
}
