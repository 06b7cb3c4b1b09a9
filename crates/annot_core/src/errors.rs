//! Error types for signature declaration, coercion, and binding.
//!
//! The taxonomy follows the three failure surfaces of the mechanism:
//!
//! - **definition-time configuration errors** (conflicting declarations,
//!   empty descriptions, re-exporting an unknown parameter) surface from
//!   [`SignatureBuilder::finish`](crate::SignatureBuilder::finish);
//! - **coercion errors** (value not convertible, enum non-membership)
//!   surface while binding a call;
//! - **binding errors** (missing mandatory, unknown keyword, duplicate,
//!   excess positional) surface while matching arguments to the signature.
//!
//! All of them propagate uncaught to the caller; the mechanism never retries
//! and never defaults beyond explicitly declared default values. Factory
//! functions are the construction surface so call sites stay terse.

use crate::value::{ElementType, Value};

/// Result of a declaration, coercion, or binding step.
pub type AnnoResult<T> = Result<T, AnnoError>;

/// Error raised by the call-type mechanism.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnnoError {
    // Coercion
    #[error("cannot coerce {value} ({got}) to {expected} for parameter `{name}`")]
    CoercionMismatch {
        name: String,
        expected: String,
        got: String,
        value: String,
    },
    #[error("{value} is not a member of {enum_name} (parameter `{name}`)")]
    NotAMember {
        name: String,
        enum_name: String,
        value: String,
    },

    // Binding
    #[error("missing mandatory parameter `{name}`")]
    MissingArgument { name: String },
    #[error("unknown keyword argument `{name}`")]
    UnknownKeyword { name: String },
    #[error("parameter `{name}` supplied both positionally and by keyword")]
    DuplicateArgument { name: String },
    #[error("too many positional arguments: expected at most {expected}, got {got}")]
    ExcessPositional { expected: usize, got: usize },

    // Definition-time configuration
    #[error("conflicting declarations for parameter `{name}`: {first} vs {second}")]
    ConflictingDeclaration {
        name: String,
        first: String,
        second: String,
    },
    #[error("parameter `{name}` has an empty description")]
    EmptyDescription { name: String },
    #[error("no parameter `{name}` in the call types of {type_name}")]
    NoSuchParameter { type_name: String, name: String },
}

/// A supplied value cannot be converted to the declared element type.
pub fn coercion_mismatch(name: &str, expected: &str, value: &Value) -> AnnoError {
    AnnoError::CoercionMismatch {
        name: name.to_owned(),
        expected: expected.to_owned(),
        got: value.type_name().into_owned(),
        value: value.to_string(),
    }
}

/// A supplied value is not a member of the declared enumeration.
pub fn not_a_member(name: &str, typ: &ElementType, value: &Value) -> AnnoError {
    AnnoError::NotAMember {
        name: name.to_owned(),
        enum_name: typ.to_string(),
        value: value.to_string(),
    }
}

/// A mandatory parameter was neither supplied nor defaulted.
pub fn missing_argument(name: &str) -> AnnoError {
    AnnoError::MissingArgument {
        name: name.to_owned(),
    }
}

/// A keyword argument does not name any signature parameter.
pub fn unknown_keyword(name: &str) -> AnnoError {
    AnnoError::UnknownKeyword {
        name: name.to_owned(),
    }
}

/// A parameter received both a positional and a keyword value.
pub fn duplicate_argument(name: &str) -> AnnoError {
    AnnoError::DuplicateArgument {
        name: name.to_owned(),
    }
}

/// More positional arguments than signature parameters.
pub fn excess_positional(expected: usize, got: usize) -> AnnoError {
    AnnoError::ExcessPositional { expected, got }
}

/// Two unrelated declarations collide under different element types.
pub fn conflicting_declaration(
    name: &str,
    first: &ElementType,
    second: &ElementType,
) -> AnnoError {
    AnnoError::ConflictingDeclaration {
        name: name.to_owned(),
        first: first.to_string(),
        second: second.to_string(),
    }
}

/// Descriptors must carry a non-empty description.
pub fn empty_description(name: &str) -> AnnoError {
    AnnoError::EmptyDescription {
        name: name.to_owned(),
    }
}

/// A composition re-export named a parameter the inner signature lacks.
pub fn no_such_parameter(type_name: &str, name: &str) -> AnnoError {
    AnnoError::NoSuchParameter {
        type_name: type_name.to_owned(),
        name: name.to_owned(),
    }
}
