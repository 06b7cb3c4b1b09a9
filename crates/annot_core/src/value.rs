//! Runtime values for call-typed parameters.
//!
//! The value model is a small closed set: scalar strings, integers, floats,
//! booleans, members of runtime-declared enumerations, and ordered arrays of
//! those scalars. Canonical rendering is implemented here as an explicit
//! per-variant formatter so that a bound parameter always prints the same way
//! in logs and debug output:
//!
//! - strings are single-quoted: `'x'`
//! - floats always show a decimal point: `0.1`, `3.0`
//! - enum members show their qualified form: `<Status.good: 0>`
//! - arrays render tuple-style with a trailing comma when single-element:
//!   `('x',)`

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A runtime-declared enumeration type: a name plus ordered members.
///
/// Enumerations are declared once by the component that owns them and shared
/// by `Arc`; two enumeration types are the same type only when they are the
/// same allocation.
#[derive(Debug)]
pub struct EnumType {
    name: String,
    members: Vec<(String, i64)>,
}

impl EnumType {
    /// Declare an enumeration from `(member name, ordinal)` pairs.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        members: impl IntoIterator<Item = (S, i64)>,
    ) -> Arc<Self> {
        Arc::new(EnumType {
            name: name.into(),
            members: members
                .into_iter()
                .map(|(name, ordinal)| (name.into(), ordinal))
                .collect(),
        })
    }

    /// The enumeration's type name, e.g. `Status`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterate declared members in declaration order.
    pub fn members(&self) -> impl Iterator<Item = (&str, i64)> {
        self.members
            .iter()
            .map(|(name, ordinal)| (name.as_str(), *ordinal))
    }

    /// Look up a member by name.
    pub fn member(self: &Arc<Self>, name: &str) -> Option<EnumMember> {
        let index = self.members.iter().position(|(n, _)| n == name)?;
        Some(EnumMember {
            typ: Arc::clone(self),
            index,
        })
    }

    /// Look up a member by ordinal value.
    pub fn member_with_ordinal(self: &Arc<Self>, ordinal: i64) -> Option<EnumMember> {
        let index = self.members.iter().position(|(_, v)| *v == ordinal)?;
        Some(EnumMember {
            typ: Arc::clone(self),
            index,
        })
    }
}

/// One member of an [`EnumType`].
///
/// Members compare equal only when they come from the same enumeration
/// allocation and have the same position.
#[derive(Debug, Clone)]
pub struct EnumMember {
    typ: Arc<EnumType>,
    index: usize,
}

impl EnumMember {
    /// The enumeration this member belongs to.
    pub fn enum_type(&self) -> &Arc<EnumType> {
        &self.typ
    }

    /// The member's declared name.
    pub fn name(&self) -> &str {
        &self.typ.members[self.index].0
    }

    /// The member's declared ordinal value.
    pub fn ordinal(&self) -> i64 {
        self.typ.members[self.index].1
    }
}

impl PartialEq for EnumMember {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.typ, &other.typ) && self.index == other.index
    }
}

impl fmt::Display for EnumMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}.{}: {}>", self.typ.name(), self.name(), self.ordinal())
    }
}

/// The semantic scalar type of one parameter.
///
/// Enumeration types compare by allocation identity: a descriptor declared
/// against one `EnumType` never accepts members of a structurally identical
/// but separately declared enumeration.
#[derive(Debug, Clone)]
pub enum ElementType {
    /// String parameter.
    Str,
    /// Integer parameter.
    Int,
    /// Floating-point parameter. Integer inputs promote losslessly.
    Float,
    /// Boolean parameter.
    Bool,
    /// Member of a runtime-declared enumeration.
    Enum(Arc<EnumType>),
}

impl PartialEq for ElementType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ElementType::Str, ElementType::Str)
            | (ElementType::Int, ElementType::Int)
            | (ElementType::Float, ElementType::Float)
            | (ElementType::Bool, ElementType::Bool) => true,
            (ElementType::Enum(a), ElementType::Enum(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Str => write!(f, "str"),
            ElementType::Int => write!(f, "int"),
            ElementType::Float => write!(f, "float"),
            ElementType::Bool => write!(f, "bool"),
            ElementType::Enum(e) => write!(f, "{}", e.name()),
        }
    }
}

/// A runtime parameter value, raw or coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// String value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Enumeration member.
    Enum(EnumMember),
    /// Ordered sequence of scalar values.
    Array(Vec<Value>),
}

impl Value {
    /// Create a string value.
    #[inline]
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Create an array value.
    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(items)
    }

    /// The value's type label, used in error messages.
    pub fn type_name(&self) -> Cow<'_, str> {
        match self {
            Value::Str(_) => Cow::Borrowed("str"),
            Value::Int(_) => Cow::Borrowed("int"),
            Value::Float(_) => Cow::Borrowed("float"),
            Value::Bool(_) => Cow::Borrowed("bool"),
            Value::Enum(m) => Cow::Borrowed(m.enum_type().name()),
            Value::Array(_) => Cow::Borrowed("array"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<EnumMember> for Value {
    fn from(m: EnumMember) -> Self {
        Value::Enum(m)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => {
                write!(f, "'")?;
                for c in s.chars() {
                    match c {
                        '\'' => write!(f, "\\'")?,
                        '\\' => write!(f, "\\\\")?,
                        _ => write!(f, "{c}")?,
                    }
                }
                write!(f, "'")
            }
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => {
                // Integral floats keep their decimal point: 3.0, not 3.
                if x.is_finite() && x.fract() == 0.0 {
                    write!(f, "{x:.1}")
                } else {
                    write!(f, "{x}")
                }
            }
            Value::Bool(b) => write!(f, "{b}"),
            Value::Enum(m) => write!(f, "{m}"),
            Value::Array(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Convert an integer to a float without tripping precision-loss casts.
///
/// Small integers take the lossless `i32` path; larger magnitudes round
/// through a string parse, matching `as f64` rounding within f64 precision.
pub(crate) fn int_to_float(n: i64) -> f64 {
    if let Ok(small) = i32::try_from(n) {
        f64::from(small)
    } else {
        format!("{n}").parse().unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests;
