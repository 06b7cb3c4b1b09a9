//! The annotation descriptor for a single parameter.
//!
//! An [`Anno`] carries everything callers need to know about one parameter:
//! its element type, scalar/array cardinality, a human-readable description,
//! and an optional default. Descriptors are immutable once declared and are
//! shared as `Arc<Anno>`; equality for override detection is allocation
//! identity, never field-by-field comparison, so two independently written
//! descriptors with identical fields stay distinct.

use std::sync::Arc;

use crate::errors::{coercion_mismatch, not_a_member, AnnoResult};
use crate::value::{int_to_float, ElementType, Value};

/// Metadata for one call parameter.
#[derive(Debug)]
pub struct Anno {
    name: String,
    typ: ElementType,
    is_array: bool,
    description: String,
    default: Option<Value>,
}

impl Anno {
    /// Declare a scalar, mandatory parameter.
    pub fn new(
        name: impl Into<String>,
        typ: ElementType,
        description: impl Into<String>,
    ) -> Self {
        Anno {
            name: name.into(),
            typ,
            is_array: false,
            description: description.into(),
            default: None,
        }
    }

    /// Mark the parameter as an ordered sequence of the element type.
    ///
    /// Scalar inputs of arity one are promoted to a one-element sequence
    /// during coercion.
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Attach a default raw value, making the parameter optional.
    ///
    /// The default passes through [`Anno::coerce`] like any supplied value
    /// when it is substituted at bind time.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// The parameter name this descriptor was declared under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared element type.
    pub fn typ(&self) -> &ElementType {
        &self.typ
    }

    /// Whether the canonical value is a sequence of the element type.
    pub fn is_array(&self) -> bool {
        self.is_array
    }

    /// The human-readable description.
    pub fn describe(&self) -> &str {
        &self.description
    }

    /// The declared default raw value, if any.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Coerce a raw value to the canonical typed value.
    ///
    /// Array descriptors accept a single scalar (promoted to a one-element
    /// sequence) or an explicit sequence coerced element-wise in order.
    pub fn coerce(&self, raw: Value) -> AnnoResult<Value> {
        if self.is_array {
            let items = match raw {
                Value::Array(items) => items,
                scalar => vec![scalar],
            };
            let coerced = items
                .into_iter()
                .map(|item| self.coerce_scalar(item))
                .collect::<AnnoResult<Vec<Value>>>()?;
            Ok(Value::Array(coerced))
        } else {
            self.coerce_scalar(raw)
        }
    }

    fn coerce_scalar(&self, raw: Value) -> AnnoResult<Value> {
        match (&self.typ, raw) {
            (ElementType::Str, Value::Str(s)) => Ok(Value::Str(s)),
            (ElementType::Int, Value::Int(n)) => Ok(Value::Int(n)),
            (ElementType::Float, Value::Float(x)) => Ok(Value::Float(x)),
            (ElementType::Float, Value::Int(n)) => Ok(Value::Float(int_to_float(n))),
            (ElementType::Bool, Value::Bool(b)) => Ok(Value::Bool(b)),
            (ElementType::Enum(e), raw) => {
                let member = match &raw {
                    Value::Enum(m) if Arc::ptr_eq(m.enum_type(), e) => Some(m.clone()),
                    Value::Str(name) => e.member(name),
                    Value::Int(ordinal) => e.member_with_ordinal(*ordinal),
                    _ => None,
                };
                member
                    .map(Value::Enum)
                    .ok_or_else(|| not_a_member(&self.name, &self.typ, &raw))
            }
            (typ, other) => Err(coercion_mismatch(&self.name, &typ.to_string(), &other)),
        }
    }
}

#[cfg(test)]
mod tests;
