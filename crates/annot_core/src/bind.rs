//! Call-time argument binding.
//!
//! [`CallArgs`] carries the raw positional and keyword arguments of one
//! construction or call. [`Signature::bind`] matches them against the
//! signature in declared order, substitutes defaults for omitted optional
//! parameters, coerces every value through its descriptor, and produces a
//! [`Bound`]: the per-call coerced state. `Display` on `Bound` is the
//! canonical representation, `TypeName(k1=v1, k2=v2)`, strictly in signature
//! order.

use std::fmt;

use smallvec::SmallVec;

use crate::errors::{
    duplicate_argument, excess_positional, missing_argument, unknown_keyword, AnnoResult,
};
use crate::signature::Signature;
use crate::value::{EnumMember, Value};

/// Raw arguments for one call: positional values in order, then keywords.
#[derive(Debug, Default)]
pub struct CallArgs {
    positional: SmallVec<[Value; 4]>,
    keyword: SmallVec<[(String, Value); 4]>,
}

impl CallArgs {
    /// Start an empty argument list.
    pub fn new() -> Self {
        CallArgs::default()
    }

    /// Append a positional argument.
    pub fn pos(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Append a keyword argument.
    pub fn kw(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.push((name.into(), value.into()));
        self
    }
}

impl Signature {
    /// Bind raw arguments against this signature.
    ///
    /// Walks the signature in declared order: each parameter takes its
    /// positional value, its keyword value, or its declared default;
    /// anything else is a binding error. Every accepted value passes through
    /// its descriptor's coercion before it is stored.
    pub fn bind(&self, args: CallArgs) -> AnnoResult<Bound<'_>> {
        if args.positional.len() > self.len() {
            return Err(excess_positional(self.len(), args.positional.len()));
        }

        let mut slots: Vec<Option<Value>> = Vec::with_capacity(self.len());
        slots.resize_with(self.len(), || None);
        for (i, value) in args.positional.into_iter().enumerate() {
            slots[i] = Some(value);
        }
        for (name, value) in args.keyword {
            let Some(i) = self.position(&name) else {
                return Err(unknown_keyword(&name));
            };
            if slots[i].is_some() {
                return Err(duplicate_argument(&name));
            }
            slots[i] = Some(value);
        }

        let mut values = Vec::with_capacity(self.len());
        for (i, slot) in slots.into_iter().enumerate() {
            let (key, anno) = self.entry(i);
            let raw = match slot {
                Some(value) => value,
                None => match anno.default() {
                    Some(default) => default.clone(),
                    None => return Err(missing_argument(key)),
                },
            };
            values.push(anno.coerce(raw)?);
        }
        tracing::trace!(type_name = %self.type_name(), "bound call arguments");
        Ok(Bound { sig: self, values })
    }
}

/// The coerced state of one successful call.
///
/// Every signature parameter has exactly one value, in signature order. The
/// typed accessors panic on a name or shape the signature does not declare;
/// that is a programming error at the consuming component, not a runtime
/// condition, since binding already guaranteed presence and type.
#[derive(Debug)]
pub struct Bound<'a> {
    sig: &'a Signature,
    values: Vec<Value>,
}

impl<'a> Bound<'a> {
    /// The signature this state was bound against.
    pub fn signature(&self) -> &'a Signature {
        self.sig
    }

    /// The coerced value for a parameter name, if the signature declares it.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.sig.position(name).map(|i| &self.values[i])
    }

    /// `(name, coerced value)` pairs in signature order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.sig.names().zip(self.values.iter())
    }

    #[track_caller]
    fn lookup(&self, name: &str) -> &Value {
        match self.value(name) {
            Some(value) => value,
            None => panic!(
                "no parameter `{name}` in the call types of {}",
                self.sig.type_name()
            ),
        }
    }

    /// The float value of `name`.
    #[track_caller]
    pub fn float(&self, name: &str) -> f64 {
        match self.lookup(name) {
            Value::Float(x) => *x,
            other => panic!("parameter `{name}` is not a float: {other}"),
        }
    }

    /// The integer value of `name`.
    #[track_caller]
    pub fn int(&self, name: &str) -> i64 {
        match self.lookup(name) {
            Value::Int(n) => *n,
            other => panic!("parameter `{name}` is not an int: {other}"),
        }
    }

    /// The boolean value of `name`.
    #[track_caller]
    pub fn flag(&self, name: &str) -> bool {
        match self.lookup(name) {
            Value::Bool(b) => *b,
            other => panic!("parameter `{name}` is not a bool: {other}"),
        }
    }

    /// The string value of `name`.
    #[track_caller]
    pub fn text(&self, name: &str) -> &str {
        match self.lookup(name) {
            Value::Str(s) => s.as_str(),
            other => panic!("parameter `{name}` is not a str: {other}"),
        }
    }

    /// The enumeration member bound to `name`.
    #[track_caller]
    pub fn member(&self, name: &str) -> &EnumMember {
        match self.lookup(name) {
            Value::Enum(m) => m,
            other => panic!("parameter `{name}` is not an enum member: {other}"),
        }
    }

    /// The array value of `name`.
    #[track_caller]
    pub fn items(&self, name: &str) -> &[Value] {
        match self.lookup(name) {
            Value::Array(items) => items.as_slice(),
            other => panic!("parameter `{name}` is not an array: {other}"),
        }
    }

    /// The elements of a string-array parameter, cloned out.
    #[track_caller]
    pub fn texts(&self, name: &str) -> Vec<String> {
        self.items(name)
            .iter()
            .map(|item| match item {
                Value::Str(s) => s.clone(),
                other => panic!("element of `{name}` is not a str: {other}"),
            })
            .collect()
    }

    /// The elements of a float-array parameter, copied out.
    #[track_caller]
    pub fn floats(&self, name: &str) -> Vec<f64> {
        self.items(name)
            .iter()
            .map(|item| match item {
                Value::Float(x) => *x,
                other => panic!("element of `{name}` is not a float: {other}"),
            })
            .collect()
    }
}

impl fmt::Display for Bound<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.sig.type_name())?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        write!(f, ")")
    }
}
