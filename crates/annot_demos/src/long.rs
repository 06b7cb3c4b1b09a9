//! A component with a longer signature: array parameters and a default.

use std::fmt;
use std::sync::OnceLock;

use annot_core::{
    Anno, AnnoResult, Bound, CallArgs, CallTyped, ElementType, Signature, SignatureBuilder,
};

/// A scan definition over one or more axes.
pub struct Long {
    bound: Bound<'static>,
}

impl CallTyped for Long {
    fn call_types() -> &'static Signature {
        static TYPES: OnceLock<Signature> = OnceLock::new();
        TYPES.get_or_init(|| {
            SignatureBuilder::new("Long")
                .declare(Anno::new("axes", ElementType::Str, "The axes to move").array())
                .declare(Anno::new("units", ElementType::Str, "The units for each axis").array())
                .declare(
                    Anno::new("start", ElementType::Float, "The start positions").array(),
                )
                .declare(Anno::new("stop", ElementType::Float, "The stop positions").array())
                .declare(Anno::new("size", ElementType::Int, "The number of points"))
                .declare(
                    Anno::new(
                        "alternate",
                        ElementType::Bool,
                        "Whether to reverse on alternate runs",
                    )
                    .default_value(false),
                )
                .finish()
                .unwrap_or_else(|err| panic!("Long call types: {err}"))
        })
    }
}

impl Long {
    pub fn new(args: CallArgs) -> AnnoResult<Self> {
        Ok(Long {
            bound: Self::call_types().bind(args)?,
        })
    }

    pub fn axes(&self) -> Vec<String> {
        self.bound.texts("axes")
    }

    pub fn units(&self) -> Vec<String> {
        self.bound.texts("units")
    }

    pub fn start(&self) -> Vec<f64> {
        self.bound.floats("start")
    }

    pub fn stop(&self) -> Vec<f64> {
        self.bound.floats("stop")
    }

    pub fn size(&self) -> i64 {
        self.bound.int("size")
    }

    pub fn alternate(&self) -> bool {
        self.bound.flag("alternate")
    }
}

impl fmt::Display for Long {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bound)
    }
}
