//! The smallest useful call-typed component: an exposure and a file path.

use std::fmt;
use std::fs;
use std::io;
use std::sync::OnceLock;

use annot_core::{
    Anno, AnnoResult, Bound, CallArgs, CallTyped, ElementType, Signature, SignatureBuilder,
};

/// Writes one data line to a configured path.
pub struct Simple {
    bound: Bound<'static>,
}

impl CallTyped for Simple {
    fn call_types() -> &'static Signature {
        static TYPES: OnceLock<Signature> = OnceLock::new();
        TYPES.get_or_init(|| {
            SignatureBuilder::new("Simple")
                .declare(Anno::new(
                    "exposure",
                    ElementType::Float,
                    "The exposure to be active for",
                ))
                .declare(Anno::new("path", ElementType::Str, "The path to write to"))
                .finish()
                .unwrap_or_else(|err| panic!("Simple call types: {err}"))
        })
    }
}

impl Simple {
    pub fn new(args: CallArgs) -> AnnoResult<Self> {
        Ok(Simple {
            bound: Self::call_types().bind(args)?,
        })
    }

    pub fn exposure(&self) -> f64 {
        self.bound.float("exposure")
    }

    pub fn path(&self) -> &str {
        self.bound.text("path")
    }

    /// Persist one data line at the configured path.
    pub fn write_data(&self, data: &str) -> io::Result<()> {
        fs::write(self.path(), format!("Data: {data}\n"))
    }
}

impl fmt::Display for Simple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bound)
    }
}
