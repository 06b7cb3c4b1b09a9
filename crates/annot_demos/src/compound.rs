//! Composition: a component that re-exposes an inner component's signature.

use std::fmt;
use std::io;
use std::sync::OnceLock;

use annot_core::{
    AnnoResult, Bound, CallArgs, CallTyped, Composition, Signature, SignatureBuilder,
};

use crate::simple::Simple;

/// Wraps a [`Simple`] without re-authoring its parameter metadata.
///
/// Both parameters are re-exported from the inner signature, shared rather
/// than copied, and redistributed to the inner construction at call time.
pub struct Compound {
    bound: Bound<'static>,
    inner: Simple,
}

fn parts() -> &'static (Signature, Composition) {
    static PARTS: OnceLock<(Signature, Composition)> = OnceLock::new();
    PARTS.get_or_init(|| {
        let mut comp = Composition::new();
        let mut builder = SignatureBuilder::new("Compound");
        comp.expose(&mut builder, Simple::call_types(), "exposure")
            .expose(&mut builder, Simple::call_types(), "path");
        let sig = builder
            .finish()
            .unwrap_or_else(|err| panic!("Compound call types: {err}"));
        (sig, comp)
    })
}

impl CallTyped for Compound {
    fn call_types() -> &'static Signature {
        &parts().0
    }
}

impl Compound {
    pub fn new(args: CallArgs) -> AnnoResult<Self> {
        let (sig, comp) = parts();
        let bound = sig.bind(args)?;
        let inner = Simple::new(comp.redistribute(&bound))?;
        Ok(Compound { bound, inner })
    }

    pub fn inner(&self) -> &Simple {
        &self.inner
    }

    pub fn exposure(&self) -> f64 {
        self.bound.float("exposure")
    }

    pub fn path(&self) -> &str {
        self.bound.text("path")
    }

    /// Delegate the write to the inner component.
    pub fn write_data(&self, data: &str) -> io::Result<()> {
        self.inner.write_data(data)
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bound)
    }
}
