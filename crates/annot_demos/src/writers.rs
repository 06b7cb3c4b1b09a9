//! A call-typed factory function.
//!
//! Free functions cannot carry trait impls, so a call-typed function pairs
//! the function with a companion `*_call_types()` accessor returning the same
//! cached signature shape a [`CallTyped`](annot_core::CallTyped) type would.

use std::sync::OnceLock;

use annot_core::{
    Anno, AnnoResult, CallArgs, CallTyped, Composition, ElementType, Signature, SignatureBuilder,
};

use crate::simple::Simple;

const SUFFIXES: [&str; 2] = ["one", "two"];

fn parts() -> &'static (Signature, Composition) {
    static PARTS: OnceLock<(Signature, Composition)> = OnceLock::new();
    PARTS.get_or_init(|| {
        let mut comp = Composition::new();
        let mut builder = SignatureBuilder::new("write_all");
        comp.expose(&mut builder, Simple::call_types(), "exposure");
        builder.declare(Anno::new(
            "prefix",
            ElementType::Str,
            "The path prefix for the list of writers",
        ));
        let sig = builder
            .finish()
            .unwrap_or_else(|err| panic!("write_all call types: {err}"));
        (sig, comp)
    })
}

/// The call signature of [`write_all`].
pub fn write_all_call_types() -> &'static Signature {
    &parts().0
}

/// Construct one [`Simple`] per suffix, fanning the shared prefix out into
/// one file path per writer.
pub fn write_all(args: CallArgs) -> AnnoResult<Vec<Simple>> {
    let (sig, comp) = parts();
    let bound = sig.bind(args)?;
    let prefix = bound.text("prefix");
    SUFFIXES
        .iter()
        .map(|suffix| {
            Simple::new(
                comp.redistribute(&bound)
                    .kw("path", format!("{prefix}/{suffix}")),
            )
        })
        .collect()
}
