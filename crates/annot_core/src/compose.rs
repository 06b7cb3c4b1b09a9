//! Composition of call types.
//!
//! A component that internally constructs other call-typed objects can
//! re-expose a subset of the inner signatures as its own, optionally under a
//! renamed or prefixed key, without re-authoring the metadata. The exposed
//! descriptors are the inner `Arc<Anno>`s themselves (shared, not copied),
//! so description, type, and default stay consistent with the source of
//! truth.
//!
//! [`Composition`] records each re-export while it adds the descriptor to
//! the outer [`SignatureBuilder`]; at call time, [`Composition::redistribute`]
//! reverses the map, turning bound outer values into keyword arguments for
//! the inner construction. Inner-only parameters are left to the inner
//! signature's own defaults or to keywords added by the composing code.

use std::sync::Arc;

use crate::bind::{Bound, CallArgs};
use crate::errors::no_such_parameter;
use crate::signature::{Signature, SignatureBuilder};

#[derive(Debug)]
struct Binding {
    outer: String,
    inner: String,
}

/// The outer-name → inner-name map for one composed sub-object.
#[derive(Debug, Default)]
pub struct Composition {
    bindings: Vec<Binding>,
}

impl Composition {
    /// Start an empty composition map.
    pub fn new() -> Self {
        Composition::default()
    }

    /// Re-expose an inner parameter under its own name.
    pub fn expose(
        &mut self,
        builder: &mut SignatureBuilder,
        inner: &Signature,
        name: &str,
    ) -> &mut Self {
        self.expose_as(builder, inner, name, name)
    }

    /// Re-expose an inner parameter under a transformed outer name.
    pub fn expose_as(
        &mut self,
        builder: &mut SignatureBuilder,
        inner: &Signature,
        inner_name: &str,
        outer_name: &str,
    ) -> &mut Self {
        match inner.get(inner_name) {
            Some(anno) => {
                builder.declare_shared(outer_name, Arc::clone(anno));
                self.bindings.push(Binding {
                    outer: outer_name.to_owned(),
                    inner: inner_name.to_owned(),
                });
            }
            None => {
                builder.fail(no_such_parameter(inner.type_name(), inner_name));
            }
        }
        self
    }

    /// Re-expose an inner parameter under `<prefix>_<name>`.
    pub fn expose_prefixed(
        &mut self,
        builder: &mut SignatureBuilder,
        inner: &Signature,
        inner_name: &str,
        prefix: &str,
    ) -> &mut Self {
        let outer_name = format!("{prefix}_{inner_name}");
        self.expose_as(builder, inner, inner_name, &outer_name)
    }

    /// Turn bound outer values back into keyword arguments for the inner
    /// construction. Values are already canonical, so the inner coercion is
    /// a no-op on them.
    pub fn redistribute(&self, outer: &Bound<'_>) -> CallArgs {
        let mut args = CallArgs::new();
        for binding in &self.bindings {
            if let Some(value) = outer.value(&binding.outer) {
                args = args.kw(binding.inner.clone(), value.clone());
            }
        }
        args
    }
}
