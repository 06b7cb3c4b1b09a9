//! Ordered call signatures and the merge that builds them.
//!
//! A [`Signature`] is the finalized, ordered, uniquely-keyed collection of
//! descriptors for one component type or function. It is dual-indexed: a
//! `Vec` of entries preserves declaration order and an [`FxHashMap`] gives
//! O(1) lookup by name.
//!
//! [`SignatureBuilder`] performs the merge. Base levels are fed in
//! linearized order (bases before derived) through [`SignatureBuilder::inherit`];
//! the level's own descriptors follow through [`SignatureBuilder::declare`].
//! Merge rules:
//!
//! - the first occurrence of a name establishes its position;
//! - a redeclaration from a more-derived level replaces the descriptor in
//!   place without moving it;
//! - new names append at the end in the declaring level's own order;
//! - two inherited, non-identical descriptors for one name that disagree on
//!   element type are a definition-time configuration error, reported from
//!   [`SignatureBuilder::finish`] rather than deferred to call time.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::anno::Anno;
use crate::errors::{conflicting_declaration, empty_description, AnnoError, AnnoResult};

#[derive(Debug)]
struct Entry {
    key: String,
    anno: Arc<Anno>,
}

/// The finalized, ordered call signature of a component type.
///
/// Computed once per type (consumers hold it in a `OnceLock` behind
/// [`CallTyped::call_types`](crate::CallTyped::call_types)) and read-only
/// afterward, so it may be shared freely across threads.
#[derive(Debug)]
pub struct Signature {
    type_name: String,
    entries: Vec<Entry>,
    index: FxHashMap<String, usize>,
}

impl Signature {
    /// The display name of the owning type, used in the canonical repr.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the signature declares no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a descriptor by parameter name.
    pub fn get(&self, name: &str) -> Option<&Arc<Anno>> {
        self.index.get(name).map(|&i| &self.entries[i].anno)
    }

    /// Parameter names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// `(name, descriptor)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Anno>)> {
        self.entries.iter().map(|e| (e.key.as_str(), &e.anno))
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub(crate) fn entry(&self, i: usize) -> (&str, &Arc<Anno>) {
        let e = &self.entries[i];
        (e.key.as_str(), &e.anno)
    }
}

/// Merges inherited and declared descriptors into one [`Signature`].
///
/// The builder records the first configuration error it encounters and
/// reports it from [`SignatureBuilder::finish`], so declaration sites can
/// chain without per-step error plumbing.
#[derive(Debug)]
pub struct SignatureBuilder {
    type_name: String,
    entries: Vec<Entry>,
    index: FxHashMap<String, usize>,
    error: Option<AnnoError>,
}

impl SignatureBuilder {
    /// Start a signature for the named type.
    pub fn new(type_name: impl Into<String>) -> Self {
        SignatureBuilder {
            type_name: type_name.into(),
            entries: Vec::new(),
            index: FxHashMap::default(),
            error: None,
        }
    }

    /// Merge one base level's signature. Call in linearized order, bases
    /// before derived.
    pub fn inherit(&mut self, base: &Signature) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        for entry in &base.entries {
            match self.index.get(entry.key.as_str()).copied() {
                Some(i) => {
                    let existing = &self.entries[i].anno;
                    if Arc::ptr_eq(existing, &entry.anno) {
                        // Same shared descriptor reaching us twice
                        // (diamond); first-seen position stands.
                        continue;
                    }
                    if existing.typ() == entry.anno.typ() {
                        // More-derived level overrides in place.
                        self.entries[i].anno = Arc::clone(&entry.anno);
                    } else {
                        self.error = Some(conflicting_declaration(
                            &entry.key,
                            existing.typ(),
                            entry.anno.typ(),
                        ));
                        return self;
                    }
                }
                None => self.push(entry.key.clone(), Arc::clone(&entry.anno)),
            }
        }
        self
    }

    /// Declare one of this level's own parameters.
    ///
    /// Redeclaring an inherited name is an explicit override: the descriptor
    /// is replaced in place and keeps the inherited position.
    pub fn declare(&mut self, anno: Anno) -> &mut Self {
        let key = anno.name().to_owned();
        self.declare_shared(key, Arc::new(anno))
    }

    /// Declare an already-shared descriptor, possibly under a transformed
    /// key. This is the re-export path used by composition: the descriptor
    /// contents (type, description, default) stay shared with the source of
    /// truth while the exposed name may differ.
    pub fn declare_shared(&mut self, key: impl Into<String>, anno: Arc<Anno>) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        let key = key.into();
        if anno.describe().trim().is_empty() {
            self.error = Some(empty_description(&key));
            return self;
        }
        match self.index.get(key.as_str()).copied() {
            Some(i) => self.entries[i].anno = anno,
            None => self.push(key, anno),
        }
        self
    }

    pub(crate) fn fail(&mut self, err: AnnoError) -> &mut Self {
        if self.error.is_none() {
            self.error = Some(err);
        }
        self
    }

    /// Finalize the merge.
    ///
    /// Returns the first configuration error recorded during declaration,
    /// or the finished ordered signature.
    #[tracing::instrument(level = "debug", skip_all, fields(type_name = %self.type_name))]
    pub fn finish(&mut self) -> AnnoResult<Signature> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        let entries = std::mem::take(&mut self.entries);
        let index = std::mem::take(&mut self.index);
        tracing::debug!(params = entries.len(), "call signature finalized");
        Ok(Signature {
            type_name: self.type_name.clone(),
            entries,
            index,
        })
    }

    fn push(&mut self, key: String, anno: Arc<Anno>) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(Entry { key, anno });
    }
}

#[cfg(test)]
mod tests;
