use super::*;
use crate::value::ElementType;
use pretty_assertions::assert_eq;

fn base() -> Signature {
    match SignatureBuilder::new("Base")
        .declare(Anno::new("a", ElementType::Float, "First parameter"))
        .declare(Anno::new("b", ElementType::Str, "Second parameter"))
        .finish()
    {
        Ok(sig) => sig,
        Err(err) => panic!("base signature must build: {err}"),
    }
}

#[test]
fn empty_signature() {
    let sig = SignatureBuilder::new("Empty").finish();
    let Ok(sig) = sig else {
        panic!("empty signature must build");
    };
    assert!(sig.is_empty());
    assert_eq!(sig.len(), 0);
    assert_eq!(sig.type_name(), "Empty");
}

#[test]
fn declaration_order_is_preserved() {
    let sig = base();
    assert_eq!(sig.names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(
        sig.get("b").map(|anno| anno.describe()),
        Some("Second parameter")
    );
}

#[test]
fn subclass_addition_appends_after_base_parameters() {
    let base = base();
    let derived = SignatureBuilder::new("Derived")
        .inherit(&base)
        .declare(Anno::new("c", ElementType::Int, "Third parameter"))
        .finish();
    let Ok(derived) = derived else {
        panic!("derived signature must build");
    };
    assert_eq!(derived.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn override_replaces_in_place() {
    let base = base();
    let derived = SignatureBuilder::new("Derived")
        .inherit(&base)
        .declare(Anno::new("b", ElementType::Str, "Replacement description"))
        .declare(Anno::new("c", ElementType::Int, "Third parameter"))
        .finish();
    let Ok(derived) = derived else {
        panic!("derived signature must build");
    };
    assert_eq!(derived.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(
        derived.get("b").map(|anno| anno.describe()),
        Some("Replacement description")
    );
    // The base is untouched.
    assert_eq!(
        base.get("b").map(|anno| anno.describe()),
        Some("Second parameter")
    );
}

#[test]
fn override_and_add_interleaved_keeps_first_seen_positions() {
    let base = base();
    // Declarations interleave an addition, an override, and another
    // addition; positions follow first-seen order, additions append in the
    // declaring level's own order.
    let derived = SignatureBuilder::new("Derived")
        .inherit(&base)
        .declare(Anno::new("c", ElementType::Int, "Third parameter"))
        .declare(Anno::new("a", ElementType::Float, "Replacement for a"))
        .declare(Anno::new("d", ElementType::Bool, "Fourth parameter"))
        .finish();
    let Ok(derived) = derived else {
        panic!("derived signature must build");
    };
    assert_eq!(derived.names().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
    assert_eq!(
        derived.get("a").map(|anno| anno.describe()),
        Some("Replacement for a")
    );
}

#[test]
fn unrelated_type_collision_is_a_definition_error() {
    let left = match SignatureBuilder::new("Left")
        .declare(Anno::new("x", ElementType::Float, "Float-typed x"))
        .finish()
    {
        Ok(sig) => sig,
        Err(err) => panic!("left must build: {err}"),
    };
    let right = match SignatureBuilder::new("Right")
        .declare(Anno::new("x", ElementType::Str, "Str-typed x"))
        .finish()
    {
        Ok(sig) => sig,
        Err(err) => panic!("right must build: {err}"),
    };

    let merged = SignatureBuilder::new("Both")
        .inherit(&left)
        .inherit(&right)
        .finish();
    let Err(err) = merged else {
        panic!("colliding types must not merge");
    };
    assert_eq!(
        err,
        AnnoError::ConflictingDeclaration {
            name: "x".into(),
            first: "float".into(),
            second: "str".into(),
        }
    );
}

#[test]
fn same_type_redeclaration_from_later_level_overrides() {
    let left = match SignatureBuilder::new("Left")
        .declare(Anno::new("x", ElementType::Float, "From the left"))
        .finish()
    {
        Ok(sig) => sig,
        Err(err) => panic!("left must build: {err}"),
    };
    let right = match SignatureBuilder::new("Right")
        .declare(Anno::new("x", ElementType::Float, "From the right"))
        .finish()
    {
        Ok(sig) => sig,
        Err(err) => panic!("right must build: {err}"),
    };

    let merged = SignatureBuilder::new("Both")
        .inherit(&left)
        .inherit(&right)
        .finish();
    let Ok(merged) = merged else {
        panic!("same-type redeclaration must merge");
    };
    assert_eq!(
        merged.get("x").map(|anno| anno.describe()),
        Some("From the right")
    );
}

#[test]
fn diamond_sharing_of_one_descriptor_is_not_a_conflict() {
    let root = base();
    let left = match SignatureBuilder::new("Left").inherit(&root).finish() {
        Ok(sig) => sig,
        Err(err) => panic!("left must build: {err}"),
    };
    let right = match SignatureBuilder::new("Right").inherit(&root).finish() {
        Ok(sig) => sig,
        Err(err) => panic!("right must build: {err}"),
    };

    let merged = SignatureBuilder::new("Diamond")
        .inherit(&left)
        .inherit(&right)
        .finish();
    let Ok(merged) = merged else {
        panic!("diamond must merge");
    };
    assert_eq!(merged.names().collect::<Vec<_>>(), vec!["a", "b"]);
    // Still the same shared descriptor, not a copy.
    let from_root = root.get("a").map(Arc::as_ptr);
    assert_eq!(merged.get("a").map(Arc::as_ptr), from_root);
}

#[test]
fn empty_descriptions_are_rejected_at_definition_time() {
    let sig = SignatureBuilder::new("Sloppy")
        .declare(Anno::new("x", ElementType::Int, "  "))
        .finish();
    let Err(err) = sig else {
        panic!("empty description must not build");
    };
    assert_eq!(err, AnnoError::EmptyDescription { name: "x".into() });
}

#[test]
fn first_configuration_error_wins() {
    let sig = SignatureBuilder::new("Sloppy")
        .declare(Anno::new("x", ElementType::Int, ""))
        .declare(Anno::new("y", ElementType::Int, ""))
        .finish();
    let Err(err) = sig else {
        panic!("empty description must not build");
    };
    assert_eq!(err, AnnoError::EmptyDescription { name: "x".into() });
}
