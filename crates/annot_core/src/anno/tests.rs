use super::*;
use crate::errors::AnnoError;
use crate::value::EnumType;
use pretty_assertions::assert_eq;

fn exposure() -> Anno {
    Anno::new(
        "exposure",
        ElementType::Float,
        "The exposure to be active for",
    )
}

#[test]
fn describe_returns_the_declared_description() {
    assert_eq!(exposure().describe(), "The exposure to be active for");
    assert_eq!(exposure().typ(), &ElementType::Float);
    assert!(!exposure().is_array());
}

#[test]
fn float_coercion_promotes_integers() {
    assert_eq!(exposure().coerce(Value::Int(3)), Ok(Value::Float(3.0)));
    assert_eq!(exposure().coerce(Value::Float(0.1)), Ok(Value::Float(0.1)));
}

#[test]
fn float_coercion_rejects_strings() {
    let err = exposure().coerce(Value::str("fast"));
    assert_eq!(
        err,
        Err(AnnoError::CoercionMismatch {
            name: "exposure".into(),
            expected: "float".into(),
            got: "str".into(),
            value: "'fast'".into(),
        })
    );
}

#[test]
fn scalar_types_do_not_cross_coerce() {
    let size = Anno::new("size", ElementType::Int, "Number of points");
    assert!(size.coerce(Value::Float(1.5)).is_err());
    assert!(size.coerce(Value::Bool(true)).is_err());

    let path = Anno::new("path", ElementType::Str, "The path to write to");
    assert!(path.coerce(Value::Int(1)).is_err());
}

#[test]
fn array_coercion_promotes_scalars() {
    let axes = Anno::new("axes", ElementType::Str, "The axes to move").array();
    assert_eq!(
        axes.coerce(Value::str("x")),
        Ok(Value::array(vec![Value::str("x")]))
    );
}

#[test]
fn array_coercion_preserves_element_order() {
    let axes = Anno::new("axes", ElementType::Str, "The axes to move").array();
    let coerced = axes.coerce(Value::array(vec![Value::str("x"), Value::str("y")]));
    assert_eq!(
        coerced,
        Ok(Value::array(vec![Value::str("x"), Value::str("y")]))
    );
}

#[test]
fn array_coercion_coerces_each_element() {
    let start = Anno::new("start", ElementType::Float, "Start positions").array();
    assert_eq!(
        start.coerce(Value::array(vec![Value::Int(0), Value::Float(1.5)])),
        Ok(Value::array(vec![Value::Float(0.0), Value::Float(1.5)]))
    );
    assert!(start
        .coerce(Value::array(vec![Value::Int(0), Value::str("oops")]))
        .is_err());
}

#[test]
fn enum_coercion_accepts_member_name_and_ordinal() {
    let status = EnumType::new("Status", [("good", 0), ("bad", 1)]);
    let anno = Anno::new("status", ElementType::Enum(Arc::clone(&status)), "The status");

    let good = status.member("good").map(Value::Enum);
    assert_eq!(anno.coerce(Value::str("good")).ok(), good.clone());
    assert_eq!(anno.coerce(Value::Int(0)).ok(), good.clone());
    let Some(member) = good else {
        panic!("Status.good must exist");
    };
    assert_eq!(anno.coerce(member.clone()).ok(), Some(member));
}

#[test]
fn enum_coercion_rejects_non_members() {
    let status = EnumType::new("Status", [("good", 0), ("bad", 1)]);
    let anno = Anno::new("status", ElementType::Enum(Arc::clone(&status)), "The status");

    assert_eq!(
        anno.coerce(Value::str("ugly")),
        Err(AnnoError::NotAMember {
            name: "status".into(),
            enum_name: "Status".into(),
            value: "'ugly'".into(),
        })
    );
    assert!(anno.coerce(Value::Int(9)).is_err());

    // A member of a structurally identical but distinct enumeration.
    let other = EnumType::new("Status", [("good", 0), ("bad", 1)]);
    let Some(foreign) = other.member("good") else {
        panic!("Status.good must exist");
    };
    assert!(anno.coerce(Value::Enum(foreign)).is_err());
}

#[test]
fn defaults_are_raw_until_coerced() {
    let alternate = Anno::new(
        "alternate",
        ElementType::Bool,
        "Whether to reverse on alternate runs",
    )
    .default_value(false);
    assert_eq!(alternate.default(), Some(&Value::Bool(false)));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_int_promotes_to_float(n in proptest::num::i32::ANY) {
            let coerced = exposure().coerce(Value::Int(i64::from(n)));
            prop_assert_eq!(coerced, Ok(Value::Float(f64::from(n))));
        }

        #[test]
        fn any_string_passes_through_str_coercion(s in ".*") {
            let path = Anno::new("path", ElementType::Str, "The path to write to");
            let coerced = path.coerce(Value::str(s.clone()));
            prop_assert_eq!(coerced, Ok(Value::Str(s)));
        }

        #[test]
        fn scalar_array_promotion_always_has_arity_one(n in proptest::num::i64::ANY) {
            let sizes = Anno::new("sizes", ElementType::Int, "Point counts").array();
            let coerced = sizes.coerce(Value::Int(n));
            prop_assert_eq!(coerced, Ok(Value::array(vec![Value::Int(n)])));
        }
    }
}
