use super::*;
use pretty_assertions::assert_eq;

#[test]
fn strings_render_single_quoted() {
    assert_eq!(Value::str("/tmp/fname.txt").to_string(), "'/tmp/fname.txt'");
    assert_eq!(Value::str("it's").to_string(), "'it\\'s'");
    assert_eq!(Value::str("a\\b").to_string(), "'a\\\\b'");
}

#[test]
fn floats_always_show_a_decimal_point() {
    assert_eq!(Value::Float(0.1).to_string(), "0.1");
    assert_eq!(Value::Float(3.0).to_string(), "3.0");
    assert_eq!(Value::Float(-2.0).to_string(), "-2.0");
}

#[test]
fn arrays_render_tuple_style() {
    let one = Value::array(vec![Value::str("x")]);
    assert_eq!(one.to_string(), "('x',)");

    let two = Value::array(vec![Value::str("x"), Value::str("y")]);
    assert_eq!(two.to_string(), "('x', 'y')");

    let empty = Value::array(vec![]);
    assert_eq!(empty.to_string(), "()");
}

#[test]
fn enum_members_render_qualified() {
    let status = EnumType::new("Status", [("good", 0), ("bad", 1)]);
    let good = status.member("good").map(Value::Enum);
    assert_eq!(good.map(|v| v.to_string()), Some("<Status.good: 0>".into()));
}

#[test]
fn enum_member_lookup_by_name_and_ordinal() {
    let status = EnumType::new("Status", [("good", 0), ("bad", 1)]);
    assert_eq!(
        status.members().collect::<Vec<_>>(),
        vec![("good", 0), ("bad", 1)]
    );
    assert_eq!(status.member("bad").map(|m| m.ordinal()), Some(1));
    assert_eq!(
        status.member_with_ordinal(0).map(|m| m.name().to_owned()),
        Some("good".to_owned())
    );
    assert!(status.member("ugly").is_none());
    assert!(status.member_with_ordinal(7).is_none());
}

#[test]
fn enum_types_compare_by_identity() {
    let a = EnumType::new("Status", [("good", 0)]);
    let b = EnumType::new("Status", [("good", 0)]);
    assert_eq!(ElementType::Enum(Arc::clone(&a)), ElementType::Enum(a));
    assert_ne!(
        ElementType::Enum(EnumType::new("Status", [("good", 0)])),
        ElementType::Enum(b)
    );
}

#[test]
fn int_to_float_is_lossless_for_small_values() {
    assert_eq!(int_to_float(3), 3.0);
    assert_eq!(int_to_float(-1), -1.0);
    assert_eq!(int_to_float(i64::from(i32::MAX)), f64::from(i32::MAX));
}

#[test]
fn int_to_float_handles_large_magnitudes() {
    let big = 1_000_000_000_000_i64;
    assert_eq!(int_to_float(big), 1.0e12);
}
