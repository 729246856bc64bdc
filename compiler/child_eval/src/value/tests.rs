use super::*;
use pretty_assertions::assert_eq;

fn list(items: Vec<Value>) -> Value {
    Value::List(items)
}

#[test]
fn display_matches_say_output() {
    assert_eq!(Value::Int(12).to_string(), "12");
    assert_eq!(Value::Float(3.0).to_string(), "3.0");
    assert_eq!(Value::Float(2.5).to_string(), "2.5");
    assert_eq!(Value::from("hi there").to_string(), "hi there");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(
        list(vec![Value::Int(10), Value::Int(20), "a".into()]).to_string(),
        "[10, 20, 'a']"
    );
    assert_eq!(list(vec![]).to_string(), "[]");
}

#[test]
fn nested_lists_quote_inner_strings() {
    let v = list(vec![list(vec!["x".into()]), Value::Bool(false)]);
    assert_eq!(v.to_string(), "[['x'], false]");
}

#[test]
fn repr_quotes_strings_only() {
    assert_eq!(Value::from("it's").repr(), "\"it's\"");
    assert_eq!(Value::Int(5).repr(), "5");
}

#[test]
fn to_int_conversions() {
    assert_eq!(Value::Int(7).to_int(), Some(7));
    assert_eq!(Value::Float(3.9).to_int(), Some(3));
    assert_eq!(Value::Float(-3.9).to_int(), Some(-3));
    assert_eq!(Value::Bool(true).to_int(), Some(1));
    assert_eq!(Value::from(" 42 ").to_int(), Some(42));
    assert_eq!(Value::from("4.5").to_int(), None);
    assert_eq!(Value::from("four").to_int(), None);
    assert_eq!(Value::Float(f64::NAN).to_int(), None);
    assert_eq!(Value::Float(1e300).to_int(), None);
    assert_eq!(list(vec![]).to_int(), None);
}

#[test]
fn numeric_equality_crosses_kinds() {
    assert_eq!(Value::Int(1), Value::Float(1.0));
    assert_eq!(Value::Bool(true), Value::Int(1));
    assert_ne!(Value::Int(1), Value::from("1"));
    assert_ne!(Value::from("a"), list(vec!["a".into()]));
}

#[test]
fn list_equality_is_elementwise() {
    assert_eq!(
        list(vec![Value::Int(1), Value::Float(2.0)]),
        list(vec![Value::Float(1.0), Value::Int(2)])
    );
    assert_ne!(
        list(vec![Value::Int(1)]),
        list(vec![Value::Int(1), Value::Int(1)])
    );
}
