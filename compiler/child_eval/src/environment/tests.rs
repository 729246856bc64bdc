use super::*;
use pretty_assertions::assert_eq;

#[test]
fn bind_and_lookup_at_top_level() {
    let mut env = Environment::new();
    env.bind("age".into(), Value::Int(15));
    assert_eq!(env.lookup("age"), Some(&Value::Int(15)));
    assert_eq!(env.lookup("missing"), None);
}

#[test]
fn rebinding_overwrites() {
    let mut env = Environment::new();
    env.bind("x".into(), Value::Int(1));
    env.bind("x".into(), Value::Int(2));
    assert_eq!(env.lookup("x"), Some(&Value::Int(2)));
}

#[test]
fn frames_see_globals_but_not_callers() {
    let mut env = Environment::new();
    env.bind("g".into(), Value::Int(1));
    env.push_frame();
    env.bind("caller_local".into(), Value::Int(2));
    env.push_frame();
    assert_eq!(env.lookup("g"), Some(&Value::Int(1)));
    assert_eq!(env.lookup("caller_local"), None);
}

#[test]
fn locals_shadow_globals_and_vanish_on_pop() {
    let mut env = Environment::new();
    env.bind("a".into(), Value::Int(1));
    env.push_frame();
    env.bind("a".into(), Value::Int(99));
    env.bind("temp".into(), Value::Int(3));
    assert_eq!(env.lookup("a"), Some(&Value::Int(99)));
    env.pop_frame();
    assert_eq!(env.lookup("a"), Some(&Value::Int(1)));
    assert_eq!(env.lookup("temp"), None);
}

#[test]
fn global_frame_is_never_popped() {
    let mut env = Environment::new();
    env.bind("x".into(), Value::Int(1));
    env.pop_frame();
    env.pop_frame();
    assert_eq!(env.depth(), 1);
    assert_eq!(env.lookup("x"), Some(&Value::Int(1)));
}

#[test]
fn list_mut_reaches_global_lists_from_a_frame() {
    let mut env = Environment::new();
    env.bind("L".into(), Value::List(vec![Value::Int(1)]));
    env.push_frame();
    env.list_mut("L").map(|l| l.push(Value::Int(2))).ok();
    env.pop_frame();
    assert_eq!(
        env.list("L").map(<[Value]>::len),
        Ok(2)
    );
}

#[test]
fn list_errors() {
    let mut env = Environment::new();
    env.bind("n".into(), Value::Int(5));
    assert_eq!(
        env.list("n"),
        Err(EvalErrorKind::NotAList { name: "n".into() })
    );
    assert_eq!(
        env.list("nope").err(),
        Some(EvalErrorKind::UndefinedList {
            name: "nope".into()
        })
    );
}

