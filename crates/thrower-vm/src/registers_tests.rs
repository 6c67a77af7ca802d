use thrower_core::{Register, Value};

use crate::{RegisterFile, RuntimeErrorKind};

#[test]
fn load_unset_register_fails() {
    let file = RegisterFile::new();

    assert_eq!(
        file.load(Register(3)),
        Err(RuntimeErrorKind::UninitializedRegister(Register(3)))
    );
}

#[test]
fn store_without_last_fails() {
    let mut file = RegisterFile::new();

    assert_eq!(
        file.store(Register(0)),
        Err(RuntimeErrorKind::MissingLast(Register(0)))
    );
    assert!(file.is_empty());
}

#[test]
fn store_then_load_returns_last() {
    let mut file = RegisterFile::new();
    file.set_last(Value::from("10.0.0.1"));

    assert_eq!(file.store(Register(7)), Ok(Value::from("10.0.0.1")));
    assert_eq!(file.load(Register(7)), Ok(Value::from("10.0.0.1")));

    file.set_last(Value::Int(5));
    assert_eq!(file.load(Register(7)), Ok(Value::from("10.0.0.1")));
    assert_eq!(file.store(Register(7)), Ok(Value::Int(5)));
    assert_eq!(file.load(Register(7)), Ok(Value::Int(5)));
}

#[test]
fn load_does_not_mutate() {
    let mut file = RegisterFile::new();
    file.set_last(Value::Int(1));
    file.store(Register(1)).unwrap();
    let before = file.clone();

    file.load(Register(1)).unwrap();
    assert_eq!(file, before);
}

#[test]
fn iter_is_ordered_by_index() {
    let mut file = RegisterFile::new();
    for (index, value) in [(9, 1), (2, 2), (u32::MAX, 3)] {
        file.set_last(Value::Int(value));
        file.store(Register(index)).unwrap();
    }

    let order: Vec<_> = file.iter().map(|(r, _)| r.to_string()).collect();
    insta::assert_snapshot!(order.join(" "), @"r2 r9 r4294967295");
}
