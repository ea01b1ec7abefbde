//! Guarded mutation through `Validator::mutate`.

use serde_json::{json, Map};
use wtypes::{BaseKind, Error, Field, Keyword, Mutation, TypeBuilder, Validator};

#[test]
fn list_of_integers_rejects_a_string() {
    let t = TypeBuilder::new();
    let ints = t.List().index(BaseKind::Integer).unwrap();
    let v = Validator::new();
    let mut list = v.construct(&ints, Some(json!([]))).unwrap();

    assert_eq!(v.mutate(&mut list, Mutation::Append(json!(1))).unwrap(), None);
    let err = v.mutate(&mut list, Mutation::Append(json!("x"))).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(list, json!([1]));
}

#[test]
fn array_operations() {
    let t = TypeBuilder::new();
    let ints = t.List().index(BaseKind::Integer).unwrap();
    let v = Validator::new();
    let mut list = v.construct(&ints, Some(json!([1, 2]))).unwrap();

    v.mutate(&mut list, Mutation::Insert { index: 0, value: json!(0) }).unwrap();
    v.mutate(&mut list, Mutation::Extend(vec![json!(3), json!(4)])).unwrap();
    let old = v
        .mutate(&mut list, Mutation::SetIndex { index: 4, value: json!(40) })
        .unwrap();
    assert_eq!(old, Some(json!(4)));
    assert_eq!(v.mutate(&mut list, Mutation::Pop(None)).unwrap(), Some(json!(40)));
    assert_eq!(v.mutate(&mut list, Mutation::Pop(Some(0))).unwrap(), Some(json!(0)));
    assert_eq!(list, json!([1, 2, 3]));

    assert_eq!(
        v.mutate(&mut list, Mutation::Insert { index: 9, value: json!(9) }),
        Err(Error::IndexOutOfRange { index: 9, len: 3 })
    );
}

#[test]
fn object_operations() {
    let t = TypeBuilder::new();
    let person = t
        .record(
            "Person",
            vec![
                Field::new("name", &t.String()),
                Field::new("email", &t.Email()).with_default("nobody@example.com"),
            ],
        )
        .unwrap();
    let v = Validator::new();
    let mut ada = v.construct(&person, Some(json!({"name": "Ada"}))).unwrap();

    let previous = v.mutate(&mut ada, Mutation::set("name", "Ada Lovelace")).unwrap();
    assert_eq!(previous, Some(json!("Ada")));

    let err = v
        .mutate(&mut ada, Mutation::set("email", "not-an-email"))
        .unwrap_err();
    assert_eq!(err.as_validation().unwrap().keyword, Some(Keyword::Format));

    let mut entries = Map::new();
    entries.insert("email".into(), json!("ada@example.com"));
    entries.insert("born".into(), json!(1815));
    v.mutate(&mut ada, Mutation::Update(entries)).unwrap();
    assert_eq!(ada.get("born"), Some(&json!(1815)));

    assert!(v.mutate(&mut ada, Mutation::Remove("name".into())).is_err());
    assert_eq!(
        v.mutate(&mut ada, Mutation::Remove("born".into())).unwrap(),
        Some(json!(1815))
    );
    assert_eq!(
        ada,
        json!({"name": "Ada Lovelace", "email": "ada@example.com"})
    );
}

#[test]
fn wrong_container() {
    let t = TypeBuilder::new();
    let v = Validator::new();
    let mut list = v.construct(&t.List(), None).unwrap();
    assert!(matches!(
        v.mutate(&mut list, Mutation::set("a", 1)),
        Err(Error::NotAContainer { .. })
    ));
    let mut dict = v.construct(&t.Dict(), None).unwrap();
    assert!(matches!(
        v.mutate(&mut dict, Mutation::Append(json!(1))),
        Err(Error::NotAContainer { .. })
    ));
}

#[test]
fn bounded_length_holds_through_mutation() {
    let t = TypeBuilder::new();
    let short = t.List().le(2).unwrap();
    let v = Validator::new();
    let mut list = v.construct(&short, Some(json!(["a", "b"]))).unwrap();
    let err = v.mutate(&mut list, Mutation::Append(json!("c"))).unwrap_err();
    assert_eq!(err.as_validation().unwrap().keyword, Some(Keyword::MaxItems));
    assert_eq!(list, json!(["a", "b"]));
}
