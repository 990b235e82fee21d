use clubroster::error::RosterError;
use clubroster::list::UniquePersonList;
use clubroster::model::*;

fn person(name: &str, email: &str) -> Person {
    Person::new(
        Name::parse(name).unwrap(),
        Phone::none(),
        Email::parse(email).unwrap(),
        Address::none(),
        Default::default(),
    )
}

fn person_with_phone(name: &str, email: &str, phone: &str) -> Person {
    Person::new(
        Name::parse(name).unwrap(),
        Phone::parse(phone).unwrap(),
        Email::parse(email).unwrap(),
        Address::none(),
        Default::default(),
    )
}

fn names(list: &UniquePersonList) -> Vec<&str> {
    list.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn add_preserves_insertion_order() {
    let mut list = UniquePersonList::new();
    list.add(person("Carol", "carol@example.com")).unwrap();
    list.add(person("Alice", "alice@example.com")).unwrap();
    list.add(person("Bob", "bob@example.com")).unwrap();
    assert_eq!(names(&list), vec!["Carol", "Alice", "Bob"]);
}

#[test]
fn add_rejects_normalized_identity_collision() {
    let mut list = UniquePersonList::new();
    list.add(person("John Doe", "john@example.com")).unwrap();

    let err = list
        .add(person("john   doe", "other@example.com"))
        .unwrap_err();
    assert!(matches!(err, RosterError::Duplicate { .. }));
    // The failed add must not have mutated the collection.
    assert_eq!(list.len(), 1);
    assert_eq!(names(&list), vec!["John Doe"]);
}

#[test]
fn contains_uses_identity_not_full_equality() {
    let mut list = UniquePersonList::new();
    list.add(person("John Doe", "john@example.com")).unwrap();
    assert!(list.contains(&person("JOHN DOE", "different@example.com")));
    assert!(!list.contains(&person("Jane Doe", "john@example.com")));
}

#[test]
fn remove_requires_full_equality() {
    let mut list = UniquePersonList::new();
    list.add(person_with_phone("Alice", "alice@example.com", "91234567"))
        .unwrap();

    // Identity-equal but not field-equal: not a match for removal.
    let err = list.remove(&person("Alice", "alice@example.com")).unwrap_err();
    assert!(matches!(err, RosterError::NotFound { .. }));
    assert_eq!(list.len(), 1);

    let removed = list
        .remove(&person_with_phone("Alice", "alice@example.com", "91234567"))
        .unwrap();
    assert_eq!(removed.name.as_str(), "Alice");
    assert!(list.is_empty());
}

#[test]
fn set_item_replaces_in_place() {
    let mut list = UniquePersonList::new();
    list.add(person("Alice", "alice@example.com")).unwrap();
    list.add(person("Bob", "bob@example.com")).unwrap();
    list.add(person("Carol", "carol@example.com")).unwrap();

    let target = person("Bob", "bob@example.com");
    let replacement = person_with_phone("Bob", "bob@example.com", "555-0100");
    list.set_item(&target, replacement).unwrap();

    assert_eq!(names(&list), vec!["Alice", "Bob", "Carol"]);
    assert!(list.as_slice()[1].phone.is_present());
}

#[test]
fn set_item_allows_keeping_the_targets_identity() {
    let mut list = UniquePersonList::new();
    list.add(person("Alice", "alice@example.com")).unwrap();

    // Same identity, new spelling: allowed.
    let target = person("Alice", "alice@example.com");
    list.set_item(&target, person("ALICE", "alice@example.com"))
        .unwrap();
    assert_eq!(names(&list), vec!["ALICE"]);
}

#[test]
fn set_item_rejects_collision_with_a_different_element() {
    let mut list = UniquePersonList::new();
    list.add(person("Alice", "alice@example.com")).unwrap();
    list.add(person("Bob", "bob@example.com")).unwrap();

    let target = person("Bob", "bob@example.com");
    let err = list
        .set_item(&target, person("alice", "bob@example.com"))
        .unwrap_err();
    assert!(matches!(err, RosterError::Duplicate { .. }));
    assert_eq!(names(&list), vec!["Alice", "Bob"]);
}

#[test]
fn set_item_fails_when_target_absent() {
    let mut list = UniquePersonList::new();
    list.add(person("Alice", "alice@example.com")).unwrap();

    let err = list
        .set_item(
            &person("Zed", "zed@example.com"),
            person("Zed", "zed@example.com"),
        )
        .unwrap_err();
    assert!(matches!(err, RosterError::NotFound { .. }));
}

#[test]
fn replace_all_swaps_content_atomically() {
    let mut list = UniquePersonList::new();
    list.add(person("Alice", "alice@example.com")).unwrap();

    list.replace_all(vec![
        person("Bob", "bob@example.com"),
        person("Carol", "carol@example.com"),
    ])
    .unwrap();
    assert_eq!(names(&list), vec!["Bob", "Carol"]);
}

#[test]
fn replace_all_rejects_pairwise_collisions_without_mutating() {
    let mut list = UniquePersonList::new();
    list.add(person("Alice", "alice@example.com")).unwrap();

    let err = list
        .replace_all(vec![
            person("Bob", "bob@example.com"),
            person("BOB", "bob2@example.com"),
        ])
        .unwrap_err();
    assert!(matches!(err, RosterError::Duplicate { .. }));
    // All-or-nothing: the original content survives a failed replace.
    assert_eq!(names(&list), vec!["Alice"]);
}

#[test]
fn uniqueness_holds_after_any_operation_sequence() {
    let mut list = UniquePersonList::new();
    list.add(person("Alice", "alice@example.com")).unwrap();
    list.add(person("Bob", "bob@example.com")).unwrap();
    let _ = list.add(person("alice", "dup@example.com"));
    let _ = list.set_item(
        &person("Bob", "bob@example.com"),
        person("Alice", "bob@example.com"),
    );

    for (i, a) in list.iter().enumerate() {
        for b in list.iter().skip(i + 1) {
            assert!(!a.same_identity(b));
        }
    }
}
