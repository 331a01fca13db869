//! Cross-operation behavior of the container: construction dispatch,
//! length bookkeeping, mutator round trips and interchange.

use jsarray::{Collection, Key, Value, array};

fn ints(c: &Collection) -> Vec<i64> {
    c.iter().filter_map(|(_, v)| v.as_int()).collect()
}

#[test]
fn presized_container_holds_empty_slots() {
    for n in 0..8u32 {
        let c = Collection::new(vec![Value::Int(n as i64)]);
        assert_eq!(c.length(), n);
        for i in 0..n {
            assert_eq!(c[i], Value::Null);
        }
    }
}

#[test]
fn push_pop_round_trip() {
    let mut c = array![1, 2, 3];
    let snapshot = c.clone();
    c.push(vec![Value::from("extra")]);
    assert_eq!(c.length(), 4);
    assert_eq!(c.pop(), Value::from("extra"));
    assert_eq!(c, snapshot);
}

#[test]
fn shift_unshift_round_trip() {
    let mut c = array!["a", "b", "c"];
    let snapshot = c.clone();
    let first = c.shift();
    assert_eq!(first, Value::from("a"));
    c.unshift(vec![first]);
    assert_eq!(c, snapshot);
}

#[test]
fn insert_only_splice_preserves_prefix_and_shifts_suffix() {
    let mut c = array![0, 1, 2, 3, 4];
    let removed = c.splice(2, Some(0), vec![Value::from("x"), Value::from("y")]);
    assert_eq!(removed.length(), 0);
    assert_eq!(c.length(), 7);

    assert_eq!(c[0], Value::Int(0));
    assert_eq!(c[1], Value::Int(1));
    assert_eq!(c[2], Value::from("x"));
    assert_eq!(c[3], Value::from("y"));
    assert_eq!(c[4], Value::Int(2));
    assert_eq!(c[6], Value::Int(4));
}

#[test]
fn copy_within_reference_case() {
    let mut c = array![0, 1, 2, 3, 4, 5, 6];
    c.copy_within(0, 3, Some(6));
    assert_eq!(ints(&c), vec![3, 4, 5, 3, 4, 5, 6]);
}

#[test]
fn fill_reference_case() {
    let mut c = array![0, 0, 0, 0, 0];
    c.fill(Value::Int(9), Some(1), Some(3));
    assert_eq!(ints(&c), vec![0, 9, 9, 0, 0]);
}

#[test]
fn construction_dispatch_is_not_confused() {
    // Three arguments: three dense elements.
    let positional = array![1, 2, 3];
    assert_eq!(positional.length(), 3);
    assert_eq!(positional[0], Value::Int(1));

    // One integer argument: three empty slots.
    let presized = array![3];
    assert_eq!(presized.length(), 3);
    assert_eq!(presized[0], Value::Null);
    assert_ne!(positional, presized);

    // of() keeps the lone integer as an element.
    let of = Collection::of(vec![Value::Int(3)]);
    assert_eq!(of.length(), 1);
    assert_eq!(of[0], Value::Int(3));
}

#[test]
fn writing_past_the_end_sets_length_to_the_key() {
    let mut c = array!["a", "b", "c"];
    assert_eq!(c.length(), 3);
    c.set(Key::Index(5), Value::from("x"));
    assert_eq!(c.length(), 5);
}

#[test]
fn delete_then_mutate_reconciles_length() {
    let mut c = array![0, 1, 2, 3];
    c.delete(&Key::Index(3));
    // Deleting never shrinks length by itself.
    assert_eq!(c.length(), 4);
    // Pushing nothing is a no-op, so the stale length survives.
    assert_eq!(c.push(vec![]), 4);
    // A real mutation reconciles: removing key 2 leaves the dense {0, 1}.
    assert_eq!(c.pop(), Value::Int(2));
    assert_eq!(c.length(), 2);
}

#[test]
fn chained_mutators_share_one_instance() {
    let mut c = array![3, 1, 2];
    c.sort().reverse();
    assert_eq!(ints(&c), vec![3, 2, 1]);
}

#[test]
fn json_round_trip_preserves_sparse_layout() {
    let mut c = array![];
    c.set(Key::Index(1), Value::from("one"));
    c.set(Key::Index(8), Value::from("eight"));
    c.set(Key::name("label"), Value::from("sparse"));

    let text = c.to_json().unwrap();
    let back = Collection::from_json(&text).unwrap();
    assert_eq!(back.length(), 8);
    assert_eq!(back.count(), 3);
    assert_eq!(back[1], Value::from("one"));
    assert_eq!(back[8], Value::from("eight"));
    assert_eq!(back["label"], Value::from("sparse"));
}

#[test]
fn count_and_length_diverge_on_sparse_containers() {
    let mut c = array![];
    c.set(Key::Index(10), Value::Int(1));
    c.set(Key::name("x"), Value::Int(2));
    assert_eq!(c.length(), 10);
    assert_eq!(c.count(), 2);
}
