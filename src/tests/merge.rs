use crate::{jmap, JsonMap, Value};

/// Merging with the empty map is neutral in both directions.
#[test]
fn merge_neutrality() {
    let map = jmap! { "a" => 1, "b" => jmap! { "c" => 2 } };
    let empty = JsonMap::new();

    assert!(map.merge(&empty).equals(&map));
    assert!(empty.merge(&map).equals(&map));
}

/// Nested maps merge key-wise instead of overwriting.
#[test]
fn deep_merge() {
    let a = jmap! { "a" => jmap! { "b" => 1 } };
    let b = jmap! { "a" => jmap! { "c" => 2 } };

    let expected = jmap! { "a" => jmap! { "b" => 1, "c" => 2 } };
    assert!(a.merge(&b).equals(&expected));
}

#[test]
fn right_side_wins_on_scalars() {
    let a = jmap! { "x" => 1, "y" => "keep" };
    let b = jmap! { "x" => 2 };

    let merged = a.merge(&b);
    assert_eq!(merged.get_int("x").unwrap(), 2);
    assert_eq!(merged.get_string("y").unwrap(), "keep");
}

/// A scalar on the right replaces a map on the left, and vice versa.
#[test]
fn type_conflicts_take_right_value() {
    let map_side = jmap! { "k" => jmap! { "inner" => 1 } };
    let scalar_side = jmap! { "k" => 5 };

    assert_eq!(map_side.merge(&scalar_side).get_int("k").unwrap(), 5);

    let merged = scalar_side.merge(&map_side);
    assert!(merged.get_map("k").unwrap().equals(&jmap! { "inner" => 1 }));
}

#[test]
fn merge_adds_new_keys() {
    let a = jmap! { "a" => 1 };
    let b = jmap! { "b" => 2, "c" => 3 };

    let merged = a.merge(&b);
    assert_eq!(merged.len(), 3);
}

#[test]
fn merge_does_not_mutate_inputs() {
    let a = jmap! { "a" => 1 };
    let b = jmap! { "a" => 2, "b" => 3 };

    let _ = a.merge(&b);
    assert_eq!(a.get_int("a").unwrap(), 1);
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 2);
}

#[test]
fn three_level_merge() {
    let a = jmap! { "o" => jmap! { "p" => jmap! { "x" => 1 } } };
    let b = jmap! { "o" => jmap! { "p" => jmap! { "y" => 2 }, "q" => 3 } };

    let expected = jmap! { "o" => jmap! { "p" => jmap! { "x" => 1, "y" => 2 }, "q" => 3 } };
    assert!(a.merge(&b).equals(&expected));
}

/// For scalar-leaf maps where every left key survives on the right,
/// applying the diff to the left reconstructs the right.
#[test]
fn merge_applies_scalar_diff() {
    let a = jmap! { "x" => 1, "y" => "old" };
    let b = jmap! { "x" => 1, "y" => "new", "z" => true };

    let patched = a.merge(&a.diff(&b));
    assert!(patched.equals(&b));
}

/// A tombstone in the diff overwrites with null under merge semantics.
#[test]
fn merge_keeps_tombstone_as_null() {
    let a = jmap! { "x" => 1, "gone" => 2 };
    let b = jmap! { "x" => 1 };

    let patched = a.merge(&a.diff(&b));
    assert!(patched.get("gone").is_some_and(Value::is_null));
    assert_eq!(patched.get_int("x").unwrap(), 1);
}
