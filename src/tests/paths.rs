use crate::{jlist, jmap, JsonMap, Value};

/// One dot-separated path per leaf, keys sorted at each level.
#[test]
fn paths_for_nested_map() {
    let map = jmap! {
        "a" => jmap! {
            "b" => 1,
            "c" => jmap! { "d" => 2 },
        },
    };

    assert_eq!(map.information_paths(), vec!["a.b", "a.c.d"]);
}

#[test]
fn paths_are_sorted_per_level() {
    let map = jmap! {
        "zeta" => 1,
        "alpha" => jmap! { "y" => 2, "x" => 3 },
        "mid" => 4,
    };

    assert_eq!(
        map.information_paths(),
        vec!["alpha.x", "alpha.y", "mid", "zeta"]
    );
}

/// Lists count as leaves; paths do not descend into them.
#[test]
fn lists_are_leaves() {
    let map = jmap! { "l" => jlist![jmap! { "inner" => 1 }, 2] };
    assert_eq!(map.information_paths(), vec!["l"]);
}

#[test]
fn null_is_a_leaf() {
    let map = jmap! { "n" => Value::Null };
    assert_eq!(map.information_paths(), vec!["n"]);
}

#[test]
fn empty_map_has_no_paths() {
    assert!(JsonMap::new().information_paths().is_empty());
}

#[test]
fn empty_nested_map_contributes_no_paths() {
    let map = jmap! { "sub" => JsonMap::new(), "x" => 1 };
    assert_eq!(map.information_paths(), vec!["x"]);
}

// ---------------------------------------------------------------------------
// Deep lookup
// ---------------------------------------------------------------------------

#[test]
fn get_path_traverses_nested_maps() {
    let map = jmap! { "a" => jmap! { "b" => jmap! { "c" => 42 } } };

    assert!(matches!(map.get_path(&["a", "b", "c"]), Some(Value::Int(42))));
    assert!(matches!(map.get_path(&["a", "b"]), Some(Value::Map(_))));
}

#[test]
fn get_path_single_key() {
    let map = jmap! { "a" => 1 };
    assert!(matches!(map.get_path(&["a"]), Some(Value::Int(1))));
}

#[test]
fn get_path_missing_key() {
    let map = jmap! { "a" => jmap! { "b" => 1 } };
    assert!(map.get_path(&["a", "zzz"]).is_none());
    assert!(map.get_path(&["zzz", "b"]).is_none());
}

/// A non-map intermediate value stops the traversal.
#[test]
fn get_path_through_scalar() {
    let map = jmap! { "a" => 1 };
    assert!(map.get_path(&["a", "b"]).is_none());
}

#[test]
fn get_path_empty_path() {
    let map = jmap! { "a" => 1 };
    assert!(map.get_path(&[]).is_none());
}
