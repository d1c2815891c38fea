use std::sync::Arc;

use crate::{jlist, jmap, Fnv64, JsonMap, Value};

/// Insertion order never affects equality.
#[test]
fn key_order_invariance() {
    let forward = jmap! { "a" => 1, "b" => 2, "c" => 3, "d" => 4, "e" => 5 };
    let backward = jmap! { "e" => 5, "d" => 4, "c" => 3, "b" => 2, "a" => 1 };
    assert!(forward.equals(&backward));
}

/// All integer widths normalize to the same canonical type.
#[test]
fn integer_widths_normalize() {
    let narrow = JsonMap::from_items([("a", 1_i32)]);
    let wide = JsonMap::from_items([("a", 1_i64)]);
    let unsigned = JsonMap::from_items([("a", 1_u8)]);
    assert!(narrow.equals(&wide));
    assert!(narrow.equals(&unsigned));
}

/// Int and float are distinct types even for the same numeric value.
#[test]
fn int_and_float_are_distinct() {
    let int = jmap! { "a" => 1 };
    let float = jmap! { "a" => 1.0 };
    assert!(!int.equals(&float));
}

#[test]
fn float_tolerance() {
    let one = jmap! { "f" => 1.0 };
    assert!(one.equals(&jmap! { "f" => 1.00001 }));
    assert!(!one.equals(&jmap! { "f" => 1.1 }));
}

#[test]
fn f32_widens_to_f64() {
    let narrow = JsonMap::from_items([("f", 2.5_f32)]);
    let wide = JsonMap::from_items([("f", 2.5_f64)]);
    assert!(narrow.equals(&wide));
}

#[test]
fn reflexive_and_symmetric() {
    let a = jmap! { "x" => 1, "y" => "two", "z" => true };
    let b = jmap! { "z" => true, "y" => "two", "x" => 1 };

    assert!(a.equals(&a));
    assert!(a.equals(&b));
    assert!(b.equals(&a));
}

#[test]
fn different_sizes_not_equal() {
    let small = jmap! { "a" => 1 };
    let big = jmap! { "a" => 1, "b" => 2 };
    assert!(!small.equals(&big));
    assert!(!big.equals(&small));
}

#[test]
fn different_values_not_equal() {
    assert!(!jmap! { "a" => 1 }.equals(&jmap! { "a" => 2 }));
    assert!(!jmap! { "a" => "x" }.equals(&jmap! { "a" => "y" }));
}

#[test]
fn nested_maps_compare_recursively() {
    let a = jmap! { "sub" => jmap! { "x" => 1, "y" => 2 } };
    let b = jmap! { "sub" => jmap! { "y" => 2, "x" => 1 } };
    let c = jmap! { "sub" => jmap! { "x" => 1, "y" => 3 } };

    assert!(a.equals(&b));
    assert!(!a.equals(&c));
}

#[test]
fn lists_compare_pairwise() {
    let a = jmap! { "l" => jlist![1, "two", 3.0] };
    let b = jmap! { "l" => jlist![1, "two", 3.0] };
    let c = jmap! { "l" => jlist![1, "two"] };
    let d = jmap! { "l" => jlist![1, "two", 3] };

    assert!(a.equals(&b));
    assert!(!a.equals(&c));
    // 3.0 (float) vs 3 (int) differ in type.
    assert!(!a.equals(&d));
}

#[test]
fn nulls_are_equal() {
    let a = jmap! { "n" => Value::Null };
    let b = jmap! { "n" => Value::Null };
    assert!(a.equals(&b));
}

#[test]
fn empty_maps_are_equal() {
    assert!(JsonMap::new().equals(&JsonMap::new()));
}

/// Equality is key-based: maps under different hashers still compare.
#[test]
fn equality_across_hashers() {
    let seeded = jmap! { "a" => 1, "b" => 2 };
    let fnv = JsonMap::with_hasher(Arc::new(Fnv64)).set("a", 1).set("b", 2);
    assert!(seeded.equals(&fnv));
    assert!(fnv.equals(&seeded));
}
