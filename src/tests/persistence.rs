use crate::{jmap, JsonMap};

/// A set on a new version never changes the old one.
#[test]
fn set_preserves_old_version() {
    let old = jmap! { "a" => 1 };
    let new = old.set("b", 2);

    assert_eq!(old.len(), 1);
    assert!(old.get("b").is_none());
    assert_eq!(new.len(), 2);
    assert_eq!(new.get_int("b").unwrap(), 2);
}

#[test]
fn overwrite_preserves_old_version() {
    let old = jmap! { "a" => 1 };
    let new = old.set("a", 2);

    assert_eq!(old.get_int("a").unwrap(), 1);
    assert_eq!(new.get_int("a").unwrap(), 2);
}

#[test]
fn delete_preserves_old_version() {
    let old = jmap! { "a" => 1, "b" => 2 };
    let (new, _) = old.delete("a");

    assert_eq!(old.len(), 2);
    assert_eq!(old.get_int("a").unwrap(), 1);
    assert_eq!(new.len(), 1);
    assert!(new.get("a").is_none());
}

/// Every version in a chain of mutations stays intact.
#[test]
fn version_chain() {
    let mut versions = vec![JsonMap::new()];
    for i in 0..20_i64 {
        let next = versions.last().unwrap().set(format!("k{i}"), i);
        versions.push(next);
    }

    for (n, version) in versions.iter().enumerate() {
        assert_eq!(version.len(), n);
        for i in 0..20 {
            assert_eq!(version.contains(&format!("k{i}")), (i as usize) < n);
        }
    }
}

#[test]
fn clone_shares_structure() {
    let original = jmap! { "a" => 1, "b" => jmap! { "c" => 2 } };
    let copy = original.clone();

    let mutated = copy.set("a", 99);
    assert_eq!(original.get_int("a").unwrap(), 1);
    assert_eq!(copy.get_int("a").unwrap(), 1);
    assert_eq!(mutated.get_int("a").unwrap(), 99);
    assert!(original.equals(&copy));
}

/// Setting the same binding twice is a no-op for equality.
#[test]
fn idempotent_set() {
    let map = jmap! { "x" => 1 };
    let once = map.set("k", "v");
    let twice = once.set("k", "v");
    assert!(twice.equals(&once));
}

#[test]
fn deleted_version_unaffected_by_reinsert() {
    let base = jmap! { "a" => 1, "b" => 2 };
    let (deleted, _) = base.delete("b");
    let restored = deleted.set("b", 3);

    assert!(deleted.get("b").is_none());
    assert_eq!(base.get_int("b").unwrap(), 2);
    assert_eq!(restored.get_int("b").unwrap(), 3);
}
