//! Lookup operation — walks the trie by hash partitions.

use crate::node::{bit_position, BranchNode, Key, Node};
use crate::value::Value;

/// Searches for `key` in the subtree rooted at `branch`.
///
/// Reads allocate nothing: the walk only follows bitmap-indexed child
/// pointers.
///
/// # Panics
///
/// Panics if a slot holds a node of the wrong variant (trie invariant
/// violation).
#[must_use]
pub fn get_recursive<'a>(branch: &'a BranchNode, key: &Key) -> Option<&'a Value> {
    let pos = bit_position(key.hash, branch.level);

    if branch.value_map & pos != 0 {
        // Slot holds a leaf or a collision bag.
        match branch.children.get(branch.index(pos)) {
            Node::Leaf(leaf) => leaf.get(key),
            Node::Collision(collision) => collision.get(key),
            Node::Branch(_) => panic!("branch node in a leaf slot: '{}'", key.text),
        }
    } else if branch.sub_maps_map & pos != 0 {
        // Slot holds a child branch — recurse one level down.
        match branch.children.get(branch.index(pos)) {
            Node::Branch(child) => get_recursive(child, key),
            other => panic!("leaf node in a branch slot: '{}' ({other:?})", key.text),
        }
    } else {
        None
    }
}
