//! Insertion operation — copy-on-write path update.
//!
//! The mutable references handed out by [`CowSlice`](crate::cow::CowSlice)
//! fork shared nodes lazily, so an insert into a shared trie copies only
//! the nodes along the walked hash path; an insert into a freshly built
//! trie mutates in place.

use std::sync::Arc;

use crate::cow::CowSlice;
use crate::node::{bit_position, BranchNode, CollisionNode, Key, Node, ValueNode, MAX_DEPTH};
use crate::value::Value;

/// Inserts `key` → `value` into the subtree rooted at `branch`.
///
/// Returns `true` if a new key was added, `false` if an existing binding
/// was replaced.
///
/// # Panics
///
/// Panics if a slot holds a node of the wrong variant, or if two distinct
/// hashes fail to separate by the terminal level (trie invariant
/// violations).
pub fn insert_recursive(branch: &mut BranchNode, key: Key, value: Value) -> bool {
    debug_assert_eq!(branch.value_map & branch.sub_maps_map, 0);

    let pos = bit_position(key.hash, branch.level);
    let idx = branch.index(pos);
    let level = branch.level;

    if branch.sub_maps_map & pos != 0 {
        // Slot holds a child branch — recurse one level down.
        match branch.children.get_mut(idx) {
            Node::Branch(child) => insert_recursive(child, key, value),
            other => panic!("leaf node in a branch slot: '{}' ({other:?})", key.text),
        }
    } else if branch.value_map & pos != 0 {
        // Slot holds a leaf or a collision bag.
        let node = branch.children.get_mut(idx);
        match node {
            Node::Leaf(leaf) => {
                if leaf.key == key {
                    // Same key → replace the value.
                    leaf.value = value;
                    return false;
                }

                let existing = leaf.clone();
                let incoming = ValueNode { key, value };

                if existing.key.hash == incoming.key.hash {
                    // Full 64-bit collision with different key text:
                    // promote the leaf into a collision bag in place.
                    *node = Node::Collision(CollisionNode::from_pair(existing, incoming));
                } else {
                    // Hashes diverge below this level: push both bindings
                    // into a new child branch and flip the slot from the
                    // value bitmap to the sub-map bitmap.
                    let hash = existing.key.hash;
                    let child = merge_into_branch(level + 1, Node::Leaf(existing), hash, incoming);
                    *node = Node::Branch(child);
                    branch.value_map &= !pos;
                    branch.sub_maps_map |= pos;
                }
                true
            }
            Node::Collision(collision) => {
                if collision.hash == key.hash {
                    // Same full hash → replace or append inside the bag.
                    return collision.set(key, value);
                }

                // Different hash sharing this slot's partition: the bag
                // moves into a child branch alongside the new leaf.
                let existing = collision.clone();
                let hash = existing.hash;
                let incoming = ValueNode { key, value };
                let child =
                    merge_into_branch(level + 1, Node::Collision(existing), hash, incoming);
                *node = Node::Branch(child);
                branch.value_map &= !pos;
                branch.sub_maps_map |= pos;
                true
            }
            Node::Branch(_) => panic!("branch node in a leaf slot: '{}'", key.text),
        }
    } else {
        // Slot empty → add a new leaf at the compact-array position.
        branch.children.insert(idx, Node::Leaf(ValueNode { key, value }));
        branch.value_map |= pos;
        true
    }
}

// ---------------------------------------------------------------------------
// Leaf split
// ---------------------------------------------------------------------------

/// Builds a branch at `level` holding an existing node (leaf or collision
/// bag, positioned by `existing_hash`) and a new leaf whose hash differs.
///
/// Descends while the two hashes share a partition. Children land in
/// ascending slot order, which keeps compact-array indexing canonical.
fn merge_into_branch(level: u8, existing: Node, existing_hash: u64, incoming: ValueNode) -> BranchNode {
    assert!(
        level <= MAX_DEPTH,
        "maximum trie depth exceeded merging '{}'",
        incoming.key.text
    );

    let pos_existing = bit_position(existing_hash, level);
    let pos_incoming = bit_position(incoming.key.hash, level);

    if pos_existing == pos_incoming {
        // Still colliding at this level. Two distinct 64-bit hashes must
        // separate by the terminal level: the eleven partitions cover all
        // 64 bits.
        assert!(
            level < MAX_DEPTH,
            "distinct hashes failed to separate by the terminal level: '{}'",
            incoming.key.text
        );

        let child = merge_into_branch(level + 1, existing, existing_hash, incoming);
        return BranchNode {
            level,
            value_map: 0,
            sub_maps_map: pos_existing,
            children: CowSlice::with_items(vec![Arc::new(Node::Branch(child))]),
        };
    }

    let value_map = pos_existing | pos_incoming;
    let incoming = Node::Leaf(incoming);
    let children = if pos_existing < pos_incoming {
        vec![Arc::new(existing), Arc::new(incoming)]
    } else {
        vec![Arc::new(incoming), Arc::new(existing)]
    };

    BranchNode {
        level,
        value_map,
        sub_maps_map: 0,
        children: CowSlice::with_items(children),
    }
}
