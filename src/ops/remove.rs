//! Removal operation — copy-on-write path update with branch pruning.

use crate::node::{bit_position, BranchNode, Key, Node};
use crate::ops::get::get_recursive;

/// Outcome of a recursive remove.
#[derive(Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Key was not found — tree unchanged.
    NotFound,
    /// Key was removed.
    Removed,
}

/// Removes `key` from the subtree rooted at `branch`.
///
/// Collision bags that drop to a single entry demote to a plain leaf;
/// child branches that become empty are pruned from the parent. Collapsing
/// single-leaf branches back up the tree is not performed.
///
/// # Panics
///
/// Panics if a slot holds a node of the wrong variant (trie invariant
/// violation).
pub fn remove_recursive(branch: &mut BranchNode, key: &Key) -> RemoveOutcome {
    let pos = bit_position(key.hash, branch.level);

    if branch.value_map & pos != 0 {
        let idx = branch.index(pos);

        // Inspect before mutating so a miss never forks shared storage.
        match branch.children.get(idx) {
            Node::Leaf(leaf) => {
                if leaf.key != *key {
                    return RemoveOutcome::NotFound;
                }
                branch.children.remove(idx);
                branch.value_map &= !pos;
                RemoveOutcome::Removed
            }
            Node::Collision(collision) => {
                if collision.get(key).is_none() {
                    return RemoveOutcome::NotFound;
                }

                let node = branch.children.get_mut(idx);
                match node {
                    Node::Collision(collision) => {
                        collision.remove(key);
                        if collision.entries.len() == 1 {
                            // A bag of one is just a leaf.
                            let last = collision.entries.remove(0);
                            *node = Node::Leaf(last);
                        }
                    }
                    _ => panic!("collision slot changed variant: '{}'", key.text),
                }
                RemoveOutcome::Removed
            }
            Node::Branch(_) => panic!("branch node in a leaf slot: '{}'", key.text),
        }
    } else if branch.sub_maps_map & pos != 0 {
        let idx = branch.index(pos);

        let contains = match branch.children.get(idx) {
            Node::Branch(child) => get_recursive(child, key).is_some(),
            other => panic!("leaf node in a branch slot: '{}' ({other:?})", key.text),
        };
        if !contains {
            return RemoveOutcome::NotFound;
        }

        let child_empty = match branch.children.get_mut(idx) {
            Node::Branch(child) => {
                let outcome = remove_recursive(child, key);
                debug_assert_eq!(outcome, RemoveOutcome::Removed);
                child.is_empty()
            }
            _ => panic!("branch slot changed variant: '{}'", key.text),
        };

        if child_empty {
            // Last binding below this slot is gone — prune the child.
            branch.children.remove(idx);
            branch.sub_maps_map &= !pos;
        }
        RemoveOutcome::Removed
    } else {
        RemoveOutcome::NotFound
    }
}
