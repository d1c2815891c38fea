//! Copy-on-write child array for branch nodes.

use std::sync::Arc;

use crate::node::Node;

/// Small ordered sequence of child nodes with copy-on-write editing.
///
/// Cloning a `CowSlice` is the sharing point: it bumps the reference count
/// on the backing array without copying it. Edits go through
/// [`Arc::make_mut`], which mutates in place while the array is uniquely
/// owned and forks a private copy the first time an edit hits a shared
/// array. Elements are `Arc<Node>`, so a fork copies pointers, never
/// subtrees.
#[derive(Debug, Clone, Default)]
pub struct CowSlice {
    items: Arc<Vec<Arc<Node>>>,
}

impl CowSlice {
    /// Creates an empty child array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a child array from the given nodes.
    #[must_use]
    pub fn with_items(items: Vec<Arc<Node>>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the child at `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> &Node {
        &self.items[i]
    }

    /// Returns a mutable reference to the child at `i`, forking the array
    /// and the node itself if either is shared.
    pub fn get_mut(&mut self, i: usize) -> &mut Node {
        Arc::make_mut(&mut Arc::make_mut(&mut self.items)[i])
    }

    /// Replaces the child at `i`.
    pub fn set(&mut self, i: usize, node: Node) {
        Arc::make_mut(&mut self.items)[i] = Arc::new(node);
    }

    /// Inserts a child at `i`, shifting later children right.
    pub fn insert(&mut self, i: usize, node: Node) {
        Arc::make_mut(&mut self.items).insert(i, Arc::new(node));
    }

    /// Removes the child at `i`, shifting later children left.
    pub fn remove(&mut self, i: usize) {
        Arc::make_mut(&mut self.items).remove(i);
    }

    /// Iterates over the children in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.items.iter().map(AsRef::as_ref)
    }
}
