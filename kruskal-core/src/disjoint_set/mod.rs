//! Union-find (disjoint set union) over a fixed universe of elements.
//!
//! The stepper and the validator both rebuild one of these from scratch
//! whenever they need connectivity, so the structure has no undo. Elements are
//! mapped to dense indices once at construction; `find` uses union by rank and
//! full path compression.

use std::{collections::HashMap, fmt, hash::Hash};

use crate::error::DisjointSetError;

/// Opaque handle to the root of a set, as returned by [`DisjointSet::find`].
///
/// Two elements are in the same set exactly when their representatives
/// compare equal. Representatives are only meaningful until the next
/// successful [`DisjointSet::union`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Representative(usize);

/// Union-find with union by rank and path compression.
///
/// # Examples
/// ```
/// use kruskal_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(["A", "B", "C"]).expect("unique elements");
/// assert!(sets.union(&"A", &"B").expect("known elements"));
/// assert!(!sets.union(&"B", &"A").expect("known elements"));
/// assert!(sets.connected(&"A", &"B").expect("known elements"));
/// assert!(!sets.connected(&"A", &"C").expect("known elements"));
/// assert_eq!(sets.set_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<T> {
    elements: Vec<T>,
    index: HashMap<T, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl<T> DisjointSet<T>
where
    T: Clone + Eq + Hash + fmt::Display,
{
    /// Places every element in its own singleton set of rank zero.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::DuplicateElement`] when an element occurs
    /// more than once.
    pub fn new(elements: impl IntoIterator<Item = T>) -> Result<Self, DisjointSetError> {
        let elements: Vec<T> = elements.into_iter().collect();
        let mut index = HashMap::with_capacity(elements.len());
        for (position, element) in elements.iter().enumerate() {
            if index.insert(element.clone(), position).is_some() {
                return Err(DisjointSetError::DuplicateElement {
                    element: element.to_string(),
                });
            }
        }

        let len = elements.len();
        Ok(Self {
            elements,
            index,
            parent: (0..len).collect(),
            rank: vec![0; len],
            sets: len,
        })
    }

    /// Returns the number of elements in the universe.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.elements.len() }

    /// Returns `true` when the universe is empty.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    /// Returns the current number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn set_count(&self) -> usize { self.sets }

    /// Returns the representative of the set containing `element`.
    ///
    /// Every node visited on the way to the root is repointed directly at it.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::UnknownElement`] for elements outside the
    /// universe.
    pub fn find(&mut self, element: &T) -> Result<Representative, DisjointSetError> {
        let node = self.index_of(element)?;
        Ok(Representative(self.find_index(node)))
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false`, leaving the structure untouched apart from path
    /// compression, when both are already in the same set. Otherwise the
    /// lower-rank root is attached under the higher-rank root; on a rank tie
    /// the root of `right` goes under the root of `left`, whose rank grows by
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::UnknownElement`] for elements outside the
    /// universe.
    pub fn union(&mut self, left: &T, right: &T) -> Result<bool, DisjointSetError> {
        let left = self.index_of(left)?;
        let right = self.index_of(right)?;
        Ok(self.union_indices(left, right))
    }

    /// Returns `true` when `left` and `right` share a set.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::UnknownElement`] for elements outside the
    /// universe.
    pub fn connected(&mut self, left: &T, right: &T) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Resolves a representative back to its element.
    #[must_use]
    pub fn element(&self, representative: Representative) -> Option<&T> {
        self.elements.get(representative.0)
    }

    fn index_of(&self, element: &T) -> Result<usize, DisjointSetError> {
        self.index
            .get(element)
            .copied()
            .ok_or_else(|| DisjointSetError::UnknownElement {
                element: element.to_string(),
            })
    }

    fn find_index(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    fn union_indices(&mut self, left: usize, right: usize) -> bool {
        let mut parent = self.find_index(left);
        let mut child = self.find_index(right);
        if parent == child {
            return false;
        }
        let left_rank = self.rank[parent];
        let right_rank = self.rank[child];
        if left_rank < right_rank {
            std::mem::swap(&mut parent, &mut child);
        }
        self.parent[child] = parent;
        if left_rank == right_rank {
            self.rank[parent] = left_rank.saturating_add(1);
        }
        self.sets -= 1;
        true
    }

    #[cfg(test)]
    fn parent_of(&self, element: &T) -> Option<&T> {
        let node = *self.index.get(element)?;
        self.elements.get(self.parent[node])
    }

    #[cfg(test)]
    fn rank_of(&self, element: &T) -> Option<u8> {
        let node = *self.index.get(element)?;
        self.rank.get(node).copied()
    }
}
