//! Searching, predicates, and grouping.

use std::collections::HashMap;
use std::hash::Hash;

use crate::Seq;

/// Elements sharing a key, in the order they were encountered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K, T> {
    pub key: K,
    pub items: Vec<T>,
}

impl<T> Seq<T> {
    /// First element satisfying `predicate`, with its position.
    pub fn find_one<F>(&self, mut predicate: F) -> Option<(usize, &T)>
    where
        F: FnMut(&T) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .find(|(_, item)| predicate(item))
    }

    /// Every element satisfying `predicate`, with positions, in order.
    pub fn find_many<F>(&self, mut predicate: F) -> Vec<(usize, &T)>
    where
        F: FnMut(&T) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| predicate(item))
            .collect()
    }

    /// True when every element satisfies `predicate`; vacuously true when empty.
    pub fn all<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().all(predicate)
    }

    /// True when some element satisfies `predicate`; false when empty.
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().any(predicate)
    }

    pub fn contains_by<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.any(predicate)
    }
}

impl<T: PartialEq> Seq<T> {
    #[must_use]
    pub fn contains(&self, target: &T) -> bool {
        self.items.contains(target)
    }
}

impl<T: Clone> Seq<T> {
    /// Partition elements by a derived key.
    ///
    /// Each group keeps its members in encounter order. Groups are listed by
    /// the first appearance of their key; callers that need another order
    /// should sort the result themselves.
    pub fn group_by<K, F>(&self, mut key_fn: F) -> Vec<Group<K, T>>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K,
    {
        let mut positions: HashMap<K, usize> = HashMap::new();
        let mut groups: Vec<Group<K, T>> = Vec::new();

        for item in &self.items {
            let key = key_fn(item);
            if let Some(&slot) = positions.get(&key) {
                groups[slot].items.push(item.clone());
            } else {
                positions.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    items: vec![item.clone()],
                });
            }
        }

        groups
    }
}
