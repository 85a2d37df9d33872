use alloc::vec::Vec;
use core::{fmt, hash::Hash};

use hashbrown::HashSet;
use log::trace;

/// A bag of elements keeping every occurrence, in insertion order.
///
/// ```
/// # use hyper_collections::Multiset;
/// let mut bag = Multiset::new();
/// bag.add('a');
/// bag.add_many('b', 6);
/// assert_eq!(bag.count(&'b'), 6);
///
/// bag.remove(&'a');
/// bag.remove_many(&'b', 3);
/// assert_eq!(bag.to_string(), "[b, b, b]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiset<E> {
    items: Vec<E>,
}

impl<E> Default for Multiset<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E> Multiset<E> {
    /// Create an empty multiset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single occurrence of `element`.
    pub fn add(&mut self, element: E) {
        self.items.push(element);
    }

    /// The total number of occurrences.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the multiset holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over every occurrence.
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.items.iter()
    }
}

impl<E: PartialEq> Multiset<E> {
    /// Add `occurrences` copies of `element`.
    pub fn add_many(&mut self, element: E, occurrences: usize)
    where
        E: Clone,
    {
        self.items.extend(core::iter::repeat(element).take(occurrences));
    }

    /// Whether at least one occurrence of `element` is present.
    pub fn contains(&self, element: &E) -> bool {
        self.items.contains(element)
    }

    /// The number of occurrences of `element`.
    pub fn count(&self, element: &E) -> usize {
        self.items.iter().filter(|e| *e == element).count()
    }

    /// The distinct elements.
    pub fn element_set(&self) -> HashSet<&E>
    where
        E: Hash + Eq,
    {
        self.items.iter().collect()
    }

    /// Remove the first occurrence of `element`, if any.
    ///
    /// Returns whether something was removed.
    pub fn remove(&mut self, element: &E) -> bool {
        match self.items.iter().position(|e| e == element) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove up to `occurrences` occurrences of `element`.
    ///
    /// Returns the number of removed occurrences.
    pub fn remove_many(&mut self, element: &E, occurrences: usize) -> usize {
        (0..occurrences)
            .take_while(|_| self.remove(element))
            .count()
    }

    /// Add or remove occurrences of an already present `element`
    /// until there are exactly `count` of them.
    ///
    /// An absent element stays absent. New occurrences are placed
    /// just before the last existing one.
    pub fn set_count(&mut self, element: &E, count: usize)
    where
        E: Clone,
    {
        let current = self.count(element);
        if current == 0 {
            trace!("multiset count update ignored for an absent element");
            return;
        }

        if current > count {
            self.remove_many(element, current - count);
        } else if let Some(last) = self.items.iter().rposition(|e| e == element) {
            let copies = core::iter::repeat(element.clone()).take(count - current);
            self.items.splice(last..last, copies);
        }
    }

    /// [`set_count`][Self::set_count] only if the current count is `old_count`.
    ///
    /// Returns whether the count was updated.
    pub fn set_count_if(&mut self, element: &E, old_count: usize, new_count: usize) -> bool
    where
        E: Clone,
    {
        let current = self.count(element);
        if current == 0 || current != old_count {
            trace!("multiset conditional count update skipped");
            return false;
        }
        self.set_count(element, new_count);
        true
    }
}

impl<E> FromIterator<E> for Multiset<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for Multiset<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, E> IntoIterator for &'a Multiset<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: fmt::Display> fmt::Display for Multiset<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, e) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            e.fmt(f)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString as _, vec::Vec};

    use super::*;

    #[test]
    fn add_and_count() {
        let mut bag = Multiset::new();
        bag.add('a');
        bag.add_many('b', 6);
        bag.add_many('c', 0);

        assert_eq!(bag.to_string(), "[a, b, b, b, b, b, b]");
        assert!(!bag.contains(&'c'));
        assert_eq!(bag.count(&'b'), 6);
        assert_eq!(bag.count(&'z'), 0);
        assert_eq!(bag.len(), 7);

        let mut distinct: Vec<_> = bag.element_set().into_iter().copied().collect();
        distinct.sort_unstable();
        assert_eq!(distinct, ['a', 'b']);
    }

    #[test]
    fn removal() {
        let mut bag: Multiset<_> = "abbbbbb".chars().collect();
        assert!(bag.remove(&'a'));
        assert!(!bag.remove(&'a'));
        assert_eq!(bag.remove_many(&'b', 3), 3);
        assert_eq!(bag.to_string(), "[b, b, b]");
        assert_eq!(bag.remove_many(&'b', 10), 3);
        assert!(bag.is_empty());
    }

    #[test]
    fn set_count() {
        let mut bag: Multiset<_> = "bbb".chars().collect();
        bag.add('c');
        bag.set_count(&'c', 2);
        assert!(bag.set_count_if(&'b', 3, 4));
        assert_eq!(bag.to_string(), "[b, b, b, b, c, c]");

        bag.set_count(&'b', 1);
        assert_eq!(bag.to_string(), "[b, c, c]");
    }

    #[test]
    fn set_count_groups_new_occurrences() {
        let mut bag: Multiset<_> = "abca".chars().collect();
        bag.set_count(&'a', 4);
        assert_eq!(bag.to_string(), "[a, b, c, a, a, a]");
    }

    #[test]
    fn absent_element_is_not_added() {
        let mut bag: Multiset<char> = Multiset::new();
        bag.set_count(&'x', 3);
        assert!(bag.is_empty());
        assert!(!bag.set_count_if(&'x', 0, 3));
        assert!(bag.is_empty());
    }

    #[test]
    fn conditional_update_needs_matching_count() {
        let mut bag: Multiset<_> = "zz".chars().collect();
        assert!(!bag.set_count_if(&'z', 3, 5));
        assert_eq!(bag.count(&'z'), 2);
        assert!(bag.set_count_if(&'z', 2, 0));
        assert!(bag.is_empty());
    }
}
