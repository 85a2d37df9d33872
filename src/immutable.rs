use alloc::{boxed::Box, vec::Vec};

/// A read-only sequence fixed at construction.
///
/// ```
/// # use hyper_collections::ImmutableCollection;
/// let primes: ImmutableCollection<u32> = [2, 3, 5, 7].into_iter().collect();
/// assert_eq!(primes.len(), 4);
/// assert!(primes.contains(&5));
/// assert_eq!(primes.iter().sum::<u32>(), 17);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImmutableCollection<E> {
    items: Box<[E]>,
}

impl<E> ImmutableCollection<E> {
    /// The empty collection.
    pub fn of() -> Self {
        Self {
            items: Box::default(),
        }
    }

    /// Whether the collection holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether `element` is one of the elements.
    pub fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.items.contains(element)
    }

    /// Iterate over the elements in construction order.
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.items.iter()
    }

    /// View the elements as a slice.
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }
}

impl<E> Default for ImmutableCollection<E> {
    fn default() -> Self {
        Self::of()
    }
}

impl<E> From<Vec<E>> for ImmutableCollection<E> {
    fn from(items: Vec<E>) -> Self {
        Self {
            items: items.into_boxed_slice(),
        }
    }
}

impl<E> FromIterator<E> for ImmutableCollection<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, E> IntoIterator for &'a ImmutableCollection<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
