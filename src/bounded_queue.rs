use alloc::{collections::VecDeque, vec::Vec};
use core::fmt;

use log::trace;

use crate::error::QueueError;

/// A FIFO queue holding at most a fixed number of elements.
///
/// Adding to a full queue evicts its oldest element.
///
/// ```
/// # use hyper_collections::BoundedQueue;
/// let mut recent = BoundedQueue::new(2).unwrap();
/// recent.add(1);
/// recent.add(2);
/// assert_eq!(recent.add(3), Some(1));
/// assert_eq!(recent.to_string(), "[2, 3]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedQueue<E> {
    max_size: usize,
    items: VecDeque<E>,
}

impl<E> BoundedQueue<E> {
    /// Create an empty queue for at most `max_size` elements.
    ///
    /// # Errors
    ///
    /// [`QueueError::ZeroCapacity`] if `max_size` is zero.
    pub fn new(max_size: usize) -> Result<Self, QueueError> {
        if max_size == 0 {
            return Err(QueueError::ZeroCapacity);
        }

        Ok(Self {
            max_size,
            items: VecDeque::new(),
        })
    }

    /// Append `element`, evicting and returning the oldest one if the queue is full.
    pub fn add(&mut self, element: E) -> Option<E> {
        let evicted = if self.is_full() {
            trace!("bounded queue at capacity {}, evicting the head", self.max_size);
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(element);
        evicted
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether the next [`add`][Self::add] will evict.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.max_size
    }

    /// Whether the queue holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The capacity fixed at creation.
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// The number of queued elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The oldest element.
    pub fn peek(&self) -> Option<&E> {
        self.items.front()
    }

    /// Take the oldest element out.
    ///
    /// # Errors
    ///
    /// [`QueueError::Empty`] if there is nothing to take.
    pub fn remove(&mut self) -> Result<E, QueueError> {
        self.items.pop_front().ok_or(QueueError::Empty)
    }

    /// Iterate from the oldest element to the newest.
    pub fn iter(&self) -> alloc::collections::vec_deque::Iter<'_, E> {
        self.items.iter()
    }

    /// Copy the elements, oldest first.
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.items.iter().cloned().collect()
    }
}

impl<'a, E> IntoIterator for &'a BoundedQueue<E> {
    type Item = &'a E;
    type IntoIter = alloc::collections::vec_deque::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: fmt::Display> fmt::Display for BoundedQueue<E> {
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
