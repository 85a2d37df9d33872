use thiserror::Error;

/// Errors raised while building or querying an [`Interval`][crate::Interval].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IntervalError {
    /// A bounded interval was requested without one of its endpoints.
    #[error("a bounded interval requires both endpoints")]
    MissingEndpoint,
    /// The lower endpoint lies above the upper one
    /// (or meets it while both are open).
    #[error("the lower endpoint must not exceed the upper endpoint")]
    InvalidOrder,
    /// A point query was made without a point.
    #[error("null value is not allowed")]
    NullValue,
}

/// Errors raised by [`BiMap`][crate::BiMap] insertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum BiMapError {
    /// The key is already mapped.
    #[error("the key is already present in the map")]
    DuplicateKey,
    /// Another key is already mapped to the value.
    #[error("the value is already bound to another key")]
    DuplicateValue,
}

/// Errors raised by [`BoundedQueue`][crate::BoundedQueue].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum QueueError {
    /// The queue was created without room for a single element.
    #[error("maximum size must be positive")]
    ZeroCapacity,
    /// An element was requested from an empty queue.
    #[error("queue is empty")]
    Empty,
}
