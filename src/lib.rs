//! Generic intervals with boundary-aware operations on them,
//! and a few small container utilities.
#![no_std]

extern crate alloc;

#[cfg(any(feature = "arbitrary", test))]
mod arbitrary;
mod bimap;
pub(crate) mod bounds;
mod bounded_queue;
mod error;
mod immutable;
mod interval;
mod multiset;
mod ops;
mod str;

#[cfg(feature = "arbitrary")]
pub use self::arbitrary::intervals_within;

pub use self::{
    bimap::BiMap,
    bounded_queue::BoundedQueue,
    bounds::{BoundType, Endpoint, LOWER, UPPER},
    error::{BiMapError, IntervalError, QueueError},
    immutable::ImmutableCollection,
    interval::Interval,
    multiset::Multiset,
};
