//! The pull-based source capability shared by every producer.

use std::iter::FusedIterator;

/// What a source knows about how many values it still has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// The source will yield exactly `remaining` more values, then exhaust.
    Finite {
        /// Values left before exhaustion.
        remaining: u64,
    },
    /// The source never exhausts under normal operation.
    Unbounded,
}

impl Extent {
    /// Returns `true` for [`Extent::Finite`].
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite { .. })
    }

    /// Returns the remaining count for finite sources.
    pub fn remaining(self) -> Option<u64> {
        match self {
            Self::Finite { remaining } => Some(remaining),
            Self::Unbounded => None,
        }
    }
}

/// A forward-only, single-pass producer of values.
///
/// Each call to [`next`](SequenceSource::next) advances the source exactly
/// once. A `None` result is permanent: every later call must return `None`
/// again rather than panicking or resuming. Unbounded sources never return
/// `None`, so pulling from them without an external limit does not
/// terminate.
///
/// Sources offer no peek, reset, or seek.
pub trait SequenceSource {
    /// The value type this source yields.
    type Item;

    /// Pulls the next value, or `None` once the source is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Declares how many values remain.
    fn extent(&self) -> Extent;

    /// A stable label for logs and errors.
    fn name(&self) -> &'static str;

    /// Adapts this source into a standard [`Iterator`].
    fn into_values(self) -> Values<Self>
    where
        Self: Sized,
    {
        Values { source: self }
    }
}

impl<S: SequenceSource + ?Sized> SequenceSource for &mut S {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn extent(&self) -> Extent {
        (**self).extent()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S: SequenceSource + ?Sized> SequenceSource for Box<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }

    fn extent(&self) -> Extent {
        (**self).extent()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Iterator over the values of a [`SequenceSource`].
///
/// Created by [`SequenceSource::into_values`].
#[derive(Debug)]
pub struct Values<S> {
    source: S,
}

impl<S> Values<S> {
    /// Returns the wrapped source, positioned after the last yielded value.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: SequenceSource> Iterator for Values<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.source.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.source.extent() {
            Extent::Finite { remaining } => match usize::try_from(remaining) {
                Ok(n) => (n, Some(n)),
                Err(_) => (usize::MAX, None),
            },
            Extent::Unbounded => (usize::MAX, None),
        }
    }
}

// Exhaustion is idempotent for every source.
impl<S: SequenceSource> FusedIterator for Values<S> {}
