//! Jump-separated generator streams

use super::xoshiro::Xoshiro256;

/// Infinite iterator over generators spaced 2^128 steps apart
///
/// Created by [`Xoshiro256::streams`]. Each `next()` costs one jump.
#[derive(Debug, Clone)]
pub struct Streams {
    next: Xoshiro256,
}

impl Streams {
    pub(super) fn new(root: Xoshiro256) -> Self {
        Self { next: root }
    }
}

impl Iterator for Streams {
    type Item = Xoshiro256;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next;
        self.next.jump();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for Streams {}
