//! Collection length rules

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use std::marker::PhantomData;

use crate::foundation::{Constraint, Outcome};
use crate::rules::length_error;

// ============================================================================
// SLICE LENGTH
// ============================================================================

crate::constraint! {
    /// Number of elements within `min..=max`.
    pub Len<E> { min: usize, max: usize } for [E];
    rule(self, input) { (self.min..=self.max).contains(&input.len()) }
    error(self, input) { length_error("items", input.len(), self.min, self.max) }
    new(min: usize, max: usize) {
        assert!(min <= max, "len: min ({min}) must not exceed max ({max})");
        Self { min, max, _phantom: PhantomData }
    }
    fn len(min: usize, max: usize);
}

// ============================================================================
// MAP LENGTH
// ============================================================================

/// Number of entries of a `HashMap` within `min..=max`.
pub struct MapLen<K, V, S = std::collections::hash_map::RandomState> {
    min: usize,
    max: usize,
    _phantom: PhantomData<fn() -> (K, V, S)>,
}

impl<K, V, S> MapLen<K, V, S> {
    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        assert!(min <= max, "len_map: min ({min}) must not exceed max ({max})");
        Self {
            min,
            max,
            _phantom: PhantomData,
        }
    }
}

impl<K, V, S> Clone for MapLen<K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for MapLen<K, V, S> {}

impl<K, V, S> fmt::Debug for MapLen<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapLen")
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}

impl<K, V, S: BuildHasher> Constraint for MapLen<K, V, S> {
    type Input = HashMap<K, V, S>;

    fn check(&self, input: &Self::Input) -> Outcome {
        if (self.min..=self.max).contains(&input.len()) {
            Ok(())
        } else {
            Err(length_error("items", input.len(), self.min, self.max).into())
        }
    }
}

#[must_use]
pub fn len_map<K, V>(min: usize, max: usize) -> MapLen<K, V> {
    MapLen::new(min, max)
}
