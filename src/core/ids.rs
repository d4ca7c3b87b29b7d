//! Actor identification and per-actor data storage.
//!
//! ## ActorId
//!
//! Type-safe actor identifier. Each actor owns exactly one team, so the same
//! id keys both the actor table and the team table. Ids render as letters
//! (`A`, `B`, ...) which is also their serialized form.
//!
//! ## ActorMap
//!
//! Per-actor data storage backed by a `BTreeMap`, so iteration order is the
//! id order on every platform. Supports indexing by `ActorId`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

/// Actor (and team) identifier.
///
/// Actor indices are 0-based: the first side is `ActorId(0)`, displayed `A`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ActorId(pub u8);

impl ActorId {
    /// The first side.
    pub const A: ActorId = ActorId(0);
    /// The second side.
    pub const B: ActorId = ActorId(1);

    /// Create a new actor ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw actor index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over the first `count` actor IDs.
    ///
    /// ```
    /// use nexus_tactics::core::ActorId;
    ///
    /// let ids: Vec<_> = ActorId::all(2).collect();
    /// assert_eq!(ids, vec![ActorId::A, ActorId::B]);
    /// ```
    pub fn all(count: usize) -> impl Iterator<Item = ActorId> {
        (0..count.min(256)).map(|i| ActorId(i as u8))
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 26 {
            write!(f, "{}", (b'A' + self.0) as char)
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

impl From<ActorId> for String {
    fn from(id: ActorId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ActorId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let bytes = value.as_bytes();
        match bytes {
            [c] if c.is_ascii_uppercase() => Ok(ActorId(c - b'A')),
            [b'#', rest @ ..] if !rest.is_empty() => value[1..]
                .parse::<u8>()
                .map(ActorId)
                .map_err(|e| format!("invalid actor id {value:?}: {e}")),
            _ => Err(format!("invalid actor id {value:?}")),
        }
    }
}

/// Per-actor data storage with ordered iteration.
///
/// ## Example
///
/// ```
/// use nexus_tactics::core::{ActorId, ActorMap};
///
/// let mut vp: ActorMap<u32> = ActorMap::new();
/// vp.insert(ActorId::A, 0);
/// vp.insert(ActorId::B, 2);
///
/// vp[ActorId::A] += 1;
/// assert_eq!(vp[ActorId::A], 1);
/// assert_eq!(vp.get(ActorId::new(7)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorMap<T> {
    data: BTreeMap<ActorId, T>,
}

impl<T> Default for ActorMap<T> {
    fn default() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }
}

impl<T> ActorMap<T> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map with one entry per id, built by a factory function.
    pub fn from_ids(ids: impl IntoIterator<Item = ActorId>, factory: impl Fn(ActorId) -> T) -> Self {
        Self {
            data: ids.into_iter().map(|id| (id, factory(id))).collect(),
        }
    }

    /// Insert or replace an entry, returning the previous value.
    pub fn insert(&mut self, id: ActorId, value: T) -> Option<T> {
        self.data.insert(id, value)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if an id has an entry.
    #[must_use]
    pub fn contains(&self, id: ActorId) -> bool {
        self.data.contains_key(&id)
    }

    /// Get a reference to an actor's data.
    #[must_use]
    pub fn get(&self, id: ActorId) -> Option<&T> {
        self.data.get(&id)
    }

    /// Get a mutable reference to an actor's data.
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut T> {
        self.data.get_mut(&id)
    }

    /// Iterate over (ActorId, &T) pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &T)> {
        self.data.iter().map(|(&id, v)| (id, v))
    }

    /// Iterate over (ActorId, &mut T) pairs in id order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ActorId, &mut T)> {
        self.data.iter_mut().map(|(&id, v)| (id, v))
    }

    /// Iterate over all ids in order.
    pub fn ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.data.keys().copied()
    }

    /// Iterate over values in id order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.values()
    }

    /// Iterate mutably over values in id order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.values_mut()
    }
}

impl<T> Index<ActorId> for ActorMap<T> {
    type Output = T;

    fn index(&self, id: ActorId) -> &Self::Output {
        match self.data.get(&id) {
            Some(v) => v,
            None => panic!("no entry for actor {id}"),
        }
    }
}

impl<T> IndexMut<ActorId> for ActorMap<T> {
    fn index_mut(&mut self, id: ActorId) -> &mut Self::Output {
        match self.data.get_mut(&id) {
            Some(v) => v,
            None => panic!("no entry for actor {id}"),
        }
    }
}

impl<T> FromIterator<(ActorId, T)> for ActorMap<T> {
    fn from_iter<I: IntoIterator<Item = (ActorId, T)>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}
