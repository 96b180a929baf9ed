//! # Listener registry - key → ordered listener records.
//!
//! Plain data structure; the emitter wraps it in a mutex and never holds the
//! lock while a listener runs.
//!
//! ## Rules
//! - A key present in the map has a non-empty sequence (empty sequences are deleted)
//! - Sequence order is registration order, except `Placement::Prepend` inserts at 0
//! - Duplicate callables produce independent records
//! - Reads hand out clones (snapshots), never references into the map

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::listeners::{ListenerId, ListenerRecord};
use crate::policies::Placement;

/// Bounds required of an event key.
///
/// Blanket-implemented for every `Eq + Hash + Clone + Debug + Send + Sync + 'static`
/// type, so `String`, `&'static str`, integers and user enums all qualify.
pub trait EventKey: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

impl<T> EventKey for T where T: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

/// Mapping from event key to its listener sequence.
pub(crate) struct Registry<P, K> {
    channels: HashMap<K, Vec<ListenerRecord<P>>>,
}

impl<P, K: EventKey> Registry<P, K> {
    pub(crate) fn new() -> Self {
        Self {
            channels: HashMap::new(),
        }
    }

    /// Inserts a record and returns the key's sequence length afterwards.
    pub(crate) fn insert(
        &mut self,
        key: K,
        record: ListenerRecord<P>,
        placement: Placement,
    ) -> usize {
        let seq = self.channels.entry(key).or_default();
        match placement {
            Placement::Append => seq.push(record),
            Placement::Prepend => seq.insert(0, record),
        }
        seq.len()
    }

    /// Takes the record with `id` out of `key`'s sequence.
    ///
    /// Removal methods hand records back instead of dropping them: the caller
    /// must drop them after releasing the lock, since a listener's captures may
    /// call back into the emitter from their `Drop`.
    pub(crate) fn remove<Q>(&mut self, key: &Q, id: ListenerId) -> Option<ListenerRecord<P>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let seq = self.channels.get_mut(key)?;
        let pos = seq.iter().position(|r| r.id() == id)?;
        let record = seq.remove(pos);
        if seq.is_empty() {
            self.channels.remove(key);
        }
        Some(record)
    }

    /// Takes `key` out with all its records (empty if absent).
    pub(crate) fn remove_key<Q>(&mut self, key: &Q) -> Vec<ListenerRecord<P>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.channels.remove(key).unwrap_or_default()
    }

    /// Takes every key out, leaving the registry empty.
    pub(crate) fn clear(&mut self) -> HashMap<K, Vec<ListenerRecord<P>>> {
        std::mem::take(&mut self.channels)
    }

    /// Independent copy of the key's sequence (empty if absent).
    pub(crate) fn snapshot<Q>(&self, key: &Q) -> Vec<ListenerRecord<P>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.channels.get(key).cloned().unwrap_or_default()
    }

    pub(crate) fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.channels.get(key).map_or(0, Vec::len)
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.channels.contains_key(key)
    }

    pub(crate) fn keys(&self) -> Vec<K> {
        self.channels.keys().cloned().collect()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.channels.len()
    }
}
