//! Memoized aggregation keyed by input content.
//!
//! Inputs are bucketed by a 64-bit fingerprint and compared in full within
//! a bucket, so a fingerprint collision never returns another input's groups.
//! Each entry holds a once-cell. The map lock is held only long enough to
//! find or insert the cell; the aggregation runs inside the cell, so
//! concurrent callers with the same input wait for a single computation
//! instead of repeating it.

use super::grouping::aggregate;
use crate::stamp::{AggregatedStamp, Stamp};
use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

type Groups = Arc<[AggregatedStamp]>;
type Slot = Arc<OnceLock<Groups>>;
type Buckets = HashMap<u64, Vec<Entry>>;

#[derive(Debug)]
struct Entry {
    stamps: Vec<Stamp>,
    slot: Slot,
}

/// Content-keyed cache in front of [`aggregate`]
///
/// Entries live until the owner calls [`evict`](Self::evict) or
/// [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct AggregationCache {
    slots: Mutex<Buckets>,
}

impl AggregationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate `stamps`, reusing an earlier result for equal input
    pub fn get_or_aggregate(&self, stamps: &[Stamp]) -> Groups {
        let slot = self.slot_for(fingerprint(stamps), stamps);

        Arc::clone(slot.get_or_init(|| {
            debug!("Cache miss for {} stamps", stamps.len());
            aggregate(stamps).into()
        }))
    }

    /// Drop the entry for one input, returning whether it existed
    pub fn evict(&self, stamps: &[Stamp]) -> bool {
        let key = fingerprint(stamps);
        let mut buckets = self.lock();

        let Some(bucket) = buckets.get_mut(&key) else {
            return false;
        };
        let Some(pos) = bucket.iter().position(|e| e.stamps == stamps) else {
            return false;
        };

        bucket.swap_remove(pos);
        if bucket.is_empty() {
            buckets.remove(&key);
        }
        true
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// **Private** - find or create the once-cell for `stamps` under `key`
    fn slot_for(&self, key: u64, stamps: &[Stamp]) -> Slot {
        let mut buckets = self.lock();
        let bucket = buckets.entry(key).or_default();

        if let Some(entry) = bucket.iter().find(|e| e.stamps == stamps) {
            return Arc::clone(&entry.slot);
        }

        if !bucket.is_empty() {
            debug!("Fingerprint {:016x} shared by {} inputs", key, bucket.len() + 1);
        }

        let slot: Slot = Arc::new(OnceLock::new());
        bucket.push(Entry {
            stamps: stamps.to_vec(),
            slot: Arc::clone(&slot),
        });
        slot
    }

    // A panic inside `aggregate` happens outside the lock, so a poisoned map
    // is still consistent.
    fn lock(&self) -> MutexGuard<'_, Buckets> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn fingerprint(stamps: &[Stamp]) -> u64 {
    let mut hasher = DefaultHasher::new();
    stamps.hash(&mut hasher);
    hasher.finish()
}
