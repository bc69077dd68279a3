//! Deterministic multi-key ordering of records.
//!
//! Each record kind declares an ordered list of [`SortKey`]s. Records are
//! compared key by key, left to right, the first non-equal key deciding.
//! Strings compare byte-wise and integers numerically, all ascending.

use std::cmp::Ordering;

use gadgetview_common::types::{ProcessRecord, SocketRecord};

/// A named comparison on one field of a record.
pub struct SortKey<T> {
    name: &'static str,
    compare: fn(&T, &T) -> Ordering,
}

impl<T> SortKey<T> {
    /// Creates a key from a field name and its comparison.
    pub const fn new(name: &'static str, compare: fn(&T, &T) -> Ordering) -> Self {
        Self { name, compare }
    }

    /// Field name the key compares.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Compares two records on this key alone.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }
}

/// A record kind with a fixed key precedence.
pub trait Sortable: Sized + 'static {
    /// Keys in precedence order.
    const SORT_KEYS: &'static [SortKey<Self>];
}

impl Sortable for ProcessRecord {
    const SORT_KEYS: &'static [SortKey<Self>] = &[
        SortKey::new("namespace", |a: &Self, b: &Self| a.namespace.cmp(&b.namespace)),
        SortKey::new("pod", |a: &Self, b: &Self| a.pod.cmp(&b.pod)),
        SortKey::new("container", |a: &Self, b: &Self| a.container.cmp(&b.container)),
        SortKey::new("comm", |a: &Self, b: &Self| a.comm.cmp(&b.comm)),
        SortKey::new("tgid", |a: &Self, b: &Self| a.tgid.cmp(&b.tgid)),
        SortKey::new("pid", |a: &Self, b: &Self| a.pid.cmp(&b.pid)),
    ];
}

// Status precedes the addresses and ports; existing consumers depend on this order.
impl Sortable for SocketRecord {
    const SORT_KEYS: &'static [SortKey<Self>] = &[
        SortKey::new("node", |a: &Self, b: &Self| a.node.cmp(&b.node)),
        SortKey::new("namespace", |a: &Self, b: &Self| a.namespace.cmp(&b.namespace)),
        SortKey::new("pod", |a: &Self, b: &Self| a.pod.cmp(&b.pod)),
        SortKey::new("protocol", |a: &Self, b: &Self| a.protocol.cmp(&b.protocol)),
        SortKey::new("status", |a: &Self, b: &Self| a.status.cmp(&b.status)),
        SortKey::new("local_address", |a: &Self, b: &Self| {
            a.local_address.cmp(&b.local_address)
        }),
        SortKey::new("remote_address", |a: &Self, b: &Self| {
            a.remote_address.cmp(&b.remote_address)
        }),
        SortKey::new("local_port", |a: &Self, b: &Self| a.local_port.cmp(&b.local_port)),
        SortKey::new("remote_port", |a: &Self, b: &Self| a.remote_port.cmp(&b.remote_port)),
    ];
}

/// Compares two records by folding their kind's keys left to right.
pub fn compare<T: Sortable>(a: &T, b: &T) -> Ordering {
    T::SORT_KEYS
        .iter()
        .fold(Ordering::Equal, |ord, key| ord.then_with(|| key.compare(a, b)))
}

/// Sorts records in place by their key tuple.
pub fn sort_records<T: Sortable>(records: &mut [T]) {
    records.sort_by(compare::<T>);
}
