//! Collection variants and the compatibility relation between them.
//!
//! Each variant identifies the on-disk key layout of a collection. Stacks and
//! queues share a layout and differ only in pop order, so either may reopen a
//! directory created by the other. Priority queues and prefix queues use their
//! own layouts and only reopen directories of the same variant.

use crate::error::TagError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The on-disk shape of a collection.
///
/// Discriminants are the persisted marker bytes and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CollectionVariant {
    /// LIFO stack.
    Stack = 0,
    /// FIFO queue. Same key layout as [`Stack`](CollectionVariant::Stack).
    Queue = 1,
    /// Queue ordered by a priority byte prefixed to each key.
    PriorityQueue = 2,
    /// Set of FIFO queues addressed by a key prefix.
    PrefixQueue = 3,
}

impl CollectionVariant {
    /// Every variant, in tag order.
    pub const ALL: [CollectionVariant; 4] = [
        CollectionVariant::Stack,
        CollectionVariant::Queue,
        CollectionVariant::PriorityQueue,
        CollectionVariant::PrefixQueue,
    ];

    /// The marker byte persisted for this variant.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Whether a directory created as `self` may be opened as `requested`.
    pub fn is_compatible_with(self, requested: CollectionVariant) -> bool {
        use CollectionVariant::{Queue, Stack};
        self == requested || matches!((self, requested), (Stack, Queue) | (Queue, Stack))
    }

    fn name(self) -> &'static str {
        match self {
            CollectionVariant::Stack => "stack",
            CollectionVariant::Queue => "queue",
            CollectionVariant::PriorityQueue => "priority_queue",
            CollectionVariant::PrefixQueue => "prefix_queue",
        }
    }
}

impl TryFrom<u8> for CollectionVariant {
    type Error = TagError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0 => Ok(CollectionVariant::Stack),
            1 => Ok(CollectionVariant::Queue),
            2 => Ok(CollectionVariant::PriorityQueue),
            3 => Ok(CollectionVariant::PrefixQueue),
            other => Err(TagError::UnknownMarker(other)),
        }
    }
}

impl fmt::Display for CollectionVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
