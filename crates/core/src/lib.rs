//! # collstore-core
//!
//! Crash-consistent type markers for on-disk collection stores.
//!
//! Stacks, queues, priority queues and prefix queues persist their elements in
//! a data directory. Before a store opens its key-value engine it calls
//! [`check_type`] with the directory and its own [`CollectionVariant`]. The
//! first call durably records the variant; later calls report whether the
//! requested variant can read the directory's key layout.
//!
//! ```no_run
//! use collstore_core::{check_type, CollectionVariant};
//!
//! let data_dir = std::path::Path::new("./data/jobs");
//! std::fs::create_dir_all(data_dir)?;
//! if !check_type(data_dir, CollectionVariant::Queue)? {
//!     eprintln!("{:?} belongs to a different collection type", data_dir);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// On-disk file names and sizes.
pub mod config;
/// `TagError` and `TagResult`.
pub mod error;
/// Marker creation, verification, and directory sync.
pub mod storage;
/// `CollectionVariant` and its compatibility relation.
pub mod variant;

pub use error::{TagError, TagResult};
pub use storage::{check_type, ensure_compatible, read_marker};
pub use variant::CollectionVariant;
