use collstore_core::config::{MARKER_FILE_NAME, MARKER_TEMP_FILE_NAME};
use collstore_core::{check_type, ensure_compatible, read_marker, CollectionVariant, TagError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use CollectionVariant::{PrefixQueue, PriorityQueue, Queue, Stack};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn data_dir() -> TempDir {
    init_tracing();
    TempDir::new().expect("Failed to create temp dir")
}

fn marker(dir: &Path) -> PathBuf {
    dir.join(MARKER_FILE_NAME)
}

fn marker_bytes(dir: &Path) -> Vec<u8> {
    fs::read(marker(dir)).expect("marker should exist")
}

#[test]
fn test_first_use_writes_requested_tag() {
    for variant in CollectionVariant::ALL {
        let tmp = data_dir();
        assert!(check_type(tmp.path(), variant).unwrap());
        assert_eq!(marker_bytes(tmp.path()), vec![variant.tag()]);
        assert!(!tmp.path().join(MARKER_TEMP_FILE_NAME).exists());
    }
}

#[test]
fn test_reopen_same_variant_is_stable() {
    for variant in CollectionVariant::ALL {
        let tmp = data_dir();
        check_type(tmp.path(), variant).unwrap();
        let modified = fs::metadata(marker(tmp.path())).unwrap().modified().unwrap();

        for _ in 0..3 {
            assert!(check_type(tmp.path(), variant).unwrap());
        }
        let meta = fs::metadata(marker(tmp.path())).unwrap();
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.modified().unwrap(), modified);
        assert_eq!(marker_bytes(tmp.path()), vec![variant.tag()]);
    }
}

#[test]
fn test_stack_and_queue_share_directories() {
    let pairs = [(Stack, Queue), (Queue, Stack), (Stack, Stack), (Queue, Queue)];
    for (tagged, requested) in pairs {
        let tmp = data_dir();
        check_type(tmp.path(), tagged).unwrap();
        assert!(
            check_type(tmp.path(), requested).unwrap(),
            "{} directory should open as {}",
            tagged,
            requested
        );
        assert_eq!(marker_bytes(tmp.path()), vec![tagged.tag()]);
    }
}

#[test]
fn test_priority_and_prefix_directories_are_isolated() {
    for tagged in [PriorityQueue, PrefixQueue] {
        let tmp = data_dir();
        check_type(tmp.path(), tagged).unwrap();
        for requested in CollectionVariant::ALL {
            let compatible = check_type(tmp.path(), requested).unwrap();
            assert_eq!(compatible, requested == tagged, "{} vs {}", tagged, requested);
        }
        assert_eq!(marker_bytes(tmp.path()), vec![tagged.tag()]);
    }
}

#[test]
fn test_stack_and_queue_cannot_open_priority_or_prefix() {
    for tagged in [Stack, Queue] {
        let tmp = data_dir();
        check_type(tmp.path(), tagged).unwrap();
        assert!(!check_type(tmp.path(), PriorityQueue).unwrap());
        assert!(!check_type(tmp.path(), PrefixQueue).unwrap());
    }
}

#[test]
fn test_interrupted_creation_is_treated_as_fresh() {
    // A crash before the rename leaves only the staging file behind, in any
    // state from empty to fully written.
    let leftovers: [&[u8]; 3] = [b"", &[PrefixQueue.tag()], &[7, 7, 7]];
    for leftover in leftovers {
        let tmp = data_dir();
        fs::write(tmp.path().join(MARKER_TEMP_FILE_NAME), leftover).unwrap();
        assert_eq!(read_marker(tmp.path()).unwrap(), None);

        assert!(check_type(tmp.path(), Queue).unwrap());
        assert_eq!(marker_bytes(tmp.path()), vec![Queue.tag()]);
        assert!(!tmp.path().join(MARKER_TEMP_FILE_NAME).exists());
    }
}

#[test]
fn test_serialized_compatible_opens_leave_one_marker() {
    let tmp = data_dir();
    assert!(check_type(tmp.path(), Stack).unwrap());
    assert!(check_type(tmp.path(), Queue).unwrap());

    let names: Vec<_> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from(MARKER_FILE_NAME)]);
    assert_eq!(marker_bytes(tmp.path()), vec![Stack.tag()]);
}

#[test]
fn test_end_to_end_retag_after_marker_removed() {
    let tmp = data_dir();
    let dir = tmp.path();

    assert!(check_type(dir, Queue).unwrap());
    assert_eq!(marker_bytes(dir), vec![1u8]);
    assert!(check_type(dir, Stack).unwrap());
    assert!(!check_type(dir, PriorityQueue).unwrap());

    fs::remove_file(marker(dir)).unwrap();
    assert!(check_type(dir, PriorityQueue).unwrap());
    assert_eq!(marker_bytes(dir), vec![2u8]);
    assert_eq!(read_marker(dir).unwrap(), Some(PriorityQueue));
}

#[test]
fn test_ensure_compatible_distinguishes_wrong_type_from_io() {
    let tmp = data_dir();
    ensure_compatible(tmp.path(), PrefixQueue).unwrap();

    let err = ensure_compatible(tmp.path(), Stack).unwrap_err();
    assert!(matches!(
        err,
        TagError::Incompatible {
            stored: PrefixQueue,
            requested: Stack
        }
    ));
    assert!(err.as_io().is_none());

    let missing = tmp.path().join("missing");
    let err = ensure_compatible(&missing, Stack).unwrap_err();
    assert!(err.as_io().is_some());
}
