use super::io::read_file;
use super::io_error_msg;
use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::Path;

// ── read_file ───────────────────────────────────────────────────────

#[test]
fn test_read_file_small() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.bin");
    let mut f = File::create(&path).unwrap();
    f.write_all(b"some bytes").unwrap();

    let data = read_file(&path).unwrap();
    assert_eq!(&*data, b"some bytes");
}

#[test]
fn test_read_file_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.bin");
    File::create(&path).unwrap();

    let data = read_file(&path).unwrap();
    assert!(data.is_empty());
}

#[test]
fn test_read_file_above_mmap_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.bin");
    let content: Vec<u8> = (0..2 * 1024 * 1024).map(|i| (i % 251) as u8).collect();
    std::fs::write(&path, &content).unwrap();

    let data = read_file(&path).unwrap();
    assert_eq!(&*data, &content[..]);
}

#[test]
fn test_read_file_missing() {
    assert!(read_file(Path::new("/no/such/file")).is_err());
}

// ── io_error_msg ────────────────────────────────────────────────────

#[test]
fn test_io_error_msg_strips_os_error_suffix() {
    let err = std::io::Error::from_raw_os_error(2);
    let msg = io_error_msg(&err);
    assert!(!msg.contains("os error"), "{:?}", msg);
    assert!(!msg.is_empty());
}

#[test]
fn test_io_error_msg_passes_through_custom_errors() {
    let err = std::io::Error::new(ErrorKind::Other, "boom");
    assert_eq!(io_error_msg(&err), "boom");
}
