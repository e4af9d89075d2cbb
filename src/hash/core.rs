use std::io;
use std::path::Path;

use digest::Digest;
use md5::Md5;
use sha1::Sha1;
use sha2::Sha256;

use crate::common::io::read_file;

/// Supported checksum algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    Md5,
    Sha1,
    Sha256,
}

impl ChecksumAlgorithm {
    /// Lowercase token used on the command line and in result lines.
    pub fn name(self) -> &'static str {
        match self {
            ChecksumAlgorithm::Md5 => "md5",
            ChecksumAlgorithm::Sha1 => "sha1",
            ChecksumAlgorithm::Sha256 => "sha256",
        }
    }

    /// Digest size in bytes (hex output is twice this).
    pub fn digest_len(self) -> usize {
        match self {
            ChecksumAlgorithm::Md5 => 16,
            ChecksumAlgorithm::Sha1 => 20,
            ChecksumAlgorithm::Sha256 => 32,
        }
    }

    /// Parse an algorithm token. Any token other than md5/sha1 selects
    /// SHA-256 — a deliberate fallback, not an error. Matching is
    /// ASCII-case-insensitive.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("md5") {
            ChecksumAlgorithm::Md5
        } else if token.eq_ignore_ascii_case("sha1") {
            ChecksumAlgorithm::Sha1
        } else {
            ChecksumAlgorithm::Sha256
        }
    }
}

impl Default for ChecksumAlgorithm {
    fn default() -> Self {
        ChecksumAlgorithm::Sha256
    }
}

fn hex_digest<D: Digest>(data: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Compute the lowercase hex digest of a byte slice.
pub fn digest_bytes(algo: ChecksumAlgorithm, data: &[u8]) -> String {
    match algo {
        ChecksumAlgorithm::Md5 => hex_digest::<Md5>(data),
        ChecksumAlgorithm::Sha1 => hex_digest::<Sha1>(data),
        ChecksumAlgorithm::Sha256 => hex_digest::<Sha256>(data),
    }
}

/// Hash a file's full content. Returns the hex digest.
pub fn digest_file(algo: ChecksumAlgorithm, path: &Path) -> io::Result<String> {
    let data = read_file(path)?;
    Ok(digest_bytes(algo, &data))
}

/// Format a result line: `<algorithm> checksum: <hexdigest> - <filename>`
pub fn format_result(algo: ChecksumAlgorithm, hex_digest: &str, file_name: &str) -> String {
    format!("{} checksum: {} - {}", algo.name(), hex_digest, file_name)
}
