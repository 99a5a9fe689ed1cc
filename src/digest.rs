//! Log fingerprinting
//!
//! Hashes the bytes of a log as they are scanned so a report can be tied to
//! the exact content it covered.

use sha2::{Digest, Sha256};

/// Incremental SHA-256 over scanned log bytes
#[derive(Clone, Default)]
pub struct LogDigest {
    hasher: Sha256,
    bytes: u64,
}

impl LogDigest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of raw log content, line terminator included
    pub fn update(&mut self, chunk: &[u8]) {
        self.hasher.update(chunk);
        self.bytes += chunk.len() as u64;
    }

    /// Number of bytes fed so far
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Lowercase hex digest
    pub fn finish(self) -> String {
        format!("{:x}", self.hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_digest() {
        assert_eq!(
            LogDigest::new().finish(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_chunked_matches_whole() {
        let mut chunked = LogDigest::new();
        chunked.update(b"P0:1 P1:1 P2:1\n");
        chunked.update(b"P0:3 P1:0 P2:0\n");
        assert_eq!(chunked.bytes(), 30);

        let whole = format!("{:x}", Sha256::digest(b"P0:1 P1:1 P2:1\nP0:3 P1:0 P2:0\n"));
        assert_eq!(chunked.finish(), whole);
    }
}
