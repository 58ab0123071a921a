//! Checksum sidecars (SHA-1, MD5, SHA-256) uploaded next to every artifact.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Sidecar extensions and hex digests for an artifact's bytes.
///
/// Maven repositories require `.sha1` and `.md5`; `.sha256` is accepted by
/// the portal and emitted as well.
pub fn sidecars(data: &[u8]) -> Vec<(&'static str, String)> {
    vec![
        ("sha1", hex_sha1(data)),
        ("md5", hex_md5(data)),
        ("sha256", hex_sha256(data)),
    ]
}

pub fn hex_sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

pub fn hex_sha1(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

pub fn hex_md5(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha1_computation() {
        assert_eq!(
            hex_sha1(b"hello world"),
            "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"
        );
    }

    #[test]
    fn md5_computation() {
        assert_eq!(hex_md5(b"hello world"), "5eb63bbbe01eeed093cb22bb8f5acdc3");
    }

    #[test]
    fn sha256_computation() {
        assert_eq!(
            hex_sha256(b"hello world"),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn sidecars_cover_all_three_algorithms() {
        let sidecars = sidecars(b"hello world");
        let exts: Vec<&str> = sidecars.iter().map(|(ext, _)| *ext).collect();
        assert_eq!(exts, vec!["sha1", "md5", "sha256"]);
    }
}
