// src/fetcher/checksum.rs
// =============================================================================
// Content fingerprint for a response body.
//
// MD5 is used purely as a fingerprint here, not for security. The output is
// the usual 32 character lowercase hex string, so results can be compared
// against `md5sum` on the command line.
// =============================================================================

use md5::{Digest, Md5};

/// Returns the lowercase hex MD5 digest of `bytes`.
pub fn checksum(bytes: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
