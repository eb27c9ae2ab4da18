//! Cosmetic "proof" code shown next to the best score.

use crate::constants::PROOF_CODE_LEN;
use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Short hex digest of the best score.
///
/// Hashes the little-endian bytes of the score, so the same score always
/// gives the same code on every platform. Not a security mechanism.
pub fn proof_code(best_score: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(best_score.to_le_bytes());
    let digest = hasher.finalize();

    let mut code = String::with_capacity(PROOF_CODE_LEN);
    for byte in digest.iter().take(PROOF_CODE_LEN.div_ceil(2)) {
        let _ = write!(code, "{:02x}", byte);
    }
    code.truncate(PROOF_CODE_LEN);
    code
}
