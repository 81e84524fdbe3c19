// SPDX-FileCopyrightText: 2026 NOVA Systems Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic per-user variant selection.
//!
//! A user always sees the same response variant for a given list, across
//! restarts and builds, because the index comes from SHA-256 of the user id.

use sha2::{Digest, Sha256};

/// Stable index in `0..len` for `user_id`. `len` must be non-zero.
pub fn stable_index(user_id: i64, len: usize) -> usize {
    debug_assert!(len > 0);
    let digest = Sha256::digest(user_id.to_string().as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(head) % len.max(1) as u64) as usize
}

/// Pick the variant assigned to `user_id`, or `None` for an empty list.
pub fn pick_variant(user_id: i64, variants: &[String]) -> Option<&str> {
    if variants.is_empty() {
        return None;
    }
    Some(variants[stable_index(user_id, variants.len())].as_str())
}
