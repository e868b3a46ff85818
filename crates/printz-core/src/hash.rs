//! # Block Hash Module
//!
//! Derives the decorative `0x…` hash shown next to every ledger record.
//!
//! ## This Is Not Cryptography
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The hash exists so the explorer screen LOOKS like a blockchain.       │
//! │                                                                         │
//! │  id: "ab"                                                               │
//! │   │                                                                     │
//! │   ├── 'a' → 61, 'b' → 62        (hex of each code point, no padding)   │
//! │   ├── "6162" right-padded with '0' to 64 chars, then truncated to 64   │
//! │   └── prefixed with "0x"  →  66 chars total                            │
//! │                                                                         │
//! │  Deterministic, trivially collidable (two long ids sharing a 64-char   │
//! │  hex prefix hash identically), and recomputable from the id alone.     │
//! │  Do NOT reach for this when an actual digest is needed.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The exact byte-level output is load-bearing: the frontend explorer and
//! its tests expect this precise derivation, so changing it breaks wire
//! compatibility with the demo.

/// Length of the hex body after the `0x` prefix.
const HASH_BODY_LEN: usize = 64;

/// Derives the display block hash for a transaction id.
///
/// Pure function: same id, same hash, every time.
///
/// ## Example
/// ```rust
/// use printz_core::hash::block_hash;
///
/// let hash = block_hash("ab");
/// assert_eq!(
///     hash,
///     "0x6162000000000000000000000000000000000000000000000000000000000000"
/// );
/// assert_eq!(hash.len(), 66);
/// ```
pub fn block_hash(id: &str) -> String {
    let mut body = String::with_capacity(HASH_BODY_LEN);

    for c in id.chars() {
        if body.len() >= HASH_BODY_LEN {
            break;
        }
        // Lowercase hex of the code point, variable width (0x2d -> "2d")
        body.push_str(&format!("{:x}", c as u32));
    }

    body.truncate(HASH_BODY_LEN);
    while body.len() < HASH_BODY_LEN {
        body.push('0');
    }

    format!("0x{}", body)
}

// =============================================================================
// Unit Tests
// =============================================================================
