//! Two-stage hash commitment.
//!
//! # Design / 设计
//!
//! ```text
//! a ──md5──► hex(a) ─┐
//!                    ├─ concat ──md5──► commitment ── eq_ignore_case ──► bool
//! b ──md5──► hex(b) ─┘
//! ```
//!
//! The concatenation order (`hex(a)` first) and the lowercase hex encoding are
//! part of the wire contract: previously issued target constants only match
//! when both are preserved.

use md5::{Digest, Md5};

/// MD5 of `data`, lowercase hex (32 chars).
pub fn md5_hex(data: impl AsRef<[u8]>) -> String {
    let mut hasher = Md5::new();
    hasher.update(data.as_ref());
    hex::encode(hasher.finalize())
}

/// `md5_hex(md5_hex(a) + md5_hex(b))`.
pub fn commitment(a: &str, b: &str) -> String {
    let mut joined = md5_hex(a);
    joined.push_str(&md5_hex(b));
    md5_hex(joined)
}

/// Case-insensitive comparison of the commitment for `(a, b)` against `target`.
pub fn commitment_matches(a: &str, b: &str, target: &str) -> bool {
    commitment(a, b).eq_ignore_ascii_case(target.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5_hex_matches_known_answers() {
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex("foo"), "acbd18db4cc2f85cedef654fccc4a4d8");
        assert_eq!(md5_hex("bar"), "37b51d194a7513e45b56f6524f2d51f2");
    }

    #[test]
    fn commitment_digests_concatenated_hex_in_order() {
        assert_eq!(commitment("foo", "bar"), "a84ffba5c71c24627a369146227d701a");
        assert_ne!(commitment("foo", "bar"), commitment("bar", "foo"));
    }

    #[test]
    fn commitment_matches_ignores_case() {
        assert!(commitment_matches(
            "foo",
            "bar",
            "A84FFBA5C71C24627A369146227D701A"
        ));
        assert!(!commitment_matches("foo", "baz", "a84ffba5c71c24627a369146227d701a"));
    }
}
