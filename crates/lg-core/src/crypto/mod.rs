//! Digest primitives
//!
//! 这个模块提供唯一的内容摘要原语:
//!
//! - **md5_hex**: 128 位摘要,小写十六进制
//! - **commitment**: 两阶段哈希承诺 `md5(md5(a) + md5(b))`

pub mod digest;

pub use digest::{commitment, commitment_matches, md5_hex};
