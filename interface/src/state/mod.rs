//! Borsh layouts for the Token Metadata program's accounts.
//!
//! Accounts on chain are allocated at fixed sizes and zero-padded past the
//! serialized payload, so deserialization must not require consuming the whole
//! buffer. Every account type exposes a `from_account_bytes` constructor that
//! reads a prefix of the account data.

pub mod edition;
pub mod key;
pub mod metadata;
pub mod record;

pub use edition::*;
pub use key::Key;
pub use metadata::*;
pub use record::*;

pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;
pub const MAX_CREATOR_LIMIT: usize = 5;
/// Serialized creator entry: 32-byte address + verified flag + share.
pub const MAX_CREATOR_LEN: usize = 32 + 1 + 1;
pub const PUBKEY_LENGTH: usize = 32;

/// Fixed allocation size of a metadata account.
pub const MAX_METADATA_LEN: usize = 679;

// Byte offset of the first creator address within a metadata account:
//   key: 1
//   update_authority: 32
//   mint: 32
//   name string length prefix: 4
//   MAX_NAME_LENGTH: 32
//   symbol string length prefix: 4
//   MAX_SYMBOL_LENGTH: 10
//   uri string length prefix: 4
//   MAX_URI_LENGTH: 200
//   seller fee basis points: 2
//   creators option flag: 1
//   creators vec length prefix: 4
pub const OFFSET_TO_CREATORS: usize = 326;
