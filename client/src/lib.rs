//! Client-side operations for the Metaplex Token Metadata program.
//!
//! Includes account decoding, PDA derivations, program-account snapshots,
//! metadata checks, minting, program fixture dumping, and transaction
//! submission helpers.

pub mod check;
pub mod constants;
pub mod convert;
pub mod data;
pub mod decode;
pub mod dump;
pub mod errors;
pub mod logs;
pub mod mint;
pub mod pda;
pub mod snapshot;
pub mod transactions;
