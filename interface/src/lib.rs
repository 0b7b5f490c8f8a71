//! Client-side interface for the Metaplex Token Metadata program.
//!
//! Contains the program ID, PDA seed constants, borsh account state layouts,
//! and instruction builders.

pub mod instructions;
pub mod state;

pub mod program {
    use solana_pubkey::Pubkey;

    /// The Token Metadata program ID.
    pub const ID: Pubkey = Pubkey::from_str_const("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");
}

/// Well-known program IDs referenced by the instruction builders.
pub mod program_ids {
    use solana_pubkey::Pubkey;

    pub const SYSTEM_PROGRAM_ID: Pubkey =
        Pubkey::from_str_const("11111111111111111111111111111111");
    pub const SPL_TOKEN_ID: Pubkey =
        Pubkey::from_str_const("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
}

/// Seed literals used by the program's PDA derivations.
pub mod seeds {
    pub const METADATA_PREFIX: &[u8] = b"metadata";
    pub const EDITION_PREFIX: &[u8] = b"edition";
    pub const TOKEN_RECORD_SEED: &[u8] = b"token_record";
    pub const COLLECTION_AUTHORITY_SEED: &[u8] = b"collection_authority";
    pub const USE_AUTHORITY_SEED: &[u8] = b"user";
}
