use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_pubkey::Pubkey;

use crate::state::Key;

/// Grants an account a fixed number of uses of an NFT.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct UseAuthorityRecord {
    pub key: Key,
    pub allowed_uses: u64,
    pub bump: u8,
}

impl UseAuthorityRecord {
    pub fn from_account_bytes(data: &[u8]) -> borsh::io::Result<Self> {
        let mut bytes = data;
        Self::deserialize(&mut bytes)
    }
}

/// Marks an account as a delegated collection authority.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct CollectionAuthorityRecord {
    pub key: Key,
    pub bump: u8,
    pub update_authority: Option<Pubkey>,
}

impl CollectionAuthorityRecord {
    pub fn from_account_bytes(data: &[u8]) -> borsh::io::Result<Self> {
        let mut bytes = data;
        Self::deserialize(&mut bytes)
    }
}

/// Marks an account as a metadata-level delegate for a mint.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct MetadataDelegateRecord {
    pub key: Key,
    pub bump: u8,
    pub mint: Pubkey,
    pub delegate: Pubkey,
    pub update_authority: Pubkey,
}

impl MetadataDelegateRecord {
    pub fn from_account_bytes(data: &[u8]) -> borsh::io::Result<Self> {
        let mut bytes = data;
        Self::deserialize(&mut bytes)
    }
}
