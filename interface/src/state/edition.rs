use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_pubkey::Pubkey;

use crate::state::Key;

/// Number of print editions tracked per edition marker account.
pub const EDITION_MARKER_BIT_SIZE: u64 = 248;

/// Master edition account for an original (printable) NFT.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct MasterEditionV2 {
    pub key: Key,
    pub supply: u64,
    pub max_supply: Option<u64>,
}

impl MasterEditionV2 {
    pub fn from_account_bytes(data: &[u8]) -> borsh::io::Result<Self> {
        let mut bytes = data;
        Self::deserialize(&mut bytes)
    }
}

/// Print edition account pointing back to its master edition parent.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct Edition {
    pub key: Key,
    pub parent: Pubkey,
    pub edition: u64,
}

impl Edition {
    pub fn from_account_bytes(data: &[u8]) -> borsh::io::Result<Self> {
        let mut bytes = data;
        Self::deserialize(&mut bytes)
    }
}

/// Bitmap page recording which of a 248-edition window has been printed.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct EditionMarker {
    pub key: Key,
    pub ledger: [u8; 31],
}

impl EditionMarker {
    pub fn from_account_bytes(data: &[u8]) -> borsh::io::Result<Self> {
        let mut bytes = data;
        Self::deserialize(&mut bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_edition_layout() {
        let edition = MasterEditionV2 {
            key: Key::MasterEditionV2,
            supply: 3,
            max_supply: Some(10),
        };

        let bytes = borsh::to_vec(&edition).unwrap();
        // key + supply + option flag + max supply
        assert_eq!(bytes.len(), 1 + 8 + 1 + 8);
        assert_eq!(bytes[0], 6);

        let decoded = MasterEditionV2::from_account_bytes(&bytes).unwrap();
        assert_eq!(decoded, edition);
    }

    #[test]
    fn edition_marker_tolerates_padding() {
        let marker = EditionMarker {
            key: Key::EditionMarker,
            ledger: [0xFF; 31],
        };

        let mut bytes = borsh::to_vec(&marker).unwrap();
        bytes.extend_from_slice(&[0; 16]);

        let decoded = EditionMarker::from_account_bytes(&bytes).unwrap();
        assert_eq!(decoded, marker);
    }
}
