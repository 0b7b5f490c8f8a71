//! Serde types for off-chain JSON inputs plus the PDA bundle for a mint.

use serde::{
    Deserialize,
    Serialize,
};
use solana_sdk::pubkey::Pubkey;

use crate::pda::{
    find_edition_address,
    find_metadata_address,
    find_token_record_address,
};

/// The addresses that hang off a single mint.
pub struct Asset {
    pub mint: Pubkey,
    pub metadata: Pubkey,
    pub edition: Pubkey,
}

impl Asset {
    pub fn new(mint: Pubkey) -> Self {
        let (metadata, _) = find_metadata_address(&mint);
        let (edition, _) = find_edition_address(&mint);

        Self {
            mint,
            metadata,
            edition,
        }
    }

    pub fn token_record(&self, token: &Pubkey) -> Pubkey {
        find_token_record_address(&self.mint, token).0
    }
}

/// Metadata payload read from a user-supplied JSON file.
#[derive(Debug, Serialize, Deserialize)]
pub struct NFTData {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Option<Vec<NFTCreator>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NFTCreator {
    pub address: String,
    pub verified: bool,
    pub share: u8,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateNFTData {
    pub mint_account: String,
    pub nft_data: NFTData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateUriData {
    pub mint_account: String,
    pub new_uri: String,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn asset_derives_both_pdas() {
        let mint = Pubkey::from_str("H9UJFx7HknQ9GUz7RBqqV9SRnht6XaVDh2cZS3Huogpf").unwrap();
        let asset = Asset::new(mint);

        assert_eq!(
            asset.metadata,
            Pubkey::from_str("99pKPWsqi7bZaXKMvmwkxWV4nJjb5BS5SgKSNhW26ZNq").unwrap()
        );
        assert_eq!(
            asset.edition,
            Pubkey::from_str("2vNgLPdTtfZYMNBR14vL5WXp6jYAvumfHauEHNc1BQim").unwrap()
        );
    }

    #[test]
    fn nft_data_deserializes_from_json() {
        let json = r#"{
            "name": "Test #1",
            "symbol": "TEST",
            "uri": "https://example.com/1.json",
            "seller_fee_basis_points": 250,
            "creators": [
                { "address": "H9UJFx7HknQ9GUz7RBqqV9SRnht6XaVDh2cZS3Huogpf", "verified": false, "share": 100 }
            ]
        }"#;

        let data: NFTData = serde_json::from_str(json).unwrap();
        assert_eq!(data.name, "Test #1");
        assert_eq!(data.seller_fee_basis_points, 250);
        assert_eq!(data.creators.unwrap().len(), 1);
    }
}
