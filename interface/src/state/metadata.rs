use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_pubkey::Pubkey;

use crate::state::Key;

/// The primary metadata account attached to a mint.
///
/// Old accounts may predate newer trailing fields; the account is always
/// padded to [`crate::state::MAX_METADATA_LEN`] with zeroes, so the trailing
/// `Option`s read back as `None`.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct Metadata {
    pub key: Key,
    pub update_authority: Pubkey,
    pub mint: Pubkey,
    pub data: Data,
    pub primary_sale_happened: bool,
    pub is_mutable: bool,
    pub edition_nonce: Option<u8>,
    pub token_standard: Option<TokenStandard>,
    pub collection: Option<Collection>,
    pub uses: Option<Uses>,
    pub collection_details: Option<CollectionDetails>,
    pub programmable_config: Option<ProgrammableConfig>,
}

impl Metadata {
    /// Deserializes from raw account data, ignoring trailing padding.
    pub fn from_account_bytes(data: &[u8]) -> borsh::io::Result<Self> {
        let mut bytes = data;
        Self::deserialize(&mut bytes)
    }
}

/// On-chain metadata payload. The name, symbol, and uri strings are stored
/// NUL-padded to their maximum lengths.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct Data {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Option<Vec<Creator>>,
}

/// Metadata payload accepted by the V2/V3 instructions.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct DataV2 {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Option<Vec<Creator>>,
    pub collection: Option<Collection>,
    pub uses: Option<Uses>,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct Creator {
    pub address: Pubkey,
    pub verified: bool,
    /// Royalty share percentage, summing to 100 across all creators.
    pub share: u8,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct Collection {
    pub verified: bool,
    pub key: Pubkey,
}

#[derive(BorshSerialize, BorshDeserialize, Copy, Clone, Debug, Eq, PartialEq)]
pub enum UseMethod {
    Burn,
    Multiple,
    Single,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct Uses {
    pub use_method: UseMethod,
    pub remaining: u64,
    pub total: u64,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub enum CollectionDetails {
    V1 { size: u64 },
    V2 { padding: [u8; 8] },
}

#[derive(BorshSerialize, BorshDeserialize, Copy, Clone, Debug, Eq, PartialEq)]
pub enum TokenStandard {
    NonFungible,
    FungibleAsset,
    Fungible,
    NonFungibleEdition,
    ProgrammableNonFungible,
    ProgrammableNonFungibleEdition,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub enum ProgrammableConfig {
    V1 { rule_set: Option<Pubkey> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MAX_METADATA_LEN;

    fn sample_metadata() -> Metadata {
        Metadata {
            key: Key::MetadataV1,
            update_authority: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            data: Data {
                name: "Studious Crab #1".to_string(),
                symbol: "CRAB".to_string(),
                uri: "https://arweave.net/abc123".to_string(),
                seller_fee_basis_points: 500,
                creators: Some(vec![Creator {
                    address: Pubkey::new_unique(),
                    verified: true,
                    share: 100,
                }]),
            },
            primary_sale_happened: false,
            is_mutable: true,
            edition_nonce: Some(255),
            token_standard: Some(TokenStandard::NonFungible),
            collection: None,
            uses: None,
            collection_details: None,
            programmable_config: None,
        }
    }

    #[test]
    fn deserializes_zero_padded_account() {
        let metadata = sample_metadata();

        let mut account_data = borsh::to_vec(&metadata).unwrap();
        account_data.resize(MAX_METADATA_LEN, 0);

        let decoded = Metadata::from_account_bytes(&account_data).unwrap();
        assert_eq!(decoded, metadata);
    }

    #[test]
    fn truncated_account_reads_trailing_options_as_none() {
        let mut metadata = sample_metadata();
        metadata.edition_nonce = None;
        metadata.token_standard = None;

        // Serialize only through `is_mutable`, then pad: mimics an account
        // written before the newer fields existed.
        let mut account_data = Vec::new();
        borsh::to_writer(&mut account_data, &metadata.key).unwrap();
        borsh::to_writer(&mut account_data, &metadata.update_authority).unwrap();
        borsh::to_writer(&mut account_data, &metadata.mint).unwrap();
        borsh::to_writer(&mut account_data, &metadata.data).unwrap();
        borsh::to_writer(&mut account_data, &metadata.primary_sale_happened).unwrap();
        borsh::to_writer(&mut account_data, &metadata.is_mutable).unwrap();
        account_data.resize(MAX_METADATA_LEN, 0);

        let decoded = Metadata::from_account_bytes(&account_data).unwrap();
        assert_eq!(decoded, metadata);
    }

    #[test]
    fn token_standard_discriminants() {
        assert_eq!(borsh::to_vec(&TokenStandard::NonFungible).unwrap(), [0]);
        assert_eq!(borsh::to_vec(&TokenStandard::Fungible).unwrap(), [2]);
        assert_eq!(
            borsh::to_vec(&TokenStandard::ProgrammableNonFungible).unwrap(),
            [4]
        );
    }
}
