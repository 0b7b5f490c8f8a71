//! Read-side RPC operations: fetch program accounts and decode them into
//! their typed layouts.

use std::str::FromStr;

use metadata_interface::state::{
    CollectionAuthorityRecord,
    Edition,
    EditionMarker,
    MasterEditionV2,
    Metadata,
    MetadataDelegateRecord,
    UseAuthorityRecord,
};
use solana_client::rpc_client::RpcClient;
use solana_loader_v3_interface::state::UpgradeableLoaderState;
use solana_sdk::{
    program_pack::Pack,
    pubkey::Pubkey,
};
use spl_token_interface::state::{
    Account as TokenAccount,
    Mint,
};

use crate::{
    errors::DecodeError,
    pda::{
        find_edition_address,
        find_edition_marker_address,
        find_metadata_address,
    },
};

/// Accepts addresses as strings or pubkeys so callers can pass CLI input
/// straight through.
pub trait ToPubkey {
    fn to_pubkey(self) -> Result<Pubkey, DecodeError>;
}

impl ToPubkey for String {
    fn to_pubkey(self) -> Result<Pubkey, DecodeError> {
        Pubkey::from_str(&self).map_err(|_| DecodeError::PubkeyParseFailed(self))
    }
}

impl ToPubkey for &str {
    fn to_pubkey(self) -> Result<Pubkey, DecodeError> {
        Pubkey::from_str(self).map_err(|_| DecodeError::PubkeyParseFailed(self.to_string()))
    }
}

impl ToPubkey for Pubkey {
    fn to_pubkey(self) -> Result<Pubkey, DecodeError> {
        Ok(self)
    }
}

pub fn decode_metadata(client: &RpcClient, pubkey: &Pubkey) -> Result<Metadata, DecodeError> {
    let account_data = client
        .get_account_data(pubkey)
        .map_err(|e| DecodeError::ClientError(*e.kind))?;

    Metadata::from_account_bytes(&account_data)
        .map_err(|e| DecodeError::DecodeMetadataFailed(e.to_string()))
}

pub fn decode_metadata_from_mint<P: ToPubkey>(
    client: &RpcClient,
    mint_address: P,
) -> Result<Metadata, DecodeError> {
    let mint = mint_address.to_pubkey()?;
    let (metadata_pda, _) = find_metadata_address(&mint);

    decode_metadata(client, &metadata_pda)
}

pub fn decode_master_edition(
    client: &RpcClient,
    pubkey: &Pubkey,
) -> Result<MasterEditionV2, DecodeError> {
    let account_data = client
        .get_account_data(pubkey)
        .map_err(|e| DecodeError::ClientError(*e.kind))?;

    MasterEditionV2::from_account_bytes(&account_data)
        .map_err(|e| DecodeError::DeserializationFailed(e.to_string()))
}

pub fn decode_master_edition_from_mint<P: ToPubkey>(
    client: &RpcClient,
    mint_address: P,
) -> Result<MasterEditionV2, DecodeError> {
    let mint = mint_address.to_pubkey()?;
    let (edition_pda, _) = find_edition_address(&mint);

    decode_master_edition(client, &edition_pda)
}

pub fn decode_edition(client: &RpcClient, pubkey: &Pubkey) -> Result<Edition, DecodeError> {
    let account_data = client
        .get_account_data(pubkey)
        .map_err(|e| DecodeError::ClientError(*e.kind))?;

    Edition::from_account_bytes(&account_data)
        .map_err(|e| DecodeError::DeserializationFailed(e.to_string()))
}

pub fn decode_edition_from_mint<P: ToPubkey>(
    client: &RpcClient,
    mint_address: P,
) -> Result<Edition, DecodeError> {
    let mint = mint_address.to_pubkey()?;
    let (edition_pda, _) = find_edition_address(&mint);

    decode_edition(client, &edition_pda)
}

pub fn decode_edition_marker(
    client: &RpcClient,
    pubkey: &Pubkey,
) -> Result<EditionMarker, DecodeError> {
    let account_data = client
        .get_account_data(pubkey)
        .map_err(|e| DecodeError::ClientError(*e.kind))?;

    EditionMarker::from_account_bytes(&account_data)
        .map_err(|e| DecodeError::DeserializationFailed(e.to_string()))
}

pub fn decode_edition_marker_from_mint<P: ToPubkey>(
    client: &RpcClient,
    mint_address: P,
    edition_num: u64,
) -> Result<EditionMarker, DecodeError> {
    let mint = mint_address.to_pubkey()?;
    let (marker_pda, _) = find_edition_marker_address(&mint, edition_num);

    decode_edition_marker(client, &marker_pda)
}

pub fn decode_mint<P: ToPubkey>(client: &RpcClient, mint_address: P) -> Result<Mint, DecodeError> {
    let pubkey = mint_address.to_pubkey()?;

    let account = client
        .get_account(&pubkey)
        .map_err(|e| DecodeError::ClientError(*e.kind))?;

    Mint::unpack(&account.data).map_err(|e| DecodeError::DecodeDataFailed(e.to_string()))
}

pub fn decode_token<P: ToPubkey>(
    client: &RpcClient,
    token_address: P,
) -> Result<TokenAccount, DecodeError> {
    let pubkey = token_address.to_pubkey()?;

    let account_data = client
        .get_account_data(&pubkey)
        .map_err(|e| DecodeError::ClientError(*e.kind))?;

    TokenAccount::unpack(&account_data).map_err(|e| DecodeError::DecodeDataFailed(e.to_string()))
}

pub fn decode_use_authority_record<P: ToPubkey>(
    client: &RpcClient,
    address: P,
) -> Result<UseAuthorityRecord, DecodeError> {
    let pubkey = address.to_pubkey()?;

    let account_data = client
        .get_account_data(&pubkey)
        .map_err(|e| DecodeError::ClientError(*e.kind))?;

    UseAuthorityRecord::from_account_bytes(&account_data)
        .map_err(|e| DecodeError::DeserializationFailed(e.to_string()))
}

pub fn decode_collection_authority_record<P: ToPubkey>(
    client: &RpcClient,
    address: P,
) -> Result<CollectionAuthorityRecord, DecodeError> {
    let pubkey = address.to_pubkey()?;

    let account_data = client
        .get_account_data(&pubkey)
        .map_err(|e| DecodeError::ClientError(*e.kind))?;

    CollectionAuthorityRecord::from_account_bytes(&account_data)
        .map_err(|e| DecodeError::DeserializationFailed(e.to_string()))
}

pub fn decode_metadata_delegate<P: ToPubkey>(
    client: &RpcClient,
    address: P,
) -> Result<MetadataDelegateRecord, DecodeError> {
    let pubkey = address.to_pubkey()?;

    let account_data = client
        .get_account_data(&pubkey)
        .map_err(|e| DecodeError::ClientError(*e.kind))?;

    MetadataDelegateRecord::from_account_bytes(&account_data)
        .map_err(|e| DecodeError::DeserializationFailed(e.to_string()))
}

pub fn decode_bpf_loader_upgradeable_state<P: ToPubkey>(
    client: &RpcClient,
    program_address: P,
) -> Result<UpgradeableLoaderState, DecodeError> {
    let pubkey = program_address.to_pubkey()?;

    let account = client
        .get_account(&pubkey)
        .map_err(|e| DecodeError::ClientError(*e.kind))?;

    bincode::deserialize(&account.data)
        .map_err(|e| DecodeError::DeserializationFailed(e.to_string()))
}

/// Returns the largest token account holding the mint. For NFTs with supply 1
/// this is the holder's account.
pub fn get_nft_token_account(client: &RpcClient, mint: &Pubkey) -> Result<Pubkey, DecodeError> {
    let balances = client
        .get_token_largest_accounts(mint)
        .map_err(|e| DecodeError::ClientError(*e.kind))?;

    let largest = balances
        .first()
        .ok_or_else(|| DecodeError::MissingAccount(mint.to_string()))?;

    largest.address.as_str().to_pubkey()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_pubkey_conversions() {
        let pubkey = Pubkey::new_unique();

        assert_eq!(pubkey.to_string().to_pubkey().unwrap(), pubkey);
        assert_eq!(pubkey.to_string().as_str().to_pubkey().unwrap(), pubkey);
        assert_eq!(pubkey.to_pubkey().unwrap(), pubkey);
    }

    #[test]
    fn to_pubkey_rejects_garbage() {
        let err = "not-a-pubkey".to_pubkey().unwrap_err();
        assert!(matches!(err, DecodeError::PubkeyParseFailed(s) if s == "not-a-pubkey"));
    }
}
