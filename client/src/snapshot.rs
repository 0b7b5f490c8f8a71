//! Bulk `getProgramAccounts` queries over metadata and token accounts.

use metadata_interface::{
    program,
    state::{
        OFFSET_TO_CREATORS,
        PUBKEY_LENGTH,
    },
};
use solana_account::Account;
use solana_account_decoder::UiAccountEncoding;
use solana_client::{
    rpc_client::RpcClient,
    rpc_config::{
        RpcAccountInfoConfig,
        RpcProgramAccountsConfig,
    },
    rpc_filter::{
        Memcmp,
        MemcmpEncodedBytes,
        RpcFilterType,
    },
};
use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::{
        SPL_TOKEN_PROGRAM_ID,
        TOKEN_ACCOUNT_SIZE,
    },
    errors::SnapshotError,
};

fn base64_confirmed_config(filters: Vec<RpcFilterType>) -> RpcProgramAccountsConfig {
    RpcProgramAccountsConfig {
        filters: Some(filters),
        account_config: RpcAccountInfoConfig {
            encoding: Some(UiAccountEncoding::Base64),
            commitment: Some(CommitmentConfig::confirmed()),
            ..RpcAccountInfoConfig::default()
        },
        ..RpcProgramAccountsConfig::default()
    }
}

fn memcmp_base58(offset: usize, base58_address: &str) -> RpcFilterType {
    RpcFilterType::Memcmp(Memcmp::new(
        offset,
        MemcmpEncodedBytes::Base58(base58_address.to_string()),
    ))
}

/// All metadata accounts whose update authority matches.
///
/// The update authority sits at offset 1, right after the account key byte.
pub fn get_metadata_accounts_by_update_authority(
    client: &RpcClient,
    update_authority: &str,
) -> Result<Vec<(Pubkey, Account)>, SnapshotError> {
    let config = base64_confirmed_config(vec![memcmp_base58(1, update_authority)]);

    client
        .get_program_accounts_with_config(&program::ID, config)
        .map_err(|e| SnapshotError::ClientError(*e.kind))
}

/// All metadata accounts with the creator at the given position in the
/// creators array.
pub fn get_metadata_accounts_by_creator(
    client: &RpcClient,
    creator: &str,
    creator_position: usize,
) -> Result<Vec<(Pubkey, Account)>, SnapshotError> {
    let offset = OFFSET_TO_CREATORS + creator_position * PUBKEY_LENGTH;
    let config = base64_confirmed_config(vec![memcmp_base58(offset, creator)]);

    client
        .get_program_accounts_with_config(&program::ID, config)
        .map_err(|e| SnapshotError::ClientError(*e.kind))
}

/// All token accounts holding the mint (datasize 165, mint at offset 0).
pub fn get_holder_token_accounts(
    client: &RpcClient,
    mint_account: &str,
) -> Result<Vec<(Pubkey, Account)>, SnapshotError> {
    let config = base64_confirmed_config(vec![
        memcmp_base58(0, mint_account),
        RpcFilterType::DataSize(TOKEN_ACCOUNT_SIZE),
    ]);

    client
        .get_program_accounts_with_config(&SPL_TOKEN_PROGRAM_ID, config)
        .map_err(|e| SnapshotError::ClientError(*e.kind))
}
