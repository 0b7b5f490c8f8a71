use std::path::PathBuf;

use solana_client::client_error::ClientErrorKind;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("no account found for {0}")]
    MissingAccount(String),

    #[error("failed to get account data: {0}")]
    ClientError(ClientErrorKind),

    #[error("failed to parse string into pubkey: {0}")]
    PubkeyParseFailed(String),

    #[error("failed to decode metadata: {0}")]
    DecodeMetadataFailed(String),

    #[error("failed to unpack account data: {0}")]
    DecodeDataFailed(String),

    #[error("failed to deserialize account data: {0}")]
    DeserializationFailed(String),
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to get program accounts: {0}")]
    ClientError(ClientErrorKind),

    #[error("failed to parse string into pubkey: {0}")]
    PubkeyParseFailed(String),
}

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("failed to fetch account {0}: {1}")]
    ClientError(Pubkey, ClientErrorKind),

    #[error("account {0} is not an executable program account")]
    NotAProgram(Pubkey),

    #[error("failed to decode upgradeable loader state: {0}")]
    InvalidLoaderState(String),

    #[error("programdata account is shorter than its metadata header")]
    TruncatedProgramData,

    #[error("failed to write fixture to {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
}
