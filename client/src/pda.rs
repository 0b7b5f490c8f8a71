//! PDA helpers for deriving Token Metadata program addresses.

use metadata_interface::{
    program,
    seeds,
    state::EDITION_MARKER_BIT_SIZE,
};
use solana_sdk::pubkey::Pubkey;

pub fn derive_generic_pda(seeds: &[&[u8]], program_id: &Pubkey) -> Pubkey {
    let (pda, _) = Pubkey::find_program_address(seeds, program_id);
    pda
}

pub fn find_metadata_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[seeds::METADATA_PREFIX, program::ID.as_ref(), mint.as_ref()],
        &program::ID,
    )
}

pub fn find_edition_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            seeds::METADATA_PREFIX,
            program::ID.as_ref(),
            mint.as_ref(),
            seeds::EDITION_PREFIX,
        ],
        &program::ID,
    )
}

/// Edition markers are paged, one account per `EDITION_MARKER_BIT_SIZE`
/// editions; the page number is a decimal string seed.
pub fn find_edition_marker_address(mint: &Pubkey, edition_num: u64) -> (Pubkey, u8) {
    let page = (edition_num / EDITION_MARKER_BIT_SIZE).to_string();
    Pubkey::find_program_address(
        &[
            seeds::METADATA_PREFIX,
            program::ID.as_ref(),
            mint.as_ref(),
            seeds::EDITION_PREFIX,
            page.as_bytes(),
        ],
        &program::ID,
    )
}

pub fn find_token_record_address(mint: &Pubkey, token: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            seeds::METADATA_PREFIX,
            program::ID.as_ref(),
            mint.as_ref(),
            seeds::TOKEN_RECORD_SEED,
            token.as_ref(),
        ],
        &program::ID,
    )
}

pub fn find_collection_authority_address(mint: &Pubkey, authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            seeds::METADATA_PREFIX,
            program::ID.as_ref(),
            mint.as_ref(),
            seeds::COLLECTION_AUTHORITY_SEED,
            authority.as_ref(),
        ],
        &program::ID,
    )
}

pub fn find_use_authority_address(mint: &Pubkey, authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            seeds::METADATA_PREFIX,
            program::ID.as_ref(),
            mint.as_ref(),
            seeds::USE_AUTHORITY_SEED,
            authority.as_ref(),
        ],
        &program::ID,
    )
}
