//! Instruction builders for the subset of Token Metadata instructions this
//! workspace submits.
//!
//! Each builder is a plain struct holding the involved pubkeys and arguments,
//! with `account_metas()` and `pack_instruction_data()` exposed separately so
//! tests can check the wire layout without constructing a full
//! [`solana_instruction::Instruction`].

pub mod create_master_edition_v3;
pub mod create_metadata_account_v3;
pub mod update_metadata_account_v2;

pub use create_master_edition_v3::CreateMasterEditionV3;
pub use create_metadata_account_v3::CreateMetadataAccountV3;
pub use update_metadata_account_v2::UpdateMetadataAccountV2;

/// Discriminator tags for the instructions built here. Values are positions
/// in the program's full instruction enum and must not change.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum InstructionTag {
    UpdateMetadataAccountV2 = 15,
    CreateMasterEditionV3 = 17,
    CreateMetadataAccountV3 = 33,
}

/// Serializes a tag byte followed by the borsh-encoded args.
pub(crate) fn pack_with_tag<T: borsh::BorshSerialize>(tag: InstructionTag, args: &T) -> Vec<u8> {
    let mut data = vec![tag as u8];
    borsh::to_writer(&mut data, args).expect("borsh serialization into a Vec cannot fail");
    data
}
