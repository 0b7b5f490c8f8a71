use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_pubkey::Pubkey;

use crate::{
    instructions::{
        pack_with_tag,
        InstructionTag,
    },
    program_ids::SYSTEM_PROGRAM_ID,
    state::{
        CollectionDetails,
        DataV2,
    },
};

/// Creates the metadata account for a mint.
///
/// ### Accounts
///  0. `[WRITE]` Metadata account PDA
///  1. `[READ]` Mint
///  2. `[SIGNER]` Mint authority
///  3. `[WRITE, SIGNER]` Payer
///  4. `[READ|SIGNER]` Update authority (signer when
///     `update_authority_is_signer` is set)
///  5. `[READ]` System program
pub struct CreateMetadataAccountV3 {
    /// The metadata account PDA for the mint.
    pub metadata: Pubkey,
    /// The mint the metadata describes.
    pub mint: Pubkey,
    /// The mint authority.
    pub mint_authority: Pubkey,
    /// The account funding the metadata account's rent.
    pub payer: Pubkey,
    /// The update authority recorded on the new metadata account.
    pub update_authority: Pubkey,
    /// Whether the update authority co-signs the transaction.
    pub update_authority_is_signer: bool,
    /// The metadata payload to write.
    pub data: DataV2,
    /// Whether the metadata can be updated after creation.
    pub is_mutable: bool,
    /// Set when the mint is a sized collection parent.
    pub collection_details: Option<CollectionDetails>,
}

#[derive(BorshSerialize, BorshDeserialize)]
pub(crate) struct CreateMetadataAccountArgsV3 {
    pub data: DataV2,
    pub is_mutable: bool,
    pub collection_details: Option<CollectionDetails>,
}

impl CreateMetadataAccountV3 {
    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: crate::program::ID,
            accounts: self.account_metas().to_vec(),
            data: self.pack_instruction_data(),
        }
    }

    pub fn account_metas(&self) -> [AccountMeta; 6] {
        [
            AccountMeta::new(self.metadata, false),
            AccountMeta::new_readonly(self.mint, false),
            AccountMeta::new_readonly(self.mint_authority, true),
            AccountMeta::new(self.payer, true),
            AccountMeta::new_readonly(self.update_authority, self.update_authority_is_signer),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Vec<u8> {
        pack_with_tag(
            InstructionTag::CreateMetadataAccountV3,
            &CreateMetadataAccountArgsV3 {
                data: self.data.clone(),
                is_mutable: self.is_mutable,
                collection_details: self.collection_details.clone(),
            },
        )
    }
}
