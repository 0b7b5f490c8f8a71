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
    state::DataV2,
};

/// Updates an existing metadata account. All argument fields are optional and
/// only the `Some` ones are applied.
///
/// ### Accounts
///  0. `[WRITE]` Metadata account PDA
///  1. `[SIGNER]` Update authority
#[derive(Default)]
pub struct UpdateMetadataAccountV2 {
    /// The metadata account PDA to update.
    pub metadata: Pubkey,
    /// The current update authority, which must sign.
    pub update_authority: Pubkey,
    /// Replacement metadata payload.
    pub new_data: Option<DataV2>,
    /// Transfers update authority to a new account.
    pub new_update_authority: Option<Pubkey>,
    /// Marks the primary sale as having happened.
    pub primary_sale_happened: Option<bool>,
    /// Can only be flipped from `true` to `false`.
    pub is_mutable: Option<bool>,
}

#[derive(BorshSerialize, BorshDeserialize)]
pub(crate) struct UpdateMetadataAccountArgsV2 {
    pub data: Option<DataV2>,
    pub new_update_authority: Option<Pubkey>,
    pub primary_sale_happened: Option<bool>,
    pub is_mutable: Option<bool>,
}

impl UpdateMetadataAccountV2 {
    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: crate::program::ID,
            accounts: self.account_metas().to_vec(),
            data: self.pack_instruction_data(),
        }
    }

    pub fn account_metas(&self) -> [AccountMeta; 2] {
        [
            AccountMeta::new(self.metadata, false),
            AccountMeta::new_readonly(self.update_authority, true),
        ]
    }

    pub fn pack_instruction_data(&self) -> Vec<u8> {
        pack_with_tag(
            InstructionTag::UpdateMetadataAccountV2,
            &UpdateMetadataAccountArgsV2 {
                data: self.new_data.clone(),
                new_update_authority: self.new_update_authority,
                primary_sale_happened: self.primary_sale_happened,
                is_mutable: self.is_mutable,
            },
        )
    }
}
