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
    program_ids::{
        SPL_TOKEN_ID,
        SYSTEM_PROGRAM_ID,
    },
};

/// Creates the master edition account for a mint, making it an original NFT
/// that print editions can be minted from.
///
/// The program takes over mint and freeze authority, so the mint must have
/// supply 1 and decimals 0 before this runs.
///
/// ### Accounts
///  0. `[WRITE]` Master edition account PDA
///  1. `[WRITE]` Mint
///  2. `[SIGNER]` Update authority
///  3. `[SIGNER]` Mint authority
///  4. `[WRITE, SIGNER]` Payer
///  5. `[WRITE]` Metadata account PDA
///  6. `[READ]` SPL Token program
///  7. `[READ]` System program
pub struct CreateMasterEditionV3 {
    /// The master edition account PDA.
    pub edition: Pubkey,
    /// The mint being promoted to a master edition.
    pub mint: Pubkey,
    /// The metadata update authority.
    pub update_authority: Pubkey,
    /// The current mint authority.
    pub mint_authority: Pubkey,
    /// The account funding the edition account's rent.
    pub payer: Pubkey,
    /// The metadata account PDA for the mint.
    pub metadata: Pubkey,
    /// Maximum print supply; `None` means unlimited, `Some(0)` disables
    /// printing entirely.
    pub max_supply: Option<u64>,
}

#[derive(BorshSerialize, BorshDeserialize)]
pub(crate) struct CreateMasterEditionArgs {
    pub max_supply: Option<u64>,
}

impl CreateMasterEditionV3 {
    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: crate::program::ID,
            accounts: self.account_metas().to_vec(),
            data: self.pack_instruction_data(),
        }
    }

    pub fn account_metas(&self) -> [AccountMeta; 8] {
        [
            AccountMeta::new(self.edition, false),
            AccountMeta::new(self.mint, false),
            AccountMeta::new_readonly(self.update_authority, true),
            AccountMeta::new_readonly(self.mint_authority, true),
            AccountMeta::new(self.payer, true),
            AccountMeta::new(self.metadata, false),
            AccountMeta::new_readonly(SPL_TOKEN_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Vec<u8> {
        pack_with_tag(
            InstructionTag::CreateMasterEditionV3,
            &CreateMasterEditionArgs {
                max_supply: self.max_supply,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_tag_and_max_supply() {
        let ix = CreateMasterEditionV3 {
            edition: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            update_authority: Pubkey::new_unique(),
            mint_authority: Pubkey::new_unique(),
            payer: Pubkey::new_unique(),
            metadata: Pubkey::new_unique(),
            max_supply: Some(0),
        };

        // tag + Some flag + u64
        assert_eq!(ix.pack_instruction_data(), [17, 1, 0, 0, 0, 0, 0, 0, 0, 0]);

        let metas = ix.account_metas();
        assert!(metas[2].is_signer && metas[3].is_signer && metas[4].is_signer);
        assert_eq!(metas[6].pubkey, SPL_TOKEN_ID);
    }
}
