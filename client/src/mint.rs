//! Mints a classic one-of-one NFT: mint account, metadata, and a
//! zero-supply master edition, all in a single transaction.

use anyhow::{
    Context,
    Result,
};
use metadata_interface::instructions::{
    CreateMasterEditionV3,
    CreateMetadataAccountV3,
    UpdateMetadataAccountV2,
};
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
};
use spl_associated_token_account_interface::{
    address::get_associated_token_address,
    instruction::create_associated_token_account,
};
use spl_token_interface::instruction::{
    initialize_mint,
    mint_to,
};

use crate::{
    constants::{
        MINT_LAYOUT_SIZE,
        SPL_TOKEN_PROGRAM_ID,
    },
    convert::convert_local_to_remote_data,
    data::{
        Asset,
        NFTData,
    },
    transactions::send_transaction_with_retries,
};

pub struct MintResult {
    pub signature: Signature,
    pub mint: Pubkey,
}

pub fn mint_one(
    client: &RpcClient,
    funder: &Keypair,
    receiver: &Pubkey,
    nft_data: NFTData,
    immutable: bool,
    primary_sale_happened: bool,
) -> Result<MintResult> {
    let mint = Keypair::new();
    let asset = Asset::new(mint.pubkey());

    let data = convert_local_to_remote_data(nft_data)?;

    let min_rent = client
        .get_minimum_balance_for_rent_exemption(MINT_LAYOUT_SIZE as usize)
        .context("Failed to fetch rent exemption minimum")?;

    let create_mint_account_ix = solana_system_interface::instruction::create_account(
        &funder.pubkey(),
        &mint.pubkey(),
        min_rent,
        MINT_LAYOUT_SIZE,
        &SPL_TOKEN_PROGRAM_ID,
    );

    let init_mint_ix = initialize_mint(
        &SPL_TOKEN_PROGRAM_ID,
        &mint.pubkey(),
        &funder.pubkey(),
        Some(&funder.pubkey()),
        0,
    )?;

    let token_ata = get_associated_token_address(receiver, &mint.pubkey());

    let create_ata_ix = create_associated_token_account(
        &funder.pubkey(),
        receiver,
        &mint.pubkey(),
        &SPL_TOKEN_PROGRAM_ID,
    );

    let mint_to_ix = mint_to(
        &SPL_TOKEN_PROGRAM_ID,
        &mint.pubkey(),
        &token_ata,
        &funder.pubkey(),
        &[],
        1,
    )?;

    let create_metadata_ix = CreateMetadataAccountV3 {
        metadata: asset.metadata,
        mint: asset.mint,
        mint_authority: funder.pubkey(),
        payer: funder.pubkey(),
        update_authority: funder.pubkey(),
        update_authority_is_signer: true,
        data,
        is_mutable: !immutable,
        collection_details: None,
    }
    .instruction();

    let create_master_edition_ix = CreateMasterEditionV3 {
        edition: asset.edition,
        mint: asset.mint,
        update_authority: funder.pubkey(),
        mint_authority: funder.pubkey(),
        payer: funder.pubkey(),
        metadata: asset.metadata,
        max_supply: Some(0),
    }
    .instruction();

    let mut instructions = vec![
        create_mint_account_ix,
        init_mint_ix,
        create_ata_ix,
        mint_to_ix,
        create_metadata_ix,
        create_master_edition_ix,
    ];

    if primary_sale_happened {
        instructions.push(
            UpdateMetadataAccountV2 {
                metadata: asset.metadata,
                update_authority: funder.pubkey(),
                primary_sale_happened: Some(true),
                ..Default::default()
            }
            .instruction(),
        );
    }

    let signature = send_transaction_with_retries(client, funder, &[&mint], &instructions)?;

    Ok(MintResult {
        signature,
        mint: asset.mint,
    })
}
