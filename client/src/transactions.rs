//! Transaction building and submission helpers.

use std::{
    thread::sleep,
    time::Duration,
};

use anyhow::Context;
use solana_client::{
    rpc_client::RpcClient,
    rpc_config::RpcSimulateTransactionConfig,
};
use solana_commitment_config::CommitmentConfig;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_instruction::Instruction;
use solana_sdk::{
    hash::Hash,
    message::Message,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};

use crate::logs::{
    log_info,
    log_success,
};

pub struct SendTransactionConfig {
    /// Prepends compute budget instructions when set.
    pub compute_budget: Option<u32>,
    pub debug_logs: bool,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            compute_budget: None,
            debug_logs: true,
        }
    }
}

pub fn send_transaction(
    rpc: &RpcClient,
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
) -> anyhow::Result<Signature> {
    send_transaction_with_config(rpc, payer, signers, instructions, None)
}

pub fn send_transaction_with_config(
    rpc: &RpcClient,
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
    config: Option<SendTransactionConfig>,
) -> anyhow::Result<Signature> {
    let SendTransactionConfig {
        compute_budget,
        debug_logs,
    } = config.unwrap_or_default();

    let blockhash = rpc
        .get_latest_blockhash()
        .context("Failed to get latest blockhash")?;

    let message = Message::new(
        &[
            compute_budget.map_or(vec![], |budget| {
                vec![
                    ComputeBudgetInstruction::set_compute_unit_limit(budget),
                    ComputeBudgetInstruction::set_compute_unit_price(1),
                ]
            }),
            instructions.to_vec(),
        ]
        .concat(),
        Some(&payer.pubkey()),
    );

    let mut tx = Transaction::new_unsigned(message);
    let all_signers: Vec<&Keypair> = std::iter::once(payer).chain(signers.iter().cloned()).collect();
    tx.try_sign(&all_signers, blockhash)
        .context("Failed to sign transaction")?;

    let signature = rpc
        .send_and_confirm_transaction(&tx)
        .context("Failed transaction submission")?;

    if debug_logs {
        log_success("Signature", signature);
        log_info("Payer", payer.pubkey());
    }

    Ok(signature)
}

/// Retries submission with exponential backoff. Each attempt re-fetches the
/// blockhash, so an expired one does not poison later attempts.
pub fn send_transaction_with_retries(
    rpc: &RpcClient,
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
) -> anyhow::Result<Signature> {
    const MAX_ATTEMPTS: u32 = 3;
    const BASE_DELAY_MS: u64 = 250;

    let mut attempt = 0;
    loop {
        match send_transaction(rpc, payer, signers, instructions) {
            Ok(signature) => return Ok(signature),
            Err(err) if attempt + 1 < MAX_ATTEMPTS => {
                log_info("Retrying", &err);
                sleep(Duration::from_millis(BASE_DELAY_MS << attempt));
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Estimates compute units by simulating the transaction, with 20% headroom.
pub fn get_compute_units(
    rpc: &RpcClient,
    instructions: &[Instruction],
    signers: &[&Keypair],
) -> anyhow::Result<Option<u64>> {
    let config = RpcSimulateTransactionConfig {
        sig_verify: false,
        replace_recent_blockhash: true,
        commitment: Some(CommitmentConfig::confirmed()),
        ..RpcSimulateTransactionConfig::default()
    };

    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&signers[0].pubkey()),
        signers,
        // The simulation replaces the blockhash, so any placeholder works.
        Hash::default(),
    );

    // Simulation failures come back inside the Ok value, not as an Err.
    let sim_result = rpc.simulate_transaction_with_config(&tx, config)?;
    if let Some(err) = sim_result.value.err {
        return Err(err.into());
    }

    let units = sim_result
        .value
        .units_consumed
        .map(|units| (units as f64 * 1.20) as u64);

    Ok(units)
}
