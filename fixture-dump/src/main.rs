//! Downloads deployed program bytecode into the local fixture directory.
//!
//! By default this dumps the Token Metadata program, which the test suite
//! loads as a prebuilt binary.

use std::path::PathBuf;

use anyhow::Context;
use clap::{
    Parser,
    ValueEnum,
};
use client::{
    constants::{
        DEFAULT_FIXTURE_PATH,
        DEVNET_RPC_URL,
        MAINNET_RPC_URL,
    },
    dump::dump_program_to_file,
    logs::log_success,
};
use solana_client::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Cluster {
    Devnet,
    Mainnet,
}

impl Cluster {
    fn rpc_url(self) -> &'static str {
        match self {
            Cluster::Devnet => DEVNET_RPC_URL,
            Cluster::Mainnet => MAINNET_RPC_URL,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Dump a deployed program's bytecode as a test fixture")]
struct Args {
    /// Cluster to download the program from.
    #[arg(value_enum)]
    cluster: Cluster,

    /// Program to dump. Defaults to the Token Metadata program.
    #[arg(long)]
    program_id: Option<Pubkey>,

    /// Output file for the ELF image.
    #[arg(long, short, default_value = DEFAULT_FIXTURE_PATH)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let program_id = args.program_id.unwrap_or(metadata_interface::program::ID);
    let rpc = RpcClient::new_with_commitment(
        args.cluster.rpc_url().to_string(),
        CommitmentConfig::confirmed(),
    );

    let written = dump_program_to_file(&rpc, &program_id, &args.output)
        .with_context(|| format!("failed to dump {program_id} from {}", args.cluster.rpc_url()))?;

    log_success(
        "Fixture",
        format!("wrote {written} bytes to {}", args.output.display()),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn devnet_and_mainnet_parse() {
        let args = Args::try_parse_from(["fixture-dump", "devnet"]).unwrap();
        assert_eq!(args.cluster.rpc_url(), DEVNET_RPC_URL);
        assert_eq!(args.output, PathBuf::from(DEFAULT_FIXTURE_PATH));

        let args = Args::try_parse_from(["fixture-dump", "mainnet"]).unwrap();
        assert_eq!(args.cluster.rpc_url(), MAINNET_RPC_URL);
    }

    #[test]
    fn unknown_cluster_is_rejected() {
        // Anything other than devnet/mainnet must fail parsing, which makes
        // the binary exit non-zero instead of silently doing nothing.
        assert!(Args::try_parse_from(["fixture-dump", "testnet"]).is_err());
        assert!(Args::try_parse_from(["fixture-dump"]).is_err());
    }

    #[test]
    fn output_and_program_id_overrides() {
        let program_id = Pubkey::new_unique();
        let args = Args::try_parse_from([
            "fixture-dump",
            "devnet",
            "--program-id",
            &program_id.to_string(),
            "-o",
            "fixtures/other.so",
        ])
        .unwrap();

        assert_eq!(args.program_id, Some(program_id));
        assert_eq!(args.output, PathBuf::from("fixtures/other.so"));
    }
}
