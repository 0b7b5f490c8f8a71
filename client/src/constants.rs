use solana_sdk::pubkey::Pubkey;

pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";
pub const MAINNET_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Where the fixture dumper writes the program ELF by default.
pub const DEFAULT_FIXTURE_PATH: &str = "tests/fixtures/mpl_token_metadata.so";

pub const SPL_TOKEN_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
pub const BPF_LOADER_UPGRADEABLE_ID: Pubkey =
    Pubkey::from_str_const("BPFLoaderUpgradeab1e11111111111111111111111");

/// Serialized size of an SPL Token mint account.
pub const MINT_LAYOUT_SIZE: u64 = 82;
/// Serialized size of an SPL Token holder account.
pub const TOKEN_ACCOUNT_SIZE: u64 = 165;
