//! Dumps deployed program bytecode to a local file for use as a test fixture.
//!
//! Upgradeable programs store their ELF in a separate programdata account
//! behind a loader metadata header; non-upgradeable loaders keep the ELF in
//! the program account itself.

use std::{
    fs,
    path::Path,
};

use solana_client::rpc_client::RpcClient;
use solana_loader_v3_interface::state::UpgradeableLoaderState;
use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::BPF_LOADER_UPGRADEABLE_ID,
    errors::DumpError,
};

/// Fetches the ELF image of a deployed program.
pub fn fetch_program_elf(client: &RpcClient, program_id: &Pubkey) -> Result<Vec<u8>, DumpError> {
    let account = client
        .get_account(program_id)
        .map_err(|e| DumpError::ClientError(*program_id, *e.kind))?;

    if !account.executable {
        return Err(DumpError::NotAProgram(*program_id));
    }

    if account.owner != BPF_LOADER_UPGRADEABLE_ID {
        return Ok(account.data);
    }

    let programdata_address = match bincode::deserialize(&account.data) {
        Ok(UpgradeableLoaderState::Program {
            programdata_address,
        }) => programdata_address,
        Ok(state) => {
            return Err(DumpError::InvalidLoaderState(format!(
                "program account holds unexpected state: {state:?}"
            )))
        }
        Err(e) => return Err(DumpError::InvalidLoaderState(e.to_string())),
    };

    let programdata = client
        .get_account_data(&programdata_address)
        .map_err(|e| DumpError::ClientError(programdata_address, *e.kind))?;

    programdata_elf(&programdata).map(<[u8]>::to_vec)
}

/// Slices the ELF image out of programdata account data by skipping the
/// loader metadata header (slot and upgrade authority).
pub fn programdata_elf(data: &[u8]) -> Result<&[u8], DumpError> {
    match bincode::deserialize(data) {
        Ok(UpgradeableLoaderState::ProgramData { .. }) => {}
        Ok(state) => {
            return Err(DumpError::InvalidLoaderState(format!(
                "programdata account holds unexpected state: {state:?}"
            )))
        }
        Err(e) => return Err(DumpError::InvalidLoaderState(e.to_string())),
    }

    data.get(UpgradeableLoaderState::size_of_programdata_metadata()..)
        .ok_or(DumpError::TruncatedProgramData)
}

/// Dumps a program's ELF to `output`, creating parent directories as needed.
/// Returns the number of bytes written.
pub fn dump_program_to_file(
    client: &RpcClient,
    program_id: &Pubkey,
    output: &Path,
) -> Result<usize, DumpError> {
    let elf = fetch_program_elf(client, program_id)?;

    if let Some(dir) = output.parent() {
        fs::create_dir_all(dir).map_err(|e| DumpError::Io(dir.to_path_buf(), e))?;
    }
    fs::write(output, &elf).map_err(|e| DumpError::Io(output.to_path_buf(), e))?;

    Ok(elf.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Hand-built bincode layout: u32 LE enum tag, then the variant fields.
    // ProgramData is tag 3: slot u64, then Option<Pubkey> as a one-byte flag.
    fn programdata_header(slot: u64, authority: Option<[u8; 32]>) -> Vec<u8> {
        let mut header = vec![3, 0, 0, 0];
        header.extend_from_slice(&slot.to_le_bytes());
        match authority {
            Some(key) => {
                header.push(1);
                header.extend_from_slice(&key);
            }
            None => header.push(0),
        }
        header
    }

    #[test]
    fn extracts_elf_after_metadata_header() {
        let elf = b"\x7fELF_fake_program_bytes";
        let mut data = programdata_header(42, Some([7; 32]));
        assert_eq!(
            data.len(),
            UpgradeableLoaderState::size_of_programdata_metadata()
        );
        data.extend_from_slice(elf);

        assert_eq!(programdata_elf(&data).unwrap(), elf);
    }

    #[test]
    fn closed_authority_header_still_parses() {
        // With no upgrade authority the header is shorter than the fixed
        // metadata size, but on chain the account keeps the full allocation.
        let mut data = programdata_header(1, None);
        data.resize(UpgradeableLoaderState::size_of_programdata_metadata(), 0);
        data.extend_from_slice(b"elf");

        assert_eq!(programdata_elf(&data).unwrap(), b"elf");
    }

    #[test]
    fn rejects_program_account_state() {
        // Program variant is tag 2 followed by the programdata address.
        let mut data = vec![2, 0, 0, 0];
        data.extend_from_slice(&[9; 32]);

        assert!(matches!(
            programdata_elf(&data),
            Err(DumpError::InvalidLoaderState(_))
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            programdata_elf(&[255, 255]),
            Err(DumpError::InvalidLoaderState(_))
        ));
    }
}
