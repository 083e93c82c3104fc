//! Client for the deployed vault program.
//!
//! The program holds native lamports in a `["vault", auth]` system account
//! and SPL balances in an associated token account owned by the off-curve
//! `["auth", state]` authority. `vault_state` itself is a plain keypair
//! account created at initialize, not a PDA, so it must co-sign the
//! initialize transaction.

use borsh::BorshSerialize;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;
use spl_associated_token_account::get_associated_token_address;

use super::anchor;
use super::error::LabError;
use super::pda;

#[derive(BorshSerialize)]
struct AmountArgs {
    amount: u64,
}

/// Addresses derived from a vault state account.
#[derive(Debug, Clone, Copy)]
pub struct VaultAccounts {
    pub state: Pubkey,
    pub auth: Pubkey,
    pub vault: Pubkey,
}

impl VaultAccounts {
    pub fn derive(state: &Pubkey) -> Self {
        let (auth, _) = pda::vault_auth(state);
        let (vault, _) = pda::vault(&auth);
        Self {
            state: *state,
            auth,
            vault,
        }
    }

    /// The vault's associated token account for `mint`, owned by the
    /// off-curve auth.
    pub fn ata(&self, mint: &Pubkey) -> Pubkey {
        get_associated_token_address(&self.auth, mint)
    }
}

/// Create and register a new vault. `vault_state` must sign alongside the
/// owner.
pub fn initialize(owner: &Pubkey, vault_state: &Pubkey) -> Result<Instruction, LabError> {
    let accounts = VaultAccounts::derive(vault_state);
    Ok(Instruction {
        program_id: pda::VAULT_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new(*vault_state, true),
            AccountMeta::new_readonly(accounts.auth, false),
            AccountMeta::new(accounts.vault, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: anchor::instruction_data("initialize", &())?,
    })
}

/// Move `lamports` from the owner into the vault system account.
pub fn deposit(owner: &Pubkey, vault_state: &Pubkey, lamports: u64) -> Result<Instruction, LabError> {
    native_ix("deposit", owner, vault_state, lamports)
}

/// Move `lamports` from the vault system account back to the owner.
/// Over-withdrawal is rejected by the program, not pre-checked here.
pub fn withdraw(owner: &Pubkey, vault_state: &Pubkey, lamports: u64) -> Result<Instruction, LabError> {
    native_ix("withdraw", owner, vault_state, lamports)
}

/// Move `amount` base units of `mint` from the owner's ATA into the
/// vault's ATA. Both ATAs must already exist; see `token::ensure_ata`.
pub fn deposit_spl(
    owner: &Pubkey,
    vault_state: &Pubkey,
    mint: &Pubkey,
    amount: u64,
) -> Result<Instruction, LabError> {
    spl_ix("deposit_spl", owner, vault_state, mint, amount)
}

/// Move `amount` base units of `mint` from the vault's ATA back to the
/// owner's ATA. The program signs for the vault authority.
pub fn withdraw_spl(
    owner: &Pubkey,
    vault_state: &Pubkey,
    mint: &Pubkey,
    amount: u64,
) -> Result<Instruction, LabError> {
    spl_ix("withdraw_spl", owner, vault_state, mint, amount)
}

// deposit and withdraw share an account list; the method name selects the
// transfer direction on-chain.
fn native_ix(
    method: &str,
    owner: &Pubkey,
    vault_state: &Pubkey,
    lamports: u64,
) -> Result<Instruction, LabError> {
    if lamports == 0 {
        return Err(LabError::InvalidConfig("amount must be > 0".into()));
    }
    let accounts = VaultAccounts::derive(vault_state);
    Ok(Instruction {
        program_id: pda::VAULT_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new_readonly(*vault_state, false),
            AccountMeta::new_readonly(accounts.auth, false),
            AccountMeta::new(accounts.vault, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: anchor::instruction_data(method, &AmountArgs { amount: lamports })?,
    })
}

fn spl_ix(
    method: &str,
    owner: &Pubkey,
    vault_state: &Pubkey,
    mint: &Pubkey,
    amount: u64,
) -> Result<Instruction, LabError> {
    if amount == 0 {
        return Err(LabError::InvalidConfig("amount must be > 0".into()));
    }
    let accounts = VaultAccounts::derive(vault_state);
    let owner_ata = get_associated_token_address(owner, mint);
    Ok(Instruction {
        program_id: pda::VAULT_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new(*vault_state, false),
            AccountMeta::new_readonly(accounts.auth, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new(owner_ata, false),
            AccountMeta::new(accounts.ata(mint), false),
            AccountMeta::new_readonly(spl_token::ID, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(spl_associated_token_account::ID, false),
        ],
        data: anchor::instruction_data(method, &AmountArgs { amount })?,
    })
}
