//! SPL token recipes.
//!
//! Each recipe is a straight-line instruction list: create the associated
//! token accounts if missing (idempotent, so re-runs are safe), then act.

use solana_sdk::instruction::Instruction;
use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_instruction;
use spl_associated_token_account::get_associated_token_address;
use spl_associated_token_account::instruction::create_associated_token_account_idempotent;

use super::error::LabError;

/// System create-account + `initialize_mint2` for a fresh mint keypair.
/// `rent` must be the rent-exempt minimum for `spl_token::state::Mint::LEN`
/// bytes; the mint keypair co-signs the transaction.
pub fn create_mint(
    payer: &Pubkey,
    mint: &Pubkey,
    authority: &Pubkey,
    decimals: u8,
    rent: u64,
) -> Result<Vec<Instruction>, LabError> {
    let create = system_instruction::create_account(
        payer,
        mint,
        rent,
        spl_token::state::Mint::LEN as u64,
        &spl_token::ID,
    );
    let init = spl_token::instruction::initialize_mint2(
        &spl_token::ID,
        mint,
        authority,
        None,
        decimals,
    )?;
    Ok(vec![create, init])
}

/// Idempotent ATA create for an arbitrary (possibly off-curve) owner.
pub fn ensure_ata(payer: &Pubkey, owner: &Pubkey, mint: &Pubkey) -> Instruction {
    create_associated_token_account_idempotent(payer, owner, mint, &spl_token::ID)
}

/// The associated token account of `owner` for `mint`.
pub fn owner_ata(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}

/// Ensure `owner`'s ATA exists, then mint `amount` base units to it.
/// `payer` must be the mint authority.
pub fn mint_to(
    payer: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Result<Vec<Instruction>, LabError> {
    let ata = get_associated_token_address(owner, mint);
    let mint_ix = spl_token::instruction::mint_to(&spl_token::ID, mint, &ata, payer, &[], amount)?;
    Ok(vec![ensure_ata(payer, owner, mint), mint_ix])
}

/// Ensure both parties' ATAs exist, then `transfer_checked` `amount` base
/// units from the owner to the recipient.
pub fn transfer(
    owner: &Pubkey,
    mint: &Pubkey,
    recipient: &Pubkey,
    amount: u64,
    decimals: u8,
) -> Result<Vec<Instruction>, LabError> {
    let from = get_associated_token_address(owner, mint);
    let to = get_associated_token_address(recipient, mint);
    let xfer = spl_token::instruction::transfer_checked(
        &spl_token::ID,
        &from,
        mint,
        &to,
        owner,
        &[],
        amount,
        decimals,
    )?;
    Ok(vec![
        ensure_ata(owner, owner, mint),
        ensure_ata(owner, recipient, mint),
        xfer,
    ])
}
