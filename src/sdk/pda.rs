//! Program-derived address conventions for the deployed programs.
//!
//! Seed ordering is part of each program's contract: reordering silently
//! derives a different address, which the program rejects at runtime with
//! no hint about what went wrong. Callers should recompute addresses from
//! these functions rather than cache them.

use solana_sdk::pubkey::Pubkey;

/// The deployed vault program on devnet.
pub const VAULT_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("D51uEDHLbWAxNfodfQDv7qkp8WZtxrhi3uganGbNos7o");

/// The deployed escrow program on devnet.
pub const ESCROW_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("3tWcxiouPwVkF8eiWWFPbxV8vayMVaR8BYMRFcz2zFK3");

/// `["auth", vault_state]`: signing authority over the vault's lamports
/// and token accounts.
pub fn vault_auth(vault_state: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"auth", vault_state.as_ref()], &VAULT_PROGRAM_ID)
}

/// `["vault", vault_auth]`: the system account holding deposited lamports.
pub fn vault(vault_auth: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"vault", vault_auth.as_ref()], &VAULT_PROGRAM_ID)
}

/// `["auth"]`: the escrow program's single vault authority.
pub fn escrow_auth() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"auth"], &ESCROW_PROGRAM_ID)
}

/// `["escrow", maker, seed]`: escrow state, keyed by maker and a
/// little-endian u64 seed so one maker can hold several open escrows.
pub fn escrow_state(maker: &Pubkey, seed: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[b"escrow", maker.as_ref(), &seed.to_le_bytes()],
        &ESCROW_PROGRAM_ID,
    )
}

/// `["vault", escrow_state]`: the token account holding the maker's
/// deposit while the escrow is open.
pub fn escrow_vault(escrow_state: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"vault", escrow_state.as_ref()], &ESCROW_PROGRAM_ID)
}

/// `["metadata", program, mint]` under the token-metadata program.
pub fn metadata(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            b"metadata",
            mpl_token_metadata::ID.as_ref(),
            mint.as_ref(),
        ],
        &mpl_token_metadata::ID,
    )
}

/// `["metadata", program, mint, "edition"]`: the master edition marker
/// that makes a 0-decimal, supply-1 mint a proper NFT.
pub fn master_edition(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            b"metadata",
            mpl_token_metadata::ID.as_ref(),
            mint.as_ref(),
            b"edition",
        ],
        &mpl_token_metadata::ID,
    )
}
