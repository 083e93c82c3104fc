//! Deposit SPL tokens into the vault created by vault_init.
//!
//! Ensures the owner's ATA and the vault's ATA (owned by the off-curve
//! vault auth) exist, then calls deposit_spl.
//!
//! Usage:
//!   cargo run --bin vault_deposit_spl

use std::path::Path;

use solana_cluster_lab::sdk::{token, tx, vault, VaultAccounts};
use solana_cluster_lab::{print_step, ClusterConfig};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::read_keypair_file;
use solana_sdk::signer::Signer;

/// Devnet mint created by spl_init.
const MINT: Pubkey = solana_sdk::pubkey!("ESaQmvDbgHtRHMRGatFMk2Xwj6e1zv2fVfHG3vRaDYHB");

/// Base units per token for the 6-decimal mint.
const TOKEN_DECIMALS: u64 = 1_000_000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClusterConfig::devnet();
    let (keypair, client) = config.connect()?;
    let owner = keypair.pubkey();

    let state_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("vault_state.json");
    let vault_state = read_keypair_file(&state_path)
        .map_err(|e| format!("{}: {e} (run vault_init first)", state_path.display()))?;

    print_step(1, "Deriving token accounts...");
    let accounts = VaultAccounts::derive(&vault_state.pubkey());
    println!("  Owner ATA: {}", token::owner_ata(&owner, &MINT));
    println!("  Vault ATA: {}", accounts.ata(&MINT));

    print_step(2, "Depositing...");
    let ixs = vec![
        token::ensure_ata(&owner, &owner, &MINT),
        token::ensure_ata(&owner, &accounts.auth, &MINT),
        vault::deposit_spl(&owner, &vault_state.pubkey(), &MINT, TOKEN_DECIMALS)?,
    ];
    let signature = tx::send(&client, &ixs, &keypair, &[]).await?;

    println!("Success! Check out your TX here:");
    println!("  {}", tx::explorer_tx_url(&signature));
    Ok(())
}
