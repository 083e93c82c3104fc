//! Withdraw SPL tokens from the vault created by vault_init.
//!
//! Usage:
//!   cargo run --bin vault_withdraw_spl

use std::path::Path;

use solana_cluster_lab::sdk::{token, tx, vault};
use solana_cluster_lab::ClusterConfig;
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

    let ixs = vec![
        token::ensure_ata(&owner, &owner, &MINT),
        vault::withdraw_spl(&owner, &vault_state.pubkey(), &MINT, TOKEN_DECIMALS)?,
    ];
    let signature = tx::send(&client, &ixs, &keypair, &[]).await?;

    println!("Success! Check out your TX here:");
    println!("  {}", tx::explorer_tx_url(&signature));
    Ok(())
}
