//! Deposit lamports into the vault created by vault_init.
//!
//! Usage:
//!   cargo run --bin vault_deposit

use std::path::Path;

use solana_cluster_lab::sdk::{tx, vault};
use solana_cluster_lab::ClusterConfig;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::signature::read_keypair_file;
use solana_sdk::signer::Signer;

const DEPOSIT_LAMPORTS: u64 = LAMPORTS_PER_SOL / 10;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClusterConfig::devnet();
    let (keypair, client) = config.connect()?;

    let state_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("vault_state.json");
    let vault_state = read_keypair_file(&state_path)
        .map_err(|e| format!("{}: {e} (run vault_init first)", state_path.display()))?;

    let ix = vault::deposit(&keypair.pubkey(), &vault_state.pubkey(), DEPOSIT_LAMPORTS)?;
    let signature = tx::send(&client, &[ix], &keypair, &[]).await?;

    let balance = client.get_balance(&keypair.pubkey()).await?;
    println!("Current balance: {balance}");
    println!("Success! Check out your TX here:");
    println!("  {}", tx::explorer_tx_url(&signature));
    Ok(())
}
