//! Create a new vault on the deployed vault program.
//!
//! Generates the vault state keypair, saves it to vault_state.json for the
//! other vault_* scripts, and submits the program's initialize call. The
//! state account is a plain keypair, so it co-signs.
//!
//! Usage:
//!   cargo run --bin vault_init

use std::path::Path;

use solana_cluster_lab::sdk::{tx, vault, VaultAccounts};
use solana_cluster_lab::{print_header, print_step, ClusterConfig};
use solana_sdk::signature::{write_keypair_file, Keypair};
use solana_sdk::signer::Signer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    print_header("Vault Init");

    let config = ClusterConfig::devnet();
    let (keypair, client) = config.connect()?;

    let state_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("vault_state.json");
    if state_path.exists() {
        return Err(format!(
            "{} already exists; remove it to create a new vault",
            state_path.display()
        )
        .into());
    }

    print_step(1, "Generating vault state keypair...");
    let vault_state = Keypair::new();
    let accounts = VaultAccounts::derive(&vault_state.pubkey());
    println!("  State: {}", accounts.state);
    println!("  Auth:  {}", accounts.auth);
    println!("  Vault: {}", accounts.vault);

    write_keypair_file(&vault_state, &state_path)
        .map_err(|e| format!("write {}: {e}", state_path.display()))?;
    println!("  Saved state keypair to {}", state_path.display());

    print_step(2, "Initializing vault...");
    let ix = vault::initialize(&keypair.pubkey(), &vault_state.pubkey())?;
    let signature = tx::send(&client, &[ix], &keypair, &[&vault_state]).await?;

    println!("  tx id: {signature}");
    println!("  {}", tx::explorer_tx_url(&signature));
    Ok(())
}
