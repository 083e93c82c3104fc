//! Generate a new wallet keypair and save it as wallet.json.
//!
//! Refuses to overwrite an existing wallet file.
//!
//! Usage:
//!   cargo run --bin keygen

use solana_cluster_lab::ClusterConfig;
use solana_sdk::signature::{write_keypair_file, Keypair};
use solana_sdk::signer::Signer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClusterConfig::devnet();
    if config.wallet_path.exists() {
        return Err(format!(
            "{} already exists; move it aside before generating a new one",
            config.wallet_path.display()
        )
        .into());
    }

    let keypair = Keypair::new();
    write_keypair_file(&keypair, &config.wallet_path)
        .map_err(|e| format!("write {}: {e}", config.wallet_path.display()))?;

    println!("Wrote {}", config.wallet_path.display());
    println!("Address: {}", keypair.pubkey());
    println!();
    println!("Fund it with: cargo run --bin airdrop");
    Ok(())
}
