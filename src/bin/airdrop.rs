//! Request a devnet airdrop for the wallet and wait for confirmation.
//!
//! Usage:
//!   cargo run --bin airdrop
//!
//! Requires:
//!   - wallet.json (create with `cargo run --bin keygen`)

use solana_cluster_lab::sdk::tx;
use solana_cluster_lab::ClusterConfig;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::signer::Signer;

const AIRDROP_SOL: u64 = 2;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClusterConfig::devnet();
    let (keypair, client) = config.connect()?;

    println!("Requesting {AIRDROP_SOL} SOL for {}...", keypair.pubkey());
    let signature =
        tx::request_airdrop(&client, &keypair.pubkey(), AIRDROP_SOL * LAMPORTS_PER_SOL).await?;
    println!("Confirmed: {signature}");

    let balance = client.get_balance(&keypair.pubkey()).await?;
    println!("Balance: {balance} lamports");
    println!("{}", tx::explorer_tx_url(&signature));
    Ok(())
}
