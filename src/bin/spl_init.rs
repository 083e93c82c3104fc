//! Create a new 6-decimal token mint with the wallet as mint authority.
//!
//! Prints the mint address to paste into the other spl_* scripts.
//!
//! Usage:
//!   cargo run --bin spl_init

use solana_cluster_lab::sdk::{token, tx};
use solana_cluster_lab::{print_step, ClusterConfig};
use solana_sdk::program_pack::Pack;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

const DECIMALS: u8 = 6;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClusterConfig::devnet();
    let (keypair, client) = config.connect()?;

    print_step(1, "Generating mint keypair...");
    let mint = Keypair::new();
    println!("  Mint: {}", mint.pubkey());

    print_step(2, "Creating mint account...");
    let rent = client
        .get_minimum_balance_for_rent_exemption(spl_token::state::Mint::LEN)
        .await?;
    let ixs = token::create_mint(
        &keypair.pubkey(),
        &mint.pubkey(),
        &keypair.pubkey(),
        DECIMALS,
        rent,
    )?;
    let signature = tx::send(&client, &ixs, &keypair, &[&mint]).await?;

    println!("  tx id: {signature}");
    println!("  {}", tx::explorer_tx_url(&signature));
    Ok(())
}
