//! Mint SPL tokens to the wallet's associated token account.
//!
//! Creates the ATA if missing, then mints one token's worth of base units.
//! The wallet must be the mint authority.
//!
//! Usage:
//!   cargo run --bin spl_mint

use solana_cluster_lab::sdk::{token, tx};
use solana_cluster_lab::ClusterConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signer::Signer;

/// Devnet mint created by spl_init.
const MINT: Pubkey = solana_sdk::pubkey!("ESaQmvDbgHtRHMRGatFMk2Xwj6e1zv2fVfHG3vRaDYHB");

/// Base units per token for the 6-decimal mint.
const TOKEN_DECIMALS: u64 = 1_000_000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClusterConfig::devnet();
    let (keypair, client) = config.connect()?;

    let ixs = token::mint_to(&keypair.pubkey(), &MINT, &keypair.pubkey(), TOKEN_DECIMALS)?;
    let signature = tx::send(&client, &ixs, &keypair, &[]).await?;

    println!("tx id: {signature}");
    println!("{}", tx::explorer_tx_url(&signature));
    Ok(())
}
