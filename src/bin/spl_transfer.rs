//! Send one token from the wallet to a recipient.
//!
//! Creates either side's associated token account if missing, then
//! transfers with a decimals check.
//!
//! Usage:
//!   cargo run --bin spl_transfer

use solana_cluster_lab::sdk::{token, tx};
use solana_cluster_lab::ClusterConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signer::Signer;

/// Devnet mint created by spl_init.
const MINT: Pubkey = solana_sdk::pubkey!("ESaQmvDbgHtRHMRGatFMk2Xwj6e1zv2fVfHG3vRaDYHB");

const DECIMALS: u8 = 6;

/// Base units per token for the 6-decimal mint.
const TOKEN_DECIMALS: u64 = 1_000_000;

/// Recipient wallet address.
const TO: Pubkey = solana_sdk::pubkey!("FjquQJ9jkEfPD137uaSGA2CfHNNfiTVjWvqw2FDTbLuv");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClusterConfig::devnet();
    let (keypair, client) = config.connect()?;

    let ixs = token::transfer(&keypair.pubkey(), &MINT, &TO, TOKEN_DECIMALS, DECIMALS)?;
    let signature = tx::send(&client, &ixs, &keypair, &[]).await?;

    println!("transaction: {signature}");
    println!("{}", tx::explorer_tx_url(&signature));
    Ok(())
}
