//! Attach a metadata account to an existing token mint.
//!
//! The wallet must be the mint authority; it becomes the update authority
//! of the metadata account.
//!
//! Usage:
//!   cargo run --bin spl_metadata

use solana_cluster_lab::sdk::{metadata, pda, tx, TokenMetadata};
use solana_cluster_lab::{print_step, ClusterConfig};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signer::Signer;

/// Devnet mint created by spl_init.
const MINT: Pubkey = solana_sdk::pubkey!("ESaQmvDbgHtRHMRGatFMk2Xwj6e1zv2fVfHG3vRaDYHB");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClusterConfig::devnet();
    let (keypair, client) = config.connect()?;

    print_step(1, "Deriving metadata account...");
    let (metadata_pda, _) = pda::metadata(&MINT);
    println!("  Metadata: {metadata_pda}");

    print_step(2, "Creating metadata...");
    let meta = TokenMetadata {
        name: "LAB_TOKEN".to_string(),
        symbol: "LABT".to_string(),
        uri: String::new(),
        seller_fee_basis_points: 300,
    };
    let ix = metadata::create_metadata(&MINT, &keypair.pubkey(), &meta, None);
    let signature = tx::send(&client, &[ix], &keypair, &[]).await?;

    println!("  the signature: {signature}");
    println!("  {}", tx::explorer_tx_url(&signature));
    Ok(())
}
