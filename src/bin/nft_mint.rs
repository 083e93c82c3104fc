//! Mint a one-of-one NFT: fresh mint, metadata, and master edition in a
//! single transaction, with the wallet as sole creator.
//!
//! Usage:
//!   cargo run --bin nft_mint [metadata-uri]
//!
//! Pass the metadata URI produced from the image uploaded by nft_image;
//! defaults to the sample rug metadata.

use solana_cluster_lab::sdk::{metadata, tx, TokenMetadata};
use solana_cluster_lab::{print_step, ClusterConfig};
use solana_sdk::program_pack::Pack;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

const NAME: &str = "Rug #1";
const SYMBOL: &str = "RUG";
const SELLER_FEE_BPS: u16 = 500;
const DEFAULT_URI: &str = "https://arweave.net/qF9H_BBdjf-ZIR90_z5xXsSx8WiPB3-pHA8QTlg1oeI";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClusterConfig::devnet();
    let (keypair, client) = config.connect()?;

    let uri = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_URI.to_string());

    print_step(1, "Generating mint keypair...");
    let mint = Keypair::new();
    println!("  Mint: {}", mint.pubkey());

    print_step(2, "Minting NFT...");
    let rent = client
        .get_minimum_balance_for_rent_exemption(spl_token::state::Mint::LEN)
        .await?;
    let meta = TokenMetadata {
        name: NAME.to_string(),
        symbol: SYMBOL.to_string(),
        uri,
        seller_fee_basis_points: SELLER_FEE_BPS,
    };
    let ixs = metadata::create_nft(&keypair.pubkey(), &mint.pubkey(), rent, &meta)?;
    let signature = tx::send(&client, &ixs, &keypair, &[&mint]).await?;

    println!("  tx id: {signature}");
    println!("Success! Check out your NFT here:");
    println!("  {}", tx::explorer_address_url(&mint.pubkey()));
    Ok(())
}
