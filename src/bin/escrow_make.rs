//! Open a token escrow on the deployed escrow program.
//!
//! Deposits the maker token into the program vault and records the asked
//! trade. The terms are saved to escrow.json for escrow_take and
//! escrow_refund.
//!
//! Usage:
//!   cargo run --bin escrow_make

use std::path::Path;

use solana_cluster_lab::sdk::{escrow, tx, EscrowBuilder};
use solana_cluster_lab::{print_header, print_step, ClusterConfig};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signer::Signer;

/// The mint the maker deposits.
const MAKER_MINT: Pubkey = solana_sdk::pubkey!("8WJwwjaxcaXg5pf4kgExmBDmSYjqKuE5z3xnMjrmyiVk");

/// The mint the maker asks for.
const TAKER_MINT: Pubkey = solana_sdk::pubkey!("7moFhYdA6qfuhRXhVmuzZoi4HRo6sRPrdXNwB9yn6RYY");

const DEPOSIT_AMOUNT: u64 = 600_000_000;
const OFFER_AMOUNT: u64 = 600_000_000;
const EXPIRY_SLOTS: u64 = 100;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    print_header("Escrow Make");

    let config = ClusterConfig::devnet();
    let (keypair, client) = config.connect()?;

    let terms_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("escrow.json");
    if terms_path.exists() {
        return Err(format!(
            "{} already exists; take or refund it first",
            terms_path.display()
        )
        .into());
    }

    print_step(1, "Resolving escrow terms...");
    let seed: u64 = rand::random();
    let terms = EscrowBuilder::new()
        .maker(keypair.pubkey())
        .maker_token(MAKER_MINT)
        .taker_token(TAKER_MINT)
        .seed(seed)
        .deposit_amount(DEPOSIT_AMOUNT)
        .offer_amount(OFFER_AMOUNT)
        .expiry(EXPIRY_SLOTS)
        .build()?;
    println!("  Seed:   {seed}");
    println!("  Escrow: {}", terms.escrow);
    println!("  Vault:  {}", terms.vault);

    print_step(2, "Submitting make...");
    let ix = escrow::make(&terms)?;
    let signature = tx::send(&client, &[ix], &keypair, &[]).await?;
    println!("  TX: {signature}");

    let data = serde_json::json!({
        "maker": terms.maker.to_string(),
        "maker_token": terms.maker_token.to_string(),
        "taker_token": terms.taker_token.to_string(),
        "seed": terms.seed,
        "deposit_amount": terms.deposit_amount,
        "offer_amount": terms.offer_amount,
        "expiry": terms.expiry,
    });
    std::fs::write(&terms_path, serde_json::to_string_pretty(&data)?)?;
    println!("  Saved terms to {}", terms_path.display());
    println!("  {}", tx::explorer_tx_url(&signature));
    Ok(())
}
