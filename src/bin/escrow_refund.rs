//! Cancel the escrow recorded in escrow.json, as its maker.
//!
//! Returns the deposit to the maker's ATA, closes the vault, and removes
//! the consumed terms file.
//!
//! Usage:
//!   cargo run --bin escrow_refund

use std::path::Path;
use std::str::FromStr;

use solana_cluster_lab::sdk::{escrow, tx, EscrowBuilder, EscrowTerms};
use solana_cluster_lab::{print_step, ClusterConfig};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signer::Signer;

fn load_terms(path: &Path) -> Result<EscrowTerms, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("{}: {e} (run escrow_make first)", path.display()))?;
    let v: serde_json::Value = serde_json::from_str(&data)?;
    let field = |name: &str| -> Result<Pubkey, Box<dyn std::error::Error>> {
        let s = v[name].as_str().ok_or(format!("missing {name}"))?;
        Ok(Pubkey::from_str(s)?)
    };
    let amount = |name: &str| -> Result<u64, Box<dyn std::error::Error>> {
        v[name].as_u64().ok_or(format!("missing {name}").into())
    };
    Ok(EscrowBuilder::new()
        .maker(field("maker")?)
        .maker_token(field("maker_token")?)
        .taker_token(field("taker_token")?)
        .seed(amount("seed")?)
        .deposit_amount(amount("deposit_amount")?)
        .offer_amount(amount("offer_amount")?)
        .expiry(amount("expiry")?)
        .build()?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClusterConfig::devnet();
    let (keypair, client) = config.connect()?;

    let terms_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("escrow.json");
    let terms = load_terms(&terms_path)?;

    if keypair.pubkey() != terms.maker {
        return Err(format!(
            "wallet {} is not the maker {} of this escrow",
            keypair.pubkey(),
            terms.maker
        )
        .into());
    }

    print_step(1, "Refunding escrow...");
    println!("  Escrow: {}", terms.escrow);

    let ix = escrow::refund(&terms)?;
    let signature = tx::send(&client, &[ix], &keypair, &[]).await?;
    println!("  TX: {signature}");

    std::fs::remove_file(&terms_path)?;
    println!("  {}", tx::explorer_tx_url(&signature));
    Ok(())
}
