//! Accept the escrow recorded in escrow.json, with the wallet as taker.
//!
//! Checks the taker holds enough of the asked token, pays the offer
//! amount to the maker, receives the vault contents, and removes the
//! consumed terms file.
//!
//! Usage:
//!   cargo run --bin escrow_take

use std::path::Path;
use std::str::FromStr;

use solana_cluster_lab::sdk::{escrow, token, tx, EscrowBuilder, EscrowTerms, LabError};
use solana_cluster_lab::{print_header, print_step, ClusterConfig};
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
    print_header("Escrow Take");

    let config = ClusterConfig::devnet();
    let (keypair, client) = config.connect()?;
    let taker = keypair.pubkey();

    let terms_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("escrow.json");
    let terms = load_terms(&terms_path)?;
    println!("  Escrow: {}", terms.escrow);

    print_step(1, "Checking taker balance...");
    let taker_ata = token::owner_ata(&taker, &terms.taker_token);
    let available = match client.get_token_account_balance(&taker_ata).await {
        Ok(balance) => balance.amount.parse::<u64>()?,
        Err(_) => 0,
    };
    if available < terms.offer_amount {
        return Err(LabError::InsufficientFunds {
            needed: terms.offer_amount,
            available,
        }
        .into());
    }
    println!("  Paying {} of {}", terms.offer_amount, terms.taker_token);

    print_step(2, "Taking escrow...");
    let ixs = vec![
        token::ensure_ata(&taker, &taker, &terms.maker_token),
        token::ensure_ata(&taker, &terms.maker, &terms.taker_token),
        escrow::take(&terms, &taker)?,
    ];
    let signature = tx::send(&client, &ixs, &keypair, &[]).await?;
    println!("  TX: {signature}");

    std::fs::remove_file(&terms_path)?;
    println!("  {}", tx::explorer_tx_url(&signature));
    Ok(())
}
