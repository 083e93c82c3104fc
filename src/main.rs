//! Solana Cluster Lab
//!
//! Devnet exercises: SPL tokens, token metadata, NFTs, and two deployed
//! Anchor programs (vault and escrow), one script per operation.
//!
//! ## Running scripts
//! ```bash
//! cargo run --bin keygen
//! cargo run --bin airdrop
//! cargo run --bin spl_mint
//! ```

fn main() {
    println!("Solana Cluster Lab");
    println!("==================");
    println!();
    println!("Run one script per operation:");
    println!("  cargo run --bin keygen             generate wallet.json");
    println!("  cargo run --bin airdrop            fund the wallet on devnet");
    println!("  cargo run --bin spl_init           create a token mint");
    println!("  cargo run --bin spl_mint           mint tokens to the wallet");
    println!("  cargo run --bin spl_transfer       send tokens to a recipient");
    println!("  cargo run --bin spl_metadata       attach metadata to the mint");
    println!("  cargo run --bin nft_image          upload an NFT image");
    println!("  cargo run --bin nft_mint           mint an NFT");
    println!("  cargo run --bin vault_init         create a vault");
    println!("  cargo run --bin vault_deposit      deposit lamports");
    println!("  cargo run --bin vault_withdraw     withdraw lamports");
    println!("  cargo run --bin vault_deposit_spl  deposit SPL tokens");
    println!("  cargo run --bin vault_withdraw_spl withdraw SPL tokens");
    println!("  cargo run --bin escrow_make        open a token escrow");
    println!("  cargo run --bin escrow_take        accept an open escrow");
    println!("  cargo run --bin escrow_refund      cancel an open escrow");
}
