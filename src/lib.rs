//! Solana Cluster Lab
//!
//! Devnet exercises for the core Solana client flows: SPL token minting
//! and transfer, token metadata, NFT creation, and calls into two deployed
//! Anchor programs (a lamport/SPL vault and a token escrow).
//!
//! Each operation is a standalone script under `src/bin/`. The shared SDK
//! in [`sdk`] keeps address derivation and instruction assembly pure, so
//! every script is the same straight line: load the wallet, connect,
//! build, submit, print the explorer link.
//!
//! ## Running scripts
//! ```bash
//! cargo run --bin keygen       # create wallet.json
//! cargo run --bin airdrop      # fund it on devnet
//! cargo run --bin spl_mint
//! cargo run --bin vault_init
//! ```

pub mod config;
pub mod sdk;

pub use config::ClusterConfig;
pub use sdk::LabError;

pub fn print_header(title: &str) {
    println!("\n=== {} ===\n", title);
}

pub fn print_step(num: usize, description: &str) {
    println!("Step {}: {}", num, description);
}
