//! Transaction assembly and submission.
//!
//! Assembly is pure (the blockhash is a parameter), so recipes can be
//! built and inspected without a network. Submission fetches a fresh
//! blockhash and waits for confirmation at the client's commitment level.

use std::time::Duration;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::hash::Hash;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;

use super::error::LabError;

/// Sign `instructions` into a transaction paid by `payer`. The payer must
/// be among `signers`.
pub fn build_signed_tx(
    instructions: &[Instruction],
    payer: &Pubkey,
    signers: &[&Keypair],
    recent_blockhash: Hash,
) -> Transaction {
    Transaction::new_signed_with_payer(instructions, Some(payer), signers, recent_blockhash)
}

/// Fetch a fresh blockhash, sign with the payer plus any extra signers,
/// submit, and wait for confirmation.
pub async fn send(
    client: &RpcClient,
    instructions: &[Instruction],
    payer: &Keypair,
    extra_signers: &[&Keypair],
) -> Result<Signature, LabError> {
    let blockhash = client.get_latest_blockhash().await?;
    let mut signers: Vec<&Keypair> = vec![payer];
    signers.extend_from_slice(extra_signers);
    let tx = build_signed_tx(instructions, &payer.pubkey(), &signers, blockhash);
    Ok(client.send_and_confirm_transaction(&tx).await?)
}

/// Request an airdrop and poll until the cluster confirms it.
pub async fn request_airdrop(
    client: &RpcClient,
    to: &Pubkey,
    lamports: u64,
) -> Result<Signature, LabError> {
    let signature = client.request_airdrop(to, lamports).await?;
    let max_wait = Duration::from_secs(60);
    let start = std::time::Instant::now();
    loop {
        if client.confirm_transaction(&signature).await? {
            return Ok(signature);
        }
        if start.elapsed() > max_wait {
            return Err(LabError::Rpc(format!(
                "airdrop {signature} not confirmed after {}s",
                max_wait.as_secs()
            )));
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }
}

pub fn explorer_tx_url(signature: &Signature) -> String {
    format!("https://explorer.solana.com/tx/{signature}?cluster=devnet")
}

pub fn explorer_address_url(address: &Pubkey) -> String {
    format!("https://explorer.solana.com/address/{address}?cluster=devnet")
}
