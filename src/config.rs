//! Keypair and connection bootstrap shared by every script.

use std::path::{Path, PathBuf};

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::{read_keypair_file, Keypair};

use crate::sdk::LabError;

pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";
pub const LOCALNET_RPC_URL: &str = "http://localhost:8899";

/// Connection settings shared by every script: RPC endpoint, commitment
/// level, and the wallet file holding the signing keypair.
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
    pub wallet_path: PathBuf,
}

impl ClusterConfig {
    /// Devnet at `confirmed` commitment. `SOLANA_RPC_URL` and
    /// `SOLANA_WALLET` override the endpoint and wallet path.
    pub fn devnet() -> Self {
        Self::with_default_url(DEVNET_RPC_URL)
    }

    /// Local test validator, same overrides.
    pub fn localnet() -> Self {
        Self::with_default_url(LOCALNET_RPC_URL)
    }

    fn with_default_url(default_url: &str) -> Self {
        let rpc_url =
            std::env::var("SOLANA_RPC_URL").unwrap_or_else(|_| default_url.to_string());
        let wallet_path = std::env::var("SOLANA_WALLET")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("wallet.json"));
        Self {
            rpc_url,
            commitment: CommitmentConfig::confirmed(),
            wallet_path,
        }
    }

    /// Read the JSON secret-key byte array into a keypair.
    pub fn load_wallet(&self) -> Result<Keypair, LabError> {
        read_keypair_file(&self.wallet_path)
            .map_err(|e| LabError::Wallet(format!("{}: {e}", self.wallet_path.display())))
    }

    /// Nonblocking RPC client at the configured commitment.
    pub fn client(&self) -> RpcClient {
        RpcClient::new_with_commitment(self.rpc_url.clone(), self.commitment)
    }

    /// Wallet + client in one call: the bootstrap every script starts with.
    pub fn connect(&self) -> Result<(Keypair, RpcClient), LabError> {
        Ok((self.load_wallet()?, self.client()))
    }
}
