use std::fmt;

#[derive(Debug)]
pub enum LabError {
    Wallet(String),
    Rpc(String),
    Encode(String),
    InvalidConfig(String),
    InsufficientFunds { needed: u64, available: u64 },
    Storage(String),
}

impl fmt::Display for LabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wallet(e) => write!(f, "wallet error: {e}"),
            Self::Rpc(e) => write!(f, "RPC error: {e}"),
            Self::Encode(e) => write!(f, "encoding error: {e}"),
            Self::InvalidConfig(e) => write!(f, "invalid config: {e}"),
            Self::InsufficientFunds { needed, available } => {
                write!(
                    f,
                    "insufficient funds: need {needed} lamports, have {available}"
                )
            }
            Self::Storage(e) => write!(f, "storage error: {e}"),
        }
    }
}

impl std::error::Error for LabError {}

impl From<solana_client::client_error::ClientError> for LabError {
    fn from(e: solana_client::client_error::ClientError) -> Self {
        Self::Rpc(format!("{e}"))
    }
}

impl From<solana_sdk::program_error::ProgramError> for LabError {
    fn from(e: solana_sdk::program_error::ProgramError) -> Self {
        Self::Encode(format!("{e}"))
    }
}
