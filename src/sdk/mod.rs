pub mod anchor;
pub mod error;
pub mod escrow;
pub mod metadata;
pub mod pda;
pub mod storage;
pub mod token;
pub mod tx;
pub mod vault;

pub use error::LabError;
pub use escrow::{EscrowBuilder, EscrowTerms};
pub use metadata::TokenMetadata;
pub use storage::StorageClient;
pub use vault::VaultAccounts;
