//! Client-side encoding for Anchor program calls.
//!
//! The deployed vault and escrow programs are Anchor programs: instruction
//! data is an 8-byte method discriminator (the first bytes of
//! `sha256("global:<method>")`) followed by the Borsh-serialized arguments.

use borsh::BorshSerialize;
use sha2::{Digest, Sha256};

use super::error::LabError;

/// Compute the 8-byte discriminator for a global program method.
pub fn discriminator(method: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(b"global:");
    hasher.update(method.as_bytes());
    let digest = hasher.finalize();
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

/// Discriminator + Borsh-serialized arguments. Pass `&()` for methods
/// that take no arguments.
pub fn instruction_data<T: BorshSerialize>(method: &str, args: &T) -> Result<Vec<u8>, LabError> {
    let mut data = discriminator(method).to_vec();
    args.serialize(&mut data)
        .map_err(|e| LabError::Encode(format!("{method} args: {e}")))?;
    Ok(data)
}
