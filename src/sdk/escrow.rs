//! Client for the deployed escrow program.
//!
//! `make` escrows `deposit_amount` of the maker token in a program vault,
//! `take` swaps it against `offer_amount` of the taker token, `refund`
//! returns the deposit and closes the vault, and `update` lets the maker
//! change the asked token and amount while the escrow is open.

use borsh::BorshSerialize;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;
use spl_associated_token_account::get_associated_token_address;

use super::anchor;
use super::error::LabError;
use super::pda;

/// Slot-offset ceiling enforced by the program's `make` and `update`.
/// Larger values are rejected on-chain; rejecting locally saves the fee.
pub const MAX_EXPIRY_SLOTS: u64 = 100_000;

#[derive(BorshSerialize)]
struct MakeArgs {
    seed: u64,
    deposit_amount: u64,
    offer_amount: u64,
    expiry: u64,
}

#[derive(BorshSerialize)]
struct UpdateArgs {
    offer_amount: u64,
    expiry: u64,
}

/// Fully resolved escrow terms with every derived address the program
/// expects.
#[derive(Debug, Clone)]
pub struct EscrowTerms {
    pub maker: Pubkey,
    pub maker_token: Pubkey,
    pub taker_token: Pubkey,
    pub seed: u64,
    pub deposit_amount: u64,
    pub offer_amount: u64,
    pub expiry: u64,
    pub auth: Pubkey,
    pub escrow: Pubkey,
    pub vault: Pubkey,
}

impl EscrowTerms {
    /// The maker's token account for the deposited mint.
    pub fn maker_ata(&self) -> Pubkey {
        get_associated_token_address(&self.maker, &self.maker_token)
    }
}

/// Builder for resolving escrow terms.
pub struct EscrowBuilder {
    maker: Option<Pubkey>,
    maker_token: Option<Pubkey>,
    taker_token: Option<Pubkey>,
    seed: Option<u64>,
    deposit_amount: Option<u64>,
    offer_amount: Option<u64>,
    expiry: u64,
}

impl EscrowBuilder {
    pub fn new() -> Self {
        Self {
            maker: None,
            maker_token: None,
            taker_token: None,
            seed: None,
            deposit_amount: None,
            offer_amount: None,
            expiry: 0,
        }
    }

    pub fn maker(mut self, pk: Pubkey) -> Self {
        self.maker = Some(pk);
        self
    }

    pub fn maker_token(mut self, mint: Pubkey) -> Self {
        self.maker_token = Some(mint);
        self
    }

    pub fn taker_token(mut self, mint: Pubkey) -> Self {
        self.taker_token = Some(mint);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn deposit_amount(mut self, amount: u64) -> Self {
        self.deposit_amount = Some(amount);
        self
    }

    pub fn offer_amount(mut self, amount: u64) -> Self {
        self.offer_amount = Some(amount);
        self
    }

    /// Slot offset after which the escrow can no longer be taken.
    /// 0 (the default) means no expiry.
    pub fn expiry(mut self, slots: u64) -> Self {
        self.expiry = slots;
        self
    }

    pub fn build(self) -> Result<EscrowTerms, LabError> {
        let maker = self
            .maker
            .ok_or_else(|| LabError::InvalidConfig("maker pubkey required".into()))?;
        let maker_token = self
            .maker_token
            .ok_or_else(|| LabError::InvalidConfig("maker token mint required".into()))?;
        let taker_token = self
            .taker_token
            .ok_or_else(|| LabError::InvalidConfig("taker token mint required".into()))?;
        let seed = self
            .seed
            .ok_or_else(|| LabError::InvalidConfig("escrow seed required".into()))?;
        let deposit_amount = self
            .deposit_amount
            .ok_or_else(|| LabError::InvalidConfig("deposit amount required".into()))?;
        let offer_amount = self
            .offer_amount
            .ok_or_else(|| LabError::InvalidConfig("offer amount required".into()))?;

        if deposit_amount == 0 || offer_amount == 0 {
            return Err(LabError::InvalidConfig("amounts must be > 0".into()));
        }
        if self.expiry >= MAX_EXPIRY_SLOTS {
            return Err(LabError::InvalidConfig(format!(
                "expiry must be < {MAX_EXPIRY_SLOTS} slots, got {}",
                self.expiry
            )));
        }

        let (auth, _) = pda::escrow_auth();
        let (escrow, _) = pda::escrow_state(&maker, seed);
        let (vault, _) = pda::escrow_vault(&escrow);

        Ok(EscrowTerms {
            maker,
            maker_token,
            taker_token,
            seed,
            deposit_amount,
            offer_amount,
            expiry: self.expiry,
            auth,
            escrow,
            vault,
        })
    }
}

impl Default for EscrowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Open the escrow: create the state account and move the deposit from the
/// maker's ATA into the program vault.
pub fn make(terms: &EscrowTerms) -> Result<Instruction, LabError> {
    Ok(Instruction {
        program_id: pda::ESCROW_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(terms.maker, true),
            AccountMeta::new(terms.maker_ata(), false),
            AccountMeta::new_readonly(terms.maker_token, false),
            AccountMeta::new_readonly(terms.taker_token, false),
            AccountMeta::new_readonly(terms.auth, false),
            AccountMeta::new(terms.escrow, false),
            AccountMeta::new(terms.vault, false),
            AccountMeta::new_readonly(spl_token::ID, false),
            AccountMeta::new_readonly(spl_associated_token_account::ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: anchor::instruction_data(
            "make",
            &MakeArgs {
                seed: terms.seed,
                deposit_amount: terms.deposit_amount,
                offer_amount: terms.offer_amount,
                expiry: terms.expiry,
            },
        )?,
    })
}

/// Accept the escrow as `taker`: pay the offer amount to the maker,
/// receive the vault contents, and close the vault.
pub fn take(terms: &EscrowTerms, taker: &Pubkey) -> Result<Instruction, LabError> {
    let taker_ata = get_associated_token_address(taker, &terms.taker_token);
    let taker_receive_ata = get_associated_token_address(taker, &terms.maker_token);
    let maker_receive_ata = get_associated_token_address(&terms.maker, &terms.taker_token);
    Ok(Instruction {
        program_id: pda::ESCROW_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*taker, true),
            AccountMeta::new(terms.maker, false),
            AccountMeta::new_readonly(terms.maker_token, false),
            AccountMeta::new_readonly(terms.taker_token, false),
            AccountMeta::new(taker_ata, false),
            AccountMeta::new(taker_receive_ata, false),
            AccountMeta::new(maker_receive_ata, false),
            AccountMeta::new(terms.escrow, false),
            AccountMeta::new_readonly(terms.auth, false),
            AccountMeta::new(terms.vault, false),
            AccountMeta::new_readonly(spl_token::ID, false),
            AccountMeta::new_readonly(spl_associated_token_account::ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: anchor::instruction_data("take", &())?,
    })
}

/// Cancel the escrow: return the vault contents to the maker's ATA and
/// close the vault.
pub fn refund(terms: &EscrowTerms) -> Result<Instruction, LabError> {
    Ok(Instruction {
        program_id: pda::ESCROW_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(terms.maker, true),
            AccountMeta::new_readonly(terms.maker_token, false),
            AccountMeta::new(terms.maker_ata(), false),
            AccountMeta::new(terms.escrow, false),
            AccountMeta::new_readonly(terms.auth, false),
            AccountMeta::new(terms.vault, false),
            AccountMeta::new_readonly(spl_token::ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: anchor::instruction_data("refund", &())?,
    })
}

/// Change the asked token and amount of an open escrow.
pub fn update(
    terms: &EscrowTerms,
    new_taker_token: &Pubkey,
    offer_amount: u64,
    expiry: u64,
) -> Result<Instruction, LabError> {
    if offer_amount == 0 {
        return Err(LabError::InvalidConfig("amounts must be > 0".into()));
    }
    if expiry >= MAX_EXPIRY_SLOTS {
        return Err(LabError::InvalidConfig(format!(
            "expiry must be < {MAX_EXPIRY_SLOTS} slots, got {expiry}"
        )));
    }
    Ok(Instruction {
        program_id: pda::ESCROW_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(terms.maker, true),
            AccountMeta::new_readonly(*new_taker_token, false),
            AccountMeta::new(terms.escrow, false),
        ],
        data: anchor::instruction_data(
            "update",
            &UpdateArgs {
                offer_amount,
                expiry,
            },
        )?,
    })
}
