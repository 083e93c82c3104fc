//! Tests for the client SDK: validation, error paths, and builder correctness.

use solana_cluster_lab::sdk::{escrow, pda, vault, EscrowBuilder, VaultAccounts};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use spl_associated_token_account::get_associated_token_address;

fn dummy_pk() -> Pubkey {
    Keypair::new().pubkey()
}

// ---------------------------------------------------------------------------
// EscrowBuilder validation
// ---------------------------------------------------------------------------

mod builder_validation {
    use super::*;

    fn filled() -> EscrowBuilder {
        EscrowBuilder::new()
            .maker(dummy_pk())
            .maker_token(dummy_pk())
            .taker_token(dummy_pk())
            .seed(42)
            .deposit_amount(1_000_000)
            .offer_amount(2_000_000)
    }

    #[test]
    fn missing_maker_fails() {
        let result = EscrowBuilder::new()
            .maker_token(dummy_pk())
            .taker_token(dummy_pk())
            .seed(1)
            .deposit_amount(1)
            .offer_amount(1)
            .build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("maker"));
    }

    #[test]
    fn missing_maker_token_fails() {
        let result = EscrowBuilder::new()
            .maker(dummy_pk())
            .taker_token(dummy_pk())
            .seed(1)
            .deposit_amount(1)
            .offer_amount(1)
            .build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("maker token"));
    }

    #[test]
    fn missing_taker_token_fails() {
        let result = EscrowBuilder::new()
            .maker(dummy_pk())
            .maker_token(dummy_pk())
            .seed(1)
            .deposit_amount(1)
            .offer_amount(1)
            .build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("taker token"));
    }

    #[test]
    fn missing_seed_fails() {
        let result = EscrowBuilder::new()
            .maker(dummy_pk())
            .maker_token(dummy_pk())
            .taker_token(dummy_pk())
            .deposit_amount(1)
            .offer_amount(1)
            .build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("seed"));
    }

    #[test]
    fn missing_amounts_fail() {
        let result = EscrowBuilder::new()
            .maker(dummy_pk())
            .maker_token(dummy_pk())
            .taker_token(dummy_pk())
            .seed(1)
            .build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("deposit amount"));
    }

    #[test]
    fn zero_amount_fails() {
        let result = filled().deposit_amount(0).build();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("amounts must be > 0")
        );
    }

    #[test]
    fn expiry_at_bound_fails() {
        let result = filled().expiry(escrow::MAX_EXPIRY_SLOTS).build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("expiry"));
    }

    #[test]
    fn expiry_below_bound_ok() {
        let result = filled().expiry(escrow::MAX_EXPIRY_SLOTS - 1).build();
        assert!(result.is_ok());
    }

    #[test]
    fn no_expiry_is_default() {
        let terms = filled().build().unwrap();
        assert_eq!(terms.expiry, 0);
    }

    #[test]
    fn build_resolves_derived_addresses() {
        let terms = filled().build().unwrap();
        assert_eq!(terms.auth, pda::escrow_auth().0);
        assert_eq!(terms.escrow, pda::escrow_state(&terms.maker, terms.seed).0);
        assert_eq!(terms.vault, pda::escrow_vault(&terms.escrow).0);
    }

    #[test]
    fn different_seeds_resolve_different_escrows() {
        let maker = dummy_pk();
        let (mt, tt) = (dummy_pk(), dummy_pk());
        let build = |seed| {
            EscrowBuilder::new()
                .maker(maker)
                .maker_token(mt)
                .taker_token(tt)
                .seed(seed)
                .deposit_amount(1)
                .offer_amount(1)
                .build()
                .unwrap()
        };
        let a = build(1);
        let b = build(2);
        assert_ne!(a.escrow, b.escrow);
        assert_ne!(a.vault, b.vault);
        assert_eq!(a.auth, b.auth);
    }
}

// ---------------------------------------------------------------------------
// Vault account derivation and validation
// ---------------------------------------------------------------------------

mod vault_accounts {
    use super::*;

    #[test]
    fn derive_is_deterministic() {
        let state = dummy_pk();
        let a = VaultAccounts::derive(&state);
        let b = VaultAccounts::derive(&state);
        assert_eq!(a.auth, b.auth);
        assert_eq!(a.vault, b.vault);
    }

    #[test]
    fn distinct_states_derive_distinct_vaults() {
        let a = VaultAccounts::derive(&dummy_pk());
        let b = VaultAccounts::derive(&dummy_pk());
        assert_ne!(a.auth, b.auth);
        assert_ne!(a.vault, b.vault);
    }

    #[test]
    fn vault_ata_is_owned_by_auth() {
        let accounts = VaultAccounts::derive(&dummy_pk());
        let mint = dummy_pk();
        assert_eq!(
            accounts.ata(&mint),
            get_associated_token_address(&accounts.auth, &mint)
        );
    }

    #[test]
    fn zero_deposit_rejected() {
        let result = vault::deposit(&dummy_pk(), &dummy_pk(), 0);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("amount"));
    }

    #[test]
    fn zero_spl_deposit_rejected() {
        let result = vault::deposit_spl(&dummy_pk(), &dummy_pk(), &dummy_pk(), 0);
        assert!(result.is_err());
    }
}

// ---------------------------------------------------------------------------
// Escrow update validation
// ---------------------------------------------------------------------------

mod update_validation {
    use super::*;

    fn terms() -> solana_cluster_lab::sdk::EscrowTerms {
        EscrowBuilder::new()
            .maker(dummy_pk())
            .maker_token(dummy_pk())
            .taker_token(dummy_pk())
            .seed(7)
            .deposit_amount(10)
            .offer_amount(10)
            .build()
            .unwrap()
    }

    #[test]
    fn zero_offer_rejected() {
        let result = escrow::update(&terms(), &dummy_pk(), 0, 0);
        assert!(result.is_err());
    }

    #[test]
    fn expiry_bound_enforced() {
        let result = escrow::update(&terms(), &dummy_pk(), 1, escrow::MAX_EXPIRY_SLOTS);
        assert!(result.is_err());
        let result = escrow::update(&terms(), &dummy_pk(), 1, 99);
        assert!(result.is_ok());
    }
}
