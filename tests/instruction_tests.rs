//! Known-answer tests for the wire encoding the deployed programs expect:
//! method discriminators, argument layout, and account ordering.

use solana_cluster_lab::sdk::{
    anchor, escrow, metadata, pda, token, tx, vault, EscrowBuilder, TokenMetadata, VaultAccounts,
};
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::system_program;
use spl_associated_token_account::get_associated_token_address;

fn dummy_pk() -> Pubkey {
    Keypair::new().pubkey()
}

// ---------------------------------------------------------------------------
// Anchor discriminators
// ---------------------------------------------------------------------------

mod discriminators {
    use super::*;

    // sha256("global:<method>")[..8], fixed by the deployed programs.
    #[test]
    fn known_answers() {
        assert_eq!(
            anchor::discriminator("initialize"),
            [0xaf, 0xaf, 0x6d, 0x1f, 0x0d, 0x98, 0x9b, 0xed]
        );
        assert_eq!(
            anchor::discriminator("deposit"),
            [0xf2, 0x23, 0xc6, 0x89, 0x52, 0xe1, 0xf2, 0xb6]
        );
        assert_eq!(
            anchor::discriminator("withdraw"),
            [0xb7, 0x12, 0x46, 0x9c, 0x94, 0x6d, 0xa1, 0x22]
        );
        assert_eq!(
            anchor::discriminator("deposit_spl"),
            [0xe0, 0x00, 0xc6, 0xaf, 0xc6, 0x2f, 0x69, 0xcc]
        );
        assert_eq!(
            anchor::discriminator("withdraw_spl"),
            [0xb5, 0x9a, 0x5e, 0x56, 0x3e, 0x73, 0x06, 0xba]
        );
        assert_eq!(
            anchor::discriminator("make"),
            [0x8a, 0xe3, 0xe8, 0x4d, 0xdf, 0xa6, 0x60, 0xc5]
        );
        assert_eq!(
            anchor::discriminator("take"),
            [0x95, 0xe2, 0x34, 0x68, 0x06, 0x8e, 0xe6, 0x27]
        );
        assert_eq!(
            anchor::discriminator("refund"),
            [0x02, 0x60, 0xb7, 0xfb, 0x3f, 0xd0, 0x2e, 0x2e]
        );
        assert_eq!(
            anchor::discriminator("update"),
            [0xdb, 0xc8, 0x58, 0xb0, 0x9e, 0x3f, 0xfd, 0x7f]
        );
    }

    #[test]
    fn unit_args_encode_as_bare_discriminator() {
        let data = anchor::instruction_data("refund", &()).unwrap();
        assert_eq!(data, anchor::discriminator("refund").to_vec());
    }
}

// ---------------------------------------------------------------------------
// Vault program encoding
// ---------------------------------------------------------------------------

mod vault_encoding {
    use super::*;

    #[test]
    fn initialize_accounts_and_data() {
        let owner = dummy_pk();
        let state = dummy_pk();
        let accounts = VaultAccounts::derive(&state);
        let ix = vault::initialize(&owner, &state).unwrap();

        assert_eq!(ix.program_id, pda::VAULT_PROGRAM_ID);
        assert_eq!(ix.data, anchor::discriminator("initialize").to_vec());

        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        assert_eq!(
            keys,
            vec![owner, state, accounts.auth, accounts.vault, system_program::ID]
        );
        // owner and the fresh state account both sign
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert!(ix.accounts[1].is_signer && ix.accounts[1].is_writable);
        assert!(!ix.accounts[2].is_signer && !ix.accounts[2].is_writable);
        assert!(ix.accounts[3].is_writable);
    }

    #[test]
    fn deposit_amount_is_borsh_u64() {
        let ix = vault::deposit(&dummy_pk(), &dummy_pk(), 123_456_789).unwrap();
        assert_eq!(ix.data.len(), 16);
        assert_eq!(ix.data[..8], anchor::discriminator("deposit"));
        assert_eq!(ix.data[8..], 123_456_789u64.to_le_bytes());
    }

    #[test]
    fn withdraw_shares_deposit_account_list() {
        let owner = dummy_pk();
        let state = dummy_pk();
        let dep = vault::deposit(&owner, &state, 1).unwrap();
        let wit = vault::withdraw(&owner, &state, 1).unwrap();
        let keys = |ix: &solana_sdk::instruction::Instruction| {
            ix.accounts.iter().map(|m| m.pubkey).collect::<Vec<_>>()
        };
        assert_eq!(keys(&dep), keys(&wit));
        assert_ne!(dep.data[..8], wit.data[..8]);
    }

    #[test]
    fn deposit_spl_account_order() {
        let owner = dummy_pk();
        let state = dummy_pk();
        let mint = dummy_pk();
        let accounts = VaultAccounts::derive(&state);
        let ix = vault::deposit_spl(&owner, &state, &mint, 5).unwrap();

        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        assert_eq!(
            keys,
            vec![
                owner,
                state,
                accounts.auth,
                system_program::ID,
                get_associated_token_address(&owner, &mint),
                accounts.ata(&mint),
                spl_token::ID,
                mint,
                spl_associated_token_account::ID,
            ]
        );
        // state is writable in the SPL variants, read-only in the native ones
        assert!(ix.accounts[1].is_writable);
        assert!(ix.accounts[4].is_writable && ix.accounts[5].is_writable);
        assert!(!ix.accounts[7].is_writable);
    }
}

// ---------------------------------------------------------------------------
// Escrow program encoding
// ---------------------------------------------------------------------------

mod escrow_encoding {
    use super::*;
    use solana_cluster_lab::sdk::EscrowTerms;

    fn terms() -> EscrowTerms {
        EscrowBuilder::new()
            .maker(dummy_pk())
            .maker_token(dummy_pk())
            .taker_token(dummy_pk())
            .seed(0x1122_3344_5566_7788)
            .deposit_amount(600_000_000)
            .offer_amount(700_000_000)
            .expiry(100)
            .build()
            .unwrap()
    }

    #[test]
    fn make_args_layout() {
        let t = terms();
        let ix = escrow::make(&t).unwrap();
        assert_eq!(ix.program_id, pda::ESCROW_PROGRAM_ID);
        assert_eq!(ix.data.len(), 8 + 32);
        assert_eq!(ix.data[..8], anchor::discriminator("make"));
        assert_eq!(ix.data[8..16], t.seed.to_le_bytes());
        assert_eq!(ix.data[16..24], t.deposit_amount.to_le_bytes());
        assert_eq!(ix.data[24..32], t.offer_amount.to_le_bytes());
        assert_eq!(ix.data[32..40], t.expiry.to_le_bytes());
    }

    #[test]
    fn make_account_order() {
        let t = terms();
        let ix = escrow::make(&t).unwrap();
        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        assert_eq!(
            keys,
            vec![
                t.maker,
                t.maker_ata(),
                t.maker_token,
                t.taker_token,
                t.auth,
                t.escrow,
                t.vault,
                spl_token::ID,
                spl_associated_token_account::ID,
                system_program::ID,
            ]
        );
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert!(ix.accounts[1].is_writable);
        assert!(ix.accounts[5].is_writable && ix.accounts[6].is_writable);
    }

    #[test]
    fn take_routes_token_accounts_both_ways() {
        let t = terms();
        let taker = dummy_pk();
        let ix = escrow::take(&t, &taker).unwrap();
        assert_eq!(ix.data, anchor::discriminator("take").to_vec());

        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        assert_eq!(keys[0], taker);
        assert_eq!(keys[1], t.maker);
        assert_eq!(keys[4], get_associated_token_address(&taker, &t.taker_token));
        assert_eq!(keys[5], get_associated_token_address(&taker, &t.maker_token));
        assert_eq!(
            keys[6],
            get_associated_token_address(&t.maker, &t.taker_token)
        );
        assert!(ix.accounts[0].is_signer);
    }

    #[test]
    fn refund_pays_back_the_maker_ata() {
        let t = terms();
        let ix = escrow::refund(&t).unwrap();
        assert_eq!(ix.data, anchor::discriminator("refund").to_vec());
        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        assert_eq!(keys[0], t.maker);
        assert_eq!(keys[2], t.maker_ata());
        assert!(ix.accounts[0].is_signer);
        assert!(ix.accounts[2].is_writable);
    }
}

// ---------------------------------------------------------------------------
// Token and metadata recipes
// ---------------------------------------------------------------------------

mod recipes {
    use super::*;

    #[test]
    fn mint_to_ensures_ata_first() {
        let (payer, mint, owner) = (dummy_pk(), dummy_pk(), dummy_pk());
        let ixs = token::mint_to(&payer, &mint, &owner, 10).unwrap();
        assert_eq!(ixs.len(), 2);
        assert_eq!(ixs[0].program_id, spl_associated_token_account::ID);
        assert_eq!(ixs[1].program_id, spl_token::ID);
    }

    #[test]
    fn transfer_ensures_both_atas() {
        let (owner, mint, to) = (dummy_pk(), dummy_pk(), dummy_pk());
        let ixs = token::transfer(&owner, &mint, &to, 10, 6).unwrap();
        assert_eq!(ixs.len(), 3);
        assert_eq!(ixs[0].program_id, spl_associated_token_account::ID);
        assert_eq!(ixs[1].program_id, spl_associated_token_account::ID);
        assert_eq!(ixs[2].program_id, spl_token::ID);
    }

    #[test]
    fn create_nft_instruction_sequence() {
        let payer = dummy_pk();
        let mint = dummy_pk();
        let meta = TokenMetadata {
            name: "Test".into(),
            symbol: "TST".into(),
            uri: "https://example.com/meta.json".into(),
            seller_fee_basis_points: 500,
        };
        let ixs = metadata::create_nft(&payer, &mint, 1_000_000, &meta).unwrap();
        let programs: Vec<Pubkey> = ixs.iter().map(|ix| ix.program_id).collect();
        assert_eq!(
            programs,
            vec![
                system_program::ID,
                spl_token::ID,
                spl_associated_token_account::ID,
                spl_token::ID,
                mpl_token_metadata::ID,
                mpl_token_metadata::ID,
            ]
        );
    }

    #[test]
    fn create_metadata_targets_the_metadata_pda() {
        let mint = dummy_pk();
        let authority = dummy_pk();
        let meta = TokenMetadata {
            name: "Test".into(),
            symbol: "TST".into(),
            uri: String::new(),
            seller_fee_basis_points: 300,
        };
        let ix = metadata::create_metadata(&mint, &authority, &meta, None);
        assert_eq!(ix.program_id, mpl_token_metadata::ID);
        assert_eq!(ix.accounts[0].pubkey, pda::metadata(&mint).0);
    }
}

// ---------------------------------------------------------------------------
// Offline transaction assembly
// ---------------------------------------------------------------------------

mod assembly {
    use super::*;

    #[test]
    fn payer_is_first_account_and_tx_verifies() {
        let payer = Keypair::new();
        let ix = vault::deposit(&payer.pubkey(), &dummy_pk(), 42).unwrap();
        let tx = tx::build_signed_tx(&[ix], &payer.pubkey(), &[&payer], Hash::default());
        assert_eq!(tx.message.account_keys[0], payer.pubkey());
        assert_eq!(tx.message.header.num_required_signatures, 1);
        assert!(tx.verify().is_ok());
    }

    #[test]
    fn vault_initialize_needs_two_signers() {
        let payer = Keypair::new();
        let state = Keypair::new();
        let ix = vault::initialize(&payer.pubkey(), &state.pubkey()).unwrap();
        let tx = tx::build_signed_tx(
            &[ix],
            &payer.pubkey(),
            &[&payer, &state],
            Hash::default(),
        );
        assert_eq!(tx.message.header.num_required_signatures, 2);
        assert!(tx.verify().is_ok());
    }
}
