//! Token-metadata recipes: metadata attachment for an existing mint, and
//! the full NFT mint sequence.

use mpl_token_metadata::instructions::{
    CreateMasterEditionV3Builder, CreateMetadataAccountV3Builder,
};
use mpl_token_metadata::types::{Creator, DataV2};
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;

use super::error::LabError;
use super::pda;
use super::token;

/// On-chain metadata for a fungible token or NFT.
#[derive(Debug, Clone)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
}

/// `CreateMetadataAccountV3` against the metadata PDA of `mint`.
/// `authority` is mint authority, payer, and update authority in one.
pub fn create_metadata(
    mint: &Pubkey,
    authority: &Pubkey,
    meta: &TokenMetadata,
    creators: Option<Vec<Creator>>,
) -> Instruction {
    let (metadata_pda, _) = pda::metadata(mint);
    CreateMetadataAccountV3Builder::new()
        .metadata(metadata_pda)
        .mint(*mint)
        .mint_authority(*authority)
        .payer(*authority)
        .update_authority(*authority, true)
        .data(DataV2 {
            name: meta.name.clone(),
            symbol: meta.symbol.clone(),
            uri: meta.uri.clone(),
            seller_fee_basis_points: meta.seller_fee_basis_points,
            creators,
            collection: None,
            uses: None,
        })
        .is_mutable(true)
        .instruction()
}

/// The full NFT mint recipe: mint account, 0-decimal mint, holder ATA,
/// supply of exactly one, metadata with the payer as sole creator, and a
/// max-supply-0 master edition. The mint keypair co-signs.
pub fn create_nft(
    payer: &Pubkey,
    mint: &Pubkey,
    rent: u64,
    meta: &TokenMetadata,
) -> Result<Vec<Instruction>, LabError> {
    let mut ixs = token::create_mint(payer, mint, payer, 0, rent)?;
    ixs.push(token::ensure_ata(payer, payer, mint));

    let ata = get_associated_token_address(payer, mint);
    ixs.push(spl_token::instruction::mint_to(
        &spl_token::ID,
        mint,
        &ata,
        payer,
        &[],
        1,
    )?);

    let creators = Some(vec![Creator {
        address: *payer,
        verified: true,
        share: 100,
    }]);
    ixs.push(create_metadata(mint, payer, meta, creators));

    let (edition, _) = pda::master_edition(mint);
    let (metadata_pda, _) = pda::metadata(mint);
    ixs.push(
        CreateMasterEditionV3Builder::new()
            .edition(edition)
            .mint(*mint)
            .update_authority(*payer)
            .mint_authority(*payer)
            .payer(*payer)
            .metadata(metadata_pda)
            .max_supply(0)
            .instruction(),
    );
    Ok(ixs)
}
