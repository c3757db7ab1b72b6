// Test utilities for the token swap program

use borsh::BorshSerialize;
use litesvm::LiteSVM;
use litesvm_token::{get_spl_account, CreateAssociatedTokenAccount, CreateMint, MintTo};
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;

// Program ID matching declare_id! (token_swap)
pub const SWAP_PROGRAM_ID: Pubkey = Pubkey::new_from_array(token_swap::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

// PDA Seeds (must match constants.rs)
pub const AMM_SEED: &[u8] = b"amm";
pub const AUTHORITY_SEED: &[u8] = b"authority";
pub const LIQUIDITY_SEED: &[u8] = b"liquidity";
pub const LOCKED_LIQUIDITY_SEED: &[u8] = b"locked_liquidity";

pub const DECIMALS: u8 = 6;
pub const DEFAULT_SUPPLY: u64 = 100_000_000_000;

// Build Anchor instruction discriminator
// Formula: first 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash_result = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash_result.to_bytes()[..8]);
    discriminator
}

fn instruction_data<T: BorshSerialize>(method: &str, args: &T) -> Vec<u8> {
    let mut data = anchor_discriminator(method).to_vec();
    data.extend(borsh::to_vec(args).expect("args serialize"));
    data
}

// Setup LiteSVM with the swap program
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../target/deploy/token_swap.so");
    let _ = svm.add_program(SWAP_PROGRAM_ID, program_bytes);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Create two mints and return them in canonical order (mint_a < mint_b)
pub fn create_ordered_mints(svm: &mut LiteSVM, authority: &Keypair) -> (Pubkey, Pubkey) {
    let first = CreateMint::new(svm, authority)
        .authority(&authority.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Failed to create mint");

    let second = CreateMint::new(svm, authority)
        .authority(&authority.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Failed to create mint");

    if first < second {
        (first, second)
    } else {
        (second, first)
    }
}

// Create depositor ATAs for both mints and fund them with DEFAULT_SUPPLY
pub fn fund_depositor(
    svm: &mut LiteSVM,
    mint_authority: &Keypair,
    depositor: &Keypair,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
) {
    for mint in [mint_a, mint_b] {
        let ata = CreateAssociatedTokenAccount::new(svm, depositor, mint)
            .owner(&depositor.pubkey())
            .send()
            .expect("Failed to create ATA");

        MintTo::new(svm, mint_authority, mint, &ata, DEFAULT_SUPPLY)
            .owner(mint_authority)
            .send()
            .expect("Failed to mint");
    }
}

pub fn send(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
) -> litesvm::types::TransactionResult {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[payer],
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
}

pub fn token_balance(svm: &LiteSVM, account: &Pubkey) -> u64 {
    let account: spl_token::state::Account =
        get_spl_account(svm, account).expect("token account should exist");
    account.amount
}

pub fn mint_supply(svm: &LiteSVM, mint: &Pubkey) -> u64 {
    let mint: spl_token::state::Mint = get_spl_account(svm, mint).expect("mint should exist");
    mint.supply
}

// Derived addresses of one pool
pub struct PoolKeys {
    pub amm: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub pool: Pubkey,
    pub pool_authority: Pubkey,
    pub mint_liquidity: Pubkey,
    pub pool_account_a: Pubkey,
    pub pool_account_b: Pubkey,
    pub locked_liquidity: Pubkey,
}

pub fn derive_amm_pda(id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[AMM_SEED, id.as_ref()], &SWAP_PROGRAM_ID).0
}

pub fn derive_pool_keys(amm: &Pubkey, mint_a: &Pubkey, mint_b: &Pubkey) -> PoolKeys {
    let pair = [amm.as_ref(), mint_a.as_ref(), mint_b.as_ref()];

    let (pool, _) = Pubkey::find_program_address(&pair, &SWAP_PROGRAM_ID);
    let (pool_authority, _) =
        Pubkey::find_program_address(&[pair[0], pair[1], pair[2], AUTHORITY_SEED], &SWAP_PROGRAM_ID);
    let (mint_liquidity, _) =
        Pubkey::find_program_address(&[pair[0], pair[1], pair[2], LIQUIDITY_SEED], &SWAP_PROGRAM_ID);
    let (locked_liquidity, _) = Pubkey::find_program_address(
        &[pool.as_ref(), LOCKED_LIQUIDITY_SEED],
        &SWAP_PROGRAM_ID,
    );

    PoolKeys {
        amm: *amm,
        mint_a: *mint_a,
        mint_b: *mint_b,
        pool,
        pool_authority,
        mint_liquidity,
        pool_account_a: get_associated_token_address(&pool_authority, mint_a),
        pool_account_b: get_associated_token_address(&pool_authority, mint_b),
        locked_liquidity,
    }
}

// Build create_amm instruction
pub fn build_create_amm_ix(payer: &Pubkey, admin: &Pubkey, id: &Pubkey, fee: u16) -> Instruction {
    Instruction {
        program_id: SWAP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*admin, false),
            AccountMeta::new(derive_amm_pda(id), false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: instruction_data("create_amm", &(id.to_bytes(), fee)),
    }
}

// Build create_pool instruction
pub fn build_create_pool_ix(admin: &Pubkey, keys: &PoolKeys) -> Instruction {
    Instruction {
        program_id: SWAP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new_readonly(keys.amm, false),
            AccountMeta::new_readonly(keys.mint_a, false),
            AccountMeta::new_readonly(keys.mint_b, false),
            AccountMeta::new(keys.pool, false),
            AccountMeta::new_readonly(keys.pool_authority, false),
            AccountMeta::new(keys.mint_liquidity, false),
            AccountMeta::new(keys.pool_account_a, false),
            AccountMeta::new(keys.pool_account_b, false),
            AccountMeta::new(keys.locked_liquidity, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("create_pool").to_vec(),
    }
}

fn deposit_accounts(depositor: &Pubkey, keys: &PoolKeys) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new(*depositor, true),
        AccountMeta::new_readonly(keys.pool, false),
        AccountMeta::new_readonly(keys.pool_authority, false),
        AccountMeta::new(keys.mint_liquidity, false),
        AccountMeta::new_readonly(keys.mint_a, false),
        AccountMeta::new_readonly(keys.mint_b, false),
        AccountMeta::new(keys.pool_account_a, false),
        AccountMeta::new(keys.pool_account_b, false),
        AccountMeta::new(keys.locked_liquidity, false),
        AccountMeta::new(get_associated_token_address(depositor, &keys.mint_liquidity), false),
        AccountMeta::new(get_associated_token_address(depositor, &keys.mint_a), false),
        AccountMeta::new(get_associated_token_address(depositor, &keys.mint_b), false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(system_program, false),
    ]
}

// Build deposit_liquidity instruction
pub fn build_deposit_liquidity_ix(
    depositor: &Pubkey,
    keys: &PoolKeys,
    amount_a: u64,
    amount_b: u64,
) -> Instruction {
    Instruction {
        program_id: SWAP_PROGRAM_ID,
        accounts: deposit_accounts(depositor, keys),
        data: instruction_data("deposit_liquidity", &(amount_a, amount_b)),
    }
}

// Build deposit_liquidity_with_limits instruction
pub fn build_deposit_liquidity_with_limits_ix(
    depositor: &Pubkey,
    keys: &PoolKeys,
    amount_a: u64,
    amount_b: u64,
    max_amount_a: u64,
    max_amount_b: u64,
) -> Instruction {
    Instruction {
        program_id: SWAP_PROGRAM_ID,
        accounts: deposit_accounts(depositor, keys),
        data: instruction_data(
            "deposit_liquidity_with_limits",
            &(amount_a, amount_b, max_amount_a, max_amount_b),
        ),
    }
}
