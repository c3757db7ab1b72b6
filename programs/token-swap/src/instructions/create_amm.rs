// Create AMM Instruction
//
// Registers a market (fee rate + admin) under an opaque id.
// The entry is a PDA of the id, so a duplicate id fails at account creation.

use anchor_lang::prelude::*;

use crate::{constants::*, events::AmmCreated, state::*};

#[derive(Accounts)]
#[instruction(id: Pubkey)]
pub struct CreateAmm<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: stored as the admin, never read
    pub admin: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + Amm::INIT_SPACE,
        seeds = [AMM_SEED, id.as_ref()],
        bump,
    )]
    pub amm: Account<'info, Amm>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateAmm<'info> {
    pub fn create_amm(&mut self, id: Pubkey, fee: u16, bumps: &CreateAmmBumps) -> Result<()> {
        Amm::validate_fee(fee)?;

        self.amm.set_inner(Amm {
            id,
            admin: self.admin.key(),
            fee,
            bump: bumps.amm,
        });

        emit!(AmmCreated {
            amm: self.amm.key(),
            id,
            admin: self.admin.key(),
            fee,
        });

        msg!("AMM created: {} (fee {} bp)", id, fee);

        Ok(())
    }
}
