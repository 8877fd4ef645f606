use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::state::*;

// ACCOUNTS - Instruction account validation structs

#[derive(Accounts)]
pub struct InitializePriceFeed<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + PriceFeed::LEN,
        seeds = [PRICE_FEED_SEED, authority.key().as_ref()],
        bump
    )]
    pub price_feed: Account<'info, PriceFeed>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdatePriceFeed<'info> {
    #[account(
        mut,
        seeds = [PRICE_FEED_SEED, price_feed.authority.as_ref()],
        bump = price_feed.bump,
        has_one = authority @ ErrorCode::UnauthorizedFeedUpdate
    )]
    pub price_feed: Account<'info, PriceFeed>,
    pub authority: Signer<'info>,
}

/// Initialize - Create the ledger for `owner`, bound to `price_feed`
///
/// The owner tops the vault up to its rent-exempt reserve here, so later
/// deposits of any size land in an existing account.
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + FundMe::LEN,
        seeds = [FUND_ME_SEED, owner.key().as_ref()],
        bump
    )]
    pub fund_me: Account<'info, FundMe>,
    #[account(mut, seeds = [VAULT_SEED, fund_me.key().as_ref()], bump)]
    pub vault: SystemAccount<'info>,
    pub price_feed: Account<'info, PriceFeed>,
    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Fund<'info> {
    #[account(
        mut,
        seeds = [FUND_ME_SEED, fund_me.owner.as_ref()],
        bump = fund_me.bump,
        has_one = price_feed @ ErrorCode::PriceFeedMismatch
    )]
    pub fund_me: Account<'info, FundMe>,
    #[account(mut, seeds = [VAULT_SEED, fund_me.key().as_ref()], bump = fund_me.vault_bump)]
    pub vault: SystemAccount<'info>,
    pub price_feed: Account<'info, PriceFeed>,
    #[account(mut)]
    pub funder: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Withdraw - Owner drains the vault down to its rent-exempt reserve
///
/// The owner check is done by the ledger itself (not an account constraint)
/// so it runs before any bookkeeping is touched and reports `NotOwner`.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [FUND_ME_SEED, fund_me.owner.as_ref()],
        bump = fund_me.bump
    )]
    pub fund_me: Account<'info, FundMe>,
    #[account(mut, seeds = [VAULT_SEED, fund_me.key().as_ref()], bump = fund_me.vault_bump)]
    pub vault: SystemAccount<'info>,
    #[account(mut)]
    pub caller: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct ReadLedger<'info> {
    #[account(seeds = [FUND_ME_SEED, fund_me.owner.as_ref()], bump = fund_me.bump)]
    pub fund_me: Account<'info, FundMe>,
}

#[derive(Accounts)]
pub struct ReadPrice<'info> {
    #[account(
        seeds = [FUND_ME_SEED, fund_me.owner.as_ref()],
        bump = fund_me.bump,
        has_one = price_feed @ ErrorCode::PriceFeedMismatch
    )]
    pub fund_me: Account<'info, FundMe>,
    pub price_feed: Account<'info, PriceFeed>,
}
