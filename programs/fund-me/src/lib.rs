use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod state;

mod invariants;

pub use constants::*;
pub use contexts::*;
pub use errors::ErrorCode;
pub use events::*;
pub use helpers::*;
pub use state::*;

declare_id!("74TNXj4ZNBJHDoVDkuC9WR1v4JAfoX8uP4ZFBrapDQp7");

#[program]
pub mod fund_me {
    use super::*;

    // Create a development price feed (aggregator mock)
    pub fn initialize_price_feed(
        ctx: Context<InitializePriceFeed>,
        decimals: u8,
        initial_answer: i64,
    ) -> Result<()> {
        require!(decimals <= MAX_PRICE_DECIMALS, ErrorCode::InvalidParameter);
        require!(initial_answer > 0, ErrorCode::InvalidParameter);

        let clock = Clock::get()?;
        let feed = &mut ctx.accounts.price_feed;
        feed.authority = ctx.accounts.authority.key();
        feed.decimals = decimals;
        feed.round_id = 0;
        feed.bump = ctx.bumps.price_feed;
        feed.post_answer(initial_answer, clock.unix_timestamp)?;

        emit!(PriceFeedInitialized {
            price_feed: feed.key(),
            authority: feed.authority,
            decimals,
            answer: initial_answer,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn update_price_feed(ctx: Context<UpdatePriceFeed>, answer: i64) -> Result<()> {
        let clock = Clock::get()?;
        let feed = &mut ctx.accounts.price_feed;
        let round_id = feed.post_answer(answer, clock.unix_timestamp)?;

        emit!(PriceFeedUpdated {
            price_feed: feed.key(),
            round_id,
            answer,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn initialize(ctx: Context<Initialize>, minimum_usd: u128) -> Result<()> {
        require!(minimum_usd > 0, ErrorCode::InvalidParameter);

        let clock = Clock::get()?;
        let owner = ctx.accounts.owner.key();
        let price_feed = ctx.accounts.price_feed.key();

        ctx.accounts.fund_me.set_inner(FundMe::new(
            owner,
            price_feed,
            minimum_usd,
            ctx.bumps.fund_me,
            ctx.bumps.vault,
        ));

        let reserve = Rent::get()?.minimum_balance(VAULT_SPACE);
        let shortfall = reserve_shortfall(ctx.accounts.vault.lamports(), reserve);
        if shortfall > 0 {
            deposit_to_vault(
                &ctx.accounts.owner.to_account_info(),
                &ctx.accounts.vault.to_account_info(),
                &ctx.accounts.system_program.to_account_info(),
                shortfall,
            )?;
        }

        let (whole, cents) = format_usd(minimum_usd);
        msg!("FundMe initialized: owner={}, minimum=${}.{:02}", owner, whole, cents);

        emit!(LedgerInitialized {
            fund_me: ctx.accounts.fund_me.key(),
            owner,
            price_feed,
            minimum_usd,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;
        let funder = ctx.accounts.funder.key();

        let oracle = PriceOracle::new(&*ctx.accounts.price_feed, clock.unix_timestamp);
        let contribution = ctx.accounts.fund_me.fund(funder, amount, &oracle)?;

        deposit_to_vault(
            &ctx.accounts.funder.to_account_info(),
            &ctx.accounts.vault.to_account_info(),
            &ctx.accounts.system_program.to_account_info(),
            amount,
        )?;

        let fund_me = &ctx.accounts.fund_me;
        let (whole, cents) = format_usd(contribution.usd_value);
        msg!(
            "Funded: funder={}, lamports={}, usd=${}.{:02}, funders={}",
            funder,
            amount,
            whole,
            cents,
            fund_me.funder_count()
        );

        emit!(ContributionReceived {
            funder,
            amount,
            usd_value: contribution.usd_value,
            funder_total: contribution.funder_total,
            total_funded: fund_me.total_funded,
            new_funder: contribution.new_funder,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        let clock = Clock::get()?;
        let caller = ctx.accounts.caller.key();
        let fund_me_key = ctx.accounts.fund_me.key();
        let vault_bump = [ctx.accounts.fund_me.vault_bump];
        let seeds: &[&[u8]] = &[VAULT_SEED, fund_me_key.as_ref(), &vault_bump];

        let vault = ctx.accounts.vault.to_account_info();
        let recipient = ctx.accounts.caller.to_account_info();
        let system_program = ctx.accounts.system_program.to_account_info();
        let reserve = Rent::get()?.minimum_balance(VAULT_SPACE);
        let held = releasable_balance(vault.lamports(), reserve);

        let withdrawal = ctx.accounts.fund_me.withdraw(&caller, |_owner| {
            release_from_vault(&vault, &recipient, &system_program, held, seeds)?;
            Ok(held)
        })?;

        msg!(
            "Withdrawn: owner={}, lamports={}, funders_cleared={}",
            withdrawal.owner,
            withdrawal.amount,
            withdrawal.funders_cleared
        );

        emit!(FundsWithdrawn {
            owner: withdrawal.owner,
            amount: withdrawal.amount,
            funders_cleared: withdrawal.funders_cleared,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════
    // READ ACCESSORS (values returned via return data)
    // ══════════════════════════════════════════════════════════════════════

    pub fn get_contribution(ctx: Context<ReadLedger>, funder: Pubkey) -> Result<u64> {
        Ok(ctx.accounts.fund_me.contribution_of(&funder))
    }

    pub fn get_funder(ctx: Context<ReadLedger>, index: u32) -> Result<Pubkey> {
        ctx.accounts.fund_me.funder_at(index)
    }

    pub fn get_funder_count(ctx: Context<ReadLedger>) -> Result<u32> {
        Ok(ctx.accounts.fund_me.funder_count())
    }

    pub fn get_owner(ctx: Context<ReadLedger>) -> Result<Pubkey> {
        Ok(ctx.accounts.fund_me.owner)
    }

    pub fn get_price_feed(ctx: Context<ReadLedger>) -> Result<Pubkey> {
        Ok(ctx.accounts.fund_me.price_feed)
    }

    pub fn get_usd_value(ctx: Context<ReadPrice>, amount: u64) -> Result<u128> {
        let clock = Clock::get()?;
        let oracle = PriceOracle::new(&*ctx.accounts.price_feed, clock.unix_timestamp);
        oracle.convert_to_usd(amount)
    }
}
