use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::helpers::oracle::{PriceData, PriceSource};

/// Development price feed (aggregator mock for localnet/devnet)
///
/// Holds the latest USD answer for one SOL. Only `authority` may post new
/// answers. Production deployments bind the ledger to a feed maintained by an
/// off-chain updater using the same layout.
///
/// PDA Seeds: ["price_feed", authority]
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct PriceFeed {
    /// Signer allowed to post answers
    pub authority: Pubkey,

    /// USD per SOL scaled by 10^decimals
    pub answer: i64,

    /// Decimal scale of `answer`
    pub decimals: u8,

    /// Incremented on every posted answer
    pub round_id: u64,

    /// Unix timestamp of the latest answer
    pub updated_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl PriceFeed {
    /// Account size calculation:
    /// - authority: 32 bytes (Pubkey)
    /// - answer: 8 bytes (i64)
    /// - decimals: 1 byte (u8)
    /// - round_id: 8 bytes (u64)
    /// - updated_at: 8 bytes (i64)
    /// - bump: 1 byte
    /// Total: 58 bytes
    pub const LEN: usize = 32 + 8 + 1 + 8 + 8 + 1;

    /// Record a new answer, starting a new round
    pub fn post_answer(&mut self, answer: i64, now: i64) -> Result<u64> {
        require!(answer > 0, ErrorCode::InvalidParameter);
        self.answer = answer;
        self.updated_at = now;
        self.round_id = self.round_id.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        Ok(self.round_id)
    }

    fn is_stale(&self, now: i64) -> bool {
        if cfg!(feature = "testing") {
            return false;
        }
        now.saturating_sub(self.updated_at) > MAX_PRICE_AGE_SECS
    }
}

impl PriceSource for PriceFeed {
    fn latest_price(&self, now: i64) -> Result<PriceData> {
        require!(self.answer > 0, ErrorCode::OracleUnavailable);
        require!(self.updated_at > 0, ErrorCode::OracleUnavailable);
        require!(self.updated_at <= now, ErrorCode::OracleUnavailable);
        require!(self.decimals <= MAX_PRICE_DECIMALS, ErrorCode::OracleUnavailable);

        if self.is_stale(now) {
            msg!(
                "Price feed stale: updated_at={}, now={}, max_age={}",
                self.updated_at,
                now,
                MAX_PRICE_AGE_SECS
            );
            return err!(ErrorCode::OracleUnavailable);
        }

        Ok(PriceData {
            answer: self.answer as u64,
            decimals: self.decimals,
        })
    }
}
