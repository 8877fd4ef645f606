use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// PRICE FEED EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a development price feed is created
#[event]
pub struct PriceFeedInitialized {
    pub price_feed: Pubkey,
    pub authority: Pubkey,
    pub decimals: u8,
    pub answer: i64,
    pub timestamp: i64,
}

/// Emitted when the feed authority posts a new answer
#[event]
pub struct PriceFeedUpdated {
    pub price_feed: Pubkey,
    pub round_id: u64,
    pub answer: i64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// LEDGER EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted once when the ledger is created
#[event]
pub struct LedgerInitialized {
    pub fund_me: Pubkey,
    pub owner: Pubkey,
    pub price_feed: Pubkey,
    pub minimum_usd: u128,
    pub timestamp: i64,
}

/// Emitted for every accepted contribution
#[event]
pub struct ContributionReceived {
    pub funder: Pubkey,
    pub amount: u64,
    pub usd_value: u128,
    pub funder_total: u64,
    pub total_funded: u64,
    pub new_funder: bool,
    pub timestamp: i64,
}

/// Emitted when the owner drains the vault
#[event]
pub struct FundsWithdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    pub funders_cleared: u32,
    pub timestamp: i64,
}
