// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

/// FundMe ledger PDA: ["fund_me", owner]
pub const FUND_ME_SEED: &[u8] = b"fund_me";

/// Vault PDA holding contributed lamports: ["vault", fund_me]
pub const VAULT_SEED: &[u8] = b"vault";

/// Development price feed PDA: ["price_feed", authority]
pub const PRICE_FEED_SEED: &[u8] = b"price_feed";

// ══════════════════════════════════════════════════════════════════════════════
// FIXED-POINT SCALES
// ══════════════════════════════════════════════════════════════════════════════

/// USD values are fixed-point with 18 decimals (50 USD = 50 * 10^18)
pub const USD_DECIMALS: u8 = 18;

/// 1 SOL = 10^9 lamports
pub const LAMPORT_DECIMALS: u8 = 9;

/// Highest decimal scale accepted from a price source
pub const MAX_PRICE_DECIMALS: u8 = 18;

/// One whole USD in fixed-point
pub const ONE_USD: u128 = 1_000_000_000_000_000_000;

/// Default contribution floor: 50 USD
pub const DEFAULT_MINIMUM_USD: u128 = 50 * ONE_USD;

// ══════════════════════════════════════════════════════════════════════════════
// LEDGER LIMITS
// ══════════════════════════════════════════════════════════════════════════════

/// Distinct contributors per round (bounded by the 10KB init limit)
pub const MAX_FUNDERS: usize = 128;

/// Data bytes of the vault PDA (plain system account)
pub const VAULT_SPACE: usize = 0;

/// Price answers older than this are treated as unavailable
pub const MAX_PRICE_AGE_SECS: i64 = 3600;

// ══════════════════════════════════════════════════════════════════════════════
// DEVELOPMENT FEED DEFAULTS
// ══════════════════════════════════════════════════════════════════════════════

/// Decimals used by the local aggregator mock
pub const MOCK_FEED_DECIMALS: u8 = 8;

/// 2000.00000000 USD per SOL
pub const MOCK_FEED_INITIAL_ANSWER: i64 = 200_000_000_000;
