use anchor_lang::prelude::*;

/// FundMe Error Codes
///
/// Every failure reverts the instruction; ledger methods also leave the
/// in-memory state untouched before returning one of these.
#[error_code]
pub enum ErrorCode {
    #[msg("Contribution is below the minimum USD value")]
    InsufficientContribution,

    #[msg("Only the owner can withdraw")]
    NotOwner,

    #[msg("Balance transfer failed")]
    TransferFailed,

    #[msg("Price feed unavailable (unset, stale or out of range)")]
    OracleUnavailable,

    #[msg("Funder index out of range")]
    IndexOutOfRange,

    #[msg("Ledger is full - no room for a new funder this round")]
    LedgerFull,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid parameter")]
    InvalidParameter,

    #[msg("Price feed does not match the ledger's bound feed")]
    PriceFeedMismatch,

    #[msg("Only the feed authority can post answers")]
    UnauthorizedFeedUpdate,
}
