use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::helpers::oracle::{PriceOracle, PriceSource};

/// One funder's cumulative contribution for the current round
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunderEntry {
    pub funder: Pubkey,
    pub amount: u64,
}

impl FunderEntry {
    /// funder (32) + amount (8)
    pub const LEN: usize = 32 + 8;
}

/// Crowdfunding ledger
///
/// Accepts contributions worth at least `minimum_usd` and lets `owner` drain
/// the vault, which resets every contribution and the funder list.
///
/// A "round" runs from initialization (or the last withdrawal) to the next
/// withdrawal. `funders` lists each contributor once per round in the order
/// they first funded. `contributions` is sorted by funder key so it serves
/// as both the amount mapping and the membership set.
///
/// PDA Seeds: ["fund_me", owner]
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct FundMe {
    /// Only account allowed to withdraw (immutable)
    pub owner: Pubkey,

    /// Bound price source (immutable)
    pub price_feed: Pubkey,

    /// Contribution floor, USD fixed-point with USD_DECIMALS (immutable)
    pub minimum_usd: u128,

    /// Sum of all contributions this round
    pub total_funded: u64,

    /// PDA bump for this account
    pub bump: u8,

    /// PDA bump for the vault
    pub vault_bump: u8,

    /// Funders in first-contribution order
    pub funders: Vec<Pubkey>,

    /// Cumulative amounts, sorted by funder
    pub contributions: Vec<FunderEntry>,
}

/// Receipt for an accepted contribution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contribution {
    pub funder: Pubkey,
    pub amount: u64,
    pub usd_value: u128,
    /// Funder's cumulative amount after this contribution
    pub funder_total: u64,
    /// True when the funder was appended to `funders`
    pub new_funder: bool,
}

/// Receipt for a completed withdrawal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Withdrawal {
    pub owner: Pubkey,
    /// Lamports delivered to the owner
    pub amount: u64,
    pub funders_cleared: u32,
}

/// Bookkeeping taken out of the ledger while a withdrawal is in flight
struct DrainedRound {
    total_funded: u64,
    funders: Vec<Pubkey>,
    contributions: Vec<FunderEntry>,
}

impl FundMe {
    /// Account size calculation:
    /// - owner, price_feed: 32 * 2 = 64 bytes
    /// - minimum_usd: 16 bytes (u128)
    /// - total_funded: 8 bytes (u64)
    /// - bump, vault_bump: 2 bytes
    /// - funders: 4 + 32 * MAX_FUNDERS bytes
    /// - contributions: 4 + 40 * MAX_FUNDERS bytes
    /// Total: 90 + 8 + 72 * 128 = 9314 bytes
    pub const LEN: usize = 32 * 2
        + 16
        + 8
        + 2
        + (4 + 32 * MAX_FUNDERS)
        + (4 + FunderEntry::LEN * MAX_FUNDERS);

    pub fn new(
        owner: Pubkey,
        price_feed: Pubkey,
        minimum_usd: u128,
        bump: u8,
        vault_bump: u8,
    ) -> Self {
        Self {
            owner,
            price_feed,
            minimum_usd,
            total_funded: 0,
            bump,
            vault_bump,
            funders: Vec::new(),
            contributions: Vec::new(),
        }
    }

    /// Accept `amount` from `funder` if it is worth at least `minimum_usd`
    ///
    /// All checks run before the first write, so a failed call leaves the
    /// ledger exactly as it was.
    pub fn fund<S: PriceSource>(
        &mut self,
        funder: Pubkey,
        amount: u64,
        oracle: &PriceOracle<S>,
    ) -> Result<Contribution> {
        let usd_value = oracle.convert_to_usd(amount)?;
        require!(
            usd_value >= self.minimum_usd,
            ErrorCode::InsufficientContribution
        );

        let slot = self
            .contributions
            .binary_search_by_key(&funder, |entry| entry.funder);
        let new_funder = slot.is_err();
        if new_funder {
            require!(self.funders.len() < MAX_FUNDERS, ErrorCode::LedgerFull);
        }

        let total_funded = self
            .total_funded
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        let funder_total = match slot {
            Ok(index) => {
                let entry = &mut self.contributions[index];
                entry.amount = entry
                    .amount
                    .checked_add(amount)
                    .ok_or(ErrorCode::MathOverflow)?;
                entry.amount
            }
            Err(index) => {
                self.contributions.insert(index, FunderEntry { funder, amount });
                self.funders.push(funder);
                amount
            }
        };
        self.total_funded = total_funded;

        Ok(Contribution {
            funder,
            amount,
            usd_value,
            funder_total,
            new_funder,
        })
    }

    /// Drain the round and hand the balance to the owner
    ///
    /// The bookkeeping is cleared before `deliver` runs. If `deliver` fails
    /// the cleared round is put back untouched and the call fails with
    /// `TransferFailed`. `deliver` receives the owner and returns the
    /// lamports it moved.
    pub fn withdraw<F>(&mut self, caller: &Pubkey, deliver: F) -> Result<Withdrawal>
    where
        F: FnOnce(&Pubkey) -> Result<u64>,
    {
        require_keys_eq!(*caller, self.owner, ErrorCode::NotOwner);

        let owner = self.owner;
        let drained = self.drain_round();
        let funders_cleared = drained.funders.len() as u32;

        match deliver(&owner) {
            Ok(amount) => Ok(Withdrawal {
                owner,
                amount,
                funders_cleared,
            }),
            Err(err) => {
                msg!("Withdrawal delivery failed, restoring round: {}", err);
                self.restore_round(drained);
                err!(ErrorCode::TransferFailed)
            }
        }
    }

    fn drain_round(&mut self) -> DrainedRound {
        DrainedRound {
            total_funded: std::mem::take(&mut self.total_funded),
            funders: std::mem::take(&mut self.funders),
            contributions: std::mem::take(&mut self.contributions),
        }
    }

    fn restore_round(&mut self, drained: DrainedRound) {
        self.total_funded = drained.total_funded;
        self.funders = drained.funders;
        self.contributions = drained.contributions;
    }

    /// Cumulative contribution of `funder` this round (0 if none)
    pub fn contribution_of(&self, funder: &Pubkey) -> u64 {
        self.contributions
            .binary_search_by_key(funder, |entry| entry.funder)
            .map(|index| self.contributions[index].amount)
            .unwrap_or(0)
    }

    pub fn funder_at(&self, index: u32) -> Result<Pubkey> {
        self.funders
            .get(index as usize)
            .copied()
            .ok_or_else(|| error!(ErrorCode::IndexOutOfRange))
    }

    pub fn funder_count(&self) -> u32 {
        self.funders.len() as u32
    }

    /// Lamports the ledger accounts for in the vault
    pub fn held_balance(&self) -> u64 {
        self.total_funded
    }
}
