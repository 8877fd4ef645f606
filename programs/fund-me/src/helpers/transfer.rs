use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use crate::errors::ErrorCode;

/// Lamports still needed for the vault to hold `reserve`
pub fn reserve_shortfall(vault_lamports: u64, reserve: u64) -> u64 {
    reserve.saturating_sub(vault_lamports)
}

/// Lamports a withdrawal may take while the vault keeps `reserve`
pub fn releasable_balance(vault_lamports: u64, reserve: u64) -> u64 {
    vault_lamports.saturating_sub(reserve)
}

/// Move `amount` lamports from the funder into the vault PDA
///
/// The vault balance is checked afterwards so the ledger never records more
/// than it actually received.
#[inline(never)]
pub fn deposit_to_vault<'info>(
    funder: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let vault_balance_before = vault.lamports();

    system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            Transfer {
                from: funder.clone(),
                to: vault.clone(),
            },
        ),
        amount,
    )?;

    let expected = vault_balance_before
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    require!(vault.lamports() == expected, ErrorCode::TransferFailed);

    Ok(())
}

/// Move `amount` lamports out of the vault PDA (signed with its seeds)
#[inline(never)]
pub fn release_from_vault<'info>(
    vault: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
    seeds: &[&[u8]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let recipient_balance_before = recipient.lamports();

    system_program::transfer(
        CpiContext::new_with_signer(
            system_program.clone(),
            Transfer {
                from: vault.clone(),
                to: recipient.clone(),
            },
            &[seeds],
        ),
        amount,
    )?;

    let expected = recipient_balance_before
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    require!(recipient.lamports() >= expected, ErrorCode::TransferFailed);

    Ok(())
}
