//! Fee arithmetic shared by admission and settlement.
//!
//! The fee is a flat per-settlement charge. It is checked against the
//! caller's `max_fee` at admission but taken at the rate in force when the
//! deposit settles, so a fee raised in between lowers the payout.

use crate::error::Error;

/// Admission rules for a new deposit of `amount` under the current `fee`.
pub fn check_admission(amount: i128, fee: i128, max_fee: i128) -> Result<(), Error> {
    if max_fee < fee {
        return Err(Error::FeeSlippage);
    }
    if amount <= 0 || amount < fee {
        return Err(Error::BelowMinimum);
    }
    Ok(())
}

/// Amount paid out when a deposit of `value` settles under `fee`.
pub fn net_payout(value: i128, fee: i128) -> Result<i128, Error> {
    match value.checked_sub(fee) {
        Some(net) if net > 0 => Ok(net),
        _ => Err(Error::BelowMinimum),
    }
}

/// Fee pot after crediting one settlement's `fee`.
pub fn credit(pot: i128, fee: i128) -> Result<i128, Error> {
    pot.checked_add(fee).ok_or(Error::Overflow)
}

pub fn check_fee(fee: i128) -> Result<(), Error> {
    if fee < 0 {
        return Err(Error::NegativeAmount);
    }
    Ok(())
}
