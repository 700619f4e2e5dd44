use crate::error::Error;
use crate::types::Lockup;
use soroban_sdk::Vec;

/// Sum of the lockups still in force at `now`. A lockup is released once
/// `now` reaches its `release_at`.
pub fn locked_amount(lockups: &Vec<Lockup>, now: u64) -> i128 {
    lockups
        .iter()
        .filter(|lockup| lockup.release_at > now)
        .fold(0i128, |acc, lockup| acc.saturating_add(lockup.amount))
}

pub fn vested_amount(balance: i128, lockups: &Vec<Lockup>, now: u64) -> i128 {
    balance.saturating_sub(locked_amount(lockups, now)).max(0)
}

pub fn validate_lockups(amount: i128, lockups: &Vec<Lockup>) -> Result<(), Error> {
    let mut total: i128 = 0;
    for lockup in lockups.iter() {
        if lockup.amount <= 0 {
            return Err(Error::InvalidAllocation);
        }
        total = total.checked_add(lockup.amount).ok_or(Error::Overflow)?;
    }
    if total > amount {
        return Err(Error::InvalidAllocation);
    }
    Ok(())
}
