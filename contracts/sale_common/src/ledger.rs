use soroban_sdk::{contractclient, Address, Env};

/// Token capability consumed by the crowdsale and the escrow bank.
///
/// Mirrors the SAC token surface, plus the two reads a fixed-supply vesting
/// token adds on top of it.
#[contractclient(name = "LedgerClient")]
pub trait Ledger {
    fn balance(env: Env, id: Address) -> i128;

    /// Part of `balance` that is not held back by a lockup right now.
    fn vested_balance(env: Env, id: Address) -> i128;

    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32);

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);

    fn allowance(env: Env, from: Address, spender: Address) -> i128;

    fn total_supply(env: Env) -> i128;
}
