use crate::types::*;
use sale_common::storage::extend_persistent;
use soroban_sdk::{Address, Env, Vec};

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_metadata(env: &Env) -> Option<TokenMetadata> {
    env.storage().instance().get(&DataKey::Metadata)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &amount);
}

pub fn get_general_sale_wallet(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::GeneralSaleWallet)
}

pub fn set_general_sale_wallet(env: &Env, wallet: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::GeneralSaleWallet, wallet);
}

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            extend_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

pub fn get_lockups(env: &Env, id: &Address) -> Vec<Lockup> {
    env.storage()
        .persistent()
        .get(&DataKey::Lockups(id.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn set_lockups(env: &Env, id: &Address, lockups: &Vec<Lockup>) {
    let key = DataKey::Lockups(id.clone());
    env.storage().persistent().set(&key, lockups);
    extend_persistent(env, &key);
}

/// Expired allowances read as zero.
pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    match env.storage().persistent().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => {
            allowance.amount
        }
        _ => 0,
    }
}

pub fn get_allowance_value(env: &Env, from: &Address, spender: &Address) -> Option<AllowanceValue> {
    env.storage()
        .persistent()
        .get(&DataKey::Allowance(from.clone(), spender.clone()))
}

pub fn set_allowance(env: &Env, from: &Address, spender: &Address, value: &AllowanceValue) {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    env.storage().persistent().set(&key, value);
    extend_persistent(env, &key);
}
