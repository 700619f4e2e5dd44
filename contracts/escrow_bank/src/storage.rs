use crate::error::Error;
use crate::types::*;
use sale_common::storage::extend_persistent;
use soroban_sdk::{Address, Env};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<BankConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &BankConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_round(env: &Env) -> EscrowRound {
    env.storage()
        .instance()
        .get(&DataKey::Round)
        .unwrap_or(EscrowRound {
            id: 0,
            opened_at: None,
            proposed_amount: 0,
            to_allow: 0,
            to_cancel: 0,
            to_refund: 0,
        })
}

pub fn set_round(env: &Env, round: &EscrowRound) {
    env.storage().instance().set(&DataKey::Round, round);
}

pub fn get_allowed_withdraw(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::AllowedWithdraw)
        .unwrap_or(0)
}

pub fn set_allowed_withdraw(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::AllowedWithdraw, &amount);
}

pub fn get_allowed_refund(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::AllowedRefund)
        .unwrap_or(0)
}

pub fn set_allowed_refund(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::AllowedRefund, &amount);
}

pub fn get_last_resolution(env: &Env) -> Resolution {
    env.storage()
        .instance()
        .get(&DataKey::LastResolution)
        .unwrap_or(Resolution::Pending)
}

pub fn set_last_resolution(env: &Env, resolution: &Resolution) {
    env.storage()
        .instance()
        .set(&DataKey::LastResolution, resolution);
}

pub fn get_vote(env: &Env, round_id: u32, voter: &Address) -> Option<VoteChoice> {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(round_id, voter.clone()))
}

pub fn set_vote(env: &Env, round_id: u32, voter: &Address, choice: VoteChoice) {
    let key = DataKey::Vote(round_id, voter.clone());
    env.storage().persistent().set(&key, &choice);
    extend_persistent(env, &key);
}
