use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

pub const LOG: Symbol = symbol_short!("LOG");
pub const LOG_INFO: Symbol = symbol_short!("LOG_INFO");
pub const LOG_WARN: Symbol = symbol_short!("LOG_WARN");

/// Log line published as an event under the `("LOG", level)` topics.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct StructuredLog {
    pub operation: Symbol,
    pub actor: Option<Address>,
    pub amount: Option<i128>,
    pub timestamp: u64,
}

fn emit(env: &Env, level: Symbol, operation: Symbol, actor: Option<Address>, amount: Option<i128>) {
    let entry = StructuredLog {
        operation,
        actor,
        amount,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((LOG, level), entry);
}

pub fn log_info(env: &Env, operation: Symbol, actor: Option<Address>, amount: Option<i128>) {
    emit(env, LOG_INFO, operation, actor, amount);
}

pub fn log_warn(env: &Env, operation: Symbol, actor: Option<Address>, amount: Option<i128>) {
    emit(env, LOG_WARN, operation, actor, amount);
}
