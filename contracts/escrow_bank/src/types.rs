use soroban_sdk::{contracttype, Address};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BankConfig {
    pub token: Address,
    pub native_asset: Address,
    /// Receives the tokens surrendered by refunds.
    pub refund_sink: Address,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum VoteChoice {
    Allow = 1,
    Cancel = 2,
    Refund = 3,
}

/// The latest voting round. `opened_at` is `None` once the round is closed.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct EscrowRound {
    pub id: u32,
    pub opened_at: Option<u64>,
    pub proposed_amount: i128,
    pub to_allow: i128,
    pub to_cancel: i128,
    pub to_refund: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Resolution {
    Pending,
    Withdraw(i128),
    Refund(i128),
    Rejected,
}

#[contracttype]
pub enum DataKey {
    Config,
    Owner,
    Round,
    AllowedWithdraw,
    AllowedRefund,
    LastResolution,
    Vote(u32, Address),
}
