use soroban_sdk::{contracttype, Address, String, Vec};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

/// `amount` of a wallet's balance stays frozen until `release_at`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Lockup {
    pub release_at: u64,
    pub amount: i128,
}

/// Pool minted at initialization.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Allocation {
    pub wallet: Address,
    pub amount: i128,
    pub lockups: Vec<Lockup>,
}

#[derive(Clone)]
#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
pub enum DataKey {
    Admin,
    Metadata,
    TotalSupply,
    GeneralSaleWallet,
    Balance(Address),
    Lockups(Address),
    Allowance(Address, Address),
}
