use soroban_sdk::{contracttype, Address};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PreSale {
    pub start: u64,
    pub end: u64,
    pub rate: i128, // token units per native unit
}

/// Optional pre-sale phase, stored in place of an `Option<PreSale>` field.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum PreSaleWindow {
    None,
    Some(PreSale),
}

impl PreSaleWindow {
    pub fn as_pre_sale(&self) -> Option<&PreSale> {
        match self {
            PreSaleWindow::None => None,
            PreSaleWindow::Some(pre) => Some(pre),
        }
    }
}

impl From<Option<PreSale>> for PreSaleWindow {
    fn from(pre_sale: Option<PreSale>) -> Self {
        match pre_sale {
            Some(pre) => PreSaleWindow::Some(pre),
            None => PreSaleWindow::None,
        }
    }
}

/// Immutable after `initialize`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub token: Address,
    pub native_asset: Address,
    pub general_sale_wallet: Address,
    pub players_reserve: Address,
    pub bank: Address,
    pub pre_sale: PreSaleWindow,
    pub general_sale_start: u64,
    pub general_sale_end: u64,
    pub rate_general_sale: i128,
    pub sale_goal: i128, // native units
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleStatus {
    NotStarted,
    Active,
    /// After the pre-sale, before the general sale opens.
    BetweenPhases,
    GoalReached,
    Ended,
    Closed,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PurchaseReceipt {
    pub tokens: i128,
    pub consumed: i128,
    pub change: i128,
}

#[contracttype]
pub enum DataKey {
    Config,
    Owner,
    TotalCollected,
    Closed,
    Alive,
}
