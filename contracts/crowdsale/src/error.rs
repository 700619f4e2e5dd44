use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    InactiveSale = 4,
    ZeroPayment = 5,
    SoldOut = 6,
    SaleStillOpen = 7,
    AlreadyClosed = 8,
    SaleActiveAndUnderGoal = 9,
    UnsoldTokensRemain = 10,
    InsufficientFunds = 11,
    ZeroAmount = 12,
    ContractKilled = 13,
    InvalidConfig = 14,
    Overflow = 15,
}
