use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    NegativeAmount = 4,
    InsufficientBalance = 5,
    InsufficientAllowance = 6,
    VestingLocked = 7,
    InvalidAllocation = 8,
    InvalidExpiration = 9,
    Overflow = 10,
}
