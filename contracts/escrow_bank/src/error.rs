use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    AlreadyVoting = 4,
    InsufficientBalance = 5,
    NoActiveRound = 6,
    VotingClosed = 7,
    AlreadyVoted = 8,
    NoVotingPower = 9,
    VotingStillOpen = 10,
    NothingToWithdraw = 11,
    NotApproved = 12,
    NothingToRefund = 13,
    ZeroAmount = 14,
    TallyExceedsSupply = 15,
    Overflow = 16,
}
