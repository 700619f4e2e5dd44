/// Testing utilities wiring the token, the crowdsale and the escrow bank together
pub mod fixtures;
pub mod logs;

pub use fixtures::*;
pub use logs::*;

/// Common test constants
pub mod constants {
    /// Both the token and the native asset use 7 decimals.
    pub const UNIT: i128 = 10_000_000;
    pub const RATE: i128 = 48_000;
    pub const GENERAL_SALE_START: u64 = 1_520_208_000;
    pub const GENERAL_SALE_END: u64 = 1_528_156_800;
    pub const SIX_MONTHS: u64 = 182 * 24 * 3600;

    pub const GENERAL_SALE_TOKENS: i128 = 22_800_000 * UNIT;
    pub const BOUNTY_TOKENS: i128 = 2_000_000 * UNIT;
    pub const PARTNERS_TOKENS: i128 = 3_200_000 * UNIT;
    pub const TEAM_TOKENS: i128 = 12_000_000 * UNIT;
    pub const TOTAL_SUPPLY: i128 = 40_000_000 * UNIT;

    /// 22.8M tokens at 48000 tokens per native unit.
    pub const SALE_GOAL: i128 = 475 * UNIT;
}
