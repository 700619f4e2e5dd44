#![no_std]

mod contract;
mod error;
mod storage;
pub mod tally;
mod types;


pub use contract::{EscrowBank, EscrowBankClient, VOTING_PERIOD};
pub use error::Error;
pub use types::{BankConfig, EscrowRound, Resolution, VoteChoice};
