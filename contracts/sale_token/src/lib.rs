#![no_std]

mod contract;
mod error;
mod storage;
mod types;
mod vesting;


pub use contract::{SaleToken, SaleTokenClient};
pub use error::Error;
pub use types::{Allocation, Lockup, TokenMetadata};
