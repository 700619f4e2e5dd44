#![no_std]

mod contract;
mod error;
mod storage;
mod types;
pub mod window;


pub use contract::{Crowdsale, CrowdsaleClient};
pub use error::Error;
pub use types::{PreSale, PreSaleWindow, PurchaseReceipt, SaleConfig, SaleStatus};
pub use window::{Phase, SaleWindow};
