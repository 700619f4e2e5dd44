#![no_std]

pub mod ledger;
pub mod logging;
pub mod storage;

pub use ledger::{Ledger, LedgerClient};
pub use logging::{log_info, log_warn, StructuredLog, LOG, LOG_INFO, LOG_WARN};
