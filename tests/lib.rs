//! Shared fixtures for the cross-contract crowdsale scenarios.
#![allow(clippy::unwrap_used)]

pub mod utils;
