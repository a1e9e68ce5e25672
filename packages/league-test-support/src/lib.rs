//! League test support utilities
//!
//! Shared logging initialization and store fixtures for the league
//! integration tests.

pub mod fixtures;
pub mod logging;
