pub mod config;
pub mod error;
pub mod outcome;
pub mod ports;
pub mod verbosity;
