pub mod cli;
pub mod client;
pub mod config;
pub mod console;
pub mod error;
pub mod prayers;
pub mod schedule;
