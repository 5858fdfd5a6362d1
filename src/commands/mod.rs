pub mod conditions;
pub mod config;
pub mod utils;
pub mod wait;

#[cfg(test)]
#[path = "../commands_test.rs"]
mod commands_test;
