pub mod command;
pub mod env;
pub mod error;
pub mod keccak;
