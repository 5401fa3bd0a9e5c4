//! Command implementations.

pub mod init;

pub use self::init::{execute_init, InitReport};
