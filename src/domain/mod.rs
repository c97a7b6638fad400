//! The settlement core: accounts, transactions and the strategies that settle
//! them. Nothing in here logs or performs I/O; every failure is returned to
//! the caller.

pub mod account;
pub mod ports;
pub mod settlement;
pub mod transaction;
