//! Application layer: the caller of the settlement core.
//!
//! `PaymentEngine` owns the account table, runs handler selection and payment
//! for each transaction, and is the only place outcomes are logged.

pub mod engine;
