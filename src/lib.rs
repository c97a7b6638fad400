//! A minimal ledger where accounts exchange value through transactions, each
//! settled by the handler matching its payment method.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
