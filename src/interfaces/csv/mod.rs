//! CSV input and output for accounts and transactions.

pub mod account_reader;
pub mod account_writer;
pub mod transaction_reader;

use std::io::Read;

/// Whitespace-tolerant reader shared by the CSV inputs.
fn reader<R: Read>(source: R) -> ::csv::Reader<R> {
    ::csv::ReaderBuilder::new()
        .trim(::csv::Trim::All)
        .flexible(true)
        .from_reader(source)
}
