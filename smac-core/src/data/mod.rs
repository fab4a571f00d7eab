//! Market-data boundary: provider trait and concrete sources.

pub mod csv;
pub mod provider;
pub mod yahoo;

pub use csv::CsvImport;
pub use provider::{DataError, PriceProvider};
pub use yahoo::YahooProvider;
