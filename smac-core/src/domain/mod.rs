//! Domain types: price input and aligned signal output.

mod price;
mod signal;

pub use price::{PricePoint, PriceSeries, SeriesError};
pub use signal::SignalOutput;
