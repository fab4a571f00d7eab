//! Crossover event extraction.
//!
//! Projects the ±1 rows of the crossover column into ordered buy and sell
//! markers for rendering. A filter over already-computed output, not an
//! independent algorithm — but it is the contract the renderer consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::SignalOutput;

/// Trade direction of a crossover event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Buy,
    Sell,
}

/// Which output column supplies the marker annotation price.
///
/// Callers pick this consistently with the comparison policy: the short
/// average when averages were compared, the raw price when the price was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerSource {
    #[default]
    ShortAvg,
    LongAvg,
    Price,
}

/// A day on which the binary signal changed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossoverEvent {
    pub index: usize,
    pub date: NaiveDate,
    /// Annotation price from the selected marker column.
    pub price: f64,
    pub side: Side,
}

/// Buy and sell events in date order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    pub buys: Vec<CrossoverEvent>,
    pub sells: Vec<CrossoverEvent>,
}

impl EventLog {
    pub fn is_empty(&self) -> bool {
        self.buys.is_empty() && self.sells.is_empty()
    }
}

/// Extract buy (+1) and sell (-1) events from a computed output.
pub fn extract_events(output: &SignalOutput, source: MarkerSource) -> EventLog {
    let column = match source {
        MarkerSource::ShortAvg => &output.short_avg,
        MarkerSource::LongAvg => &output.long_avg,
        MarkerSource::Price => &output.price,
    };

    let mut log = EventLog::default();
    for (index, &cross) in output.crossover.iter().enumerate() {
        if cross == 0 {
            continue;
        }
        let event = CrossoverEvent {
            index,
            date: output.dates[index],
            price: column[index],
            side: if cross > 0 { Side::Buy } else { Side::Sell },
        };
        match event.side {
            Side::Buy => log.buys.push(event),
            Side::Sell => log.sells.push(event),
        }
    }
    log
}
