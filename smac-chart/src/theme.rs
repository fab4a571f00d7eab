//! Color tokens for the chart.

use ratatui::style::{Color, Style};

/// Short rolling average line.
pub const SHORT: Color = Color::Cyan;
/// Long rolling average line.
pub const LONG: Color = Color::Magenta;
/// Raw adjusted-close overlay.
pub const PRICE: Color = Color::Gray;
/// Buy markers.
pub const BUY: Color = Color::Green;
/// Sell markers.
pub const SELL: Color = Color::Red;

/// Axis titles, labels, borders.
pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}
