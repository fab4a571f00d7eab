//! SMAC Chart — one-shot terminal rendering of a computed signal series.
//!
//! Draws the short and long rolling averages as line series, optionally
//! overlays the raw adjusted close, and scatters buy/sell markers at the
//! crossover dates. The terminal enters the alternate screen, draws once
//! (redrawing on resize), and restores on the first key press.
//!
//! Pure consumer: nothing here feeds back into the engine.

mod theme;

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType};
use ratatui::{Frame, Terminal};

use smac_core::domain::SignalOutput;
use smac_core::events::{CrossoverEvent, EventLog};

/// Everything the chart needs for one draw.
pub struct ChartView<'a> {
    pub ticker: &'a str,
    pub output: &'a SignalOutput,
    pub events: &'a EventLog,
    /// Overlay the raw adjusted close alongside the averages.
    pub show_price: bool,
}

impl ChartView<'_> {
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let out = self.output;

        let short_data = series_points(&out.short_avg);
        let long_data = series_points(&out.long_avg);
        let price_data = if self.show_price {
            series_points(&out.price)
        } else {
            Vec::new()
        };
        let buy_data = event_points(&self.events.buys);
        let sell_data = event_points(&self.events.sells);

        let mut columns: Vec<&[f64]> = vec![&out.short_avg, &out.long_avg];
        if self.show_price {
            columns.push(&out.price);
        }
        let (y_min, y_max) = y_bounds(&columns);
        let x_max = out.len().saturating_sub(1) as f64;

        let mut datasets = Vec::new();
        if self.show_price {
            datasets.push(line_dataset("adj close", &price_data, theme::PRICE));
        }
        datasets.push(line_dataset("short avg", &short_data, theme::SHORT));
        datasets.push(line_dataset("long avg", &long_data, theme::LONG));
        datasets.push(scatter_dataset("buy", &buy_data, theme::BUY));
        datasets.push(scatter_dataset("sell", &sell_data, theme::SELL));

        let x_labels = match (out.dates.first(), out.dates.last()) {
            (Some(first), Some(last)) => vec![
                Span::styled(first.to_string(), theme::muted()),
                Span::styled(last.to_string(), theme::muted()),
            ],
            _ => vec![],
        };

        let chart = Chart::new(datasets)
            .block(
                Block::bordered()
                    .title(format!(" {} — press any key to exit ", self.ticker))
                    .border_style(theme::muted()),
            )
            .x_axis(
                Axis::default()
                    .title(Span::styled("Date", theme::muted()))
                    .style(theme::muted())
                    .bounds([0.0, x_max.max(1.0)])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled("Price", theme::muted()))
                    .style(theme::muted())
                    .bounds([y_min, y_max])
                    .labels(vec![
                        Span::styled(format!("{y_min:.2}"), theme::muted()),
                        Span::styled(format!("{y_max:.2}"), theme::muted()),
                    ]),
            );

        f.render_widget(chart, area);
    }
}

fn line_dataset<'a>(name: &'a str, data: &'a [(f64, f64)], color: ratatui::style::Color) -> Dataset<'a> {
    Dataset::default()
        .name(name)
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(data)
}

fn scatter_dataset<'a>(name: &'a str, data: &'a [(f64, f64)], color: ratatui::style::Color) -> Dataset<'a> {
    Dataset::default()
        .name(name)
        .marker(symbols::Marker::Block)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(color))
        .data(data)
}

/// Convert a column to (index, value) points, dropping undefined entries.
fn series_points(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .map(|(i, &v)| (i as f64, v))
        .collect()
}

/// Convert crossover events to (index, marker price) points.
fn event_points(events: &[CrossoverEvent]) -> Vec<(f64, f64)> {
    events
        .iter()
        .filter(|e| !e.price.is_nan())
        .map(|e| (e.index as f64, e.price))
        .collect()
}

/// Min/max over every plotted column with 5% padding. Falls back to
/// [0, 1] when nothing is plottable.
fn y_bounds(columns: &[&[f64]]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for column in columns {
        for &v in *column {
            if !v.is_nan() {
                min = min.min(v);
                max = max.max(v);
            }
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let padding = (max - min).abs() * 0.05;
    (min - padding, max + padding)
}

/// Draw the chart full-screen and block until a key is pressed.
pub fn show(view: &ChartView) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = draw_until_key(&mut terminal, view);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn draw_until_key(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    view: &ChartView,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| view.render(f, f.area()))?;
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(()),
            // Redraw on resize, ignore everything else.
            _ => continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use smac_core::events::Side;

    #[test]
    fn series_points_skip_nan() {
        let points = series_points(&[1.0, f64::NAN, 3.0]);
        assert_eq!(points, vec![(0.0, 1.0), (2.0, 3.0)]);
    }

    #[test]
    fn event_points_carry_index_and_price() {
        let events = vec![CrossoverEvent {
            index: 4,
            date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            price: 101.5,
            side: Side::Buy,
        }];
        assert_eq!(event_points(&events), vec![(4.0, 101.5)]);
    }

    #[test]
    fn event_points_drop_undefined_marker_prices() {
        let events = vec![CrossoverEvent {
            index: 0,
            date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            price: f64::NAN,
            side: Side::Sell,
        }];
        assert!(event_points(&events).is_empty());
    }

    #[test]
    fn y_bounds_pad_five_percent() {
        let (lo, hi) = y_bounds(&[&[100.0, 200.0]]);
        assert!((lo - 95.0).abs() < 1e-9);
        assert!((hi - 205.0).abs() < 1e-9);
    }

    #[test]
    fn y_bounds_span_all_columns() {
        let (lo, hi) = y_bounds(&[&[100.0, 110.0], &[90.0, 105.0]]);
        assert!(lo < 90.0);
        assert!(hi > 110.0);
    }

    #[test]
    fn y_bounds_fall_back_when_all_nan() {
        let (lo, hi) = y_bounds(&[&[f64::NAN, f64::NAN]]);
        assert_eq!((lo, hi), (0.0, 1.0));
    }
}
