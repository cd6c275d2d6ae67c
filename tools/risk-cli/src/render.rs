//! Text panel for a recomputation

use colored::*;
use position_book::Workbook;
use risk_engine::{round_half_up, CloseLevels, RiskMetrics, Side};
use std::fmt::Write;

const DASH: &str = "-";

/// Price with three decimals, or a dash when unavailable
pub fn format_price(value: Option<f64>) -> String {
    value.map_or_else(|| DASH.to_string(), |v| format!("{:.3}", v))
}

/// Whole currency amount rounded half-up with thousands separators
pub fn format_amount(value: f64) -> String {
    // adding 0.0 normalizes -0.0
    let rounded = round_half_up(value) + 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn format_signed(value: Option<f64>) -> ColoredString {
    match value {
        Some(v) if v > 0.0 => format_amount(v).green(),
        Some(v) if v < 0.0 => format_amount(v).red(),
        Some(v) => format_amount(v).normal(),
        None => DASH.normal(),
    }
}

fn format_levels(side: Side, levels: Option<&CloseLevels>) -> String {
    match levels {
        Some(levels) => format!(
            "close {} ({})   mid {}",
            format_price(Some(levels.close)),
            side.close_quote_name(),
            format_price(Some(levels.mid))
        ),
        None => DASH.to_string(),
    }
}

/// Explanatory note under the panel
pub fn note(side: Side) -> String {
    let close = match side {
        Side::Buy => "Longs are valued closing at the bid; the breakeven close price is a bid.",
        Side::Sell => "Shorts are valued closing at the ask; the breakeven close price is an ask.",
    };
    format!(
        "{} Costs (swap/commission) are assumed to be zero. Breakeven is the lot-weighted average of the selected rows.",
        close
    )
}

/// Render the full panel for a workbook and its metrics
pub fn render(book: &Workbook, metrics: &RiskMetrics) -> String {
    let mut out = String::new();
    let side = metrics.side;

    let bid_ask = match metrics.quote {
        Some(q) => format!("{} / {}", format_price(Some(q.bid)), format_price(Some(q.ask))),
        None => DASH.to_string(),
    };
    let balance = metrics.balance.map_or_else(|| DASH.to_string(), format_amount);

    let _ = writeln!(out, "{}", "FX Breakeven".bold());
    let _ = writeln!(out, "{}", "=".repeat(60));
    let _ = writeln!(out, "{:<14}{}", "Side", side);
    let _ = writeln!(out, "{:<14}{}", "Bid / Ask", bid_ask);
    let _ = writeln!(out, "{:<14}{}", "Breakeven", format_levels(side, metrics.breakeven.as_ref()));
    let _ = writeln!(out, "{:<14}{}", "Total PnL", format_signed(metrics.display_total()));
    let _ = writeln!(out, "{:<14}{} ({})", "Balance", balance, book.funds.mode);
    let _ = writeln!(out, "{:<14}{}", "Zero equity", format_levels(side, metrics.zero_equity.as_ref()));
    let _ = writeln!(out);

    let _ = writeln!(out, "{:>3}  {:<3}  {:<8}  {:>10}  {:>12}  {:>14}", "#", "Sel", "Id", "Lots", "Entry", "PnL");
    for (i, (position, row)) in book.positions.iter().zip(&metrics.pnl.rows).enumerate() {
        let id = position.id.to_string();
        let _ = writeln!(
            out,
            "{:>3}  {:<3}  {:<8}  {:>10}  {:>12}  {:>14}",
            i + 1,
            if position.selected { "[x]" } else { "[ ]" },
            &id[..8],
            position.lots.to_string(),
            position.entry.to_string(),
            format_signed(row.pnl)
        );
    }
    if book.positions.is_empty() {
        let _ = writeln!(out, "{}", "  (no positions)".dimmed());
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", note(side).dimmed());
    out
}
