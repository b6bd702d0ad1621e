//! Aggregate metrics over filtered order lists.

use crate::domain::order::Order;
use serde::Serialize;
use std::collections::HashMap;

/// Top-symbol list is capped at this many entries.
pub const TOP_SYMBOL_COUNT: usize = 5;

/// Money totals across the filtered dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_bought: f64,
    pub total_sold: f64,
    pub total_profit: f64,
}

/// Trade statistics, computed from filtered sell orders only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TradeMetrics {
    pub wins: usize,
    pub losses: usize,
    pub trades: usize,
    #[serde(rename = "avgPnL")]
    pub avg_pnl: f64,
    #[serde(rename = "winRate")]
    pub win_rate: f64,
}

/// Accumulated traded volume for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolVolume {
    pub symbol: String,
    pub volume: f64,
}

/// Sum `total_value` per side; profit is the difference, exactly.
pub fn compute_totals(buy: &[Order], sell: &[Order]) -> Totals {
    let total_bought: f64 = buy.iter().map(|o| o.total_value).sum();
    let total_sold: f64 = sell.iter().map(|o| o.total_value).sum();
    Totals {
        total_bought,
        total_sold,
        total_profit: total_sold - total_bought,
    }
}

/// Win/loss counts and averages over sell-side profits.
///
/// A profit of exactly zero counts as neither a win nor a loss. The
/// zero-trade case yields all zeros rather than dividing by zero.
pub fn compute_trade_metrics(sell: &[Order]) -> TradeMetrics {
    let mut wins = 0usize;
    let mut losses = 0usize;
    let mut total_pnl = 0.0_f64;

    for order in sell {
        if order.profit > 0.0 {
            wins += 1;
        } else if order.profit < 0.0 {
            losses += 1;
        }
        total_pnl += order.profit;
    }

    let trades = sell.len();
    let (avg_pnl, win_rate) = if trades > 0 {
        (total_pnl / trades as f64, wins as f64 / trades as f64)
    } else {
        (0.0, 0.0)
    };

    TradeMetrics {
        wins,
        losses,
        trades,
        avg_pnl,
        win_rate,
    }
}

/// Per-symbol volume across both filtered sides, buy side first.
///
/// Ties sort by first encounter (stable sort over accumulation order);
/// the list is truncated to [`TOP_SYMBOL_COUNT`].
pub fn top_symbols(buy: &[Order], sell: &[Order]) -> Vec<SymbolVolume> {
    let mut volumes: Vec<SymbolVolume> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for order in buy.iter().chain(sell.iter()) {
        let symbol = order.symbol_or_na();
        match index.get(symbol) {
            Some(&i) => volumes[i].volume += order.quantity,
            None => {
                index.insert(symbol.to_string(), volumes.len());
                volumes.push(SymbolVolume {
                    symbol: symbol.to_string(),
                    volume: order.quantity,
                });
            }
        }
    }

    volumes.sort_by(|a, b| b.volume.total_cmp(&a.volume));
    volumes.truncate(TOP_SYMBOL_COUNT);
    volumes
}
