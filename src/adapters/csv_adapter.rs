//! Broker-export CSV adapter.
//!
//! Upstream sheets export columns like `Symbol`, `Side`, `Status`,
//! `Filled`, `Total Qty`, `Avg Price`, `Placed Time`, `Total Value`, with
//! money formatted as `$1.73` and timestamps as `11/04/2025 13:51:17 EST`.
//! Column names are matched case-insensitively against alias lists, since
//! exports vary between brokers.

use crate::domain::error::OrderdeskError;
use crate::domain::order::{Dataset, Order, parse_number};
use crate::ports::order_source::OrderSource;
use std::fs;
use std::path::PathBuf;

const SYMBOL_COLUMNS: &[&str] = &["symbol", "ticker", "stock", "instrument"];
const SIDE_COLUMNS: &[&str] = &["side", "action", "type", "buy_sell"];
const STATUS_COLUMNS: &[&str] = &["status", "state"];
const QUANTITY_COLUMNS: &[&str] = &["quantity", "total qty", "qty", "shares", "filled"];
const TOTAL_COLUMNS: &[&str] = &["total value", "amount", "value", "total"];
const PRICE_COLUMNS: &[&str] = &["price", "avg price"];
const PROFIT_COLUMNS: &[&str] = &["profit", "pnl"];
const DATE_COLUMNS: &[&str] = &[
    "placed time",
    "filled time",
    "order date",
    "date",
    "time",
    "timestamp",
];

pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl OrderSource for CsvSource {
    fn load(&self) -> Result<Dataset, OrderdeskError> {
        let content = fs::read_to_string(&self.path).map_err(|e| OrderdeskError::DataRead {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        parse_csv(&content).map_err(|reason| OrderdeskError::CsvParse {
            path: self.path.display().to_string(),
            reason,
        })
    }
}

/// Parse broker CSV content into a dataset, splitting on the side column.
/// A side containing `sell` (any case) goes to the sell list; everything
/// else, including a missing side column, counts as a buy.
pub fn parse_csv(content: &str) -> Result<Dataset, String> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| e.to_string())?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let mut dataset = Dataset::default();
    for record in reader.records() {
        let record = record.map_err(|e| e.to_string())?;
        let field = |aliases: &[&str]| -> Option<String> {
            let i = find_column(&headers, aliases)?;
            let value = record.get(i)?.trim();
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };

        let quantity = field(QUANTITY_COLUMNS).map(|v| parse_number(&v)).unwrap_or(0.0);
        let mut total_value = field(TOTAL_COLUMNS).map(|v| parse_number(&v)).unwrap_or(0.0);
        if total_value == 0.0 {
            let price = field(PRICE_COLUMNS).map(|v| parse_number(&v)).unwrap_or(0.0);
            total_value = price * quantity;
        }

        let order = Order {
            symbol: field(SYMBOL_COLUMNS),
            status: field(STATUS_COLUMNS),
            date: field(DATE_COLUMNS),
            quantity,
            total_value,
            profit: field(PROFIT_COLUMNS).map(|v| parse_number(&v)).unwrap_or(0.0),
        };

        let side = field(SIDE_COLUMNS).unwrap_or_default().to_lowercase();
        if side.contains("sell") {
            dataset.sell_orders.push(order);
        } else {
            dataset.buy_orders.push(order);
        }
    }

    Ok(dataset)
}

/// First header matching any alias, in alias priority order.
fn find_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| headers.iter().position(|h| h == alias))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BROKER_EXPORT: &str = "\
Name,Symbol,Side,Status,Filled,Total Qty,Price,Avg Price,Placed Time,Filled Time,Total Value
Datavault AI Inc,DVLT,Buy,Filled,23013,23013,1.73,$1.73,11/04/2025 13:51:17 EST,11/04/2025 14:07:30 EST,39812.49
Apple Inc,AAPL,Sell,Filled,10,10,150.00,$150.00,11/05/2025 09:30:00 EST,11/05/2025 09:31:00 EST,1500.00
";

    #[test]
    fn parses_broker_export() {
        let dataset = parse_csv(BROKER_EXPORT).unwrap();
        assert_eq!(dataset.buy_orders.len(), 1);
        assert_eq!(dataset.sell_orders.len(), 1);

        let buy = &dataset.buy_orders[0];
        assert_eq!(buy.symbol.as_deref(), Some("DVLT"));
        assert_eq!(buy.status.as_deref(), Some("Filled"));
        assert_eq!(buy.date.as_deref(), Some("11/04/2025 13:51:17 EST"));
        assert!((buy.quantity - 23013.0).abs() < f64::EPSILON);
        assert!((buy.total_value - 39812.49).abs() < 1e-9);
    }

    #[test]
    fn total_falls_back_to_price_times_quantity() {
        let csv = "Symbol,Side,Qty,Price\nBHP,Buy,100,2.50\n";
        let dataset = parse_csv(csv).unwrap();
        assert!((dataset.buy_orders[0].total_value - 250.0).abs() < 1e-9);
    }

    #[test]
    fn missing_side_defaults_to_buy() {
        let csv = "Symbol,Qty\nBHP,100\n";
        let dataset = parse_csv(csv).unwrap();
        assert_eq!(dataset.buy_orders.len(), 1);
        assert!(dataset.sell_orders.is_empty());
    }

    #[test]
    fn money_columns_tolerate_dollar_signs_and_commas() {
        let csv = "Symbol,Side,Qty,Total Value\nBHP,Sell,100,\"$1,234.56\"\n";
        let dataset = parse_csv(csv).unwrap();
        assert!((dataset.sell_orders[0].total_value - 1234.56).abs() < 1e-9);
    }

    #[test]
    fn empty_file_yields_empty_dataset() {
        let dataset = parse_csv("Symbol,Side\n").unwrap();
        assert!(dataset.is_empty());
    }
}
