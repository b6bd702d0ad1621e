//! JSON dataset file adapter.

use crate::domain::error::OrderdeskError;
use crate::domain::order::{Dataset, Order};
use crate::ports::order_source::OrderSource;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl OrderSource for JsonFileSource {
    fn load(&self) -> Result<Dataset, OrderdeskError> {
        let content = fs::read_to_string(&self.path).map_err(|e| OrderdeskError::DataRead {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| OrderdeskError::DataParse {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(dataset_from_json(&value))
    }
}

/// Build a dataset from either supported JSON shape.
///
/// A flat `{orders: [...]}` list is split on each order's `type`/`side`
/// field (as the UI feed carries it); otherwise the pre-split
/// `{buy_orders, sell_orders}` wire shape is assumed, with the usual
/// permissive coercion.
pub fn dataset_from_json(value: &Value) -> Dataset {
    let Some(orders) = value.get("orders").and_then(Value::as_array) else {
        return Dataset::from_value(value);
    };

    let mut dataset = Dataset::default();
    for entry in orders {
        let order = Order::from_value(entry);
        let side = entry
            .get("type")
            .or_else(|| entry.get("side"))
            .and_then(Value::as_str)
            .unwrap_or("");
        if side.to_lowercase().contains("sell") {
            dataset.sell_orders.push(order);
        } else {
            dataset.buy_orders.push(order);
        }
    }
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn split_shape() {
        let dataset = dataset_from_json(&json!({
            "buy_orders": [{"symbol": "AAPL", "total_value": 1000.0}],
            "sell_orders": [{"symbol": "AAPL", "total_value": 1500.0, "profit": 500.0}],
        }));
        assert_eq!(dataset.buy_orders.len(), 1);
        assert_eq!(dataset.sell_orders.len(), 1);
    }

    #[test]
    fn flat_shape_splits_on_type() {
        let dataset = dataset_from_json(&json!({
            "orders": [
                {"symbol": "AAPL", "type": "buy"},
                {"symbol": "AAPL", "type": "sell"},
                {"symbol": "MSFT", "side": "Sell"},
                {"symbol": "BHP"},
            ],
        }));
        assert_eq!(dataset.buy_orders.len(), 2);
        assert_eq!(dataset.sell_orders.len(), 2);
    }

    #[test]
    fn garbage_is_empty_not_an_error() {
        assert!(dataset_from_json(&json!(null)).is_empty());
        assert!(dataset_from_json(&json!({"orders": "nope"})).is_empty());
        assert!(dataset_from_json(&json!([1, 2, 3])).is_empty());
    }
}
