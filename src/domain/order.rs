//! Order record and dataset representation.

use serde::Serialize;
use serde_json::Value;

/// One buy or sell trade record, immutable once stored.
///
/// All fields are optional at the source: upstream feeds routinely omit
/// columns or carry non-numeric junk, so absence is modelled rather than
/// rejected. The `date` stays textual and is parsed lazily per filter call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Order {
    pub symbol: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
    pub quantity: f64,
    pub total_value: f64,
    pub profit: f64,
}

impl Order {
    /// Build an order from arbitrary JSON, coercing rather than failing.
    ///
    /// Non-object input yields the default order; missing or mistyped
    /// fields fall back to `None` / `0.0`.
    pub fn from_value(value: &Value) -> Self {
        Order {
            symbol: string_field(value, "symbol"),
            status: string_field(value, "status"),
            date: string_field(value, "date"),
            quantity: number_field(value, "quantity"),
            total_value: number_field(value, "total_value"),
            profit: number_field(value, "profit"),
        }
    }

    /// Symbol for aggregation buckets; absent or empty maps to `"N/A"`.
    pub fn symbol_or_na(&self) -> &str {
        match self.symbol.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => "N/A",
        }
    }
}

/// The full set of orders held by the engine between initializations.
///
/// Insertion order within each side is preserved; consumers rely on it as
/// the stable tie-break. Replaced wholesale on re-init, never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    pub buy_orders: Vec<Order>,
    pub sell_orders: Vec<Order>,
}

impl Dataset {
    pub fn new(buy_orders: Vec<Order>, sell_orders: Vec<Order>) -> Self {
        Self {
            buy_orders,
            sell_orders,
        }
    }

    /// Build a dataset from an arbitrary JSON payload.
    ///
    /// Accepts the worker wire shape (`buy_orders` / `sell_orders`) and the
    /// camelCase variant; a missing or non-array side coerces to empty.
    pub fn from_value(payload: &Value) -> Self {
        Self {
            buy_orders: orders_from_value(side_value(payload, "buy_orders", "buyOrders")),
            sell_orders: orders_from_value(side_value(payload, "sell_orders", "sellOrders")),
        }
    }

    pub fn len(&self) -> usize {
        self.buy_orders.len() + self.sell_orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buy_orders.is_empty() && self.sell_orders.is_empty()
    }
}

fn side_value<'a>(payload: &'a Value, key: &str, alt_key: &str) -> Option<&'a Value> {
    payload.get(key).or_else(|| payload.get(alt_key))
}

/// Coerce a JSON value to a list of orders; anything but an array is empty.
pub fn orders_from_value(value: Option<&Value>) -> Vec<Order> {
    match value.and_then(Value::as_array) {
        Some(entries) => entries.iter().map(Order::from_value).collect(),
        None => Vec::new(),
    }
}

/// String field with default: present and textual, or `None`.
fn string_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// Numeric field with default: a JSON number, or a string that parses as
/// one after stripping `$`, commas and spaces; everything else is `0.0`.
fn number_field(value: &Value, key: &str) -> f64 {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => parse_number(s),
        _ => 0.0,
    }
}

/// Tolerant numeric parse for broker-formatted amounts like `"$1,500.25"`
/// or `"(42)"` (accounting negative). Unparseable input is `0.0`.
pub fn parse_number(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter_map(|c| match c {
            '$' | ',' | ' ' | '+' | ')' => None,
            '(' => Some('-'),
            _ => Some(c),
        })
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_full_record() {
        let order = Order::from_value(&json!({
            "symbol": "AAPL",
            "status": "Filled",
            "date": "11/04/2025",
            "quantity": 10.0,
            "total_value": 1500.0,
            "profit": 500.0,
        }));
        assert_eq!(order.symbol.as_deref(), Some("AAPL"));
        assert_eq!(order.status.as_deref(), Some("Filled"));
        assert!((order.quantity - 10.0).abs() < f64::EPSILON);
        assert!((order.total_value - 1500.0).abs() < f64::EPSILON);
        assert!((order.profit - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_value_missing_fields_default() {
        let order = Order::from_value(&json!({ "symbol": "BHP" }));
        assert_eq!(order.status, None);
        assert_eq!(order.date, None);
        assert!((order.quantity - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_value_non_numeric_coerces_to_zero() {
        let order = Order::from_value(&json!({
            "quantity": "lots",
            "total_value": {"nested": true},
            "profit": null,
        }));
        assert!((order.quantity - 0.0).abs() < f64::EPSILON);
        assert!((order.total_value - 0.0).abs() < f64::EPSILON);
        assert!((order.profit - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_value_numeric_string_parses() {
        let order = Order::from_value(&json!({ "total_value": "39812.49" }));
        assert!((order.total_value - 39812.49).abs() < 1e-9);
    }

    #[test]
    fn from_value_non_object_is_default() {
        assert_eq!(Order::from_value(&json!(42)), Order::default());
        assert_eq!(Order::from_value(&json!("order")), Order::default());
    }

    #[test]
    fn symbol_or_na_fallback() {
        assert_eq!(Order::default().symbol_or_na(), "N/A");
        let blank = Order {
            symbol: Some(String::new()),
            ..Order::default()
        };
        assert_eq!(blank.symbol_or_na(), "N/A");
    }

    #[test]
    fn dataset_from_value_non_array_sides_empty() {
        let dataset = Dataset::from_value(&json!({
            "buy_orders": "not an array",
            "sell_orders": 7,
        }));
        assert!(dataset.is_empty());
    }

    #[test]
    fn dataset_from_value_accepts_camel_case() {
        let dataset = Dataset::from_value(&json!({
            "buyOrders": [{"symbol": "AAPL"}],
            "sellOrders": [{"symbol": "MSFT"}],
        }));
        assert_eq!(dataset.buy_orders.len(), 1);
        assert_eq!(dataset.sell_orders.len(), 1);
    }

    #[test]
    fn parse_number_broker_formats() {
        assert!((parse_number("$1.73") - 1.73).abs() < 1e-9);
        assert!((parse_number("1,500.25") - 1500.25).abs() < 1e-9);
        assert!((parse_number("(42)") - (-42.0)).abs() < 1e-9);
        assert!((parse_number("garbage") - 0.0).abs() < f64::EPSILON);
    }
}
