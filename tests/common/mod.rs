#![allow(dead_code)]

use orderdesk::domain::error::OrderdeskError;
use orderdesk::domain::order::{Dataset, Order};
use orderdesk::ports::order_source::OrderSource;

pub fn buy_order(symbol: &str, total_value: f64, quantity: f64) -> Order {
    Order {
        symbol: Some(symbol.to_string()),
        total_value,
        quantity,
        ..Order::default()
    }
}

pub fn sell_order(symbol: &str, total_value: f64, profit: f64, quantity: f64) -> Order {
    Order {
        symbol: Some(symbol.to_string()),
        total_value,
        profit,
        quantity,
        ..Order::default()
    }
}

pub fn dated(mut order: Order, date: &str) -> Order {
    order.date = Some(date.to_string());
    order
}

pub fn with_status(mut order: Order, status: &str) -> Order {
    order.status = Some(status.to_string());
    order
}

/// Scenario fixture: one AAPL buy at 1000 and one AAPL sell at 1500 with
/// 500 profit.
pub fn single_trade_dataset() -> Dataset {
    Dataset::new(
        vec![buy_order("AAPL", 1000.0, 10.0)],
        vec![sell_order("AAPL", 1500.0, 500.0, 10.0)],
    )
}

pub struct MockSource {
    pub dataset: Result<Dataset, String>,
}

impl MockSource {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Ok(dataset),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            dataset: Err(reason.to_string()),
        }
    }
}

impl OrderSource for MockSource {
    fn load(&self) -> Result<Dataset, OrderdeskError> {
        match &self.dataset {
            Ok(dataset) => Ok(dataset.clone()),
            Err(reason) => Err(OrderdeskError::DataRead {
                path: "mock".to_string(),
                reason: reason.clone(),
            }),
        }
    }
}
