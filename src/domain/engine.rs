//! The filter-and-aggregation engine.

use crate::domain::aggregate::{self, SymbolVolume, Totals, TradeMetrics};
use crate::domain::filter::FilterCriteria;
use crate::domain::order::{Dataset, Order};
use serde::Serialize;

/// One request's output: the filtered lists plus derived metrics.
/// Freshly allocated per request, never mutated after return.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult {
    pub filtered_buy_orders: Vec<Order>,
    pub filtered_sell_orders: Vec<Order>,
    pub totals: Totals,
    pub metrics: TradeMetrics,
    pub top_symbols: Vec<SymbolVolume>,
}

/// Holds the dataset and answers filter requests over it.
///
/// The dataset is exclusively owned: callers only ever receive derived,
/// freshly-allocated results. Stateless across requests apart from the
/// stored dataset; re-init replaces it wholesale, so no request observes
/// a mix of old and new data.
#[derive(Debug, Default)]
pub struct FilterEngine {
    dataset: Dataset,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Replace the stored dataset. Whole-value assignment, never a patch.
    pub fn init(&mut self, dataset: Dataset) {
        self.dataset = dataset;
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Apply the criteria to both sides and aggregate.
    ///
    /// Filtering is stable per side, so relative input order survives into
    /// the result. Pure with respect to engine state: the same criteria
    /// against an unchanged dataset yield identical results.
    pub fn filter(&self, criteria: &FilterCriteria) -> FilterResult {
        let filtered_buy_orders = retain_matching(&self.dataset.buy_orders, criteria);
        let filtered_sell_orders = retain_matching(&self.dataset.sell_orders, criteria);

        let totals = aggregate::compute_totals(&filtered_buy_orders, &filtered_sell_orders);
        let metrics = aggregate::compute_trade_metrics(&filtered_sell_orders);
        let top_symbols = aggregate::top_symbols(&filtered_buy_orders, &filtered_sell_orders);

        FilterResult {
            filtered_buy_orders,
            filtered_sell_orders,
            totals,
            metrics,
            top_symbols,
        }
    }
}

fn retain_matching(orders: &[Order], criteria: &FilterCriteria) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| criteria.matches(o))
        .cloned()
        .collect()
}
