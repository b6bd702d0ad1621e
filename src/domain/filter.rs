//! Filter criteria and per-order predicates.

use crate::domain::dateparse::parse_date;
use crate::domain::order::Order;
use chrono::NaiveDate;

/// The constraints of one filter request. An empty string or `None` means
/// "no constraint on this dimension".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub status: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl FilterCriteria {
    /// All three predicates, AND-ed.
    pub fn matches(&self, order: &Order) -> bool {
        self.symbol_matches(order) && self.status_matches(order) && self.date_matches(order)
    }

    /// Case-insensitive substring match on the symbol.
    fn symbol_matches(&self, order: &Order) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let symbol = order.symbol.as_deref().unwrap_or("");
        symbol.to_lowercase().contains(&self.search.to_lowercase())
    }

    /// Exact, case-sensitive status equality. Callers that want
    /// case-insensitive matching normalize both sides before building the
    /// criteria.
    fn status_matches(&self, order: &Order) -> bool {
        if self.status.is_empty() {
            return true;
        }
        order.status.as_deref().unwrap_or("") == self.status
    }

    /// Inclusive date-range check. With no bounds every order passes; with
    /// any bound set, an unparseable order date fails.
    fn date_matches(&self, order: &Order) -> bool {
        if self.start.is_none() && self.end.is_none() {
            return true;
        }
        let Some(date) = order.date.as_deref().and_then(parse_date) else {
            return false;
        };
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}
