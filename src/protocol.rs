//! Typed request/response envelopes for the host boundary.
//!
//! Mirrors the message-channel wire shape: requests arrive as
//! `{type, payload}`, responses leave as `{type, data}`. One response per
//! well-formed request; unrecognized request types are dropped silently.

use crate::domain::dateparse::parse_date;
use crate::domain::engine::{FilterEngine, FilterResult};
use crate::domain::filter::FilterCriteria;
use crate::domain::order::Dataset;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An inbound request. The `INIT` payload stays untyped so arbitrary
/// input degrades to an empty dataset instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Request {
    #[serde(rename = "INIT")]
    Init(Value),
    #[serde(rename = "FILTER")]
    Filter(FilterParams),
    #[serde(other)]
    Unknown,
}

impl Request {
    /// Parse a raw request; anything unintelligible becomes [`Request::Unknown`]
    /// and is dropped downstream, matching the fire-and-forget contract.
    pub fn from_json(text: &str) -> Request {
        serde_json::from_str(text).unwrap_or(Request::Unknown)
    }
}

/// Raw `FILTER` parameters as they appear on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl FilterParams {
    /// Resolve wire strings into typed criteria. A date bound that fails
    /// to parse becomes no constraint on that bound.
    pub fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            start: self.start.as_deref().and_then(parse_date),
            end: self.end.as_deref().and_then(parse_date),
        }
    }
}

/// An outbound response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum Response {
    #[serde(rename = "INIT_OK")]
    InitOk,
    #[serde(rename = "FILTER_RESULT")]
    FilterResult(FilterResult),
}

impl FilterEngine {
    /// Dispatch one request, strictly sequentially (`&mut self` rules out
    /// overlap between an init and a filter). `Unknown` yields no response.
    pub fn handle(&mut self, request: Request) -> Option<Response> {
        match request {
            Request::Init(payload) => {
                self.init(Dataset::from_value(&payload));
                Some(Response::InitOk)
            }
            Request::Filter(params) => {
                let result: FilterResult = self.filter(&params.into_criteria());
                Some(Response::FilterResult(result))
            }
            Request::Unknown => None,
        }
    }
}
