//! Usage metrics for assistant session transcripts.
//!
//! [`aggregate`] folds the usage payloads carried by a transcript's event
//! records into token, cache, cost and latency totals.
//! [`latest_request_payload`] exposes the raw payload of the most recent
//! request for callers that need per-request figures such as time to first
//! token.

pub mod config;
pub mod metrics;
pub mod payload;
pub mod record;
pub mod report;
pub mod transcript;

pub use metrics::{aggregate, latest_request_payload, time_to_first_token_ms, MetricsAccumulator};
pub use payload::{PayloadDecodeError, UsagePayload};
pub use record::{Category, EventRecord, Subkind};
