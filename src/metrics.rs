/// Usage metrics aggregation over a transcript.
///
/// Folds the usage payloads of request-start and deleted-request-summary
/// notes into a single set of totals. A payload that fails to decode is
/// logged and skipped; it never stops the fold.
use crate::payload::UsagePayload;
use crate::record::{EventRecord, Subkind};
use serde::Serialize;

/// Totals across every contributing record.
///
/// Cache and latency totals stay `None` until a record reports them.
/// Token and cost totals are always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsAccumulator {
    pub total_tokens_in: f64,
    pub total_tokens_out: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cache_writes: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cache_reads: Option<f64>,
    pub total_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_latency_ms: Option<f64>,
}

impl MetricsAccumulator {
    fn add(&mut self, p: &UsagePayload) {
        if let Some(n) = p.tokens_in() {
            self.total_tokens_in += n;
        }
        if let Some(n) = p.tokens_out() {
            self.total_tokens_out += n;
        }
        if let Some(n) = p.cache_writes() {
            *self.total_cache_writes.get_or_insert(0.0) += n;
        }
        if let Some(n) = p.cache_reads() {
            *self.total_cache_reads.get_or_insert(0.0) += n;
        }
        // Cost is not presence-gated: "no cost reported" and "zero cost" look the same.
        if let Some(c) = p.cost() {
            self.total_cost += c;
        }
        if let Some(ms) = p.latency_ms() {
            *self.total_latency_ms.get_or_insert(0.0) += ms;
        }
    }
}

/// Sum the usage payloads in `records`.
pub fn aggregate(records: &[EventRecord]) -> MetricsAccumulator {
    let mut totals = MetricsAccumulator::default();

    for record in records.iter().filter(|r| r.carries_usage()) {
        let Some(raw) = record.payload() else {
            continue;
        };
        match UsagePayload::decode(raw) {
            Ok(payload) => totals.add(&payload),
            Err(e) => {
                tracing::warn!(
                    timestamp = record.timestamp,
                    subkind = ?record.subkind,
                    error = %e,
                    "skipping record with undecodable usage payload"
                );
            }
        }
    }

    totals
}

/// Raw payload of the most recent request-start record with a non-empty payload.
pub fn latest_request_payload(records: &[EventRecord]) -> Option<&str> {
    records
        .iter()
        .rev()
        .filter(|r| r.subkind == Subkind::RequestStarted)
        .find_map(EventRecord::payload)
}

/// Time to first token reported by the most recent request, if any.
pub fn time_to_first_token_ms(records: &[EventRecord]) -> Option<f64> {
    let raw = latest_request_payload(records)?;
    match UsagePayload::decode(raw) {
        Ok(payload) => payload.ttft_ms(),
        Err(e) => {
            tracing::warn!(error = %e, "latest request payload could not be decoded");
            None
        }
    }
}
