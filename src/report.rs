/// Rendering of aggregated metrics for display.
use crate::metrics::{self, MetricsAccumulator};
use crate::record::EventRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Totals plus the time to first token of the latest request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(flatten)]
    pub metrics: MetricsAccumulator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttft_ms: Option<f64>,
}

impl Report {
    pub fn from_records(records: &[EventRecord]) -> Self {
        Self {
            metrics: metrics::aggregate(records),
            ttft_ms: metrics::time_to_first_token_ms(records),
        }
    }
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

fn render_text(report: &Report) -> String {
    let m = &report.metrics;
    let mut out = String::new();
    out.push_str(&format!("Tokens in:     {}\n", m.total_tokens_in));
    out.push_str(&format!("Tokens out:    {}\n", m.total_tokens_out));
    if let Some(n) = m.total_cache_writes {
        out.push_str(&format!("Cache writes:  {n}\n"));
    }
    if let Some(n) = m.total_cache_reads {
        out.push_str(&format!("Cache reads:   {n}\n"));
    }
    out.push_str(&format!("Total cost:    ${:.4}\n", m.total_cost));
    if let Some(ms) = m.total_latency_ms {
        out.push_str(&format!("Latency:       {ms} ms\n"));
    }
    if let Some(ms) = report.ttft_ms {
        out.push_str(&format!("First token:   {ms} ms\n"));
    }
    out
}
