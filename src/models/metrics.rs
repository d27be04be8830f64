use serde::{Deserialize, Serialize};

use crate::constants::{BYTES_PER_TOKEN, PREVIEW_MARKER, PREVIEW_MAX_CHARS};

/// Request body for `POST /analyze`.
///
/// Parsed strictly: unknown fields are rejected rather than silently ignored,
/// so malformed client payloads fail loudly instead of analyzing the wrong
/// thing.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzeRequest {
    pub url: String,
    /// Per-request Firecrawl key override; the configured key is used if absent.
    #[serde(rename = "apiKey", default)]
    pub api_key: Option<String>,
}

/// Size, token, cost and density measurements for one representation of a page.
#[derive(Debug, Clone, Serialize)]
pub struct PageMetrics {
    /// UTF-8 byte length of the content
    pub size: u64,
    /// Estimated LLM input tokens (size / 4)
    pub tokens: f64,
    /// Share of the payload that is useful text, in percent
    pub density: f64,
    /// Estimated USD cost of feeding the content to a model
    pub cost: f64,
    /// Bounded prefix of the content for human inspection
    pub preview: String,
}

impl PageMetrics {
    /// Derive the token and cost estimates from a measured byte size.
    pub fn measure(size_bytes: u64, density: f64, preview: String, cost_per_1k: f64) -> Self {
        let tokens = size_bytes as f64 / BYTES_PER_TOKEN;
        Self {
            size: size_bytes,
            tokens,
            density,
            cost: tokens / 1000.0 * cost_per_1k,
            preview,
        }
    }
}

/// Relative savings between the raw fetch and the cleaned extraction.
///
/// `pct` and `reduction` are `None` (JSON `null`) when the raw fetch measured
/// zero bytes or zero cost; a percentage against an empty baseline is
/// undefined, and `degenerate` flags that case for the client.
#[derive(Debug, Clone, Serialize)]
pub struct Savings {
    pub pct: Option<f64>,
    pub reduction: Option<f64>,
    pub multiplier: f64,
    pub degenerate: bool,
}

/// Full response body for a successful analysis.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub before: PageMetrics,
    pub after: PageMetrics,
    pub savings: Savings,
}

/// Clip `content` to the first `PREVIEW_MAX_CHARS` characters and append the
/// truncation marker. Clips on character boundaries, so multi-byte input
/// never produces an invalid snippet.
pub fn preview_snippet(content: &str) -> String {
    let clipped: String = content.chars().take(PREVIEW_MAX_CHARS).collect();
    format!("{clipped}{PREVIEW_MARKER}")
}
