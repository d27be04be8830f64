/// Application-wide constants
///
/// This module centralizes the magic numbers shared by the two analyzers and
/// the comparison endpoint.

// ============================================================================
// Token / Cost Estimation
// ============================================================================

/// Byte-to-token ratio for rough estimation (4 bytes ≈ 1 token)
pub const BYTES_PER_TOKEN: f64 = 4.0;

/// Default price per 1K input tokens in USD
pub const DEFAULT_COST_PER_1K_TOKENS: f64 = 0.0025;

// ============================================================================
// Outbound Fetching
// ============================================================================

/// Browser-like user agent sent with the raw page fetch
pub const FETCH_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Timeout for the raw page fetch (seconds)
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

/// Timeout for the Firecrawl scrape call (seconds)
pub const DEFAULT_FIRECRAWL_TIMEOUT_SECS: u64 = 30;

/// Default Firecrawl scrape endpoint
pub const DEFAULT_FIRECRAWL_URL: &str = "https://api.firecrawl.dev/v1/scrape";

// ============================================================================
// Metrics
// ============================================================================

/// Density assumed for extractor output, which is already near-pure content
pub const EXTRACTED_DENSITY_PCT: f64 = 99.0;

/// Maximum preview snippet length in characters
pub const PREVIEW_MAX_CHARS: usize = 500;

/// Marker appended to preview snippets
pub const PREVIEW_MARKER: &str = "...";
