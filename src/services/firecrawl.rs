use log::{error, info};
use serde::Deserialize;
use serde_json::json;

use crate::constants::EXTRACTED_DENSITY_PCT;
use crate::error::AnalyzeError;
use crate::models::{preview_snippet, App, PageMetrics};

/// Subset of the Firecrawl scrape response we care about. Unknown fields are
/// ignored; the service adds metadata we have no use for.
#[derive(Debug, Deserialize)]
struct ScrapeResponse {
    #[serde(default)]
    data: Option<ScrapeData>,
}

#[derive(Debug, Deserialize)]
struct ScrapeData {
    #[serde(default)]
    markdown: Option<String>,
}

/// Scrape `url` through Firecrawl and measure the cleaned markdown.
///
/// `api_key` is the per-request override; the configured key is used when the
/// caller does not bring their own.
pub async fn scrape_page_metrics(
    app: &App,
    url: &str,
    api_key: Option<&str>,
) -> Result<PageMetrics, AnalyzeError> {
    let key = api_key.unwrap_or(&app.config.firecrawl_key);

    info!("🔥 Scraping via Firecrawl: {}", url);

    let payload = json!({
        "url": url,
        "formats": ["markdown"],
        "onlyMainContent": true,
        "includeTags": ["article", "main", "h1", "p", "ul", "ol"],
    });

    let res = app
        .client
        .post(&app.config.firecrawl_url)
        .bearer_auth(key)
        .timeout(app.config.firecrawl_timeout)
        .json(&payload)
        .send()
        .await
        .map_err(AnalyzeError::ScrapeTransport)?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        error!("❌ Firecrawl returned {}: {}", status, body);
        return Err(AnalyzeError::ScrapeStatus { status, body });
    }

    let parsed: ScrapeResponse = res.json().await.map_err(AnalyzeError::ScrapeTransport)?;

    let markdown = parsed
        .data
        .and_then(|d| d.markdown)
        .ok_or(AnalyzeError::NoContent)?;

    Ok(PageMetrics::measure(
        markdown.len() as u64,
        EXTRACTED_DENSITY_PCT,
        preview_snippet(&markdown),
        app.config.cost_per_1k_tokens,
    ))
}
