use log::info;
use scraper::Html;

use crate::constants::FETCH_USER_AGENT;
use crate::error::AnalyzeError;
use crate::models::{preview_snippet, App, PageMetrics};

/// Fetch `url` directly, the way a naive bot would, and measure how much of
/// the payload is actually visible text.
pub async fn fetch_page_metrics(app: &App, url: &str) -> Result<PageMetrics, AnalyzeError> {
    info!("🌐 Fetching raw page: {}", url);

    let res = app
        .client
        .get(url)
        .header(reqwest::header::USER_AGENT, FETCH_USER_AGENT)
        .timeout(app.config.fetch_timeout)
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        return Err(AnalyzeError::FetchStatus(status));
    }

    let body = res.text().await?;
    let size_bytes = body.len() as u64;

    let text = visible_text(&body);
    let density = density_pct(text.len() as u64, size_bytes);

    Ok(PageMetrics::measure(
        size_bytes,
        density,
        preview_snippet(&body),
        app.config.cost_per_1k_tokens,
    ))
}

/// Extract the text a reader would actually see.
///
/// Every text node in the parsed document is kept except those nested under
/// `script`/`style`/`noscript`/`template`; each node is trimmed and non-empty
/// nodes are joined with single spaces.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            a.value().as_element().map_or(false, |el| {
                matches!(el.name(), "script" | "style" | "noscript" | "template")
            })
        });
        if hidden {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    parts.join(" ")
}

/// Percentage of the payload that is visible text. 0 for an empty payload.
fn density_pct(text_bytes: u64, total_bytes: u64) -> f64 {
    if total_bytes == 0 {
        return 0.0;
    }
    text_bytes as f64 / total_bytes as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Sample</title>
            <style>body { color: red; }</style>
            <script>var tracking = "should not appear";</script>
        </head>
        <body>
            <nav>Home</nav>
            <article>
                <h1>Headline</h1>
                <p>First paragraph of the article.</p>
                <p>Second   paragraph.</p>
            </article>
            <noscript>Enable JavaScript</noscript>
        </body>
        </html>
    "#;

    #[test]
    fn visible_text_skips_script_and_style() {
        let text = visible_text(SAMPLE_HTML);
        assert!(text.contains("Headline"));
        assert!(text.contains("First paragraph of the article."));
        assert!(!text.contains("should not appear"));
        assert!(!text.contains("color: red"));
        assert!(!text.contains("Enable JavaScript"));
    }

    #[test]
    fn visible_text_joins_nodes_with_single_spaces() {
        let text = visible_text("<p>Hello</p><p>world</p>");
        assert_eq!(text, "Hello world");
    }

    #[test]
    fn visible_text_empty_input() {
        assert_eq!(visible_text(""), "");
    }

    #[test]
    fn density_guards_zero_total() {
        assert_eq!(density_pct(0, 0), 0.0);
        assert_eq!(density_pct(10, 0), 0.0);
    }

    #[test]
    fn density_stays_in_range_for_real_markup() {
        let text = visible_text(SAMPLE_HTML);
        let density = density_pct(text.len() as u64, SAMPLE_HTML.len() as u64);
        assert!(density > 0.0);
        assert!(density <= 100.0);
    }

    #[test]
    fn density_is_full_for_pure_text() {
        assert_eq!(density_pct(400, 400), 100.0);
    }
}
